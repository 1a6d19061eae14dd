//! Commits the user has marked as verified.
//!
//! The list holds full hashes, one per line, while `git log` shows
//! abbreviated ones; lookups match on prefix.

use gitln_types::Result;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifiedSet {
    /// Sorted, so every hash sharing a prefix sits in one contiguous run.
    hashes: Vec<String>,
}

impl VerifiedSet {
    pub fn from_text(text: &str) -> Self {
        let mut hashes: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_ascii_lowercase)
            .collect();
        hashes.sort();
        hashes.dedup();
        Self { hashes }
    }

    /// Reads a hash list from disk. A missing file is an empty set.
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    /// Whether some verified hash starts with the (abbreviated) `hash`.
    pub fn contains(&self, hash: &str) -> bool {
        if hash.is_empty() {
            return false;
        }
        let hash = hash.to_ascii_lowercase();
        let idx = self.hashes.partition_point(|h| h.as_str() < hash.as_str());
        self.hashes.get(idx).is_some_and(|h| h.starts_with(&hash))
    }
}
