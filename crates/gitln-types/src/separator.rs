use crate::{Error, Result};
use std::fmt;

/// STX, the separator used when none is configured. git never emits it in
/// hashes, dates, subjects or ref names.
pub const DEFAULT_SEPARATOR: &str = "\u{2}";

/// Private token placed between fields by the `--format` string given to git.
#[derive(Clone, PartialEq, Eq)]
pub struct Separator(Vec<u8>);

impl Separator {
    pub fn new(token: impl Into<Vec<u8>>) -> Result<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(Error::InvalidSeparator("separator must not be empty".to_string()));
        }
        if token.iter().any(|b| matches!(b, b'\n' | b'\r')) {
            return Err(Error::InvalidSeparator(
                "separator must not contain line terminators".to_string(),
            ));
        }
        Ok(Self(token))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a separator built through [`Separator::new`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Byte offset of the first occurrence of the token in `haystack`.
    pub fn find_in(&self, haystack: &[u8]) -> Option<usize> {
        if haystack.len() < self.0.len() {
            return None;
        }
        haystack.windows(self.0.len()).position(|w| w == self.0.as_slice())
    }

    /// The token as text, for building git's `--format` argument.
    pub fn as_str_lossy(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self(DEFAULT_SEPARATOR.as_bytes().to_vec())
    }
}

impl fmt::Debug for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Separator({:?})", self.as_str_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_separator_rejected() {
        assert!(Separator::new("").is_err());
    }

    #[test]
    fn test_newline_separator_rejected() {
        assert!(Separator::new("a\nb").is_err());
    }

    #[test]
    fn test_find_multibyte_token() {
        let sep = Separator::new(";-;_").unwrap();
        assert_eq!(sep.find_in(b"* ;-;_abc"), Some(2));
        assert_eq!(sep.find_in(b"* ;-;"), None);
        assert_eq!(sep.find_in(b""), None);
    }

    #[test]
    fn test_default_is_stx() {
        assert_eq!(Separator::default().as_bytes(), b"\x02");
    }
}
