use crate::palette::{MUTED_SGR, RESET_DARK_SGR, is_reset, sgr_len};
use gitln_types::Mode;

/// How the ref list is compacted and recolored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefOptions {
    /// Remote whose tracking refs collapse to [`RefOptions::marker`].
    pub remote: String,
    pub marker: String,
    /// Ref fields no longer than this are treated as empty in Plain mode.
    pub min_len_plain: usize,
    /// Same threshold for Colorized mode, where git wraps even an empty
    /// `%C(auto)%D` in a reset sequence.
    pub min_len_color: usize,
    /// git escapes that mark the checked-out ref, branches or tags; shown
    /// muted.
    pub emphasis: Vec<String>,
    /// Render `HEAD -> main` as `HEAD → main`.
    pub arrows: bool,
}

/// git's default `color.decorate.*` slots plus the commit color it uses for
/// the separators.
const GIT_DECORATION_SGR: [&str; 8] = [
    "\x1b[33m",   // separators
    "\x1b[1;32m", // branch
    "\x1b[1;31m", // remote branch
    "\x1b[1;33m", // tag
    "\x1b[1;35m", // stash
    "\x1b[1;36m", // HEAD
    "\x1b[1;34m", // grafted
    "\x1b[1m",
];

impl Default for RefOptions {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            marker: "*".to_string(),
            min_len_plain: 0,
            min_len_color: 3,
            emphasis: GIT_DECORATION_SGR.iter().map(|s| s.to_string()).collect(),
            arrows: false,
        }
    }
}

impl RefOptions {
    pub fn min_len(&self, mode: Mode) -> usize {
        match mode {
            Mode::Colorized => self.min_len_color,
            Mode::Plain => self.min_len_plain,
        }
    }

    /// Whether a raw ref field of this length gets a ref section at all.
    pub fn has_refs(&self, raw: &[u8], mode: Mode) -> bool {
        raw.len() > self.min_len(mode)
    }
}

/// Rewrites the inside of the ref list (without the braces).
///
/// `origin/main` becomes `*main`; a tag that happens to be called
/// `origin/x` keeps its name. In Colorized mode git's emphasis escapes turn
/// muted and its resets fall back to the decoration tone instead of the
/// terminal default.
pub fn render_refs(raw: &str, options: &RefOptions, mode: Mode) -> String {
    let prefix = format!("{}/", options.remote);
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    let mut at_name_start = true;

    while let Some(c) = rest.chars().next() {
        if c == '\x1b'
            && let Some(len) = sgr_len(rest)
        {
            let seq = &rest[..len];
            if mode.is_colorized() {
                out.push_str(recolor(seq, options));
            }
            rest = &rest[len..];
            continue;
        }

        if at_name_start && let Some(after) = rest.strip_prefix(prefix.as_str()) {
            out.push_str(&options.marker);
            rest = after;
            at_name_start = false;
            continue;
        }

        if options.arrows && let Some(after) = rest.strip_prefix("->") {
            out.push('→');
            rest = after;
            at_name_start = false;
            continue;
        }

        out.push(c);
        at_name_start = match c {
            ' ' => !out.ends_with("tag: "),
            ',' | '(' => true,
            _ => false,
        };
        rest = &rest[c.len_utf8()..];
    }
    out
}

fn recolor<'a>(seq: &'a str, options: &RefOptions) -> &'a str {
    if is_reset(seq) {
        RESET_DARK_SGR
    } else if options.emphasis.iter().any(|e| e == seq) {
        MUTED_SGR
    } else {
        seq
    }
}
