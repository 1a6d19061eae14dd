use owo_colors::XtermColors;

/// Decoration around refs and dates.
pub(crate) fn dark() -> XtermColors {
    XtermColors::from(240)
}

/// The date value inside its parens.
pub(crate) fn light() -> XtermColors {
    XtermColors::from(246)
}

/// Stands in for git's resets inside the ref list: clears bold and the
/// like, then falls back to the [`dark`] tone.
pub(crate) const RESET_DARK_SGR: &str = "\x1b[0;38;5;240m";

/// Replacement for git's emphasis colors inside the ref list.
pub(crate) const MUTED_SGR: &str = "\x1b[22;37m";

/// Closes the ref section so none of git's attributes reach the subject.
pub(crate) const RESET_SGR: &str = "\x1b[0m";

/// Length of the SGR sequence (`ESC [ params m`) at the start of `text`.
pub(crate) fn sgr_len(text: &str) -> Option<usize> {
    let params = text.strip_prefix("\x1b[")?;
    let end = params.find(|c: char| !(c.is_ascii_digit() || c == ';'))?;
    params[end..].starts_with('m').then_some(2 + end + 1)
}

pub(crate) fn is_reset(seq: &str) -> bool {
    matches!(seq, "\x1b[m" | "\x1b[0m")
}

#[cfg(test)]
mod tests {
    use super::*;
    use owo_colors::OwoColorize;

    #[test]
    fn test_sgr_len() {
        assert_eq!(sgr_len("\x1b[mmain"), Some(3));
        assert_eq!(sgr_len("\x1b[1;32mmain"), Some(7));
        assert_eq!(sgr_len("\x1b[38;5;240m"), Some(11));
        assert_eq!(sgr_len("\x1b[1;32"), None);
        assert_eq!(sgr_len("\x1b]0;title\x07"), None);
        assert_eq!(sgr_len("main"), None);
    }

    #[test]
    fn test_reset_dark_sgr_matches_palette() {
        let styled = format!("{}", "x".color(dark()));
        let tone = RESET_DARK_SGR.replacen("0;", "", 1);
        assert!(styled.starts_with(&tone));
    }
}
