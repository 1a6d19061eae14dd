//! Assertions over rendered output.

use anyhow::Result;

/// Removes SGR escape sequences (`ESC [ ... m`).
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}

/// Whether bold is still switched on after the SGR sequences in `text`.
pub fn bold_is_active(text: &str) -> bool {
    let mut bold = false;
    for (start, _) in text.match_indices("\x1b[") {
        let rest = &text[start + 2..];
        let Some(end) = rest.find(|c: char| !(c.is_ascii_digit() || c == ';')) else {
            continue;
        };
        if !rest[end..].starts_with('m') {
            continue;
        }
        let mut params = rest[..end].split(';');
        while let Some(param) = params.next() {
            match param {
                "" | "0" | "22" => bold = false,
                "1" => bold = true,
                // Extended colors carry their own arguments.
                "38" | "48" | "58" => match params.next() {
                    Some("5") => {
                        params.next();
                    }
                    Some("2") => {
                        params.nth(2);
                    }
                    _ => {}
                },
                _ => {}
            }
        }
    }
    bold
}

/// Assert that colored output reads the same as plain output once escapes
/// are removed.
pub fn assert_same_text(colored: &str, plain: &str) -> Result<()> {
    let stripped = strip_ansi(colored);
    if stripped != plain {
        anyhow::bail!(
            "Colored output differs from plain output after stripping escapes:\n  colored: {:?}\n  plain:   {:?}",
            stripped,
            plain
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_ansi() {
        assert_eq!(strip_ansi("\x1b[33mabc\x1b[39m \x1b[38;5;240m(x)\x1b[m"), "abc (x)");
    }

    #[test]
    fn test_bold_is_active() {
        assert!(bold_is_active("\x1b[1;36mHEAD"));
        assert!(bold_is_active("\x1b[1;36mHEAD\x1b[38;5;240m}\x1b[39m"));
        assert!(!bold_is_active("\x1b[1;36mHEAD\x1b[0;38;5;240m"));
        assert!(!bold_is_active("\x1b[1mA\x1b[m"));
        assert!(!bold_is_active("\x1b[1mA\x1b[22;37m"));
        assert!(!bold_is_active("\x1b[38;5;1mA"));
    }

    #[test]
    fn test_assert_same_text() {
        assert!(assert_same_text("\x1b[1mA\x1b[m", "A").is_ok());
        assert!(assert_same_text("\x1b[1mA\x1b[m", "B").is_err());
    }
}
