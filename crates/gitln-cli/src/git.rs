use crate::types::DateSource;
use gitln_types::{Mode, Separator};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

/// The `--format` argument matching the splitter's field order:
/// graph, hash, date, subject, refs.
///
/// `%C(auto)` keeps git's ref colors so the renderer can recolor them.
pub fn log_format(separator: &Separator, date: DateSource, mode: Mode) -> String {
    let sep = separator.as_str_lossy();
    let refs = if mode.is_colorized() { "%C(auto)%D" } else { "%D" };
    format!(
        "--format={sep}%h{sep}{date}{sep}%s{sep}{refs}",
        sep = sep,
        date = date.placeholder(),
        refs = refs
    )
}

/// Gets the `git log` command. User arguments come last so they can narrow
/// the range or add paths.
pub fn git_log(format: &str, mode: Mode, user_args: &[OsString]) -> Command {
    let color = if mode.is_colorized() { "--color=always" } else { "--color=never" };
    let mut git = Command::new("git");
    git.args(["log", "--graph", color, format]).args(user_args);
    git
}

/// Gets the repository's git directory, if we are inside one.
pub fn git_dir() -> Option<PathBuf> {
    let output = Command::new("git").args(["rev-parse", "--git-dir"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let dir = std::str::from_utf8(&output.stdout).ok()?.trim();
    (!dir.is_empty()).then(|| PathBuf::from(dir))
}

/// `<git-dir>/.verified`, the list of verified commit hashes.
pub fn verified_path() -> Option<PathBuf> {
    git_dir().map(|dir| dir.join(".verified"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_format() {
        let format = log_format(&Separator::default(), DateSource::Relative, Mode::Plain);
        assert_eq!(format, "--format=\x02%h\x02%ar\x02%s\x02%D");
    }

    #[test]
    fn test_colorized_timestamp_format() {
        let sep = Separator::new(";-;_").unwrap();
        let format = log_format(&sep, DateSource::Timestamp, Mode::Colorized);
        assert_eq!(format, "--format=;-;_%h;-;_%at;-;_%s;-;_%C(auto)%D");
    }

    #[test]
    fn test_git_log_args_order() {
        let git = git_log("--format=x", Mode::Plain, &[OsString::from("-n"), OsString::from("5")]);
        let args: Vec<_> = git.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(args, ["log", "--graph", "--color=never", "--format=x", "-n", "5"]);
    }
}
