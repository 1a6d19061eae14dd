use std::process::{Child, Command, Stdio};
use tracing::debug;

/// Gets the pager command. With the default `less -RF`, `-R` passes color
/// escapes through and `-F` quits right away when the output fits on one
/// screen.
pub fn pager(command: &[String]) -> Option<Command> {
    let (program, args) = command.split_first()?;
    let mut pager = Command::new(program);
    pager.args(args).stdin(Stdio::piped());
    Some(pager)
}

/// Starts the pager, or returns None when it cannot be started.
pub fn spawn(command: &[String]) -> Option<Child> {
    let mut pager = pager(command)?;
    match pager.spawn() {
        Ok(child) => {
            debug!(pager = ?command, "pager started");
            Some(child)
        }
        Err(err) => {
            debug!(pager = ?command, error = %err, "pager unavailable, writing to stdout");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_command_has_no_pager() {
        assert!(pager(&[]).is_none());
    }

    #[test]
    fn test_missing_program_falls_back() {
        assert!(spawn(&["gitln-no-such-pager".to_string()]).is_none());
    }
}
