use crate::render::Renderer;
use crate::split::split;
use gitln_types::{Record, Result};
use std::io::{BufRead, ErrorKind, Write};

/// Line counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub commits: usize,
    pub graph_only: usize,
    /// Lines that carried the separator but not every field.
    pub malformed: usize,
    pub lines: usize,
    /// The output closed before the input ran out.
    pub closed_early: bool,
}

/// Renders `input` line by line into `output` until end-of-stream, or until
/// `limit` lines have been written.
///
/// A closed output (the pager quit) ends the run without an error.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    renderer: &Renderer,
    limit: Option<usize>,
) -> Result<RunStats> {
    let mut stats = RunStats::default();
    let mut buf = Vec::with_capacity(256);

    loop {
        if limit.is_some_and(|max| stats.lines >= max) {
            break;
        }
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let record = split(&buf, renderer.separator());
        match record {
            Record::Fields(_) => stats.commits += 1,
            Record::GraphOnly(_) if renderer.separator().find_in(&buf).is_some() => {
                stats.malformed += 1
            }
            Record::GraphOnly(_) => stats.graph_only += 1,
        }

        if let Err(err) = renderer.render(&record, &mut output) {
            if err.kind() == ErrorKind::BrokenPipe {
                stats.closed_early = true;
                return Ok(stats);
            }
            return Err(err.into());
        }
        stats.lines += 1;
    }

    match output.flush() {
        Err(err) if err.kind() == ErrorKind::BrokenPipe => stats.closed_early = true,
        other => other?,
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderOptions;
    use gitln_types::RunConfig;
    use std::io::Cursor;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn plain_renderer() -> Renderer {
        Renderer::new(&RunConfig::capture(false), RenderOptions::default())
    }

    const LOG: &[u8] = b"* \x02aaa\x021 hour ago\x02one\x02\n|\\\n| * \x02bbb\x022 days ago\x02two\x02main\n* | \x02ccc\n";

    #[test]
    fn test_counts_and_output() {
        let mut out = Vec::new();
        let stats = run(Cursor::new(LOG), &mut out, &plain_renderer(), None).unwrap();

        assert_eq!(stats.commits, 2);
        assert_eq!(stats.graph_only, 1);
        assert_eq!(stats.malformed, 1);
        assert_eq!(stats.lines, 4);
        assert!(!stats.closed_early);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "* aaa one (1h)\n|\\\n| * bbb {main} two (2d)\n* | \x02ccc\n"
        );
    }

    #[test]
    fn test_limit_stops_early() {
        let mut out = Vec::new();
        let stats = run(Cursor::new(LOG), &mut out, &plain_renderer(), Some(2)).unwrap();
        assert_eq!(stats.lines, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "* aaa one (1h)\n|\\\n");
    }

    #[test]
    fn test_broken_pipe_is_clean_exit() {
        let stats = run(Cursor::new(LOG), ClosedPipe, &plain_renderer(), None).unwrap();
        assert!(stats.closed_early);
        assert_eq!(stats.lines, 0);
    }

    #[test]
    fn test_empty_input() {
        let mut out = Vec::new();
        let stats = run(Cursor::new(&b""[..]), &mut out, &plain_renderer(), None).unwrap();
        assert_eq!(stats, RunStats::default());
        assert!(out.is_empty());
    }
}
