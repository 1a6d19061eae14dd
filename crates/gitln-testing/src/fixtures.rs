//! Sample `git log --graph --format=...` output.

use gitln_types::Separator;

/// Builder for one commit line as git would print it with gitln's format.
///
/// # Example
/// ```
/// use gitln_testing::LogLine;
///
/// let line = LogLine::new("a1b2c3d").date("3 weeks ago").refs("origin/main").build();
/// assert!(line.ends_with(b"origin/main\n"));
/// ```
#[derive(Debug, Clone)]
pub struct LogLine {
    graph: String,
    hash: String,
    date: String,
    subject: String,
    refs: String,
    separator: Separator,
}

impl LogLine {
    pub fn new(hash: &str) -> Self {
        Self {
            graph: "* ".to_string(),
            hash: hash.to_string(),
            date: "1 hour ago".to_string(),
            subject: "Update".to_string(),
            refs: String::new(),
            separator: Separator::default(),
        }
    }

    pub fn graph(mut self, graph: &str) -> Self {
        self.graph = graph.to_string();
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = subject.to_string();
        self
    }

    pub fn refs(mut self, refs: &str) -> Self {
        self.refs = refs.to_string();
        self
    }

    pub fn separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    /// The line with its trailing newline.
    pub fn build(&self) -> Vec<u8> {
        let sep = self.separator.as_bytes();
        let mut line = Vec::with_capacity(64);
        line.extend_from_slice(self.graph.as_bytes());
        for field in [&self.hash, &self.date, &self.subject, &self.refs] {
            line.extend_from_slice(sep);
            line.extend_from_slice(field.as_bytes());
        }
        line.push(b'\n');
        line
    }
}

/// A small history with a merge, as printed without colors.
pub fn sample_log() -> Vec<u8> {
    let mut log = Vec::new();
    log.extend(
        LogLine::new("9f3e2a1")
            .graph("*   ")
            .date("2 minutes ago")
            .subject("Merge branch 'parser'")
            .refs("HEAD -> main, origin/main, origin/HEAD")
            .build(),
    );
    log.extend_from_slice(b"|\\\n");
    log.extend(
        LogLine::new("5c4d3b2")
            .graph("| * ")
            .date("3 hours ago")
            .subject("Fix bug in parser")
            .refs("origin/parser, parser")
            .build(),
    );
    log.extend(
        LogLine::new("7a6b5c4")
            .graph("* | ")
            .date("2 days ago")
            .subject("Bump version")
            .refs("tag: v0.2.0")
            .build(),
    );
    log.extend_from_slice(b"|/\n");
    log.extend(
        LogLine::new("1e2f3a4")
            .date("5 months ago")
            .subject("Initial commit")
            .build(),
    );
    log
}

/// The same kind of ref list git prints with `--color=always` and
/// `%C(auto)%D`, using git's default decoration colors: bold cyan HEAD, bold
/// green branches, bold red remote branches, bold yellow tags.
pub fn colored_refs(names: &[&str]) -> String {
    let mut refs = String::new();
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            refs.push_str("\x1b[33m, \x1b[m");
        }
        if let Some(branch) = name.strip_prefix("HEAD -> ") {
            push_colored(&mut refs, "\x1b[1;36m", "HEAD -> ");
            push_colored(&mut refs, "\x1b[1;32m", branch);
        } else if *name == "HEAD" {
            push_colored(&mut refs, "\x1b[1;36m", name);
        } else if name.starts_with("tag: ") {
            push_colored(&mut refs, "\x1b[1;33m", name);
        } else if name.contains('/') {
            push_colored(&mut refs, "\x1b[1;31m", name);
        } else {
            push_colored(&mut refs, "\x1b[1;32m", name);
        }
    }
    refs
}

fn push_colored(refs: &mut String, sgr: &str, text: &str) {
    refs.push_str(sgr);
    refs.push_str(text);
    refs.push_str("\x1b[m");
}
