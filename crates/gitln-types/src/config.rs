use chrono::{DateTime, Utc};

/// Rendering style, chosen once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Colorized,
    Plain,
}

impl Mode {
    pub fn from_tty(is_tty: bool) -> Self {
        if is_tty { Mode::Colorized } else { Mode::Plain }
    }

    pub fn is_colorized(self) -> bool {
        self == Mode::Colorized
    }
}

/// Process-wide settings captured at startup and never changed afterwards.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    pub is_tty: bool,
    /// Reference instant for elapsed-time computations. Every line of one run
    /// is measured against the same value.
    pub now: DateTime<Utc>,
}

impl RunConfig {
    pub fn new(is_tty: bool, now: DateTime<Utc>) -> Self {
        Self { is_tty, now }
    }

    /// Captures the current instant.
    pub fn capture(is_tty: bool) -> Self {
        Self::new(is_tty, Utc::now())
    }

    pub fn mode(&self) -> Mode {
        Mode::from_tty(self.is_tty)
    }
}
