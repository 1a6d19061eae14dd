use crate::date::abbreviate_date;
use crate::palette::{RESET_SGR, dark, light};
use crate::refs::{RefOptions, render_refs};
use crate::verified::VerifiedSet;
use chrono::{DateTime, Utc};
use gitln_types::{Fields, Mode, Record, RunConfig, Separator};
use owo_colors::OwoColorize;
use std::io::{self, Write};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub separator: Separator,
    pub refs: RefOptions,
}

/// Turns split records into output lines.
///
/// The mode and reference instant are fixed at construction; rendering a
/// line reads nothing else.
#[derive(Debug, Clone)]
pub struct Renderer {
    mode: Mode,
    now: DateTime<Utc>,
    options: RenderOptions,
    verified: VerifiedSet,
}

impl Renderer {
    pub fn new(config: &RunConfig, options: RenderOptions) -> Self {
        Self {
            mode: config.mode(),
            now: config.now,
            options,
            verified: VerifiedSet::default(),
        }
    }

    /// Hashes in `verified` are drawn green instead of yellow.
    pub fn with_verified(mut self, verified: VerifiedSet) -> Self {
        self.verified = verified;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn separator(&self) -> &Separator {
        &self.options.separator
    }

    /// Writes one line. Graph-only records are written back byte for byte;
    /// commit records end with exactly one newline.
    pub fn render<W: Write>(&self, record: &Record<'_>, out: &mut W) -> io::Result<()> {
        match record {
            Record::GraphOnly(line) => out.write_all(line),
            Record::Fields(fields) => self.render_fields(fields, out),
        }
    }

    pub fn render_to_vec(&self, record: &Record<'_>) -> Vec<u8> {
        let mut buf = Vec::with_capacity(128);
        // Writing into a Vec cannot fail.
        let _ = self.render(record, &mut buf);
        buf
    }

    fn render_fields<W: Write>(&self, fields: &Fields<'_>, out: &mut W) -> io::Result<()> {
        let hash = String::from_utf8_lossy(fields.hash);
        let date = abbreviate_date(&String::from_utf8_lossy(fields.date_raw), self.now);
        let refs_options = &self.options.refs;
        let refs = refs_options.has_refs(fields.refs_raw, self.mode).then(|| {
            render_refs(&String::from_utf8_lossy(fields.refs_raw), refs_options, self.mode)
        });

        out.write_all(fields.graph)?;

        match self.mode {
            Mode::Colorized => {
                if self.verified.contains(&hash) {
                    write!(out, "{} ", hash.green())?;
                } else {
                    write!(out, "{} ", hash.yellow())?;
                }
                if let Some(refs) = refs {
                    write!(out, "{}{} ", format!("{{{}}}", refs).color(dark()), RESET_SGR)?;
                }
                out.write_all(fields.subject)?;
                writeln!(
                    out,
                    " {}{}{}",
                    "(".color(dark()),
                    date.color(light()),
                    ")".color(dark())
                )
            }
            Mode::Plain => {
                write!(out, "{} ", hash)?;
                if let Some(refs) = refs {
                    write!(out, "{{{}}} ", refs)?;
                }
                out.write_all(fields.subject)?;
                writeln!(out, " ({})", date)
            }
        }
    }
}
