use crate::args::Cli;
use crate::config::Config;
use crate::{git, logging, pager};
use anyhow::{Context, Result, bail};
use gitln_engine::{Renderer, RunStats, VerifiedSet, pipeline};
use gitln_types::RunConfig;
use is_terminal::IsTerminal;
use std::io::{BufRead, BufReader, BufWriter};
use std::process::{Child, Stdio};
use tracing::{debug, info, warn};

/// Rows assumed for `--bound` when the terminal size is unknown.
const FALLBACK_ROWS: u16 = 24;

pub fn run(cli: Cli) -> Result<()> {
    logging::init_logging(cli.log_level);

    let (config, config_path) = Config::load(cli.config.as_deref())?;
    match &config_path {
        Some(path) => debug!(path = %path.display(), "loaded config"),
        None => debug!("no config file, using defaults"),
    }

    let stdout_is_tty = std::io::stdout().is_terminal();
    let run_config = RunConfig::capture(cli.color.resolve(stdout_is_tty));
    let date_source = cli.date.unwrap_or(config.date);
    let options = config.render_options()?;

    if cli.print_format {
        println!("{}", git::log_format(&options.separator, date_source, run_config.mode()));
        return Ok(());
    }

    let limit = cli.bound.then(|| line_limit(config.bound_ratio));
    let sink = Sink {
        pager: (stdout_is_tty && !cli.no_pager).then_some(config.pager.as_slice()),
        limit,
    };

    if cli.stdin {
        let renderer = Renderer::new(&run_config, options);
        let stats = sink.render(std::io::stdin().lock(), &renderer)?;
        log_stats(&stats);
        return Ok(());
    }

    let format = git::log_format(&options.separator, date_source, run_config.mode());
    let renderer = Renderer::new(&run_config, options).with_verified(load_verified());

    let mut git_log = git::git_log(&format, run_config.mode(), &cli.git_args);
    git_log.stdout(Stdio::piped());
    debug!(command = ?git_log, "starting git log");

    let mut child = git_log.spawn().context("Failed to run git")?;
    let stdout = child.stdout.take().context("git log stdout was not captured")?;

    let stats = match sink.render(BufReader::new(stdout), &renderer) {
        Ok(stats) => stats,
        Err(err) => {
            stop(&mut child);
            return Err(err);
        }
    };
    log_stats(&stats);

    let stopped_early = stats.closed_early || limit.is_some_and(|max| stats.lines >= max);
    if stopped_early {
        // git may still be writing; nobody reads the rest.
        stop(&mut child);
        return Ok(());
    }

    let status = child.wait().context("Failed to wait for git log")?;
    if !status.success() {
        bail!("git log exited with {}", status);
    }
    Ok(())
}

/// Where rendered lines go: a pager when one is wanted and can be started,
/// stdout otherwise.
struct Sink<'a> {
    pager: Option<&'a [String]>,
    limit: Option<usize>,
}

impl Sink<'_> {
    fn render<R: BufRead>(&self, input: R, renderer: &Renderer) -> Result<RunStats> {
        if let Some(command) = self.pager
            && let Some(mut pager) = pager::spawn(command)
        {
            return render_to_pager(input, renderer, self.limit, &mut pager);
        }

        let stdout = std::io::stdout().lock();
        Ok(pipeline::run(input, BufWriter::new(stdout), renderer, self.limit)?)
    }
}

/// Feeds the pager, then waits for it whether or not rendering succeeded.
fn render_to_pager<R: BufRead>(
    input: R,
    renderer: &Renderer,
    limit: Option<usize>,
    pager: &mut Child,
) -> Result<RunStats> {
    let Some(stdin) = pager.stdin.take() else {
        stop(pager);
        bail!("pager stdin was not captured");
    };
    // The writer is dropped when `run` returns, which closes the pager's
    // input before we wait for it.
    let rendered = pipeline::run(input, BufWriter::new(stdin), renderer, limit);
    let waited = pager.wait().context("Failed to wait for pager");
    let stats = rendered?;
    waited?;
    Ok(stats)
}

/// Kills a child whose output nobody reads any more, and reaps it.
fn stop(child: &mut Child) {
    // It may have exited on its own already.
    let _ = child.kill();
    let _ = child.wait();
}

/// Upper bound on lines printed by a bounded run.
fn line_limit(ratio: f32) -> usize {
    let rows = match terminal_size::terminal_size() {
        Some((_, terminal_size::Height(h))) => h,
        None => FALLBACK_ROWS,
    };
    ((rows as f32 * ratio) as usize).max(1)
}

fn load_verified() -> VerifiedSet {
    let Some(path) = git::verified_path() else {
        return VerifiedSet::default();
    };
    match VerifiedSet::read(&path) {
        Ok(set) => {
            if !set.is_empty() {
                info!(count = set.len(), path = %path.display(), "loaded verified hashes");
            }
            set
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring unreadable verified list");
            VerifiedSet::default()
        }
    }
}

fn log_stats(stats: &RunStats) {
    debug!(
        commits = stats.commits,
        graph_only = stats.graph_only,
        malformed = stats.malformed,
        lines = stats.lines,
        closed_early = stats.closed_early,
        "render finished"
    );
}
