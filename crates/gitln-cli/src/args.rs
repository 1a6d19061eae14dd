use crate::types::{ColorChoice, DateSource, LogLevel};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// A compact `git log --graph`.
///
/// Options for git-ln come first; everything from the first argument it does
/// not recognize onwards is passed to `git log` unchanged.
#[derive(Debug, Parser)]
#[command(name = "git-ln")]
#[command(about = "One compact, colorized line per commit of git log --graph", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    #[arg(long, help = "Only print as many lines as fit in 70% of the terminal")]
    pub bound: bool,

    #[arg(long, help = "Write to stdout even when it is a terminal")]
    pub no_pager: bool,

    #[arg(long, help = "Format records read from stdin instead of running git log")]
    pub stdin: bool,

    #[arg(long, help = "Date source; overrides the config file")]
    pub date: Option<DateSource>,

    #[arg(long, env = "GITLN_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,

    #[arg(long, help = "Print the --format argument given to git log and exit")]
    pub print_format: bool,

    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    pub git_args: Vec<OsString>,
}
