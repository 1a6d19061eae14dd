use clap::Parser;
use gitln::{Cli, run};

fn main() {
    // Reset SIGPIPE to default behavior so that quitting the pager early
    // ends the process quietly instead of panicking on the next write
    #[cfg(unix)]
    reset_sigpipe();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
