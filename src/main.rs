use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dirsh::app::{AppError, Session};
use dirsh::config::{APP_NAME, DEFAULT_LOG_LEVEL};
use dirsh::core::HostFs;

/// Interactive shell for navigating and managing files.
#[derive(Parser, Debug)]
#[command(name = APP_NAME, version)]
struct Cli {
    /// Directory to start in (defaults to the working directory)
    #[arg(short = 'C', long)]
    dir: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set (e.g. "debug", "dirsh=trace")
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("{}: {}", APP_NAME, err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let start = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    log::info!("starting in {}", start.display());

    let mut session = Session::new(&start, HostFs)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    session.run(stdin.lock(), &mut stdout)
}
