mod app;
mod args;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod util;
mod warning;
use crate::app::App;
use crate::args::{Arguments, RunOptions};
use crate::config::Config;
use crate::warning::Warning;
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    match Arguments::from_parser(lexopt::Parser::from_env()) {
        Ok(Arguments::Run(opts)) => io_exit(run(opts)),
        Ok(Arguments::Help) => {
            print!("{}", args::HELP);
            ExitCode::SUCCESS
        }
        Ok(Arguments::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}");
            eprintln!("Run `gridsnake --help` for usage.");
            ExitCode::from(2)
        }
    }
}

fn run(opts: RunOptions) -> io::Result<()> {
    let mut warnings = Vec::new();
    let config = match Config::load_from(opts.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            warnings.push(Warning::from(e));
            Config::default()
        }
    };
    if let Err(e) = logging::init(&config.logging) {
        warnings.push(Warning::from_anyhow(&e));
    }
    let rng = match opts.seed {
        Some(seed) => {
            tracing::info!(seed, "seeding food RNG");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };
    let terminal = ratatui::init();
    let r = App::new(config.styles, rng, warnings).run(terminal);
    ratatui::restore();
    if let Err(ref e) = r {
        tracing::error!(error = %e, "terminal I/O failed");
    }
    r
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
