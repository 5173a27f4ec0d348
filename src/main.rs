mod cli;
mod config;
mod driver;
mod errors;
mod lister;
mod policy;
mod record;
mod util;

use clap::Parser;
use cli::Args;
use config::Config;
use driver::{DriverOptions, Summary};
use errors::Result;
use lister::{FindLister, ListerKind, PathLister, StdinLister, WalkLister};
use policy::Policy;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(summary) => {
            log::info!("{} of {} paths matched", summary.matched, summary.total);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<Summary> {
    let (config, config_path) = Config::discover(
        args.config.as_deref(),
        &args.directory,
        Config::user_dir().as_deref(),
    )?;
    if let Some(path) = &config_path {
        log::info!("using config {}", path.display());
    }

    let policy = Policy::build(args.effective_policy(config.policy), &config)?;
    log::info!("evaluating with {:?}", policy.kind());

    let mut lister: Box<dyn PathLister> = if args.stdin {
        Box::new(StdinLister::from_stdin())
    } else {
        match args.lister {
            ListerKind::Walk => Box::new(WalkLister::new(args.sort)),
            ListerKind::Find => Box::new(FindLister::default()),
        }
    };

    let options = DriverOptions {
        max_depth: args.max_depth,
        diagnostics: !args.no_diagnostics,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    driver::run(lister.as_mut(), &args.directory, &policy, options, &mut out)
}
