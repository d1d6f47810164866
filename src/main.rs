use anyhow::{Context, Result};
use clap::Parser;
use hashcash_solver::config::{Args, SolverConfig};
use hashcash_solver::{render, CancelToken, NonceSearcher};
use log::{debug, warn, LevelFilter};
use tokio::task;

/// Exit status of a process killed by SIGINT.
const INTERRUPTED: i32 = 130;

/// The first interrupt cancels the search, a second one exits immediately.
async fn listen_for_interrupt(cancel: CancelToken) {
    loop {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!("Unable to listen for interrupt signal: {}", err);
            return;
        }
        if cancel.interrupt() {
            std::process::exit(INTERRUPTED);
        }
        warn!("Interrupt received, stopping search");
    }
}

async fn run(args: Args) -> Result<()> {
    let config = SolverConfig::try_from(&args).context("Invalid arguments")?;
    let searcher = NonceSearcher::new(config.prefix, config.difficulty);
    let cancel = CancelToken::new();
    tokio::spawn(listen_for_interrupt(cancel.clone()));

    // CPU-bound, so keep it off the async workers
    let (searcher, solution) = task::spawn_blocking(move || {
        let solution = searcher.find(&cancel);
        (searcher, solution)
    })
    .await
    .context("Search task failed")?;
    let solution = solution?;
    debug!("Solution digest: {}", solution.binary_digest());

    let line = render(&searcher, &solution, args.json).context("Failed to serialize solution")?;
    println!("{}", line);
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module(
            "hashcash_solver",
            if args.verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Warn
            },
        )
        .parse_default_env()
        .init();

    if let Err(e) = run(args).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
