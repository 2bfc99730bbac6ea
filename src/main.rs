use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lifeterm::config::Args;
use lifeterm::config::Config;
use lifeterm::controller::Simulation;
use lifeterm::driver;
use lifeterm::driver::TerminalEvents;
use lifeterm::render::Painter;
use lifeterm::render::TerminalGuard;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let config = Config::from_args(&args).context("Invalid configuration")?;
    let grid = config
        .initial_grid()
        .context("Failed to set up the initial state")?;

    let mut sim = Simulation::with_rules(grid, config.rules);
    let mut events = TerminalEvents::new(config.tick);

    // The guard has to be gone before any error is printed
    let res = {
        let _terminal = TerminalGuard::enter().context("Failed to set up the terminal")?;
        let mut painter = Painter::new(io::stdout());

        driver::run(&mut sim, &mut events, &mut painter)
    };
    res.context("Terminal error")?;

    info!(generation = sim.generation(), "exited");

    Ok(())
}

/// The terminal belongs to the UI, so logs only ever go to a file
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
