use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use fogsweep_core::{GameConfig, LayoutGenerator, RandomLayoutGenerator, RevealEngine};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::io;

mod display;
mod session;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn init_logger(level: LevelFilter) -> Result<()> {
    let config = ConfigBuilder::new().set_target_level(LevelFilter::Off).build();
    // stderr, so log lines never land inside the board
    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
        .context("Error initializing logger")
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose.log_level_filter())?;

    let generator = match args.seed {
        Some(seed) => RandomLayoutGenerator::new(seed),
        None => RandomLayoutGenerator::from_entropy(),
    };
    log::info!("seed: {}", generator.seed());

    let layout = generator
        .generate(GameConfig::REFERENCE)
        .context("Could not generate board")?;
    let engine = RevealEngine::new(layout);

    let outcome = session::Session::new(engine, io::stdin().lock(), io::stdout().lock()).run()?;
    log::debug!("Session finished: {:?}", outcome);
    Ok(())
}
