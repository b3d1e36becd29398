use std::io;

use anyhow::Result;
use clap::Parser;
use sweeper_core::{Game, RandomBoardGenerator};

use session::Session;

mod command;
mod render;
mod session;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Number of rows, asked interactively when missing
    #[arg(long)]
    height: Option<u16>,

    /// Number of columns, asked interactively when missing
    #[arg(long)]
    width: Option<u16>,

    /// Number of mines, asked interactively when missing
    #[arg(short, long)]
    mines: Option<u32>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the board as JSON snapshots instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), args.json);

    let size = args.height.zip(args.width);
    let Some(config) = session.ask_config(size, args.mines)? else {
        return Ok(());
    };

    let generator = RandomBoardGenerator::new(args.seed.unwrap_or_else(rand::random));
    log::info!("seed: {}", generator.seed());

    let mut game = Game::generate(config, generator);
    let state = session.play(&mut game)?;
    log::info!("Game over: {:?}", state);
    Ok(())
}
