#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship::{init_logging, CliPlayer, GameConfig, Session, DEFAULT_BOARD_SIZE, DEFAULT_SHIP_SIZES};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Sink every hidden ship on the grid.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, help = "Board side length (1-26)")]
    size: usize,
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = DEFAULT_SHIP_SIZES,
        help = "Comma-separated ship lengths"
    )]
    ships: Vec<usize>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = GameConfig::new(cli.size, cli.ships).map_err(|e| anyhow::anyhow!(e))?;
    let rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut session = Session::new(CliPlayer::stdio(), config, rng);
    let summary = session.run()?;
    log::info!("session finished after {} game(s)", summary.games.len());
    Ok(())
}
