use battleship::{init_logging, AiPlayer, GameConfig, Session, DEFAULT_BOARD_SIZE, DEFAULT_SHIP_SIZES};
use rand::{rngs::SmallRng, SeedableRng};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [board_size]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let size: usize = match args.get(2) {
        Some(s) => s.parse()?,
        None => DEFAULT_BOARD_SIZE,
    };

    let config = GameConfig::new(size, DEFAULT_SHIP_SIZES.to_vec()).map_err(|e| anyhow::anyhow!(e))?;
    let player = AiPlayer::new(seed.wrapping_add(1));
    let mut session = Session::new(player, config, SmallRng::seed_from_u64(seed));
    let summary = session.run()?;

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
