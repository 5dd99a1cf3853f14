use battleship::{
    Board, BoardError, Coord, GameConfig, GameEngine, GameStatus, GuessResult, Orientation,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use std::collections::HashSet;

fn random_engine(seed: u64) -> GameEngine {
    let mut rng = SmallRng::seed_from_u64(seed);
    GameEngine::new(GameConfig::default(), &mut rng).unwrap()
}

fn all_coords(n: usize) -> Vec<Coord> {
    (0..n)
        .flat_map(|r| (0..n).map(move |c| Coord::new(r, c)))
        .collect()
}

fn ship_cells(engine: &GameEngine) -> Vec<Coord> {
    engine
        .board()
        .ships()
        .flat_map(|s| s.cells().iter().copied())
        .collect()
}

#[test]
fn three_board_single_ship_scenario() {
    let config = GameConfig::new(3, vec![2]).unwrap();
    let mut board = Board::new(3, &[2]);
    board.place(0, Coord::new(0, 0), Orientation::Horizontal).unwrap();
    let mut engine = GameEngine::from_board(config, board).unwrap();

    assert_eq!(engine.remaining_ships(), 1);
    assert_eq!(engine.guess("A1").unwrap(), GuessResult::Hit);
    assert_eq!(engine.guess("A2").unwrap(), GuessResult::HitAndSunk(0));
    assert_eq!(engine.remaining_ships(), 0);
    assert_eq!(engine.status(), GameStatus::Won);
    assert_eq!(engine.guess("C3").unwrap_err(), BoardError::GameOver);
}

#[test]
fn invalid_input_leaves_state_untouched() {
    let mut engine = random_engine(5);
    let before = engine.snapshot();
    assert!(matches!(
        engine.guess("Z99"),
        Err(BoardError::InvalidInput(_))
    ));
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn from_board_requires_full_placement() {
    let config = GameConfig::new(4, vec![2, 2]).unwrap();
    let mut board = Board::new(4, &[2, 2]);
    board.place(0, Coord::new(0, 0), Orientation::Vertical).unwrap();
    assert_eq!(
        GameEngine::from_board(config.clone(), board).err(),
        Some(BoardError::UnableToPlaceShip)
    );
    let other = Board::new(5, &[2, 2]);
    assert_eq!(
        GameEngine::from_board(config, other).err(),
        Some(BoardError::BoardMismatch)
    );
}

#[test]
fn from_board_rejects_boards_already_played_on() {
    let config = GameConfig::new(3, vec![2]).unwrap();
    let mut board = Board::new(3, &[2]);
    board.place(0, Coord::new(0, 0), Orientation::Horizontal).unwrap();
    assert_eq!(board.strike(Coord::new(2, 2)).unwrap(), GuessResult::Miss);
    assert_eq!(
        GameEngine::from_board(config.clone(), board.clone()).err(),
        Some(BoardError::BoardMismatch)
    );

    let mut hit = Board::new(3, &[2]);
    hit.place(0, Coord::new(0, 0), Orientation::Horizontal).unwrap();
    hit.strike(Coord::new(0, 0)).unwrap();
    assert_eq!(
        GameEngine::from_board(config, hit).err(),
        Some(BoardError::BoardMismatch)
    );
}

#[test]
fn rejected_strike_is_not_recorded() {
    let mut engine = random_engine(11);
    let before = engine.snapshot();
    let far = Coord::new(200, 0);
    let err = engine.apply_guess(far).unwrap_err();
    assert_eq!(err, BoardError::OutOfBounds(far));
    assert_eq!(err.to_string(), "Coordinate row 201 col 1 is outside the board");
    assert_eq!(
        engine.apply_guess(Coord::new(256, 0)).unwrap_err().to_string(),
        "Coordinate row 257 col 1 is outside the board"
    );
    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.guess_count(), 0);
}

#[test]
fn repeat_after_miss_is_a_no_op() {
    let config = GameConfig::new(3, vec![2]).unwrap();
    let mut board = Board::new(3, &[2]);
    board.place(0, Coord::new(0, 0), Orientation::Horizontal).unwrap();
    let mut engine = GameEngine::from_board(config, board).unwrap();

    assert_eq!(engine.guess("C3").unwrap(), GuessResult::Miss);
    let after_first = engine.snapshot();
    assert_eq!(engine.guess("c3").unwrap(), GuessResult::AlreadyGuessed);
    assert_eq!(engine.snapshot(), after_first);
    assert_eq!(engine.guess_count(), 1);
}

#[test]
fn construction_fails_fast_on_impossible_catalog() {
    let mut rng = SmallRng::seed_from_u64(0);
    let config = GameConfig {
        board_size: 3,
        ship_sizes: vec![3, 3, 3, 1],
    };
    assert!(matches!(
        GameEngine::new(config, &mut rng),
        Err(BoardError::Config(_))
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn guess_idempotent(seed in any::<u64>(), row in 0..10usize, col in 0..10usize) {
        let mut engine = random_engine(seed);
        let coord = Coord::new(row, col);
        let first = engine.apply_guess(coord).unwrap();
        prop_assert!(matches!(first, GuessResult::Hit | GuessResult::Miss | GuessResult::HitAndSunk(_)));
        let after_first = engine.snapshot();
        for _ in 0..3 {
            prop_assert_eq!(engine.apply_guess(coord).unwrap(), GuessResult::AlreadyGuessed);
            prop_assert_eq!(engine.snapshot(), after_first.clone());
        }
    }

    #[test]
    fn sunk_exactly_once_and_win_converges(seed in any::<u64>()) {
        let mut engine = random_engine(seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let mut cells = ship_cells(&engine);
        cells.shuffle(&mut rng);

        let mut sunk = HashSet::new();
        let mut last_hits = vec![0; engine.config().num_ships()];
        for (i, &coord) in cells.iter().enumerate() {
            prop_assert_eq!(engine.status(), GameStatus::InProgress);
            let result = engine.apply_guess(coord).unwrap();
            prop_assert!(result.is_hit());
            if let GuessResult::HitAndSunk(id) = result {
                prop_assert!(sunk.insert(id), "ship {} sunk twice", id);
            }
            for ship in engine.board().ships() {
                prop_assert!(ship.hits() >= last_hits[ship.id()]);
                prop_assert!(ship.hits() <= ship.length());
                prop_assert_eq!(ship.is_sunk(), sunk.contains(&ship.id()));
                last_hits[ship.id()] = ship.hits();
            }
            prop_assert_eq!(engine.remaining_ships(), 5 - sunk.len());
            prop_assert_eq!(engine.guess_count(), i + 1);
        }
        prop_assert_eq!(sunk.len(), 5);
        prop_assert_eq!(engine.status(), GameStatus::Won);
        prop_assert_eq!(engine.snapshot().misses, 0);
    }

    #[test]
    fn reset_restores_fresh_game(seed in any::<u64>(), guesses in 0..100usize) {
        let mut engine = random_engine(seed);
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_mul(31));
        let mut coords = all_coords(10);
        coords.shuffle(&mut rng);
        for &coord in coords.iter().take(guesses) {
            if engine.is_won() {
                break;
            }
            engine.apply_guess(coord).unwrap();
        }

        engine.reset(&mut rng).unwrap();
        prop_assert_eq!(engine.guess_count(), 0);
        prop_assert!(engine.guesses().count_ones() == 0);
        prop_assert_eq!(engine.remaining_ships(), 5);
        prop_assert_eq!(engine.status(), GameStatus::InProgress);
        prop_assert!(engine.board().ships().all(|s| s.hits() == 0));

        let cells = ship_cells(&engine);
        let unique: HashSet<_> = cells.iter().copied().collect();
        prop_assert_eq!(unique.len(), cells.len());
        prop_assert_eq!(cells.len(), 17);
        prop_assert!(cells.iter().all(|c| c.within(10)));
    }

    #[test]
    fn placement_valid_for_accepted_configs(
        seed in any::<u64>(),
        size in 1..=12usize,
        sizes in prop::collection::vec(1..=6usize, 1..=6),
    ) {
        let config = match GameConfig::new(size, sizes) {
            Ok(config) => config,
            Err(_) => return Ok(()),
        };
        let mut rng = SmallRng::seed_from_u64(seed);
        let engine = GameEngine::new(config.clone(), &mut rng).unwrap();

        let mut seen = HashSet::new();
        for ship in engine.board().ships() {
            prop_assert_eq!(ship.length(), config.ship_sizes[ship.id()]);
            for (i, &cell) in ship.cells().iter().enumerate() {
                prop_assert!(cell.within(size));
                prop_assert_eq!(cell, ship.orientation().step(ship.origin(), i));
                prop_assert!(seen.insert(cell));
            }
        }
        prop_assert_eq!(seen.len(), config.total_ship_cells());
    }
}
