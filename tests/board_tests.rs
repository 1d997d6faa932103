use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    Board, BoardError, CellState, Orientation, StrikeOutcome, BOARD_SIZE, NUM_VESSELS,
    TOTAL_FLEET_CELLS,
};

fn live_cells(board: &Board) -> usize {
    let mut count = 0;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if matches!(board.cell(r, c), CellState::Occupied(_)) {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn test_place_out_of_board() {
    let mut board = Board::new();
    assert_eq!(
        board.place_vessel(4, Orientation::Horizontal, 0, 7).unwrap_err(),
        BoardError::OutOfBoard
    );
    assert_eq!(
        board.place_vessel(4, Orientation::Vertical, 8, 0).unwrap_err(),
        BoardError::OutOfBoard
    );
    assert_eq!(
        board.place_vessel(1, Orientation::Horizontal, 10, 0).unwrap_err(),
        BoardError::OutOfBoard
    );
    // failed placement leaves no trace
    assert_eq!(board.vessels().len(), 0);
    assert_eq!(live_cells(&board), 0);
}

#[test]
fn test_place_collision_and_touch() {
    let mut board = Board::new();
    board.place_vessel(3, Orientation::Horizontal, 4, 4).unwrap();

    // direct overlap
    assert_eq!(
        board.place_vessel(1, Orientation::Horizontal, 4, 5).unwrap_err(),
        BoardError::Collision
    );
    // orthogonal touch
    assert_eq!(
        board.place_vessel(1, Orientation::Horizontal, 3, 5).unwrap_err(),
        BoardError::Collision
    );
    // diagonal touch at both ends of the buffer
    assert_eq!(
        board.place_vessel(1, Orientation::Horizontal, 3, 3).unwrap_err(),
        BoardError::Collision
    );
    assert_eq!(
        board.place_vessel(1, Orientation::Horizontal, 5, 7).unwrap_err(),
        BoardError::Collision
    );
    // one cell beyond the buffer is fine
    board.place_vessel(1, Orientation::Horizontal, 4, 8).unwrap();
    assert_eq!(board.vessels().len(), 2);
}

#[test]
fn test_random_fleet_conservation() {
    let mut rng = SmallRng::seed_from_u64(42);
    let board = Board::with_random_fleet(&mut rng).unwrap();
    assert_eq!(board.vessels().len(), NUM_VESSELS);
    assert_eq!(board.lives(), NUM_VESSELS);
    assert_eq!(live_cells(&board), TOTAL_FLEET_CELLS);
}

#[test]
fn test_single_cell_vessel_sinks_on_first_strike() {
    let mut board = Board::new();
    board.place_vessel(1, Orientation::Horizontal, 5, 5).unwrap();
    assert_eq!(board.lives(), 1);

    assert_eq!(board.strike(5, 5).unwrap(), StrikeOutcome::Sunk);
    assert_eq!(board.cell(5, 5), CellState::Sunk);
    assert_eq!(board.lives(), 0);
    assert!(board.all_sunk());
}

#[test]
fn test_double_strike_on_empty_cell() {
    let mut board = Board::new();
    board.place_vessel(1, Orientation::Horizontal, 0, 0).unwrap();

    assert_eq!(board.strike(2, 2).unwrap(), StrikeOutcome::Miss);
    assert_eq!(board.cell(2, 2), CellState::Miss);
    // second strike is rejected and changes nothing
    assert_eq!(board.strike(2, 2).unwrap_err(), BoardError::AlreadyTargeted);
    assert_eq!(board.cell(2, 2), CellState::Miss);
    assert_eq!(board.lives(), 1);
}

#[test]
fn test_sink_monotonicity() {
    let mut board = Board::new();
    board.place_vessel(3, Orientation::Vertical, 2, 2).unwrap();
    board.place_vessel(1, Orientation::Horizontal, 7, 7).unwrap();
    assert_eq!(board.lives(), 2);

    assert_eq!(board.strike(2, 2).unwrap(), StrikeOutcome::Hit);
    assert_eq!(board.strike(3, 2).unwrap(), StrikeOutcome::Hit);
    assert_eq!(board.lives(), 2, "lives untouched before the sink");
    assert_eq!(board.strike(4, 2).unwrap(), StrikeOutcome::Sunk);
    assert_eq!(board.lives(), 1, "exactly one decrement per vessel");

    for r in 2..=4 {
        assert_eq!(board.cell(r, 2), CellState::Sunk);
    }
    assert!(board.vessels()[0].is_sunk());
    assert_eq!(board.vessels()[1].hit_points(), 1);
    // re-striking any sunk cell is rejected and cannot decrement again
    assert_eq!(board.strike(3, 2).unwrap_err(), BoardError::AlreadyTargeted);
    assert_eq!(board.lives(), 1);
}

#[test]
fn test_find_ship() {
    let mut board = Board::new();
    board.place_vessel(2, Orientation::Horizontal, 6, 3).unwrap();

    assert!(board.find_ship(6, 3));
    assert!(board.find_ship(6, 4));
    assert!(!board.find_ship(6, 5));
    assert!(!board.find_ship(20, 3));

    // a struck segment is no longer a live ship part
    board.strike(6, 3).unwrap();
    assert!(!board.find_ship(6, 3));
    assert!(board.find_ship(6, 4));
}

#[test]
fn test_strike_out_of_board() {
    let mut board = Board::new();
    assert_eq!(board.strike(10, 0).unwrap_err(), BoardError::OutOfBoard);
    assert_eq!(board.strike(0, 10).unwrap_err(), BoardError::OutOfBoard);
}
