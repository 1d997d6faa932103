use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    Board, CellState, StrikeOutcome, BOARD_SIZE, FLEET, NUM_VESSELS, TOTAL_FLEET_CELLS,
};

fn chebyshev(a: (usize, usize), b: (usize, usize)) -> usize {
    let dr = a.0.abs_diff(b.0);
    let dc = a.1.abs_diff(b.1);
    dr.max(dc)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every pair of distinct vessels keeps at least one cell of buffer:
    /// minimum Chebyshev distance between their cells is >= 2.
    #[test]
    fn placed_fleet_keeps_adjacency_buffer(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::with_random_fleet(&mut rng).unwrap();
        let vessels = board.vessels();
        for i in 0..vessels.len() {
            for j in (i + 1)..vessels.len() {
                let min_dist = vessels[i]
                    .cells()
                    .iter()
                    .flat_map(|&a| vessels[j].cells().iter().map(move |&b| chebyshev(a, b)))
                    .min()
                    .unwrap();
                prop_assert!(
                    min_dist >= 2,
                    "vessels {} and {} touch (distance {})",
                    i, j, min_dist
                );
            }
        }
    }

    /// A freshly placed board carries exactly the configured fleet.
    #[test]
    fn placed_fleet_is_conserved(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::with_random_fleet(&mut rng).unwrap();

        prop_assert_eq!(board.vessels().len(), NUM_VESSELS);
        prop_assert_eq!(board.lives(), NUM_VESSELS);

        let mut lengths: Vec<usize> = board.vessels().iter().map(|v| v.length()).collect();
        lengths.sort_unstable();
        let mut expected = FLEET.to_vec();
        expected.sort_unstable();
        prop_assert_eq!(lengths, expected);

        let mut occupied = 0;
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                match board.cell(r, c) {
                    CellState::Occupied(idx) => {
                        prop_assert!(idx < NUM_VESSELS);
                        prop_assert!(board.vessels()[idx].cells().contains(&(r, c)));
                        occupied += 1;
                    }
                    CellState::Empty => {}
                    state => prop_assert!(false, "fresh board has cell in state {:?}", state),
                }
            }
        }
        prop_assert_eq!(occupied, TOTAL_FLEET_CELLS);
    }

    /// Striking every cell exactly once sinks the whole fleet with correct
    /// bookkeeping, and a second pass is rejected without mutating anything.
    #[test]
    fn full_bombardment_bookkeeping(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::with_random_fleet(&mut rng).unwrap();

        let mut hits = 0;
        let mut misses = 0;
        let mut sinks = 0;
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                match board.strike(r, c).unwrap() {
                    StrikeOutcome::Hit => hits += 1,
                    StrikeOutcome::Sunk => { hits += 1; sinks += 1; }
                    StrikeOutcome::Miss => misses += 1,
                }
            }
        }
        prop_assert_eq!(hits, TOTAL_FLEET_CELLS);
        prop_assert_eq!(misses, BOARD_SIZE * BOARD_SIZE - TOTAL_FLEET_CELLS);
        prop_assert_eq!(sinks, NUM_VESSELS, "each vessel sinks exactly once");
        prop_assert_eq!(board.lives(), 0);
        prop_assert!(board.all_sunk());

        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                prop_assert!(board.strike(r, c).is_err());
            }
        }
        prop_assert_eq!(board.lives(), 0);
    }
}
