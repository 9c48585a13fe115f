use std::collections::HashSet;

use broadside::{
    board::{Board, Cell, Coordinate, PlayerBoard, SquareDimensions},
    game::{Outcome, Player},
};
use proptest::prelude::*;

/// A board size with ship and target coordinates that all lie on the board.
fn board_and_coords() -> impl Strategy<Value = (usize, Vec<(usize, usize)>, Vec<(usize, usize)>)> {
    (1usize..8).prop_flat_map(|size| {
        let coord = (0..size, 0..size);
        (
            Just(size),
            prop::collection::vec(coord.clone(), 0..20),
            prop::collection::vec(coord, 0..30),
        )
    })
}

fn to_coords(pairs: &[(usize, usize)]) -> Vec<Coordinate> {
    pairs.iter().copied().map(Coordinate::from).collect()
}

fn board_with(size: usize, ships: &[Coordinate]) -> PlayerBoard {
    let mut board = PlayerBoard::new(SquareDimensions::new(size)).unwrap();
    board.place_ships(ships).unwrap();
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn render_shows_exactly_the_placed_ships((size, ships, _) in board_and_coords()) {
        let ships = to_coords(&ships);
        let board = board_with(size, &ships);
        let distinct: HashSet<_> = ships.iter().copied().collect();

        let rendered = board.render();
        prop_assert_eq!(rendered.lines().count(), size);
        prop_assert_eq!(rendered.matches('B').count(), distinct.len());
        prop_assert_eq!(rendered.matches('_').count(), size * size - distinct.len());
        for (row, line) in rendered.lines().enumerate() {
            prop_assert_eq!(line.len(), size * 2);
            for (col, symbol) in line.split_whitespace().enumerate() {
                let expected = if distinct.contains(&Coordinate::new(row, col)) { "B" } else { "_" };
                prop_assert_eq!(symbol, expected);
            }
        }
    }

    #[test]
    fn hit_count_matches_ship_cells_struck((size, ships, targets) in board_and_coords()) {
        let ships = to_coords(&ships);
        let targets = to_coords(&targets);
        let mut board = board_with(size, &ships);

        let mut expected = 0;
        let mut model = board.clone();
        for &target in &targets {
            if model.get(target) == Some(Cell::Ship) {
                expected += 1;
            }
            model.fire(target).unwrap();
        }

        prop_assert_eq!(board.apply_targets(&targets).unwrap(), expected);
        prop_assert_eq!(board.count(Cell::Hit), expected);
        prop_assert_eq!(board.hits_taken(), expected);
        let distinct_targets: HashSet<_> = targets.iter().copied().collect();
        prop_assert_eq!(board.count(Cell::Hit) + board.count(Cell::Miss), distinct_targets.len());
    }

    #[test]
    fn reapplying_targets_changes_nothing((size, ships, targets) in board_and_coords()) {
        let ships = to_coords(&ships);
        let targets = to_coords(&targets);
        let mut board = board_with(size, &ships);
        board.apply_targets(&targets).unwrap();
        let after_first = board.clone();

        prop_assert_eq!(board.apply_targets(&targets).unwrap(), 0);
        prop_assert_eq!(board, after_first);
    }

    #[test]
    fn strictly_more_hits_wins(p1 in 0usize..100, p2 in 0usize..100) {
        let outcome = Outcome::from_hits(p1, p2);
        if p1 > p2 {
            prop_assert_eq!(outcome, Outcome::Winner(Player::P1));
        } else if p2 > p1 {
            prop_assert_eq!(outcome, Outcome::Winner(Player::P2));
        } else {
            prop_assert_eq!(outcome.to_string(), "It is a draw");
        }
    }
}
