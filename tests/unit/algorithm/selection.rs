//! Tests for most-constrained-cell selection

#[cfg(test)]
mod tests {
    use edgematch::SolverConfig;
    use edgematch::algorithm::executor::{Search, SearchState};
    use edgematch::algorithm::index::PlacementIndex;
    use edgematch::algorithm::selection::{eligible_cells, select_next_cell};
    use edgematch::io::catalog::builtin_catalog;
    use edgematch::spatial::board::{Board, Position};
    use edgematch::spatial::edges::Edges;
    use edgematch::spatial::pattern::{Direction, Pattern};
    use edgematch::spatial::pieces::PieceCatalog;

    fn corner_catalog() -> PieceCatalog {
        use Pattern::{BlueStar, Border, PinkCircle, PinkTrident, YellowCircle};
        PieceCatalog::from_edges([
            [Border, BlueStar, PinkCircle, Border],
            [Border, Border, PinkTrident, BlueStar],
            [PinkCircle, YellowCircle, Border, Border],
            [PinkTrident, Border, Border, YellowCircle],
        ])
    }

    // Only corners know two edges on an empty board
    #[test]
    fn test_only_corners_are_eligible_on_empty_board() {
        let index = PlacementIndex::build(&builtin_catalog());
        let board = Board::new(4, Pattern::Border).expect("Failed to create board");

        let positions: Vec<Position> = eligible_cells(&board, &index)
            .map(|choice| choice.position)
            .collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(0, 3),
                Position::new(3, 0),
                Position::new(3, 3),
            ]
        );
    }

    // Equal counts resolve to the first cell in row-major order
    #[test]
    fn test_ties_go_to_first_row_major_cell() {
        let index = PlacementIndex::build(&corner_catalog());
        let board = Board::new(2, Pattern::Border).expect("Failed to create board");

        let choice = select_next_cell(&board, &index);
        assert_eq!(choice.map(|c| c.position), Some(Position::ANCHOR));
        assert_eq!(choice.map(|c| c.available), Some(4));
    }

    #[test]
    fn test_fewest_candidates_wins() {
        let mut index = PlacementIndex::build(&corner_catalog());
        let mut board = Board::new(2, Pattern::Border).expect("Failed to create board");
        assert!(board.place(&mut index, 0, Position::ANCHOR).is_ok());

        let counts: Vec<(Position, usize)> = eligible_cells(&board, &index)
            .map(|c| (c.position, c.available))
            .collect();
        assert_eq!(
            counts,
            vec![
                (Position::new(0, 1), 1),
                (Position::new(1, 0), 1),
                (Position::new(1, 1), 3),
            ]
        );

        let choice = select_next_cell(&board, &index);
        assert_eq!(choice.map(|c| c.position), Some(Position::new(0, 1)));
        assert_eq!(
            choice.map(|c| c.key),
            board.key_at(Position::new(0, 1)).ok()
        );
    }

    #[test]
    fn test_full_board_has_no_choice() {
        let mut index = PlacementIndex::build(&corner_catalog());
        let mut board = Board::new(2, Pattern::Border).expect("Failed to create board");
        for (handle, position) in [
            (0, Position::new(0, 0)),
            (4, Position::new(0, 1)),
            (8, Position::new(1, 0)),
            (12, Position::new(1, 1)),
        ] {
            assert!(board.place(&mut index, handle, position).is_ok());
        }
        assert_eq!(select_next_cell(&board, &index), None);
    }

    // Counts unplaced rotations matching a cell edge by edge, without the index buckets
    fn recount(index: &PlacementIndex, restrictions: &Edges) -> usize {
        index
            .placements()
            .iter()
            .filter(|p| !index.is_placed(p.slot()))
            .filter(|p| {
                Direction::ALL.iter().all(|&d| {
                    restrictions.get(d).is_none_or(|required| p.edge(d) == required)
                })
            })
            .count()
    }

    // Selection must pick the first cell of minimal recount among every open cell
    // with two or more known edges, at every forward step of a search
    fn assert_selection_matches_recount(catalog: &PieceCatalog, max_steps: u64) {
        let mut search =
            Search::new(catalog, SolverConfig::default()).expect("Failed to start search");
        let mut checked = 0;

        while !search.state().is_terminal() && search.step_count() < max_steps {
            if search.state() == SearchState::Searching {
                let board = search.board();
                let index = search.index();

                let mut expected: Option<(Position, usize)> = None;
                let mut open_cells = Vec::new();
                for ((row, col), cell) in board.cells().indexed_iter() {
                    let restrictions = cell.restrictions();
                    let known = Direction::ALL
                        .iter()
                        .filter(|&&d| restrictions.get(d).is_some())
                        .count();
                    if cell.occupant().is_some() || known < 2 {
                        continue;
                    }
                    let position = Position::new(row, col);
                    let count = recount(index, restrictions);
                    open_cells.push((position, count));
                    if expected.is_none_or(|(_, best)| count < best) {
                        expected = Some((position, count));
                    }
                }

                let listed: Vec<(Position, usize)> = eligible_cells(board, index)
                    .map(|c| (c.position, c.available))
                    .collect();
                assert_eq!(listed, open_cells);

                let chosen = select_next_cell(board, index).map(|c| (c.position, c.available));
                assert_eq!(chosen, expected);
                checked += 1;
            }
            search.step().expect("Failed to step search");
        }

        assert!(checked > 0);
    }

    #[test]
    fn test_selection_matches_recount_on_corner_puzzle() {
        assert_selection_matches_recount(&corner_catalog(), 100);
    }

    #[test]
    fn test_selection_matches_recount_on_builtin_puzzle() {
        assert_selection_matches_recount(&builtin_catalog(), 2_000);
    }
}
