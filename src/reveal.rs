use crate::board::Board;
use crate::cell_content::CellContent;
use crate::cell_state::CellState;
use crate::util::{Pos, neighbors, pos_index};
use std::collections::{BTreeSet, VecDeque};

/// Cells a click on `start` opens: the start cell itself, plus the whole
/// connected zero-count region around it when its own count is 0, bounded
/// inclusively by positive-count cells. Pure with respect to `cells`; the
/// caller applies the returned set.
///
/// Flagged and already-revealed cells are skipped and never expanded through.
/// Iterative worklist, so arbitrarily large custom grids cannot blow the
/// stack. Mines are unreachable here: the caller handles a mine click as a
/// loss before calling, and a zero-count cell has no mine neighbors.
pub fn flood_reveal(board: &Board, cells: &[CellState], start: Pos) -> BTreeSet<Pos> {
    let rows = board.rows();
    let cols = board.cols();

    let mut opened = BTreeSet::new();
    let mut queue = VecDeque::from([start]);

    while let Some(pos) = queue.pop_front() {
        let Some(index) = pos_index(pos, rows, cols) else {
            continue;
        };
        if cells[index] != CellState::Hidden || !opened.insert(pos) {
            continue;
        }
        if board.content_at(pos) == Some(CellContent::Empty(0)) {
            queue.extend(neighbors(pos, rows, cols));
        }
    }

    opened
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hidden(board: &Board) -> Vec<CellState> {
        vec![CellState::default(); board.total_cells() as usize]
    }

    #[test]
    fn positive_count_start_opens_only_itself() {
        let board = Board::from_mine_positions(3, 3, &[(0, 0)]);
        let opened = flood_reveal(&board, &hidden(&board), (1, 1));
        assert_eq!(opened, BTreeSet::from([(1, 1)]));
    }

    #[test]
    fn corner_zero_start_opens_region_inside_bounds() {
        // 10 mines packed into the lower-right of a 9x9, corner (0,0) is 0
        let mines: Vec<Pos> = vec![
            (6, 6),
            (6, 7),
            (6, 8),
            (7, 6),
            (7, 7),
            (7, 8),
            (8, 6),
            (8, 7),
            (8, 8),
            (5, 5),
        ];
        let board = Board::from_mine_positions(9, 9, &mines);
        let opened = flood_reveal(&board, &hidden(&board), (0, 0));

        assert!(opened.contains(&(0, 0)));
        assert!(opened.len() > 1);
        for &pos in &opened {
            assert!(pos.0 < 9 && pos.1 < 9);
            assert!(!board.is_mine(pos));
        }
        // boundary rule: every positive-count cell in the region is only there
        // because a zero-count neighbor pulled it in
        for &pos in &opened {
            if board.content_at(pos) != Some(CellContent::Empty(0)) {
                let has_zero_neighbor = neighbors(pos, 9, 9).any(|p| {
                    opened.contains(&p) && board.content_at(p) == Some(CellContent::Empty(0))
                });
                assert!(has_zero_neighbor, "{pos:?} revealed without a zero neighbor");
            }
        }
    }

    #[test]
    fn flood_stops_at_flags() {
        // 1x5 strip, mine at the far end: 0 0 0 1 *
        let board = Board::from_mine_positions(1, 5, &[(0, 4)]);
        let mut cells = hidden(&board);
        cells[2] = CellState::Flagged;

        let opened = flood_reveal(&board, &cells, (0, 0));
        assert_eq!(opened, BTreeSet::from([(0, 0), (0, 1)]));
    }

    #[test]
    fn already_revealed_cells_are_not_reopened() {
        let board = Board::from_mine_positions(1, 5, &[(0, 4)]);
        let mut cells = hidden(&board);
        cells[1] = CellState::Revealed;

        let opened = flood_reveal(&board, &cells, (0, 0));
        // the revealed cell is skipped and, like flags, not expanded through
        assert_eq!(opened, BTreeSet::from([(0, 0)]));
    }

    #[test]
    fn full_zero_board_opens_everything() {
        let board = Board::from_mine_positions(4, 4, &[]);
        let opened = flood_reveal(&board, &hidden(&board), (2, 2));
        assert_eq!(opened.len(), 16);
    }

    #[test]
    fn out_of_bounds_start_opens_nothing() {
        let board = Board::from_mine_positions(2, 2, &[]);
        let opened = flood_reveal(&board, &hidden(&board), (5, 5));
        assert!(opened.is_empty());
    }
}
