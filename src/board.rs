use crate::cell_content::CellContent;
use crate::config::GameConfig;
use crate::util::{Pos, index_pos, neighbors, pos_index};
use rand::Rng;

/// Immutable mine layout plus precomputed adjacency counts, flat row-major.
#[derive(Clone, Debug)]
pub struct Board {
    rows: u16,
    cols: u16,
    mine_count: u32,
    cells: Vec<CellContent>,
}

impl Board {
    /// Random board for a normalized config. Rejection sampling: draw cells
    /// until `mines` distinct ones hold a mine. The caller must have run
    /// [`GameConfig::normalize`] first, otherwise this loops forever.
    pub fn generate(config: GameConfig) -> Self {
        let GameConfig { rows, cols, mines } = config;
        let size = rows as usize * cols as usize;
        let mut cells = vec![CellContent::default(); size];

        let mut rng = rand::rng();
        let mut placed = 0;
        while placed < mines {
            let i = rng.random_range(0..size);
            if cells[i] != CellContent::Mine {
                cells[i] = CellContent::Mine;
                placed += 1;
            }
        }

        Self::finish(rows, cols, mines, cells)
    }

    /// Board with mines at exactly the given positions. Used by tests that
    /// need a known layout.
    pub fn from_mine_positions(rows: u16, cols: u16, mines: &[Pos]) -> Self {
        let mut cells = vec![CellContent::default(); rows as usize * cols as usize];
        for &pos in mines {
            let i = pos_index(pos, rows, cols).expect("mine position out of bounds");
            cells[i] = CellContent::Mine;
        }
        let count = cells.iter().filter(|c| c.is_mine()).count() as u32;
        Self::finish(rows, cols, count, cells)
    }

    /// Adjacency pass: every non-mine cell stores the number of mines among
    /// its in-bounds neighbors.
    fn finish(rows: u16, cols: u16, mine_count: u32, mut cells: Vec<CellContent>) -> Self {
        for i in 0..cells.len() {
            if cells[i].is_mine() {
                continue;
            }
            let pos = index_pos(i, rows, cols).unwrap();
            let count = neighbors(pos, rows, cols)
                .filter(|&p| cells[pos_index(p, rows, cols).unwrap()].is_mine())
                .count() as u8;
            cells[i] = CellContent::Empty(count);
        }
        Self {
            rows,
            cols,
            mine_count,
            cells,
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn mine_count(&self) -> u32 {
        self.mine_count
    }

    pub fn total_cells(&self) -> u32 {
        self.cells.len() as u32
    }

    pub fn safe_cells(&self) -> u32 {
        self.total_cells() - self.mine_count
    }

    pub fn content_at(&self, pos: Pos) -> Option<CellContent> {
        pos_index(pos, self.rows, self.cols).map(|i| self.cells[i])
    }

    pub fn is_mine(&self, pos: Pos) -> bool {
        matches!(self.content_at(pos), Some(CellContent::Mine))
    }

    pub fn mine_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_mine())
            .map(|(i, _)| index_pos(i, self.rows, self.cols).unwrap())
    }
}
