#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellContent {
    /// Count of mines among the up-to-8 neighbors, 0..=8.
    Empty(u8),
    Mine,
}

impl CellContent {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

impl Default for CellContent {
    fn default() -> Self {
        Self::Empty(0)
    }
}
