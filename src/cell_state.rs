/// Player-visible state of a single cell. The board itself never changes
/// during play; only this does.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellState {
    Hidden,
    Flagged,
    Revealed,
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}
