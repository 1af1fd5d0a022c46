#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    NotStarted,
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::NotStarted
    }
}
