use crate::config::Difficulty;

#[derive(Copy, Clone, Debug)]
pub enum Action {
    Reveal,
    ToggleFlag,
    Restart,
    SetDifficulty(Difficulty),
}
