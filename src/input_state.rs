use crate::action::Action;
use crate::util::Pos;

#[derive(Default, Debug)]
pub struct InputState {
    pub cursor: Pos,
    pub action: Option<Action>,
}
