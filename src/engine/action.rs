use crate::engine::direction::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Quit,
    /// A key with no binding.
    Invalid,
}
