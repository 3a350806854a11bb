use std::collections::VecDeque;

use crate::engine::action::Action;
use crate::engine::direction::Direction;
use crate::engine::world::{MoveOutcome, World};
use crate::map::tile::Tile;

const LOG_CAPACITY: usize = 6;

/// Everything one run of the game needs, passed explicitly to the loop and
/// the renderer.
pub struct Session {
    pub world: World,
    pub map_name: String,
    pub logs: VecDeque<String>,
    pub moves: u32,
    pub last_outcome: Option<MoveOutcome>,
}

impl Session {
    pub fn new(world: World, map_name: impl Into<String>) -> Self {
        let mut logs = VecDeque::new();
        logs.push_back("You are the 'O' on the map. Go on then, get moving!".to_string());
        logs.push_back("Arrow keys move, Esc quits.".to_string());

        Self {
            world,
            map_name: map_name.into(),
            logs,
            moves: 0,
            last_outcome: None,
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        self.logs.push_back(msg.into());
        while self.logs.len() > LOG_CAPACITY {
            self.logs.pop_front();
        }
    }

    /// One-based `(x, y)`: column first. Internally everything is `(row, col)`.
    pub fn display_position(&self) -> (usize, usize) {
        let p = self.world.player();
        (p.col + 1, p.row + 1)
    }

    /// Returns false when the session should end.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Move(dir) => self.step(dir),
            Action::Invalid => {
                self.last_outcome = None;
                self.push_log("Invalid input; see controls, please.");
            }
            Action::Quit => {
                log::info!("Quit after {} move(s)", self.moves);
                return false;
            }
        }
        true
    }

    fn step(&mut self, dir: Direction) {
        let outcome = self.world.move_player(dir);
        log::debug!("move {} -> {:?} at {:?}", dir, outcome, self.world.player());
        self.last_outcome = Some(outcome);

        let msg = match outcome {
            MoveOutcome::Moved => {
                self.moves += 1;
                format!("You moved {}.", dir)
            }
            MoveOutcome::Blocked(Tile::Item) => {
                "You don't have a backpack! Find the backpack first!".to_string()
            }
            MoveOutcome::Blocked(_) => {
                format!("You can't move {}, try another direction! Use the map!", dir)
            }
            MoveOutcome::OutOfBounds => "The map ends there.".to_string(),
        };
        self.push_log(msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::loader::parse_map;

    fn session(text: &str) -> Session {
        Session::new(World::new(parse_map(text).unwrap()), "test")
    }

    #[test]
    fn test_move_logs_and_counts() {
        let mut s = session("XXXX\nXS X\nXXXX");
        assert!(s.apply(Action::Move(Direction::Right)));
        assert_eq!(s.moves, 1);
        assert_eq!(s.last_outcome, Some(MoveOutcome::Moved));
        assert_eq!(s.logs.back().map(String::as_str), Some("You moved right."));
    }

    #[test]
    fn test_blocked_messages() {
        let mut s = session("X#X\nXSX\nXXX");
        s.apply(Action::Move(Direction::Up));
        assert!(s.logs.back().unwrap().contains("backpack"));
        s.apply(Action::Move(Direction::Left));
        assert_eq!(
            s.logs.back().unwrap(),
            "You can't move left, try another direction! Use the map!"
        );
        assert_eq!(s.moves, 0);
    }

    #[test]
    fn test_out_of_bounds_message() {
        let mut s = session("S");
        s.apply(Action::Move(Direction::Down));
        assert_eq!(s.last_outcome, Some(MoveOutcome::OutOfBounds));
        assert_eq!(s.logs.back().unwrap(), "The map ends there.");
    }

    #[test]
    fn test_invalid_input_changes_nothing() {
        let mut s = session("XXX\nXSX\nXXX");
        let before = s.world.grid().clone();
        assert!(s.apply(Action::Invalid));
        assert_eq!(s.world.grid(), &before);
        assert_eq!(s.logs.back().unwrap(), "Invalid input; see controls, please.");
    }

    #[test]
    fn test_quit_ends_session() {
        let mut s = session("S");
        assert!(!s.apply(Action::Quit));
    }

    #[test]
    fn test_display_position_swaps_axes() {
        let s = session("XXXX\nXXSX");
        assert_eq!(s.world.player().row, 1);
        assert_eq!(s.world.player().col, 2);
        assert_eq!(s.display_position(), (3, 2));
    }

    #[test]
    fn test_log_is_bounded() {
        let mut s = session("S");
        for _ in 0..20 {
            s.apply(Action::Invalid);
        }
        assert_eq!(s.logs.len(), LOG_CAPACITY);
    }
}
