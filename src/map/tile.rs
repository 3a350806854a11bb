use std::fmt;

pub const EMPTY: char = ' ';
pub const WALL: char = 'X';
pub const ITEM: char = '#';
pub const PLAYER: char = 'O';
/// Zero value left in cells the loader could not fill.
pub const VOID: char = '\0';

/// What a grid symbol means to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty,
    Wall,
    Item,
    Invalid,
}

impl Tile {
    pub fn classify(symbol: char) -> Self {
        match symbol {
            EMPTY => Tile::Empty,
            WALL => Tile::Wall,
            ITEM => Tile::Item,
            _ => Tile::Invalid,
        }
    }

    pub fn is_walkable(self) -> bool {
        matches!(self, Tile::Empty)
    }

    pub fn name(self) -> &'static str {
        match self {
            Tile::Empty => "empty",
            Tile::Wall => "wall",
            Tile::Item => "item",
            Tile::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_symbols() {
        assert_eq!(Tile::classify(' '), Tile::Empty);
        assert_eq!(Tile::classify('X'), Tile::Wall);
        assert_eq!(Tile::classify('#'), Tile::Item);
    }

    #[test]
    fn test_classify_everything_else_is_invalid() {
        for c in ['O', 'S', 'x', '~', '0', VOID] {
            assert_eq!(Tile::classify(c), Tile::Invalid, "symbol {:?}", c);
        }
    }

    #[test]
    fn test_only_empty_is_walkable() {
        assert!(Tile::Empty.is_walkable());
        assert!(!Tile::Wall.is_walkable());
        assert!(!Tile::Item.is_walkable());
        assert!(!Tile::Invalid.is_walkable());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Tile::Wall.to_string(), "wall");
        assert_eq!(format!("{}", Tile::Empty), "empty");
    }
}
