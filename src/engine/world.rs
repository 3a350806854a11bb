use crate::engine::direction::Direction;
use crate::error::WorldError;
use crate::map::loader::LoadedMap;
use crate::map::tile::{EMPTY, PLAYER, Tile, VOID};
use crate::map::{Grid, Position};

/// Result of a move attempt. Only `Moved` changes the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Blocked(Tile),
    OutOfBounds,
}

/// Category of each neighbouring cell; `None` past the map edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors {
    pub up: Option<Tile>,
    pub down: Option<Tile>,
    pub left: Option<Tile>,
    pub right: Option<Tile>,
}

impl Neighbors {
    pub fn get(&self, dir: Direction) -> Option<Tile> {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

/// The grid plus the single player cell it contains.
pub struct World {
    grid: Grid,
    player: Position,
}

impl World {
    pub fn new(loaded: LoadedMap) -> Self {
        Self {
            grid: loaded.grid,
            player: loaded.player,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> Position {
        self.player
    }

    /// Position and symbol one step from the player.
    fn look(&self, dir: Direction) -> Result<(Position, char), WorldError> {
        let (dr, dc) = dir.offset();
        let row = self.player.row as i64 + dr;
        let col = self.player.col as i64 + dc;
        if !self.grid.in_bounds(row, col) {
            return Err(WorldError::OutOfBounds { row, col });
        }
        let pos = Position::new(row as usize, col as usize);
        Ok((pos, self.grid[pos]))
    }

    pub fn tile_in_direction(&self, dir: Direction) -> Result<char, WorldError> {
        self.look(dir).map(|(_, symbol)| symbol)
    }

    #[allow(dead_code)]
    pub fn tile_in_named_direction(&self, name: &str) -> Result<char, WorldError> {
        self.tile_in_direction(name.parse()?)
    }

    pub fn neighbors(&self) -> Neighbors {
        let look = |dir| self.tile_in_direction(dir).ok().map(Tile::classify);
        Neighbors {
            up: look(Direction::Up),
            down: look(Direction::Down),
            left: look(Direction::Left),
            right: look(Direction::Right),
        }
    }

    pub fn move_player(&mut self, dir: Direction) -> MoveOutcome {
        let Ok((dest, symbol)) = self.look(dir) else {
            return MoveOutcome::OutOfBounds;
        };

        let tile = Tile::classify(symbol);
        if !tile.is_walkable() {
            return MoveOutcome::Blocked(tile);
        }

        self.grid.set(self.player, EMPTY);
        self.player = dest;
        self.grid.set(dest, PLAYER);
        MoveOutcome::Moved
    }

    /// Map rows as display text. Void cells show as blanks.
    pub fn render(&self) -> impl Iterator<Item = String> + '_ {
        self.grid.rows().map(|row| {
            row.iter()
                .map(|&c| if c == VOID { EMPTY } else { c })
                .collect()
        })
    }
}
