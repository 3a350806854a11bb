pub mod loader;
pub mod tile;

use std::ops::Index;

use tile::VOID;

/// Zero-based `(row, col)` coordinate into a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Row-major store of map symbols. The shape is fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    cells: Vec<char>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![VOID; width * height],
        }
    }

    fn idx(&self, pos: Position) -> usize {
        pos.row * self.width + pos.col
    }

    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    #[cfg(test)]
    pub fn get(&self, pos: Position) -> Option<char> {
        if pos.row < self.height && pos.col < self.width {
            Some(self.cells[self.idx(pos)])
        } else {
            None
        }
    }

    /// Writes the cell if it exists. Returns false for positions off the grid.
    pub fn set(&mut self, pos: Position, symbol: char) -> bool {
        if pos.row >= self.height || pos.col >= self.width {
            return false;
        }
        let i = self.idx(pos);
        self.cells[i] = symbol;
        true
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    #[cfg(test)]
    pub fn count(&self, symbol: char) -> usize {
        self.cells.iter().filter(|&&c| c == symbol).count()
    }

    #[cfg(test)]
    pub fn find(&self, symbol: char) -> Option<Position> {
        self.cells
            .iter()
            .position(|&c| c == symbol)
            .map(|i| Position::new(i / self.width, i % self.width))
    }
}

/// Unchecked access for positions already validated with [`Grid::in_bounds`].
impl Index<Position> for Grid {
    type Output = char;

    fn index(&self, pos: Position) -> &char {
        &self.cells[self.idx(pos)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_void() {
        let g = Grid::new(3, 2);
        assert_eq!(g.count(VOID), 6);
        assert_eq!(g.rows().count(), 2);
    }

    #[test]
    fn test_get_set_roundtrip_and_bounds() {
        let mut g = Grid::new(3, 2);
        g.set(Position::new(1, 2), 'X');
        assert_eq!(g.get(Position::new(1, 2)), Some('X'));
        assert_eq!(g.get(Position::new(2, 0)), None);
        assert_eq!(g.get(Position::new(0, 3)), None);
        assert_eq!(g.rows().nth(1), Some(&[VOID, VOID, 'X'][..]));
        assert_eq!(g[Position::new(1, 2)], 'X');
    }

    #[test]
    fn test_set_outside_grid_is_rejected() {
        let mut g = Grid::new(3, 2);
        assert!(g.set(Position::new(0, 0), 'X'));
        assert!(!g.set(Position::new(0, 3), '#'));
        assert!(!g.set(Position::new(2, 0), '#'));
        assert_eq!(g.count('#'), 0);
        assert_eq!(g.rows().nth(1), Some(&[VOID, VOID, VOID][..]));
    }

    #[test]
    fn test_in_bounds_rejects_negative() {
        let g = Grid::new(2, 2);
        assert!(g.in_bounds(0, 0));
        assert!(g.in_bounds(1, 1));
        assert!(!g.in_bounds(-1, 0));
        assert!(!g.in_bounds(0, 2));
    }

    #[test]
    fn test_find_returns_row_col() {
        let mut g = Grid::new(4, 3);
        g.set(Position::new(2, 1), 'O');
        assert_eq!(g.find('O'), Some(Position::new(2, 1)));
        assert_eq!(g.find('#'), None);
    }
}
