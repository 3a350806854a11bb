use std::fs;
use std::path::Path;

use crate::error::{LoadError, MalformedCell, MalformedReason, ParseError};
use crate::map::tile::{EMPTY, ITEM, PLAYER, WALL};
use crate::map::{Grid, Position};

const RAW_START: char = 'S';
const RAW_OPEN: char = 'O';

/// A parsed map ready to become a world.
#[derive(Debug, Clone)]
pub struct LoadedMap {
    pub grid: Grid,
    pub player: Position,
    /// Cells that were left at the void symbol.
    pub malformed: Vec<MalformedCell>,
}

/// Read a map file from disk and parse it.
pub fn load_map(path: &Path) -> Result<LoadedMap, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let loaded = parse_map(&contents).map_err(|e| LoadError::from_parse(e, path))?;
    log::info!(
        "Loaded map {} ({}x{}), player at row {} col {}, {} malformed cell(s)",
        path.display(),
        loaded.grid.width,
        loaded.grid.height,
        loaded.player.row,
        loaded.player.col,
        loaded.malformed.len()
    );
    Ok(loaded)
}

/// Parse map text. Width is the longest line; shorter lines leave their
/// tail cells void.
pub fn parse_map(text: &str) -> Result<LoadedMap, ParseError> {
    let lines: Vec<Vec<char>> = text.lines().map(|l| l.chars().collect()).collect();

    let height = lines.len();
    let width = lines.iter().map(Vec::len).max().unwrap_or(0);
    if height == 0 || width == 0 {
        return Err(ParseError::Empty);
    }

    let mut grid = Grid::new(width, height);
    let mut player: Option<Position> = None;
    let mut malformed = Vec::new();

    for (row, line) in lines.iter().enumerate() {
        for col in 0..width {
            let pos = Position::new(row, col);

            let Some(&raw) = line.get(col) else {
                malformed.push(MalformedCell { row, col, reason: MalformedReason::ShortLine });
                continue;
            };

            let symbol = match raw {
                RAW_OPEN | EMPTY => EMPTY,
                WALL => WALL,
                ITEM => ITEM,
                RAW_START => {
                    if player.is_some() {
                        malformed.push(MalformedCell {
                            row,
                            col,
                            reason: MalformedReason::DuplicateStart,
                        });
                        continue;
                    }
                    player = Some(pos);
                    PLAYER
                }
                other => other,
            };

            grid.set(pos, symbol);
        }
    }

    for cell in &malformed {
        log::warn!("{}", cell);
    }

    let player = player.ok_or(ParseError::MissingStart)?;
    Ok(LoadedMap { grid, player, malformed })
}
