use std::collections::HashMap;

use crate::{error::PuzzleError, grid::Point, tile::{CrosswordGrid, TileData}};

/// Maps every anchor letter to the single cell it occupies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorIndex {
    points: HashMap<char, Point>,
}

impl AnchorIndex {
    /// Scans the grid in row-major order. A letter anchored twice is rejected,
    /// since word endpoints would be ambiguous.
    pub fn build(grid: &CrosswordGrid<'_>) -> Result<Self, PuzzleError> {
        let mut points = HashMap::new();
        for p in grid.points() {
            let Some(TileData::Fixed(c)) = grid.get(p) else { continue };
            let letter = c.to_ascii_lowercase();
            if let Some(&first) = points.get(&letter) {
                return Err(PuzzleError::DuplicateAnchor { letter, first, second: p });
            }
            points.insert(letter, p);
        }
        log::debug!("indexed {} anchors", points.len());
        Ok(Self { points })
    }

    pub fn get(&self, letter: char) -> Option<Point> { self.points.get(&letter.to_ascii_lowercase()).copied() }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Start and end anchors for `word`, looked up by its first and last letter.
    pub fn endpoints(&self, word: &str) -> Result<(Point, Point), PuzzleError> {
        let mut chars = word.chars();
        let (Some(first), Some(last)) = (chars.next(), chars.next_back()) else {
            return Err(PuzzleError::WordTooShort { word: word.to_string() });
        };
        let lookup = |letter: char| {
            self.get(letter).ok_or_else(|| PuzzleError::MissingAnchor { word: word.to_string(), letter })
        };
        Ok((lookup(first)?, lookup(last)?))
    }
}
