use serde::Serialize;

use crate::grid::Grid;

/// Occupancy of a single cell. Word text is borrowed from the caller's word list.
///
/// A cell only ever advances `NoWords -> OneWord -> TwoWords`; `Fixed` anchors
/// never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TileData<'w> {
    Fixed(char),
    NoWords,
    OneWord(char, &'w str),
    TwoWords(char, &'w str, &'w str),
}

pub type CrosswordGrid<'w> = Grid<TileData<'w>>;

impl<'w> TileData<'w> {
    /// State of this cell after `word` lays `letter` across it, or `None` if the
    /// cell cannot take it: wrong letter, already full, already used by `word`,
    /// or an anchor (anchors are only ever path endpoints).
    pub fn try_claim(self, letter: char, word: &'w str) -> Option<Self> {
        match self {
            TileData::NoWords => Some(TileData::OneWord(letter, word)),
            TileData::OneWord(c, w) if c == letter && w != word => Some(TileData::TwoWords(c, w, word)),
            TileData::OneWord(..) | TileData::TwoWords(..) | TileData::Fixed(_) => None,
        }
    }

    pub fn has_word(self, word: &str) -> bool {
        match self {
            TileData::OneWord(_, w) => w == word,
            TileData::TwoWords(_, a, b) => a == word || b == word,
            TileData::Fixed(_) | TileData::NoWords => false,
        }
    }

    /// Anchors print uppercase, laid letters lowercase, empty cells as a blank.
    pub fn display_char(self) -> char {
        match self {
            TileData::Fixed(c) => c.to_ascii_uppercase(),
            TileData::OneWord(c, _) | TileData::TwoWords(c, _, _) => c.to_ascii_lowercase(),
            TileData::NoWords => ' ',
        }
    }

    pub fn is_fixed(self) -> bool { matches!(self, TileData::Fixed(_)) }
}

impl CrosswordGrid<'_> {
    pub fn to_strgrid(&self) -> Grid<char> { self.map(|t| t.display_char()) }
}
