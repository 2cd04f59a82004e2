use crate::{
    grid::{Grid, StringGrid},
    tile::{CrosswordGrid, TileData},
};

/// Collapses a candidate set into one printable grid: a cell keeps its
/// character only where every candidate agrees, otherwise it is blank.
pub fn flatten(candidates: &[CrosswordGrid<'_>]) -> Option<StringGrid> {
    let (first, rest) = candidates.split_first()?;
    let mut folded: Vec<char> = first.cells().iter().map(|t| t.display_char()).collect();
    for grid in rest {
        for (acc, tile) in folded.iter_mut().zip(grid.cells()) {
            if *acc != tile.display_char() { *acc = ' '; }
        }
    }
    Grid::from_cells(first.width(), first.height(), folded).ok()
}

/// The cells of `grid` that belong to `word`, plus all anchors.
pub fn word_view<'w>(grid: &CrosswordGrid<'w>, word: &str) -> CrosswordGrid<'w> {
    grid.map(|&tile| if tile.is_fixed() || tile.has_word(word) { tile } else { TileData::NoWords })
}

pub fn flatten_word(candidates: &[CrosswordGrid<'_>], word: &str) -> Option<StringGrid> {
    let views: Vec<_> = candidates.iter().map(|g| word_view(g, word)).collect();
    flatten(&views)
}

/// Every free cell is crossed by exactly two words.
pub fn is_solved(grid: &CrosswordGrid<'_>) -> bool {
    grid.cells().iter().all(|t| matches!(t, TileData::Fixed(_) | TileData::TwoWords(..)))
}
