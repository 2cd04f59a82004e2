use anyhow::{Context, Result};
use std::{fs, path::Path};
use waystations_core::{CrosswordGrid, Grid, PuzzleError, TileData};

/// Grid text: one row per line, a space for a free cell, any other character
/// is an anchor. Short rows are padded with free cells.
pub fn parse_grid(text: &str) -> Result<CrosswordGrid<'static>> {
    let lines: Vec<&str> = text.lines().collect();
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    if width == 0 { return Err(PuzzleError::EmptyGrid.into()); }

    let mut tiles = Vec::with_capacity(width * lines.len());
    for line in &lines {
        let row_start = tiles.len();
        tiles.extend(line.chars().map(|ch| match ch {
            ' ' => TileData::NoWords,
            _ => TileData::Fixed(ch.to_ascii_lowercase()),
        }));
        tiles.resize(row_start + width, TileData::NoWords);
    }
    Ok(Grid::from_cells(width, lines.len(), tiles)?)
}

/// One word per line, lowercased; blank lines are skipped.
pub fn parse_words(text: &str) -> Vec<String> {
    text.lines().map(str::trim).filter(|l| !l.is_empty()).map(str::to_ascii_lowercase).collect()
}

pub fn read_grid(path: &Path) -> Result<CrosswordGrid<'static>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading grid {}", path.display()))?;
    parse_grid(&text).with_context(|| format!("parsing grid {}", path.display()))
}

pub fn read_words(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading words {}", path.display()))?;
    Ok(parse_words(&text))
}
