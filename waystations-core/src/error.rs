use thiserror::Error;

use crate::grid::Point;

/// Problems with a puzzle's shape or configuration. All of these are detected
/// before any search starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("letter '{letter}' is anchored twice: at {first} and at {second}")]
    DuplicateAnchor { letter: char, first: Point, second: Point },

    #[error("word \"{word}\" needs an anchor for '{letter}', but the grid has none")]
    MissingAnchor { word: String, letter: char },

    #[error("word \"{word}\" is too short to span two anchors")]
    WordTooShort { word: String },

    #[error("point {point} is outside the {width}x{height} grid")]
    OutOfBounds { point: Point, width: usize, height: usize },

    #[error("expected {expected} cells for the grid, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("grid is empty")]
    EmptyGrid,
}
