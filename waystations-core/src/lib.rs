//! Path-search engine for Waystations puzzles: lay every word along a
//! four-directional path between the anchors matching its first and last
//! letter, with each free cell crossed by at most two words.

pub mod anchors;
pub mod devlog;
pub mod error;
pub mod grid;
pub mod placement;
pub mod projection;
pub mod search;
pub mod tile;

pub use anchors::AnchorIndex;
pub use error::PuzzleError;
pub use grid::{Grid, Point, StringGrid};
pub use placement::{place_all, Placement, PlacementConfig, PlacementObserver, PlacementStatus, WordOutcome, WordPath};
pub use search::search;
pub use tile::{CrosswordGrid, TileData};
