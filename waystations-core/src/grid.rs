use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use crate::error::PuzzleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self { Self { x, y } }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x.saturating_add(dx), y: self.y.saturating_add(dy) }
    }

    /// Manhattan distance, a lower bound on the number of steps between two cells.
    pub fn dist(self, other: Point) -> usize {
        (self.x.abs_diff(other.x) as usize).saturating_add(self.y.abs_diff(other.y) as usize)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { write!(f, "({},{})", self.x, self.y) }
}

/// Fixed-size row-major 2-D container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    tiles: Vec<T>,
}

pub type StringGrid = Grid<char>;

impl<T: Clone> Grid<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self { width, height, tiles: vec![fill; width * height] }
    }

    /// Copy of this grid with one cell overwritten. The receiver is left untouched.
    pub fn replace(&self, p: Point, data: T) -> Result<Self, PuzzleError> {
        let idx = self.checked_index(p)?;
        Ok(self.replace_index(idx, data))
    }

    pub(crate) fn replace_index(&self, idx: usize, data: T) -> Self {
        let mut new = self.clone();
        new.tiles[idx] = data;
        new
    }
}

impl<T> Grid<T> {
    pub fn from_cells(width: usize, height: usize, tiles: Vec<T>) -> Result<Self, PuzzleError> {
        if tiles.len() != width * height {
            return Err(PuzzleError::ShapeMismatch { expected: width * height, actual: tiles.len() });
        }
        Ok(Self { width, height, tiles })
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn cells(&self) -> &[T] { &self.tiles }

    pub fn is_valid(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    pub(crate) fn index_of(&self, p: Point) -> Option<usize> {
        self.is_valid(p).then(|| p.y as usize * self.width + p.x as usize)
    }

    fn checked_index(&self, p: Point) -> Result<usize, PuzzleError> {
        self.index_of(p).ok_or(PuzzleError::OutOfBounds { point: p, width: self.width, height: self.height })
    }

    pub fn get_ref(&self, p: Point) -> Option<&T> { self.index_of(p).map(|i| &self.tiles[i]) }

    pub fn set(&mut self, p: Point, data: T) -> Result<(), PuzzleError> {
        let idx = self.checked_index(p)?;
        self.tiles[idx] = data;
        Ok(())
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid { width: self.width, height: self.height, tiles: self.tiles.iter().map(f).collect() }
    }

    /// All valid points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let (w, h) = (self.width as i32, self.height as i32);
        (0..h).flat_map(move |y| (0..w).map(move |x| Point::new(x, y)))
    }

    /// The up-to-four orthogonal neighbours of `p` that lie inside the grid.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        [p.offset(-1, 0), p.offset(1, 0), p.offset(0, -1), p.offset(0, 1)]
            .into_iter()
            .filter(move |&q| self.is_valid(q))
    }
}

impl<T: Clone> Grid<T> {
    pub fn get(&self, p: Point) -> Option<T> { self.get_ref(p).cloned() }
}

impl Display for StringGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, row) in self.tiles.chunks(self.width.max(1)).enumerate() {
            if i > 0 { writeln!(f)?; }
            for &ch in row { write!(f, "{ch}")?; }
        }
        Ok(())
    }
}
