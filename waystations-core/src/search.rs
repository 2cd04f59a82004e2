use crate::{grid::Point, tile::CrosswordGrid};

/// Depth-first enumeration of every way to lay one word between two anchors.
///
/// The walk never claims the anchors themselves: it starts on the neighbours of
/// the start anchor with the word's second letter and completes when it steps
/// onto the destination with only the last letter left. Duplicate result grids
/// reached through different paths are kept.
pub struct PathSearch<'w> {
    word: &'w str,
    dest: Point,
    results: Vec<CrosswordGrid<'w>>,
    visited: usize,
}

impl<'w> PathSearch<'w> {
    pub fn new(word: &'w str, dest: Point) -> Self {
        Self { word, dest, results: Vec::new(), visited: 0 }
    }

    /// Tries to lay `rest[0]` on `at`, then continues into its neighbours.
    pub fn extend(&mut self, grid: &CrosswordGrid<'w>, at: Point, rest: &[char]) {
        self.visited += 1;
        let Some(steps_left) = rest.len().checked_sub(1) else { return };
        if at == self.dest && steps_left == 0 {
            self.results.push(grid.clone());
            return;
        }
        if at.dist(self.dest) > steps_left { return; }
        let Some(idx) = grid.index_of(at) else { return };
        let Some(tile) = grid.cells()[idx].try_claim(rest[0], self.word) else { return };
        let next = grid.replace_index(idx, tile);
        self.step_from(&next, at, rest);
    }

    /// Advances past `rest[0]`, already laid on `at`, into every neighbour.
    pub fn step_from(&mut self, grid: &CrosswordGrid<'w>, at: Point, rest: &[char]) {
        let Some((_, tail)) = rest.split_first() else { return };
        for p in grid.neighbors(at) {
            self.extend(grid, p, tail);
        }
    }

    pub fn visited(&self) -> usize { self.visited }
    pub fn into_results(self) -> Vec<CrosswordGrid<'w>> { self.results }
}

/// Every grid state reachable by laying `word` from `start` to `dest` on `grid`.
pub fn search<'w>(grid: &CrosswordGrid<'w>, word: &'w str, start: Point, dest: Point) -> Vec<CrosswordGrid<'w>> {
    let letters: Vec<char> = word.chars().collect();
    if !grid.is_valid(start) || !grid.is_valid(dest) || letters.len() < 2 || start.dist(dest) > letters.len() - 1 {
        log::trace!("\"{word}\" cannot span {start} -> {dest}");
        return Vec::new();
    }
    let mut walk = PathSearch::new(word, dest);
    walk.step_from(grid, start, &letters);
    log::trace!("\"{word}\": {} completions after {} steps", walk.results.len(), walk.visited());
    walk.into_results()
}
