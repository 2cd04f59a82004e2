use serde::{Deserialize, Serialize};

use crate::{grid::Point, search::search, tile::CrosswordGrid};

/// A word together with the anchors its path must join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPath {
    pub word: String,
    pub start: Point,
    pub end: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementStatus {
    /// The word fits into this many surviving grids.
    Placed { candidates: usize },
    /// No surviving grid admits a path for the word.
    Failed,
    /// An earlier word failed, so this one was never searched.
    NotAttempted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordOutcome {
    pub word: String,
    pub status: PlacementStatus,
}

/// Result of folding the word list over the candidate set.
#[derive(Debug, Clone, Serialize)]
pub struct Placement<'w> {
    /// The last non-empty candidate set.
    pub candidates: Vec<CrosswordGrid<'w>>,
    pub outcomes: Vec<WordOutcome>,
}

impl Placement<'_> {
    pub fn failed_word(&self) -> Option<&str> {
        self.outcomes.iter().find(|o| o.status == PlacementStatus::Failed).map(|o| o.word.as_str())
    }

    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(|o| matches!(o.status, PlacementStatus::Placed { .. }))
    }
}

/// Hooks for progress reporting while words are placed.
pub trait PlacementObserver {
    fn word_started(&mut self, _word: &str, _grids: usize) {}
    fn word_placed(&mut self, _word: &str, _candidates: &[CrosswordGrid<'_>]) {}
    fn word_failed(&mut self, _word: &str, _survivors: &[CrosswordGrid<'_>]) {}
}

impl PlacementObserver for () {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementConfig {
    /// Warn when a word's candidate set grows beyond this many grids.
    pub growth_warning: Option<usize>,
}

/// Lays each word, in the given order, across every grid that survived the
/// previous words. Stops at the first word that fits nowhere and keeps the
/// candidates from before it; there is no backtracking across words.
pub fn place_all<'w>(
    initial: CrosswordGrid<'w>,
    words: &'w [WordPath],
    config: PlacementConfig,
    observer: &mut impl PlacementObserver,
) -> Placement<'w> {
    let mut candidates = vec![initial];
    let mut outcomes = Vec::with_capacity(words.len());

    for (i, wp) in words.iter().enumerate() {
        let word: &'w str = &wp.word;
        log::info!("searching \"{word}\" on {} grids", candidates.len());
        observer.word_started(word, candidates.len());

        let next: Vec<CrosswordGrid<'w>> = candidates
            .iter()
            .flat_map(move |grid| search(grid, word, wp.start, wp.end))
            .collect();

        if next.is_empty() {
            log::warn!("could not produce any paths to fit \"{word}\"");
            observer.word_failed(word, &candidates);
            outcomes.push(WordOutcome { word: wp.word.clone(), status: PlacementStatus::Failed });
            outcomes.extend(words[i + 1..].iter().map(|rest| WordOutcome {
                word: rest.word.clone(),
                status: PlacementStatus::NotAttempted,
            }));
            break;
        }

        if let Some(limit) = config.growth_warning {
            if next.len() > limit {
                log::warn!("\"{word}\" left {} candidate grids (warning threshold {limit})", next.len());
            }
        }
        log::debug!("\"{word}\" fits {} grids", next.len());
        observer.word_placed(word, &next);
        outcomes.push(WordOutcome { word: wp.word.clone(), status: PlacementStatus::Placed { candidates: next.len() } });
        candidates = next;
    }

    Placement { candidates, outcomes }
}
