use anyhow::{Context, Result};
use itertools::Itertools;
use waystations_core::{AnchorIndex, WordPath};

/// Shortest words first; words of equal length keep their input order.
pub fn order_words(words: &[String]) -> Vec<String> {
    words.iter().cloned().sorted_by_key(|w| w.chars().count()).collect()
}

/// Resolves every word's anchors up front so configuration problems surface
/// before any search starts.
pub fn word_paths(anchors: &AnchorIndex, words: &[String]) -> Result<Vec<WordPath>> {
    words
        .iter()
        .map(|word| {
            let (start, end) = anchors.endpoints(word).with_context(|| format!("resolving anchors for \"{word}\""))?;
            Ok(WordPath { word: word.clone(), start, end })
        })
        .collect()
}
