use anyhow::{ensure, Context, Result};
use std::time::{Duration, Instant};
use waystations_core::{
    devlog::SessionLog, place_all, AnchorIndex, CrosswordGrid, PlacementConfig, PlacementObserver, PlacementStatus,
    WordPath,
};

use crate::utils::{order_words, word_paths};

#[derive(Clone, Copy, Debug)]
pub struct SolverConfig {
    /// Number of times the full placement is repeated, for timing.
    pub runs: usize,
    pub growth_warning: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self { Self { runs: 1, growth_warning: None } }
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunReport {
    pub session: SessionLog,
    pub timings: Vec<Duration>,
}

impl RunReport {
    pub fn failed_word(&self) -> Option<&str> {
        self.session
            .outcomes
            .iter()
            .find(|o| o.status == PlacementStatus::Failed)
            .map(|o| o.word.as_str())
    }

    pub fn is_complete(&self) -> bool {
        self.session.outcomes.iter().all(|o| matches!(o.status, PlacementStatus::Placed { .. }))
    }
}

pub struct Solver { config: SolverConfig }

impl Solver {
    pub fn new(config: SolverConfig) -> Self { Self { config } }

    /// Anchor lookup and word ordering; fails on any configuration error.
    pub fn prepare(&self, grid: &CrosswordGrid<'_>, words: &[String]) -> Result<Vec<WordPath>> {
        let anchors = AnchorIndex::build(grid)?;
        let ordered = order_words(words);
        let paths = word_paths(&anchors, &ordered)?;
        log::info!("loaded {} words against {} anchors", paths.len(), anchors.len());
        Ok(paths)
    }

    pub fn run(
        &mut self,
        grid: &CrosswordGrid<'static>,
        words: &[String],
        observer: &mut impl PlacementObserver,
    ) -> Result<RunReport> {
        ensure!(self.config.runs > 0, "at least one run is required");
        let paths = self.prepare(grid, words)?;
        let config = PlacementConfig { growth_warning: self.config.growth_warning };

        let mut timings = Vec::with_capacity(self.config.runs);
        let mut session = None;
        for run in 1..=self.config.runs {
            let started = Instant::now();
            let placement = place_all(grid.clone(), &paths, config, observer);
            let elapsed = started.elapsed();
            log::info!("run {run}/{}: {} candidate grids in {elapsed:?}", self.config.runs, placement.candidates.len());
            timings.push(elapsed);
            session = Some(SessionLog::from_placement("Waystations", &paths, &placement));
        }

        let session = session.context("no placement run completed")?;
        Ok(RunReport { session, timings })
    }
}
