use anyhow::Result;
use chrono::Local;
use colored::*;
use std::{fs::{self, File}, io::Write, path::PathBuf};
use waystations_core::{projection::flatten, CrosswordGrid, PlacementObserver};

/// Numbered devlog files plus console echo of every placement step.
pub struct DevLogger {
    dir: Option<PathBuf>,
    color: bool,
    step: bool,
    max_logs: usize,
    counter: usize,
}

impl DevLogger {
    pub fn new(dir: impl Into<PathBuf>, color: bool, step: bool, max_logs: usize) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir: Some(dir), color, step, max_logs, counter: 0 })
    }

    /// Console only, nothing written to disk.
    pub fn console(color: bool, step: bool) -> Self {
        Self { dir: None, color, step, max_logs: 0, counter: 0 }
    }

    pub fn written(&self) -> usize { self.counter }

    pub fn log(&mut self, title: &str, details: &str) -> Result<()> {
        if self.max_logs != 0 && self.counter >= self.max_logs { return Ok(()); }
        self.counter += 1;

        if let Some(dir) = &self.dir {
            let path = dir.join(format!("devlog({}).txt", self.counter));
            let ts = Local::now().format("%Y-%m-%d %H:%M:%S");
            let mut f = File::create(&path)?;
            writeln!(f, "[{}] {}\n\n{}", ts, title, details)?;
        }

        if self.color {
            println!("{} {}\n{}", "➤".blue().bold(), title.bold(), details);
        } else {
            println!("➤ {}\n{}", title, details);
        }

        if self.step {
            print!("-- press Enter to continue --");
            use std::io::{self, Write as _};
            io::stdout().flush().ok();
            let mut s = String::new();
            io::stdin().read_line(&mut s).ok();
        }
        Ok(())
    }

    fn record(&mut self, title: &str, details: &str) {
        if let Err(e) = self.log(title, details) {
            log::warn!("devlog write failed: {e:#}");
        }
    }
}

fn snapshot(grids: &[CrosswordGrid<'_>]) -> String {
    flatten(grids).map(|g| g.to_string()).unwrap_or_default()
}

impl PlacementObserver for DevLogger {
    fn word_started(&mut self, word: &str, grids: usize) {
        self.record(&format!("Searching \"{word}\""), &format!("on {grids} grids"));
    }

    fn word_placed(&mut self, word: &str, candidates: &[CrosswordGrid<'_>]) {
        let title = format!("Placed \"{word}\" in {} grids", candidates.len());
        self.record(&title, &snapshot(candidates));
    }

    fn word_failed(&mut self, word: &str, survivors: &[CrosswordGrid<'_>]) {
        let title = if self.color {
            format!("{} \"{word}\"", "Could not fit".red().bold())
        } else {
            format!("Could not fit \"{word}\"")
        };
        let details = format!("keeping {} grids from before:\n{}", survivors.len(), snapshot(survivors));
        self.record(&title, &details);
    }
}
