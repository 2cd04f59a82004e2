use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use time::macros::format_description;
use time::OffsetDateTime;

use crate::placement::{Placement, PlacementStatus, WordOutcome, WordPath};
use crate::projection::{flatten, flatten_word};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordView {
    pub word: String,
    pub grid: String,
}

/// Summary of one placement run, suitable for markdown or JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLog {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub words: Vec<WordPath>,
    pub outcomes: Vec<WordOutcome>,
    pub candidates: usize,
    pub flattened: Option<String>,
    pub views: Vec<WordView>,
}

impl SessionLog {
    pub fn from_placement(title: impl Into<String>, words: &[WordPath], placement: &Placement<'_>) -> Self {
        let (width, height) = placement.candidates.first().map_or((0, 0), |g| (g.width(), g.height()));
        let views = words
            .iter()
            .filter_map(|wp| {
                flatten_word(&placement.candidates, &wp.word).map(|g| WordView { word: wp.word.clone(), grid: g.to_string() })
            })
            .collect();
        Self {
            title: title.into(),
            width,
            height,
            words: words.to_vec(),
            outcomes: placement.outcomes.clone(),
            candidates: placement.candidates.len(),
            flattened: flatten(&placement.candidates).map(|g| g.to_string()),
            views,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> { serde_json::to_string_pretty(self) }
}

/// Never overwrites: reports from the same second get a numeric suffix.
fn create_unique(dir: &Path, stem: &str) -> std::io::Result<(PathBuf, File)> {
    let mut n = 1usize;
    loop {
        let name = if n == 1 { format!("{stem}.md") } else { format!("{stem}_{n}.md") };
        let path = dir.join(name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(f) => return Ok((path, f)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => n += 1,
            Err(e) => return Err(e),
        }
    }
}

pub fn write_session_markdown<P: AsRef<Path>>(dir: P, log: &SessionLog) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir.as_ref())?;
    let ts_fmt = format_description!("[year]-[month]-[day]_[hour][minute][second]");
    let now = OffsetDateTime::now_utc().format(&ts_fmt).unwrap_or_else(|_| "now".into());
    let (path, mut f) = create_unique(dir.as_ref(), &format!("session_{now}"))?;
    writeln!(f, "# {}", log.title)?;
    writeln!(f, "Grid: {}x{}", log.width, log.height)?;
    writeln!(f, "Candidates: {}", log.candidates)?;
    writeln!(f, "\n## Words")?;
    for (wp, outcome) in log.words.iter().zip(&log.outcomes) {
        let status = match outcome.status {
            PlacementStatus::Placed { candidates } => format!("placed ({candidates} grids)"),
            PlacementStatus::Failed => "FAILED".to_string(),
            PlacementStatus::NotAttempted => "not attempted".to_string(),
        };
        writeln!(f, "- `{}` {} -> {}: {}", wp.word, wp.start, wp.end, status)?;
    }
    if let Some(grid) = &log.flattened {
        writeln!(f, "\n## Flattened\n\n```\n{grid}\n```")?;
    }
    for view in &log.views {
        writeln!(f, "\n### Showing only \"{}\"\n\n```\n{}\n```", view.word, view.grid)?;
    }
    Ok(path)
}
