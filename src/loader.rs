//! Goal loading: scan a directory for YAML goal files and decode them.
//!
//! Every `.yaml`/`.yml` file below the root becomes one [`Goal`], keyed by its
//! path. A file that cannot be read or decoded is skipped and reported in
//! [`LoadOutcome::failures`], as is an unreadable subdirectory or a dangling
//! link. Only a root directory that cannot be walked aborts the load. Files
//! are decoded in parallel but results keep path order.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Deserialize;
use walkdir::WalkDir;

use crate::done::Done;
use crate::error::{LoadError, LoadResult, ParseError, ParseResult};
use crate::goal::{Goal, Tactic};
use crate::interval::Interval;

/// File extensions recognized as goal files.
pub const GOAL_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

// ── YAML record shape ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct GoalRecord {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    strategy: Option<String>,
    #[serde(default)]
    tactics: Option<Vec<TacticRecord>>,
}

#[derive(Debug, Deserialize)]
struct TacticRecord {
    #[serde(rename = "do")]
    action: String,
    #[serde(default)]
    done: Option<String>,
    #[serde(default)]
    interval: Option<String>,
}

impl TacticRecord {
    /// Missing `done` means never done; missing `interval` means once.
    fn into_tactic(self, index: usize) -> ParseResult<Tactic> {
        let description = self.action.trim();
        if description.is_empty() {
            return Err(ParseError::EmptyTactic { index });
        }
        let done = match self.done.as_deref() {
            Some(token) => Done::parse(token)?,
            None => Done::Never,
        };
        let interval = match self.interval.as_deref() {
            Some(token) => Interval::parse(token)?,
            None => Interval::Once,
        };
        Ok(Tactic::new(description, done, interval))
    }
}

/// Decode one goal document. `path` becomes the goal's identity.
pub fn parse_goal(path: &str, yaml: &str) -> ParseResult<Goal> {
    let record: GoalRecord = serde_yaml::from_str(yaml).map_err(|e| ParseError::Yaml {
        message: e.to_string(),
    })?;
    let tactics = record
        .tactics
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, t)| t.into_tactic(i + 1))
        .collect::<ParseResult<Vec<_>>>()?;
    Ok(Goal::new(
        path,
        record.description.unwrap_or_default(),
        record.strategy.unwrap_or_default(),
        tactics,
    ))
}

// ── Directory loading ───────────────────────────────────────────────────

/// Result of loading a goals directory.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Goals that loaded, in path order.
    pub goals: Vec<Goal>,
    /// Files and subdirectories that could not be loaded, in path order.
    pub failures: Vec<LoadError>,
}

impl LoadOutcome {
    /// True when every goal file loaded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Whether `path` has a goal file extension.
pub fn is_goal_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| GOAL_EXTENSIONS.contains(&ext))
}

/// Load every goal file below `dir`.
pub fn load_goals(dir: &Path) -> LoadResult<LoadOutcome> {
    tracing::debug!(dir = %dir.display(), "scanning goals directory");
    let (files, walk_failures) = discover(dir)?;

    let results: Vec<LoadResult<Goal>> = files.par_iter().map(|path| load_file(path)).collect();

    let mut outcome = LoadOutcome {
        failures: walk_failures,
        ..LoadOutcome::default()
    };
    for result in results {
        match result {
            Ok(goal) => outcome.goals.push(goal),
            Err(e) => outcome.failures.push(e),
        }
    }
    outcome.failures.sort_by(|a, b| a.path().cmp(b.path()));
    for failure in &outcome.failures {
        tracing::warn!("skipping goal file: {failure}");
    }
    tracing::info!(
        loaded = outcome.goals.len(),
        failed = outcome.failures.len(),
        "loaded goals from {}",
        dir.display()
    );
    Ok(outcome)
}

/// Collect goal file paths below `dir`, sorted, plus the entries below the
/// root that could not be walked. Failing to walk the root itself is fatal.
fn discover(dir: &Path) -> LoadResult<(Vec<PathBuf>, Vec<LoadError>)> {
    let mut files = Vec::new();
    let mut failures = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(dir).display().to_string();
                if e.depth() == 0 {
                    return Err(LoadError::Scan { path, source: e });
                }
                failures.push(LoadError::Walk { path, source: e });
                continue;
            }
        };
        if entry.file_type().is_dir() || !is_goal_file(entry.path()) {
            continue;
        }
        files.push(entry.into_path());
    }
    files.sort();
    Ok((files, failures))
}

fn load_file(path: &Path) -> LoadResult<Goal> {
    let name = path.display().to_string();
    let yaml = std::fs::read_to_string(path).map_err(|e| LoadError::Read {
        path: name.clone(),
        source: e,
    })?;
    let goal = parse_goal(&name, &yaml).map_err(|e| LoadError::Parse {
        path: name.clone(),
        source: e,
    })?;
    tracing::debug!(path = %name, tactics = goal.tactics().len(), "loaded goal");
    Ok(goal)
}
