//! Manifest building for task run directories.
//!
//! A task directory holds one subdirectory per run; a run contributes a
//! manifest entry only if its `images` subdirectory has at least one frame.
//! Scan errors below the task directory are isolated per run so one bad run
//! cannot block the manifest for the rest.
use crate::schema::{RunRecord, MANIFEST_FILE_NAME};
use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Frames are named `env_NNNN.png` with a zero-padded four-digit index.
/// The match is anchored: trailing or leading junk disqualifies a file.
const FRAME_PATTERN: &str = r"^env_[0-9]{4}\.png$";

fn frame_pattern() -> Regex {
    Regex::new(FRAME_PATTERN).expect("regex for frame filenames")
}

/// Index every run under `task_dir`, creating the directory if missing.
///
/// An unreadable task directory yields an empty run list rather than an
/// error, so the caller still writes a manifest for it. Record order
/// follows directory listing order.
pub fn build_manifest(task_dir: &Path) -> Result<Vec<RunRecord>> {
    fs::create_dir_all(task_dir).with_context(|| format!("create {}", task_dir.display()))?;

    let pattern = frame_pattern();
    let mut runs = Vec::new();
    let Ok(entries) = fs::read_dir(task_dir) else {
        tracing::debug!("task dir {} unreadable, treating as empty", task_dir.display());
        return Ok(runs);
    };
    for entry in entries.filter_map(Result::ok) {
        let run_dir = entry.path();
        if !run_dir.is_dir() {
            continue;
        }
        let images_dir = run_dir.join("images");
        if !images_dir.is_dir() {
            continue;
        }
        let Some(id) = entry.file_name().to_str().map(str::to_string) else {
            tracing::warn!("skipping non-UTF-8 run name under {}", task_dir.display());
            continue;
        };
        match count_frames(&images_dir, &pattern) {
            Ok(0) => {
                tracing::debug!(run = %id, "no frames, excluded from manifest");
            }
            Ok(frame_count) => runs.push(RunRecord { id, frame_count }),
            Err(err) => {
                tracing::warn!("error processing {}: {:#}", images_dir.display(), err);
            }
        }
    }
    Ok(runs)
}

/// Count entries in `images_dir` whose filename is exactly a frame name.
fn count_frames(images_dir: &Path, pattern: &Regex) -> Result<usize> {
    let entries =
        fs::read_dir(images_dir).with_context(|| format!("read {}", images_dir.display()))?;
    let mut count = 0;
    for entry in entries {
        let entry = entry.with_context(|| format!("read {}", images_dir.display()))?;
        if let Some(name) = entry.file_name().to_str() {
            if pattern.is_match(name) {
                count += 1;
            }
        }
    }
    Ok(count)
}

/// Write `runs` as pretty-printed JSON to `runs.json` inside the task
/// directory, replacing any previous manifest. The file is written even
/// when `runs` is empty.
pub fn write_manifest(task_dir: &Path, runs: &[RunRecord]) -> Result<PathBuf> {
    let path = task_dir.join(MANIFEST_FILE_NAME);
    let json = serde_json::to_string_pretty(runs).context("serialize runs manifest")?;
    fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
