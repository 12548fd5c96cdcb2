//! Serde types for the generated run manifests.
use serde::{Deserialize, Serialize};

/// Manifest filename written into each task directory.
pub const MANIFEST_FILE_NAME: &str = "runs.json";

/// One indexed run: its directory name and how many frame images it holds.
///
/// Runs only appear in a manifest when `frame_count` is positive; a run
/// with no matching frames is omitted entirely rather than recorded as
/// zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    pub id: String,
    pub frame_count: usize,
}
