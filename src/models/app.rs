// Foreground application identity

use serde::{Deserialize, Serialize};

/// Identifies the currently foreground process. The pid scopes the
/// per-process memory read of the same iteration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForegroundAppData {
    pub pid: u32,
    pub name: String,
    pub exe: String,
}
