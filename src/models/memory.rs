// Memory snapshot: per-process usage of the foreground pid plus system totals

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryData {
    /// Pid this reading was taken for (0 before the first successful read).
    pub pid: u32,
    pub resident_bytes: u64,
    pub virtual_bytes: u64,
    pub system_total: u64,
    pub system_available: u64,
    pub system_usage_percent: f64,
}
