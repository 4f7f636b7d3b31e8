// CPU utilization snapshot

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuData {
    pub model: String,
    pub physical_cores: u32,
    pub logical_cores: u32,
    pub usage_percent: f64,
}
