// Assembled per-iteration monitor update

use serde::{Deserialize, Serialize};

use super::{CpuData, ForegroundAppData, MemoryData, NetData};

/// One iteration's worth of device state. All four readings were taken
/// within the same iteration window; no stronger cross-source atomicity
/// is guaranteed (the foreground app may change between its discovery
/// and the memory read keyed to its pid).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorUpdate {
    pub timestamp_ms: u64,
    /// Iteration counter, strictly increasing per loop instance.
    pub seq: u64,
    pub app: ForegroundAppData,
    pub net: NetData,
    pub memory: MemoryData,
    pub cpu: CpuData,
}

/// Combine the four latest per-source snapshots, stamping the current
/// wall-clock time.
pub fn assemble(
    seq: u64,
    app: ForegroundAppData,
    net: NetData,
    memory: MemoryData,
    cpu: CpuData,
) -> MonitorUpdate {
    let timestamp_ms = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    assemble_at(timestamp_ms, seq, app, net, memory, cpu)
}

/// Pure assembly: same inputs always yield a structurally equal update.
pub fn assemble_at(
    timestamp_ms: u64,
    seq: u64,
    app: ForegroundAppData,
    net: NetData,
    memory: MemoryData,
    cpu: CpuData,
) -> MonitorUpdate {
    MonitorUpdate {
        timestamp_ms,
        seq,
        app,
        net,
        memory,
        cpu,
    }
}
