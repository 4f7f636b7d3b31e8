// Memory usage of the foreground process plus system totals, via sysinfo

use sysinfo::{Pid, ProcessesToUpdate, System};
use tracing::debug;

use super::MemorySource;
use crate::models::MemoryData;

pub struct SysinfoMemorySource {
    sys: System,
    data: MemoryData,
}

impl Default for SysinfoMemorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoMemorySource {
    pub fn new() -> Self {
        Self {
            sys: System::new(),
            data: MemoryData::default(),
        }
    }
}

impl MemorySource for SysinfoMemorySource {
    fn update(&mut self, pid: u32) {
        self.sys.refresh_memory();
        let total = self.sys.total_memory();
        let available = self.sys.available_memory();
        let used = total.saturating_sub(available);
        let system_usage_percent = if total > 0 {
            (used as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        let target = Pid::from_u32(pid);
        self.sys
            .refresh_processes(ProcessesToUpdate::Some(&[target]), true);
        let Some(process) = self.sys.process(target) else {
            // Process gone between discovery and here, keep the previous
            // per-process reading.
            debug!(pid, operation = "memory_update", "pid not found");
            return;
        };

        self.data = MemoryData {
            pid,
            resident_bytes: process.memory(),
            virtual_bytes: process.virtual_memory(),
            system_total: total,
            system_available: available,
            system_usage_percent,
        };
    }

    fn memory_data(&self) -> MemoryData {
        self.data.clone()
    }
}
