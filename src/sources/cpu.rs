// CPU utilization via sysinfo

use std::time::Instant;
use sysinfo::System;

use super::{CpuSource, linux};
use crate::models::CpuData;

pub struct SysinfoCpuSource {
    sys: System,
    last_refresh: Option<Instant>,
    data: CpuData,
}

impl Default for SysinfoCpuSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoCpuSource {
    pub fn new() -> Self {
        let mut sys = System::new();
        // Baseline refresh: the first usage delta needs two samples.
        sys.refresh_cpu_all();
        let model = linux::read_cpu_model()
            .or_else(|| {
                sys.cpus()
                    .first()
                    .map(|c| c.name().to_string())
                    .filter(|s| !s.is_empty() && s != "cpu0")
            })
            .unwrap_or_else(|| "Unknown".into());
        let data = CpuData {
            model,
            physical_cores: System::physical_core_count().unwrap_or(0) as u32,
            logical_cores: sys.cpus().len() as u32,
            usage_percent: 0.0,
        };
        Self {
            sys,
            last_refresh: Some(Instant::now()),
            data,
        }
    }
}

impl CpuSource for SysinfoCpuSource {
    fn update(&mut self) {
        let now = Instant::now();
        let due = match self.last_refresh {
            Some(prev) => now.duration_since(prev) >= sysinfo::MINIMUM_CPU_UPDATE_INTERVAL,
            None => true,
        };
        if !due {
            // Too soon for a meaningful delta, keep the previous reading.
            return;
        }
        self.sys.refresh_cpu_all();
        self.last_refresh = Some(now);
        self.data = CpuData {
            usage_percent: (self.sys.global_cpu_usage() as f64).clamp(0.0, 100.0),
            logical_cores: self.sys.cpus().len() as u32,
            ..self.data.clone()
        };
    }

    fn cpu_data(&self) -> CpuData {
        self.data.clone()
    }
}
