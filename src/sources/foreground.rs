// Foreground process discovery via sysinfo.
//
// Without a display-server integration there is no true "focused window"
// notion, so the busiest user process (highest CPU since the last refresh)
// stands in for the foreground application.

use sysinfo::{ProcessesToUpdate, System};
use tracing::debug;

use super::ForegroundAppSource;
use crate::models::ForegroundAppData;

pub struct SysinfoForegroundSource {
    sys: System,
    data: ForegroundAppData,
}

impl Default for SysinfoForegroundSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoForegroundSource {
    pub fn new() -> Self {
        Self {
            sys: System::new(),
            data: ForegroundAppData::default(),
        }
    }
}

impl ForegroundAppSource for SysinfoForegroundSource {
    fn update(&mut self) {
        self.sys.refresh_processes(ProcessesToUpdate::All, true);
        let busiest = self
            .sys
            .processes()
            .values()
            .filter(|p| p.thread_kind().is_none())
            .max_by(|a, b| a.cpu_usage().total_cmp(&b.cpu_usage()));
        let Some(process) = busiest else {
            // Empty process table only happens when /proc is unreadable,
            // keep whatever we had.
            debug!(operation = "foreground_update", "no processes visible");
            return;
        };

        self.data = ForegroundAppData {
            pid: process.pid().as_u32(),
            name: process.name().to_string_lossy().into_owned(),
            exe: process
                .exe()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };
    }

    fn foreground_app(&self) -> ForegroundAppData {
        self.data.clone()
    }
}
