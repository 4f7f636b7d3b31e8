// Shared test helpers: scripted in-memory sources and callback sinks

#![allow(dead_code)]

use procwatch::models::*;
use procwatch::sources::*;
use std::sync::{Arc, Mutex};

/// CPU source whose usage equals the number of update() calls, so a test
/// can tell which iteration a delivered update came from.
#[derive(Default)]
pub struct CountingCpuSource {
    updates: u64,
}

impl CpuSource for CountingCpuSource {
    fn update(&mut self) {
        self.updates += 1;
    }

    fn cpu_data(&self) -> CpuData {
        CpuData {
            model: "mock".into(),
            physical_cores: 1,
            logical_cores: 1,
            usage_percent: self.updates as f64,
        }
    }
}

/// Net source that succeeds for the first `fail_from - 1` updates and then
/// fails internally, keeping its previous snapshot.
pub struct FlakyNetSource {
    updates: u64,
    fail_from: u64,
    data: NetData,
}

impl FlakyNetSource {
    pub fn new(fail_from: u64) -> Self {
        Self {
            updates: 0,
            fail_from,
            data: NetData::default(),
        }
    }
}

impl NetSource for FlakyNetSource {
    fn update(&mut self) {
        self.updates += 1;
        if self.updates >= self.fail_from {
            // Simulated read failure: previous snapshot stays in place.
            return;
        }
        self.data = NetData {
            interfaces: vec![InterfaceStat {
                name: "mock0".into(),
                bytes_sent: self.updates,
                bytes_recv: self.updates,
                packets_sent: self.updates,
                packets_recv: self.updates,
                received_bytes_per_sec: 0.0,
                transmitted_bytes_per_sec: 0.0,
            }],
        };
    }

    fn net_data(&self) -> NetData {
        self.data.clone()
    }
}

/// Foreground source discovering a new pid every iteration.
pub struct ScriptedForegroundSource {
    pid: u32,
}

impl ScriptedForegroundSource {
    pub fn new(first_pid: u32) -> Self {
        Self { pid: first_pid - 1 }
    }
}

impl ForegroundAppSource for ScriptedForegroundSource {
    fn update(&mut self) {
        self.pid += 1;
    }

    fn foreground_app(&self) -> ForegroundAppData {
        ForegroundAppData {
            pid: self.pid,
            name: format!("app-{}", self.pid),
            exe: String::new(),
        }
    }
}

/// Memory source recording every pid it was asked to read.
pub struct RecordingMemorySource {
    pub pids: Arc<Mutex<Vec<u32>>>,
    data: MemoryData,
}

impl RecordingMemorySource {
    pub fn new() -> (Self, Arc<Mutex<Vec<u32>>>) {
        let pids = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                pids: pids.clone(),
                data: MemoryData::default(),
            },
            pids,
        )
    }
}

impl MemorySource for RecordingMemorySource {
    fn update(&mut self, pid: u32) {
        self.pids.lock().unwrap().push(pid);
        self.data = MemoryData {
            pid,
            resident_bytes: pid as u64 * 1024,
            virtual_bytes: pid as u64 * 4096,
            system_total: 1024 * 1024,
            system_available: 512 * 1024,
            system_usage_percent: 50.0,
        };
    }

    fn memory_data(&self) -> MemoryData {
        self.data.clone()
    }
}

/// Full mock bundle: counting cpu, well-behaved net, scripted pids starting
/// at 100, recording memory. Returns the pid log alongside.
pub fn mock_sources() -> (Sources, Arc<Mutex<Vec<u32>>>) {
    let (memory, pids) = RecordingMemorySource::new();
    (
        Sources {
            net: Box::new(FlakyNetSource::new(u64::MAX)),
            cpu: Box::new(CountingCpuSource::default()),
            foreground: Box::new(ScriptedForegroundSource::new(100)),
            memory: Box::new(memory),
        },
        pids,
    )
}

/// Callback that appends every delivered update to a shared Vec.
pub fn collecting_callback() -> (impl FnMut(MonitorUpdate) + Send + 'static, Arc<Mutex<Vec<MonitorUpdate>>>) {
    let sink: Arc<Mutex<Vec<MonitorUpdate>>> = Arc::new(Mutex::new(Vec::new()));
    let writer = sink.clone();
    (
        move |update| writer.lock().unwrap().push(update),
        sink,
    )
}
