// Sampler sources. Each source owns its latest snapshot, refreshes it on
// update() and hands out clones on read. An update() that fails internally
// logs and keeps the previous snapshot; getters never fail and never block.

mod cpu;
mod foreground;
mod linux;
mod memory;
mod network;

pub use cpu::SysinfoCpuSource;
pub use foreground::SysinfoForegroundSource;
pub use memory::SysinfoMemorySource;
pub use network::SysinfoNetSource;

use crate::models::{CpuData, ForegroundAppData, MemoryData, NetData};

pub trait CpuSource: Send {
    fn update(&mut self);
    fn cpu_data(&self) -> CpuData;
}

pub trait NetSource: Send {
    fn update(&mut self);
    fn net_data(&self) -> NetData;
}

pub trait MemorySource: Send {
    /// Refresh the reading for the given pid (the foreground pid
    /// discovered in the current iteration).
    fn update(&mut self, pid: u32);
    fn memory_data(&self) -> MemoryData;
}

pub trait ForegroundAppSource: Send {
    fn update(&mut self);
    fn foreground_app(&self) -> ForegroundAppData;
}

/// The four readers the monitor loop drives, in one bundle.
pub struct Sources {
    pub net: Box<dyn NetSource>,
    pub cpu: Box<dyn CpuSource>,
    pub foreground: Box<dyn ForegroundAppSource>,
    pub memory: Box<dyn MemorySource>,
}

impl Sources {
    /// Sysinfo-backed sources for the local machine.
    pub fn local() -> Self {
        Self {
            net: Box::new(SysinfoNetSource::new()),
            cpu: Box::new(SysinfoCpuSource::new()),
            foreground: Box::new(SysinfoForegroundSource::new()),
            memory: Box::new(SysinfoMemorySource::new()),
        }
    }
}
