// Domain models for monitor updates

mod app;
mod cpu;
mod memory;
mod network;
mod update;

pub use app::ForegroundAppData;
pub use cpu::CpuData;
pub use memory::MemoryData;
pub use network::{InterfaceStat, NetData};
pub use update::{MonitorUpdate, assemble, assemble_at};
