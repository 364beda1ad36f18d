//! Live host sensors backed by `sysinfo`.
//!
//! Every sensor owns its own [`sysinfo::System`] and refreshes only the parts
//! it reads, so polling one never slows another down.

pub mod cpu;
pub mod memory;
pub mod process;

pub use cpu::CpuSensor;
pub use memory::MemorySensor;
pub use process::ProcessSensor;

/// Name of this machine, for the dashboard header.
pub fn hostname() -> String {
    sysinfo::System::host_name().unwrap_or_else(|| "localhost".to_string())
}

/// `part` as a percentage of `whole`, `0.0` when `whole` is zero.
pub(crate) fn percent_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
