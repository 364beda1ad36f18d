use crate::percent_of;
use std::time::Duration;
use sysinfo::{MemoryRefreshKind, RefreshKind, System};
use vtop_core::{Reading, Sensor};

/// RAM in use, as a percentage of total RAM.
#[derive(Debug)]
pub struct MemorySensor {
    sys:      System,
    interval: Duration,
    current:  Reading,
}

impl MemorySensor {
    pub fn new(interval: Duration) -> Self {
        Self {
            sys: System::new_with_specifics(
                RefreshKind::nothing().with_memory(MemoryRefreshKind::nothing().with_ram()),
            ),
            interval,
            current: Reading::Empty,
        }
    }
}

impl Sensor for MemorySensor {
    fn title(&self) -> &str {
        "Memory"
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    fn poll(&mut self) {
        self.sys.refresh_memory_specifics(MemoryRefreshKind::nothing().with_ram());
        let total = self.sys.total_memory();
        if total == 0 {
            tracing::debug!("total memory reported as zero");
            self.current = Reading::Empty;
            return;
        }
        self.current = Reading::Percent(percent_of(self.sys.used_memory(), total));
    }

    fn current_value(&self) -> Reading {
        self.current.clone()
    }
}
