use std::time::Duration;
use sysinfo::{CpuRefreshKind, RefreshKind, System};
use vtop_core::{Reading, Sensor};

/// Average utilisation across all cores, in percent.
#[derive(Debug)]
pub struct CpuSensor {
    sys:      System,
    interval: Duration,
    current:  Reading,
}

impl CpuSensor {
    pub fn new(interval: Duration) -> Self {
        // Usage is a delta between two refreshes; this first one is the baseline.
        let sys = System::new_with_specifics(
            RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing().with_cpu_usage()),
        );
        Self {
            sys,
            interval: interval.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL),
            current: Reading::Empty,
        }
    }
}

impl Sensor for CpuSensor {
    fn title(&self) -> &str {
        "CPU Usage"
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    fn poll(&mut self) {
        self.sys.refresh_cpu_usage();
        self.current = Reading::Percent(f64::from(self.sys.global_cpu_usage()));
    }

    fn current_value(&self) -> Reading {
        self.current.clone()
    }
}
