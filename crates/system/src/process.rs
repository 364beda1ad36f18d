use crate::percent_of;
use std::collections::HashMap;
use std::time::Duration;
use sysinfo::{MemoryRefreshKind, ProcessRefreshKind, ProcessesToUpdate, System};
use vtop_core::{Column, Reading, Row, Sensor};

pub const KEY_COUNT: &str = "count";
pub const KEY_CPU: &str = "cpu";
pub const KEY_MEMORY: &str = "memory";
pub const KEY_COMMAND: &str = "command";

/// Running programs grouped by command name, busiest first.
#[derive(Debug)]
pub struct ProcessSensor {
    sys:      System,
    interval: Duration,
    columns:  Vec<Column>,
    current:  Reading,
}

/// Totals for every process sharing one command name.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CommandUsage {
    pub count:        usize,
    pub cpu_percent:  f64,
    pub memory_bytes: u64,
}

impl ProcessSensor {
    pub fn new(interval: Duration) -> Self {
        Self {
            sys: System::new(),
            interval,
            // `Command` is declared last so it absorbs spare width; `Count` is
            // the first to go on narrow terminals, then `Memory %`.
            columns: vec![
                Column::new("Count", KEY_COUNT, 0),
                Column::new("CPU %", KEY_CPU, 2),
                Column::new("Memory %", KEY_MEMORY, 1),
                Column::new("Command", KEY_COMMAND, 3),
            ],
            current: Reading::Empty,
        }
    }
}

impl Sensor for ProcessSensor {
    fn title(&self) -> &str {
        "Process List"
    }

    fn columns(&self) -> &[Column] {
        &self.columns
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    fn poll(&mut self) {
        self.sys.refresh_memory_specifics(MemoryRefreshKind::nothing().with_ram());
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_cpu().with_memory(),
        );

        let processes = self.sys.processes().values().map(|p| {
            (
                p.name().to_string_lossy().into_owned(),
                f64::from(p.cpu_usage()),
                p.memory(),
            )
        });
        let rows = summarize(processes, self.sys.total_memory());
        tracing::trace!(commands = rows.len(), "process list refreshed");
        self.current = Reading::Rows(rows);
    }

    fn current_value(&self) -> Reading {
        self.current.clone()
    }
}

/// Group `(name, cpu %, memory bytes)` samples by name and format them as
/// table rows, highest CPU first (ties broken by name).
pub fn summarize<I>(processes: I, total_memory: u64) -> Vec<Row>
where
    I: IntoIterator<Item = (String, f64, u64)>,
{
    let mut groups: HashMap<String, CommandUsage> = HashMap::new();
    for (name, cpu, memory) in processes {
        let usage = groups.entry(name).or_default();
        usage.count += 1;
        usage.cpu_percent += cpu;
        usage.memory_bytes += memory;
    }

    let mut groups: Vec<(String, CommandUsage)> = groups.into_iter().collect();
    groups.sort_by(|(a_name, a), (b_name, b)| {
        b.cpu_percent
            .total_cmp(&a.cpu_percent)
            .then_with(|| a_name.cmp(b_name))
    });

    groups
        .into_iter()
        .map(|(name, usage)| {
            Row::from([
                (KEY_COUNT.to_string(), usage.count.to_string()),
                (KEY_CPU.to_string(), format!("{:.1}", usage.cpu_percent)),
                (
                    KEY_MEMORY.to_string(),
                    format!("{:.1}", percent_of(usage.memory_bytes, total_memory)),
                ),
                (KEY_COMMAND.to_string(), name),
            ])
        })
        .collect()
}
