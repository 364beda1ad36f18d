use std::time::{Duration, Instant};

/// Shortest interval a task may have; zero would spin.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Work the dashboard runs on a timer.
///
/// The derived ordering puts polls before redraws, which is the order tasks
/// due at the same instant run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Task {
    /// Poll the widget at this index.
    Poll(usize),
    /// Render every widget.
    Redraw,
}

#[derive(Debug, Clone)]
struct Entry {
    task:     Task,
    interval: Duration,
    next_due: Instant,
}

/// Independent repeating timers, one per task.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    entries: Vec<Entry>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `task` to first run one `interval` after `now`.
    pub fn add(&mut self, task: Task, interval: Duration, now: Instant) {
        let interval = interval.max(MIN_INTERVAL);
        self.entries.push(Entry {
            task,
            interval,
            next_due: now + interval,
        });
    }

    /// Earliest moment any task is due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|e| e.next_due).min()
    }

    pub fn interval_of(&self, task: Task) -> Option<Duration> {
        self.entries
            .iter()
            .find(|e| e.task == task)
            .map(|e| e.interval)
    }

    /// Remove and return every task due at `now`, ordered by due time (polls
    /// first on ties), and reschedule each one.
    ///
    /// A task runs at most once per call.  One that fell more than an
    /// interval behind resumes from `now` instead of replaying missed runs.
    pub fn take_due(&mut self, now: Instant) -> Vec<Task> {
        let mut due: Vec<(Instant, Task)> = Vec::new();
        for entry in self.entries.iter_mut().filter(|e| e.next_due <= now) {
            due.push((entry.next_due, entry.task));
            entry.next_due += entry.interval;
            if entry.next_due <= now {
                entry.next_due = now + entry.interval;
            }
        }
        due.sort();
        due.into_iter().map(|(_, task)| task).collect()
    }
}
