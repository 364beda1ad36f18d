use crate::state::{Column, Reading};
use std::time::Duration;

/// A source of live metric values.
///
/// Sensors are polled on their own cadence by the dashboard loop. `poll` is
/// synchronous and must complete before returning; `current_value` is a cheap
/// read of whatever the last poll produced.
pub trait Sensor: std::fmt::Debug {
    /// Display name used as the panel title, e.g. `"CPU Usage"`.
    fn title(&self) -> &str;

    /// Ordered table columns. Chart-type sensors have none.
    fn columns(&self) -> &[Column] {
        &[]
    }

    /// Time between two polls.
    fn interval(&self) -> Duration;

    /// Refresh `current_value` from the underlying source.
    fn poll(&mut self);

    /// The most recent reading, [`Reading::Empty`] before the first poll.
    fn current_value(&self) -> Reading;
}
