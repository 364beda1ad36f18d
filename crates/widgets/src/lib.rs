pub mod chart;
pub mod table;

pub use chart::ChartWidget;
pub use table::TableWidget;

use std::time::Duration;
use vtop_core::Viewport;
use vtop_renderer::Frame;

/// A dashboard panel: one sensor plus whatever state it needs to draw.
///
/// Widgets are created once at startup and only resized afterwards.  The
/// dashboard is their sole owner, so no method needs to be re-entrant.
pub trait Widget: std::fmt::Debug {
    /// Panel title, taken from the sensor.
    fn title(&self) -> &str;

    /// Time between two [`Widget::poll`] calls.
    fn poll_interval(&self) -> Duration;

    /// Fetch a fresh reading from the sensor and record it.
    fn poll(&mut self);

    /// Recompute dimensions for a new character viewport.  Recorded data is
    /// kept.
    fn resize(&mut self, viewport: Viewport);

    fn viewport(&self) -> Viewport;

    /// Render the current state.  Pure: two calls without a poll or resize in
    /// between return identical frames.
    fn draw(&self) -> Frame;
}
