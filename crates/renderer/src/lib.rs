//! Layout and drawing engine for the dashboard.
//!
//! Everything in here is a pure function of its inputs: sample history and
//! viewport sizes go in, marked-up text frames come out.  Placing the frames
//! on screen is the host terminal's job.
//!
//! - [`SampleBuffer`]: rolling per-chart history
//! - [`BrailleCanvas`]: 2×4 sub-cell pixel grid
//! - [`render_chart`]: filled braille chart with a percentage overlay
//! - [`TableLayout`]: priority-driven column fitting and table rendering
//! - [`markup`]: typed styled text and its inline-marker serialization

pub mod buffer;
pub mod canvas;
pub mod chart;
pub mod markup;
pub mod overlay;
pub mod table;

pub use buffer::SampleBuffer;
pub use canvas::BrailleCanvas;
pub use chart::{percent_label, pixel_column, pixel_row, render_chart, ChartGeometry};
pub use markup::{Frame, Line, Span, Tag};
pub use overlay::{compose, Anchor};
pub use table::{padding_for, FittedColumn, TableLayout, MIN_FILL_WIDTH};
