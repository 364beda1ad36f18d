pub mod error;
pub mod event;
pub mod sensor;
pub mod state;

pub use error::{Result, VtopError};
pub use event::Message;
pub use sensor::Sensor;
pub use state::{Column, Reading, Row, Viewport};
