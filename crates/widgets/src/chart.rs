use crate::Widget;
use std::time::Duration;
use vtop_core::{Reading, Sensor, Viewport};
use vtop_renderer::{render_chart, ChartGeometry, Frame, SampleBuffer};

/// A braille area chart of one percentage sensor.
#[derive(Debug)]
pub struct ChartWidget {
    sensor:   Box<dyn Sensor>,
    buffer:   SampleBuffer,
    viewport: Viewport,
    geometry: ChartGeometry,
}

impl ChartWidget {
    /// `history_limit` is the minimum number of samples kept regardless of
    /// the chart's width.
    pub fn new(sensor: Box<dyn Sensor>, history_limit: usize) -> Self {
        Self {
            sensor,
            buffer: SampleBuffer::new(history_limit),
            viewport: Viewport::default(),
            geometry: ChartGeometry::default(),
        }
    }

    pub fn buffer(&self) -> &SampleBuffer {
        &self.buffer
    }

    pub fn geometry(&self) -> ChartGeometry {
        self.geometry
    }
}

impl Widget for ChartWidget {
    fn title(&self) -> &str {
        self.sensor.title()
    }

    fn poll_interval(&self) -> Duration {
        self.sensor.interval()
    }

    fn poll(&mut self) {
        self.sensor.poll();
        let reading = self.sensor.current_value();
        if !matches!(reading, Reading::Percent(_)) {
            tracing::debug!(sensor = self.sensor.title(), ?reading, "no percentage; recording 0");
        }
        self.buffer.append(reading.as_percent());
    }

    fn resize(&mut self, viewport: Viewport) {
        let geometry = ChartGeometry::from_viewport(viewport);
        self.buffer.retain_at_least(geometry.pixel_width);
        self.viewport = viewport;
        self.geometry = geometry;
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn draw(&self) -> Frame {
        render_chart(&self.buffer, self.geometry)
    }
}
