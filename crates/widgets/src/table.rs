use crate::Widget;
use std::time::Duration;
use vtop_core::{Column, Row, Sensor, Viewport};
use vtop_renderer::{Frame, TableLayout};

/// A column-fitted table of one row-producing sensor.
#[derive(Debug)]
pub struct TableWidget {
    sensor:   Box<dyn Sensor>,
    columns:  Vec<Column>,
    rows:     Vec<Row>,
    viewport: Viewport,
    layout:   TableLayout,
}

impl TableWidget {
    pub fn new(sensor: Box<dyn Sensor>) -> Self {
        let columns = sensor.columns().to_vec();
        let layout = TableLayout::fit(&columns, 0);
        Self {
            sensor,
            columns,
            rows: Vec::new(),
            viewport: Viewport::default(),
            layout,
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }
}

impl Widget for TableWidget {
    fn title(&self) -> &str {
        self.sensor.title()
    }

    fn poll_interval(&self) -> Duration {
        self.sensor.interval()
    }

    fn poll(&mut self) {
        self.sensor.poll();
        self.rows = self.sensor.current_value().into_rows();
    }

    fn resize(&mut self, viewport: Viewport) {
        let layout = TableLayout::fit(&self.columns, i64::from(viewport.width));
        self.viewport = viewport;
        self.layout = layout;
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Header plus as many rows as fit the viewport height.
    fn draw(&self) -> Frame {
        let height = self.viewport.height.max(0) as usize;
        let shown = height.saturating_sub(1).min(self.rows.len());
        let mut frame = self.layout.render(&self.rows[..shown]);
        frame.lines.truncate(height);
        frame
    }
}
