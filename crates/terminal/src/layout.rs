use ratatui::layout::{Constraint, Layout, Rect};
use vtop_core::Viewport;

/// Screen regions, recomputed from the terminal size on every resize.
///
/// ```text
/// ┌ header ───────────────────────────┐
/// │ cpu chart (top half)              │
/// ├─────────────────┬─────────────────┤
/// │ memory chart    │ process table   │
/// └ footer ─────────┴─────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header:    Rect,
    pub cpu:       Rect,
    pub memory:    Rect,
    pub processes: Rect,
    pub footer:    Rect,
}

impl Regions {
    pub fn compute(area: Rect) -> Self {
        let [header, cpu, bottom, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Percentage(50),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);
        let [memory, processes] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Fill(1)]).areas(bottom);

        Self {
            header,
            cpu,
            memory,
            processes,
            footer,
        }
    }

    /// Bordered panels in dashboard widget order: CPU, memory, processes.
    pub fn panels(&self) -> [Rect; 3] {
        [self.cpu, self.memory, self.processes]
    }

    /// Drawable area inside each panel's border, in widget order.
    pub fn viewports(&self) -> [Viewport; 3] {
        self.panels().map(inner)
    }
}

/// Character area left inside a one-cell border.
fn inner(rect: Rect) -> Viewport {
    Viewport::new(i32::from(rect.width) - 2, i32::from(rect.height) - 2)
}
