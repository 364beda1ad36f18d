//! The dashboard loop: owns every widget, decides when each one polls and
//! when the screen redraws, and turns widget state into text frames.
//!
//! Nothing in here touches the terminal or real time directly.  The host
//! asks for [`Dashboard::next_deadline`], sleeps until then, calls
//! [`Dashboard::tick`] and paints whatever frames come back.

pub mod clock;
pub mod schedule;

pub use clock::{Clock, ManualClock, SystemClock};
pub use schedule::{Schedule, Task};

use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};
use vtop_core::Viewport;
use vtop_widgets::Widget;

/// Default delay between two redraws.
pub const DEFAULT_REDRAW_INTERVAL: Duration = Duration::from_millis(100);

/// One widget's rendered output, ready for the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelFrame {
    pub title: String,
    /// Marked-up text, one line per row of the panel.
    pub text: String,
}

pub struct Dashboard<C: Clock = SystemClock> {
    widgets:  Vec<Box<dyn Widget>>,
    schedule: Schedule,
    clock:    C,
}

impl<C: Clock> Dashboard<C> {
    /// Take ownership of `widgets` and start their timers.
    ///
    /// Every widget is polled once up front so the first frame has data.
    pub fn new(mut widgets: Vec<Box<dyn Widget>>, redraw_interval: Duration, clock: C) -> Self {
        let now = clock.now();
        let mut schedule = Schedule::new();
        schedule.add(Task::Redraw, redraw_interval, now);
        for (index, widget) in widgets.iter_mut().enumerate() {
            widget.poll();
            schedule.add(Task::Poll(index), widget.poll_interval(), now);
            debug!(
                widget = widget.title(),
                interval_ms = widget.poll_interval().as_millis() as u64,
                "widget scheduled"
            );
        }
        Self {
            widgets,
            schedule,
            clock,
        }
    }

    pub fn widgets(&self) -> &[Box<dyn Widget>] {
        &self.widgets
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Apply one resize notification: `viewports[i]` is the new region of
    /// widget `i`.
    ///
    /// All widgets are resized before this returns, so no frame ever mixes
    /// old and new dimensions.  Widgets without a viewport keep their size.
    pub fn resize(&mut self, viewports: &[Viewport]) {
        if viewports.len() != self.widgets.len() {
            warn!(
                widgets = self.widgets.len(),
                viewports = viewports.len(),
                "viewport count does not match widget count"
            );
        }
        for (widget, viewport) in self.widgets.iter_mut().zip(viewports) {
            widget.resize(*viewport);
        }
        debug!(?viewports, "dashboard resized");
    }

    /// When [`Dashboard::tick`] next has work to do.
    pub fn next_deadline(&self) -> Instant {
        self.schedule
            .next_deadline()
            .unwrap_or_else(|| self.clock.now() + DEFAULT_REDRAW_INTERVAL)
    }

    /// Run every task that is due.  Returns fresh frames when a redraw was
    /// among them.
    pub fn tick(&mut self) -> Option<Vec<PanelFrame>> {
        let now = self.clock.now();
        let mut redraw = false;
        for task in self.schedule.take_due(now) {
            match task {
                Task::Poll(index) => match self.widgets.get_mut(index) {
                    Some(widget) => {
                        trace!(widget = widget.title(), "poll");
                        widget.poll();
                    }
                    None => warn!(index, "poll scheduled for a missing widget"),
                },
                Task::Redraw => redraw = true,
            }
        }
        redraw.then(|| self.draw())
    }

    /// Render every widget from its current state.
    pub fn draw(&self) -> Vec<PanelFrame> {
        self.widgets
            .iter()
            .map(|widget| PanelFrame {
                title: widget.title().to_string(),
                text:  widget.draw().to_markup(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use vtop_core::{Column, Reading, Row, Sensor};
    use vtop_widgets::{ChartWidget, TableWidget};

    /// Emits 10, 20, 30, … and records how often it was polled.
    #[derive(Debug)]
    struct Ramp {
        polls:    Rc<RefCell<u32>>,
        interval: Duration,
    }

    impl Sensor for Ramp {
        fn title(&self) -> &str {
            "Ramp"
        }

        fn interval(&self) -> Duration {
            self.interval
        }

        fn poll(&mut self) {
            *self.polls.borrow_mut() += 1;
        }

        fn current_value(&self) -> Reading {
            Reading::Percent(f64::from(*self.polls.borrow() * 10))
        }
    }

    #[derive(Debug)]
    struct Procs {
        columns: Vec<Column>,
    }

    impl Sensor for Procs {
        fn title(&self) -> &str {
            "Procs"
        }

        fn columns(&self) -> &[Column] {
            &self.columns
        }

        fn interval(&self) -> Duration {
            Duration::from_millis(1_000)
        }

        fn poll(&mut self) {}

        fn current_value(&self) -> Reading {
            Reading::Rows(vec![Row::from([
                ("PID".to_string(), "1".to_string()),
                ("COMMAND".to_string(), "init".to_string()),
            ])])
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn dashboard(poll_ms: u64) -> (Dashboard<ManualClock>, ManualClock, Rc<RefCell<u32>>) {
        let clock = ManualClock::new();
        let polls = Rc::new(RefCell::new(0));
        let widgets: Vec<Box<dyn Widget>> = vec![
            Box::new(ChartWidget::new(
                Box::new(Ramp { polls: polls.clone(), interval: ms(poll_ms) }),
                64,
            )),
            Box::new(TableWidget::new(Box::new(Procs {
                columns: Column::in_order(&["PID", "COMMAND"]),
            }))),
        ];
        let mut dash = Dashboard::new(widgets, ms(100), clock.clone());
        dash.resize(&[Viewport::new(8, 2), Viewport::new(20, 3)]);
        (dash, clock, polls)
    }

    #[test]
    fn sensors_are_polled_once_at_startup() {
        let (dash, _, polls) = dashboard(250);
        assert_eq!(*polls.borrow(), 1);
        assert!(dash.draw()[0].text.contains(" 10%"));
    }

    #[test]
    fn redraw_and_poll_cadences_are_independent() {
        let (mut dash, clock, polls) = dashboard(250);

        clock.advance(ms(50));
        assert!(dash.tick().is_none());

        clock.advance(ms(50));
        let frames = dash.tick().expect("redraw due at 100ms");
        assert_eq!(frames.len(), 2);
        assert_eq!(*polls.borrow(), 1);

        clock.advance(ms(150));
        // 250ms: poll only, no redraw.
        assert!(dash.tick().is_none());
        assert_eq!(*polls.borrow(), 2);

        clock.advance(ms(50));
        let frames = dash.tick().expect("redraw due at 300ms");
        assert!(frames[0].text.contains(" 20%"));
    }

    #[test]
    fn poll_is_visible_to_the_redraw_at_the_same_instant() {
        let (mut dash, clock, _) = dashboard(100);
        clock.advance(ms(100));
        let frames = dash.tick().expect("redraw due");
        assert!(frames[0].text.contains(" 20%"));
    }

    #[test]
    fn drawing_twice_is_identical() {
        let (dash, _, _) = dashboard(250);
        assert_eq!(dash.draw(), dash.draw());
    }

    #[test]
    fn frames_follow_widget_order_and_titles() {
        let (dash, _, _) = dashboard(250);
        let frames = dash.draw();
        assert_eq!(frames[0].title, "Ramp");
        assert_eq!(frames[1].title, "Procs");
        assert_eq!(frames[1].text, "{bold} PID COMMAND        {/bold}\n 1   init           ");
    }

    #[test]
    fn resize_preserves_history() {
        let (mut dash, clock, _) = dashboard(100);
        for _ in 0..5 {
            clock.advance(ms(100));
            dash.tick();
        }
        dash.resize(&[Viewport::new(2, 1), Viewport::new(10, 2)]);
        dash.resize(&[Viewport::new(8, 2), Viewport::new(20, 3)]);
        assert_eq!(dash.widgets()[0].viewport(), Viewport::new(8, 2));
        assert_eq!(dash.widgets()[1].viewport(), Viewport::new(20, 3));
        let text = &dash.draw()[0].text;
        // 6 samples (10..=60) fit in 16 pixel columns.
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains(" 60%"));
    }

    #[test]
    fn next_deadline_tracks_the_schedule() {
        let (dash, clock, _) = dashboard(40);
        assert_eq!(dash.next_deadline(), clock.now() + ms(40));
    }
}
