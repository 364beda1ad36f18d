//! Terminal host for the vtop dashboard.
//!
//! Owns the terminal and wires the background sources into one loop:
//! - dashboard deadlines (sensor polls and redraws)
//! - crossterm input and resize events
//! - config file watcher (live theme reload)

pub mod input;
pub mod layout;
pub mod screen;
pub mod style;

use chrono::Local;
use crossterm::event::EventStream;
use futures::StreamExt;
use layout::Regions;
use ratatui::DefaultTerminal;
use screen::View;
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, error, info, warn};
use vtop_config::{ConfigWatcher, VtopConfig};
use vtop_core::{Message, Result, VtopError};
use vtop_dashboard::{Dashboard, PanelFrame, SystemClock};
use vtop_system::{CpuSensor, MemorySensor, ProcessSensor};
use vtop_theme::Theme;
use vtop_widgets::{ChartWidget, TableWidget, Widget};

/// Startup options collected by the binary.
#[derive(Debug, Clone)]
pub struct Options {
    pub config_path: PathBuf,
    /// Overrides the theme named in the config file.
    pub theme: Option<String>,
}

/// Run the dashboard until the user quits.
pub fn run(options: Options) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let app = App::new(options)?;
        app.run().await
    })
}

/// What woke the event loop.
enum Wake {
    Deadline,
    Message(Message),
    Ignored,
}

struct App {
    config_path:    PathBuf,
    theme_override: Option<String>,
    theme:          Theme,
    hostname:       String,
    dashboard:      Dashboard<SystemClock>,
    frames:         Vec<PanelFrame>,
}

impl App {
    fn new(options: Options) -> Result<Self> {
        let config = load_config(&options.config_path);

        // A theme asked for on the command line must exist; one from the
        // config file falls back to the default.
        let theme = match &options.theme {
            Some(name) => Theme::load(name, vtop_config::themes_dir())?,
            None => load_theme(&config.theme),
        };
        info!(theme = %theme.name, "theme loaded");

        let dashboard = Dashboard::new(build_widgets(&config), config.redraw_interval(), SystemClock);
        let frames = dashboard.draw();

        Ok(Self {
            config_path: options.config_path,
            theme_override: options.theme,
            theme,
            hostname: vtop_system::hostname(),
            dashboard,
            frames,
        })
    }

    async fn run(mut self) -> Result<()> {
        let mut terminal =
            ratatui::try_init().map_err(|e| VtopError::Terminal(format!("cannot start: {e}")))?;
        let result = self.event_loop(&mut terminal).await;
        ratatui::restore();
        if let Err(e) = &result {
            error!("dashboard stopped: {e}");
        }
        result
    }

    async fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let size = terminal.size()?;
        self.resize(size.width, size.height);
        self.paint(terminal)?;

        let mut events = EventStream::new();
        let (_watcher, mut config_changes) = ConfigWatcher::spawn(&self.config_path);

        loop {
            let deadline = tokio::time::Instant::from_std(self.dashboard.next_deadline());
            let wake = tokio::select! {
                _ = tokio::time::sleep_until(deadline) => Wake::Deadline,
                Some(()) = config_changes.recv() => Wake::Message(Message::ConfigReloaded),
                event = events.next() => match event {
                    Some(Ok(event)) => input::translate(&event).map_or(Wake::Ignored, Wake::Message),
                    Some(Err(e)) => return Err(VtopError::Terminal(format!("input error: {e}"))),
                    None => Wake::Message(Message::Quit),
                },
            };

            match wake {
                Wake::Deadline => {
                    if let Some(frames) = self.dashboard.tick() {
                        self.frames = frames;
                        self.paint(terminal)?;
                    }
                }
                Wake::Message(Message::Resize { width, height }) => {
                    self.resize(width, height);
                    self.paint(terminal)?;
                }
                Wake::Message(Message::ConfigReloaded) => {
                    self.reload_theme();
                    self.paint(terminal)?;
                }
                Wake::Message(Message::Quit) => {
                    info!("quit requested");
                    return Ok(());
                }
                Wake::Ignored => {}
            }
        }
    }

    fn resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "terminal resized");
        let regions = Regions::compute(ratatui::layout::Rect::new(0, 0, width, height));
        self.dashboard.resize(&regions.viewports());
        self.frames = self.dashboard.draw();
    }

    /// Re-read the config file and apply its theme.  Sensor intervals are
    /// only read at startup.
    fn reload_theme(&mut self) {
        let config = load_config(&self.config_path);
        let name = self.theme_override.as_deref().unwrap_or(&config.theme);
        match Theme::load(name, vtop_config::themes_dir()) {
            Ok(theme) => {
                info!(theme = %theme.name, "config reloaded");
                self.theme = theme;
            }
            Err(e) => warn!("keeping current theme: {e}"),
        }
    }

    fn paint(&self, terminal: &mut DefaultTerminal) -> Result<()> {
        let view = View {
            hostname: &self.hostname,
            theme:    &self.theme,
            panels:   &self.frames,
            now:      Local::now(),
        };
        terminal.draw(|frame| screen::render(frame, &view))?;
        Ok(())
    }
}

fn load_config(path: &Path) -> VtopConfig {
    vtop_config::load(path).unwrap_or_else(|e| {
        warn!("{e}; using default config");
        VtopConfig::default()
    })
}

fn load_theme(name: &str) -> Theme {
    Theme::load(name, vtop_config::themes_dir()).unwrap_or_else(|e| {
        warn!("{e}; using default theme");
        Theme::default()
    })
}

/// Widgets in screen order: CPU chart, memory chart, process table.
fn build_widgets(config: &VtopConfig) -> Vec<Box<dyn Widget>> {
    let sensors = &config.sensors;
    vec![
        Box::new(ChartWidget::new(
            Box::new(CpuSensor::new(Duration::from_millis(sensors.cpu_interval_ms))),
            config.history_limit,
        )),
        Box::new(ChartWidget::new(
            Box::new(MemorySensor::new(Duration::from_millis(sensors.memory_interval_ms))),
            config.history_limit,
        )),
        Box::new(TableWidget::new(Box::new(ProcessSensor::new(Duration::from_millis(
            sensors.process_interval_ms,
        ))))),
    ]
}
