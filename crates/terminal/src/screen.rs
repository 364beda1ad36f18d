use crate::{layout::Regions, style::to_text};
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};
use vtop_dashboard::PanelFrame;
use vtop_theme::{BorderKind, Color, RegionStyle, Theme};

/// Everything one paint needs.
#[derive(Debug)]
pub struct View<'a> {
    pub hostname: &'a str,
    pub theme:    &'a Theme,
    pub panels:   &'a [PanelFrame],
    pub now:      DateTime<Local>,
}

/// Paint a full screen.  Panels are matched to regions in widget order.
pub fn render(frame: &mut Frame, view: &View) {
    let regions = Regions::compute(frame.area());

    render_header(frame, regions.header, view);
    render_footer(frame, regions.footer, view.theme);

    let styles = [&view.theme.chart, &view.theme.chart, &view.theme.table];
    for ((panel, area), region) in view.panels.iter().zip(regions.panels()).zip(styles) {
        render_panel(frame, area, panel, region);
    }
}

fn render_header(frame: &mut Frame, area: Rect, view: &View) {
    let title = Style::default().fg(view.theme.title.fg.to_ratatui());

    let clock = Line::styled(format!("{} ", view.now.format("%H:%M:%S")), title);
    frame.render_widget(Paragraph::new(clock).alignment(Alignment::Right), area);

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled("vtop", title.add_modifier(Modifier::BOLD)),
        Span::styled(
            format!(" for {}", view.hostname),
            Style::default().fg(Color::WHITE.to_ratatui()),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = format!(
        "vtop {} - {} theme - press q to quit ",
        env!("CARGO_PKG_VERSION"),
        theme.name
    );
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(theme.footer.fg.to_ratatui()))
            .alignment(Alignment::Right),
        area,
    );
}

fn render_panel(frame: &mut Frame, area: Rect, panel: &PanelFrame, region: &RegionStyle) {
    let base = Style::default().fg(region.fg.to_ratatui());
    let block = panel_block(&panel.title, region);
    frame.render_widget(Paragraph::new(to_text(&panel.text, base)).block(block), area);
}

/// Every panel gets a full border so its inner area always matches
/// [`Regions::viewports`]; themes only choose how it looks.
fn panel_block<'a>(title: &str, region: &RegionStyle) -> Block<'a> {
    let (border_type, border_fg) = match region.border {
        Some(border) => (
            match border.kind {
                BorderKind::Line => BorderType::Plain,
                BorderKind::Bg => BorderType::QuadrantOutside,
            },
            border.fg,
        ),
        None => (BorderType::Plain, Color::Default),
    };

    Block::bordered()
        .border_type(border_type)
        .border_style(Style::default().fg(border_fg.to_ratatui()))
        .title(format!(" {title} "))
        .title_style(Style::default().fg(region.fg.to_ratatui()))
}
