use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};
use tracing::trace;
use vtop_renderer::{markup, Tag};
use vtop_theme::Color;

/// Convert dashboard markup into styled terminal text.
///
/// `base` is the region style; tags layer on top of it.  A color tag with a
/// name the theme parser does not know leaves the base color in place.
pub fn to_text(markup: &str, base: Style) -> Text<'static> {
    markup::parse(markup)
        .into_iter()
        .map(|runs| {
            Line::from(
                runs.into_iter()
                    .map(|run| Span::styled(run.text, apply_tags(base, &run.tags)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect::<Vec<_>>()
        .into()
}

fn apply_tags(base: Style, tags: &[Tag]) -> Style {
    tags.iter().fold(base, |style, tag| match tag {
        Tag::Bold => style.add_modifier(Modifier::BOLD),
        Tag::Fg(name) => match Color::parse(name) {
            Some(color) => style.fg(color.to_ratatui()),
            None => {
                trace!(color = %name, "unknown markup color");
                style
            }
        },
    })
}
