//! Styled text frames and the inline-marker format handed to the display.
//!
//! Markers follow the `{tag}…{/tag}` convention: `{bold}`, `{white-fg}` and
//! so on.  Literal braces in content are written as `{open}` and `{close}`.
//! Frames are built as typed [`Line`]s and only turned into marker strings at
//! the very end, so cell-level edits such as overlays never see markers.

use std::fmt::Write as _;

/// A style applied to a run of text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Bold,
    /// Foreground color by name, e.g. `"white"`.
    Fg(String),
}

impl Tag {
    pub fn fg(color: impl Into<String>) -> Self {
        Tag::Fg(color.into())
    }

    /// Marker name without braces (`bold`, `white-fg`).
    pub fn marker(&self) -> String {
        match self {
            Tag::Bold => "bold".to_string(),
            Tag::Fg(color) => format!("{color}-fg"),
        }
    }

    pub fn from_marker(marker: &str) -> Option<Self> {
        if marker == "bold" {
            return Some(Tag::Bold);
        }
        marker
            .strip_suffix("-fg")
            .filter(|color| !color.is_empty())
            .map(|color| Tag::Fg(color.to_string()))
    }
}

/// A run of text with at most one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tag:  Option<Tag>,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), tag: None }
    }

    pub fn styled(text: impl Into<String>, tag: Tag) -> Self {
        Self { text: text.into(), tag: Some(tag) }
    }

    /// Width in terminal cells (one per character).
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// One line of styled text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(vec![Span::plain(text)])
    }

    pub fn styled(text: impl Into<String>, tag: Tag) -> Self {
        Self::new(vec![Span::styled(text, tag)])
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// The visible characters, without any styling.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Cells `[from, to)` of this line, keeping each cell's style.
    pub fn slice(&self, from: usize, to: usize) -> Vec<Span> {
        let mut out = Vec::new();
        let mut offset = 0;
        for span in &self.spans {
            let width = span.width();
            let start = from.max(offset);
            let end = to.min(offset + width);
            if start < end {
                let text = span
                    .text
                    .chars()
                    .skip(start - offset)
                    .take(end - start)
                    .collect::<String>();
                out.push(Span { text, tag: span.tag.clone() });
            }
            offset += width;
        }
        out
    }

    /// Replace the cells starting at `start` with `spans`.  The line keeps its
    /// width unless the replacement runs past the end.
    pub fn splice(&mut self, start: usize, spans: Vec<Span>) {
        let replaced: usize = spans.iter().map(Span::width).sum();
        let width = self.width();
        let mut next = self.slice(0, start.min(width));
        next.extend(spans.into_iter().filter(|s| !s.text.is_empty()));
        next.extend(self.slice(start + replaced, width));
        self.spans = next;
    }

    /// Serialize with inline markers and escaped braces.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for span in &self.spans {
            match &span.tag {
                Some(tag) => {
                    let marker = tag.marker();
                    let _ = write!(out, "{{{marker}}}{}{{/{marker}}}", escape(&span.text));
                }
                None => out.push_str(&escape(&span.text)),
            }
        }
        out
    }
}

/// A rendered block of lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub lines: Vec<Line>,
}

impl Frame {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Serialize every line, joined with `\n`.
    pub fn to_markup(&self) -> String {
        self.lines
            .iter()
            .map(Line::to_markup)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Escape literal braces so content can never open a marker.
pub fn escape(text: &str) -> String {
    if !text.contains(['{', '}']) {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '{' => out.push_str("{open}"),
            '}' => out.push_str("{close}"),
            _ => out.push(c),
        }
    }
    out
}

/// A run of text produced by [`parse`], with every style active on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub tags: Vec<Tag>,
}

/// Parse marker text back into lines of styled runs.
///
/// Open tags carry across line breaks.  Unknown or unterminated markers are
/// kept as literal text.
pub fn parse(markup: &str) -> Vec<Vec<StyledRun>> {
    let mut active: Vec<Tag> = Vec::new();
    let mut lines = Vec::new();

    for raw in markup.split('\n') {
        let mut runs: Vec<StyledRun> = Vec::new();
        let mut text = String::new();
        let mut rest = raw;

        while let Some(open) = rest.find('{') {
            text.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                text.push_str(&rest[open..]);
                rest = "";
                break;
            };
            let marker = &after[..close];
            rest = &after[close + 1..];

            match marker {
                "open" => text.push('{'),
                "close" => text.push('}'),
                _ => {
                    let (closing, name) = match marker.strip_prefix('/') {
                        Some(name) => (true, name),
                        None => (false, marker),
                    };
                    let Some(tag) = Tag::from_marker(name) else {
                        let _ = write!(text, "{{{marker}}}");
                        continue;
                    };
                    flush(&mut runs, &mut text, &active);
                    if closing {
                        if let Some(pos) = active.iter().rposition(|t| *t == tag) {
                            active.remove(pos);
                        }
                    } else {
                        active.push(tag);
                    }
                }
            }
        }
        text.push_str(rest);
        flush(&mut runs, &mut text, &active);
        lines.push(runs);
    }
    lines
}

fn flush(runs: &mut Vec<StyledRun>, text: &mut String, active: &[Tag]) {
    if text.is_empty() {
        return;
    }
    runs.push(StyledRun {
        text: std::mem::take(text),
        tags: active.to_vec(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_tags_and_escapes_braces() {
        let line = Line::new(vec![
            Span::plain("a{b}"),
            Span::styled(" 42%", Tag::fg("white")),
        ]);
        assert_eq!(line.to_markup(), "a{open}b{close}{white-fg} 42%{/white-fg}");
    }

    #[test]
    fn parse_recovers_styles_and_literals() {
        let lines = parse("{bold} PID{/bold}\nx{open}y{close} {white-fg}9%{/white-fg}");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], vec![StyledRun { text: " PID".into(), tags: vec![Tag::Bold] }]);
        assert_eq!(lines[1][0], StyledRun { text: "x{y} ".into(), tags: vec![] });
        assert_eq!(lines[1][1].tags, vec![Tag::fg("white")]);
    }

    #[test]
    fn unknown_and_unterminated_markers_stay_literal() {
        let lines = parse("{weird} and {oops");
        assert_eq!(lines[0], vec![StyledRun { text: "{weird} and {oops".into(), tags: vec![] }]);
    }

    #[test]
    fn tags_carry_across_lines() {
        let lines = parse("{bold}a\nb{/bold}c");
        assert_eq!(lines[1][0].tags, vec![Tag::Bold]);
        assert!(lines[1][1].tags.is_empty());
    }

    #[test]
    fn splice_replaces_cells_in_place() {
        let mut line = Line::new(vec![Span::plain("abc"), Span::styled("def", Tag::Bold)]);
        line.splice(2, vec![Span::plain("XY")]);
        assert_eq!(line.text(), "abXYef");
        assert_eq!(line.width(), 6);
        assert_eq!(line.spans.last(), Some(&Span::styled("ef", Tag::Bold)));
    }

    #[test]
    fn splice_past_the_end_extends() {
        let mut line = Line::plain("ab");
        line.splice(1, vec![Span::plain("xyz")]);
        assert_eq!(line.text(), "axyz");
    }

    #[test]
    fn frame_joins_lines() {
        let frame = Frame::new(vec![Line::plain("a"), Line::plain("b")]);
        assert_eq!(frame.to_markup(), "a\nb");
        assert_eq!(frame.height(), 2);
    }
}
