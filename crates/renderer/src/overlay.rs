use crate::markup::{Frame, Line};

/// Corner of a frame an overlay is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Draw `overlay` over `base` at `anchor`, replacing exactly as many cells as
/// the overlay is wide.
///
/// The overlay is clipped to the anchored line's width: right anchors keep
/// its trailing cells, left anchors its leading cells.  An empty frame is
/// left untouched.
pub fn compose(base: &mut Frame, overlay: &Line, anchor: Anchor) {
    let row = match anchor {
        Anchor::TopLeft | Anchor::TopRight => 0,
        Anchor::BottomLeft | Anchor::BottomRight => match base.lines.len() {
            0 => return,
            n => n - 1,
        },
    };
    let Some(line) = base.lines.get_mut(row) else {
        return;
    };

    let width = line.width();
    let overlay_width = overlay.width();
    let shown = overlay_width.min(width);

    match anchor {
        Anchor::TopLeft | Anchor::BottomLeft => {
            line.splice(0, overlay.slice(0, shown));
        }
        Anchor::TopRight | Anchor::BottomRight => {
            line.splice(width - shown, overlay.slice(overlay_width - shown, overlay_width));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{Span, Tag};

    fn frame(lines: &[&str]) -> Frame {
        Frame::new(lines.iter().map(|l| Line::plain(*l)).collect())
    }

    #[test]
    fn top_right_replaces_trailing_cells() {
        let mut f = frame(&["........", "........"]);
        compose(&mut f, &Line::styled(" 42%", Tag::fg("white")), Anchor::TopRight);
        assert_eq!(f.lines[0].text(), ".... 42%");
        assert_eq!(f.lines[0].spans[1], Span::styled(" 42%", Tag::fg("white")));
        assert_eq!(f.lines[1].text(), "........");
    }

    #[test]
    fn bottom_left_replaces_leading_cells() {
        let mut f = frame(&["....", "...."]);
        compose(&mut f, &Line::plain("ab"), Anchor::BottomLeft);
        assert_eq!(f.lines[1].text(), "ab..");
    }

    #[test]
    fn overlay_is_clipped_to_line_width() {
        let mut f = frame(&["..."]);
        compose(&mut f, &Line::plain("100%"), Anchor::TopRight);
        assert_eq!(f.lines[0].text(), "00%");

        let mut f = frame(&["..."]);
        compose(&mut f, &Line::plain("100%"), Anchor::TopLeft);
        assert_eq!(f.lines[0].text(), "100");
    }

    #[test]
    fn empty_frame_is_untouched() {
        let mut f = Frame::default();
        compose(&mut f, &Line::plain("x"), Anchor::BottomRight);
        assert!(f.lines.is_empty());
    }
}
