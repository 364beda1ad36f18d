use crate::buffer::SampleBuffer;
use crate::canvas::BrailleCanvas;
use crate::markup::{Frame, Line, Tag};
use crate::overlay::{compose, Anchor};
use vtop_core::Viewport;

/// Color of the percentage label drawn in the chart's top-right corner.
pub const LABEL_COLOR: &str = "white";

/// Pixel size of a chart's drawing area.
///
/// Every character cell is 2 pixels wide and 4 tall.  Sizes derived from a
/// collapsed viewport may be zero or negative; such charts render nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChartGeometry {
    pub pixel_width:  i64,
    pub pixel_height: i64,
}

impl ChartGeometry {
    pub fn from_viewport(viewport: Viewport) -> Self {
        Self {
            pixel_width:  i64::from(viewport.width) * 2,
            pixel_height: i64::from(viewport.height) * 4,
        }
    }

    /// Number of text lines a rendered frame has: `ceil(pixel_height / 4)`.
    pub fn line_count(&self) -> usize {
        ((self.pixel_height.max(0) + 3) / 4) as usize
    }
}

/// Pixel row for a percentage: 0 % sits on the bottom row, higher values
/// climb towards row 0.  The result may fall one or two rows outside the
/// canvas: above it for values past 100 %, below it for negative values.
pub fn pixel_row(value: f64, pixel_height: i64) -> i64 {
    let value = if value.is_finite() { value } else { 0.0 };
    let limit = (pixel_height.max(0) + 1) as f64;
    let climb = ((pixel_height + 1) as f64 / 100.0 * value).floor().clamp(-1.0, limit);
    pixel_height - climb as i64 - 1
}

/// Pixel column of the `index`-th visible sample out of `visible`, with the
/// newest sample on the right edge.
pub fn pixel_column(index: usize, visible: usize, pixel_width: i64) -> i64 {
    index as i64 + (pixel_width - visible as i64)
}

/// `"  7%"`, `" 42%"`, `"100%"`.
pub fn percent_label(value: f64) -> Line {
    let value = if value.is_finite() { value.round() as i64 } else { 0 };
    Line::styled(format!("{value:>3}%"), Tag::fg(LABEL_COLOR))
}

/// Render the visible tail of `buffer` as a filled braille chart with the
/// latest value overlaid in the top-right corner.
///
/// The frame always has [`ChartGeometry::line_count`] lines; an empty buffer
/// gives a blank chart showing `  0%`.
pub fn render_chart(buffer: &SampleBuffer, geometry: ChartGeometry) -> Frame {
    let canvas = plot(buffer, geometry);
    let mut frame = Frame::new(canvas.rows().into_iter().map(Line::plain).collect());
    compose(
        &mut frame,
        &percent_label(buffer.latest().unwrap_or(0.0)),
        Anchor::TopRight,
    );
    frame
}

/// Fill one pixel column per visible sample, from its row down to the
/// bottom edge.
pub(crate) fn plot(buffer: &SampleBuffer, geometry: ChartGeometry) -> BrailleCanvas {
    let ChartGeometry { pixel_width, pixel_height } = geometry;
    let mut canvas = BrailleCanvas::new(pixel_width, pixel_height);

    let visible = buffer.tail(pixel_width);
    let count = visible.len();
    for (i, value) in visible.enumerate() {
        let x = pixel_column(i, count, pixel_width);
        if x < 0 {
            continue;
        }
        let top = pixel_row(*value, pixel_height).max(0);
        for y in top..pixel_height {
            canvas.set(x, y);
        }
    }
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(values: &[f64]) -> SampleBuffer {
        let mut buf = SampleBuffer::new(64);
        for v in values {
            buf.append(*v);
        }
        buf
    }

    fn geometry(pixel_width: i64, pixel_height: i64) -> ChartGeometry {
        ChartGeometry { pixel_width, pixel_height }
    }

    /// Topmost set pixel in column `x` of the plotted chart, without the
    /// label.
    fn column_top(values: &[f64], g: ChartGeometry, x: i64) -> Option<i64> {
        let canvas = plot(&buffer(values), g);
        (0..g.pixel_height).find(|&y| canvas.is_set(x, y))
    }

    fn texts(frame: &Frame) -> Vec<String> {
        frame.lines.iter().map(Line::text).collect()
    }

    #[test]
    fn rows_for_small_grid() {
        let rows: Vec<i64> = [10.0, 50.0, 90.0].iter().map(|v| pixel_row(*v, 4).max(0)).collect();
        assert_eq!(rows, vec![3, 1, 0]);
    }

    #[test]
    fn row_is_monotonic_in_value() {
        for height in [4, 7, 16, 40] {
            let mut previous = i64::MAX;
            for step in 0..=1000 {
                let row = pixel_row(step as f64 / 10.0, height);
                assert!(row <= previous, "height {height}, value {}", step as f64 / 10.0);
                previous = row;
            }
        }
    }

    #[test]
    fn zero_sits_on_the_bottom_row() {
        assert_eq!(pixel_row(0.0, 12), 11);
        assert_eq!(pixel_row(f64::NAN, 12), 11);
    }

    #[test]
    fn samples_are_right_aligned() {
        assert_eq!(pixel_column(0, 3, 10), 7);
        assert_eq!(pixel_column(2, 3, 10), 9);
    }

    #[test]
    fn every_sample_drawn_when_history_fits() {
        let g = geometry(6, 8);
        let values = [20.0, 40.0, 60.0];
        for (i, v) in values.iter().enumerate() {
            let x = pixel_column(i, values.len(), 6);
            assert_eq!(column_top(&values, g, x), Some(pixel_row(*v, 8)));
        }
        // Columns left of the history stay empty.
        assert_eq!(column_top(&values, g, 0), None);
    }

    #[test]
    fn only_latest_window_drawn_when_history_overflows() {
        let g = geometry(4, 8);
        let values = [100.0, 100.0, 0.0, 0.0, 0.0, 0.0];
        for x in 0..4 {
            assert_eq!(column_top(&values, g, x), Some(7), "column {x}");
        }
    }

    #[test]
    fn rendered_frame_scrolls_to_the_latest_samples() {
        let values = [100.0, 100.0, 0.0, 0.0, 0.0, 0.0];
        let fits = render_chart(&buffer(&values), geometry(8, 8));
        assert_eq!(texts(&fits), ["  0%", " \u{28ff}\u{28c0}\u{28c0}"]);

        // Only the last four samples fit; the two full columns scroll out.
        let overflows = render_chart(&buffer(&values), geometry(4, 8));
        assert_eq!(texts(&overflows), ["0%", "\u{28c0}\u{28c0}"]);

        let shifted = render_chart(&buffer(&[0.0, 0.0, 100.0, 100.0, 0.0, 0.0]), geometry(4, 8));
        assert_eq!(texts(&shifted)[1], "\u{28ff}\u{28c0}");
    }

    #[test]
    fn extreme_values_stay_inside_the_canvas() {
        assert_eq!(pixel_row(1e300, 8), -2);
        assert_eq!(pixel_row(-1e300, 8), 8);
        assert_eq!(pixel_row(-1e300, -8), -10);

        let g = geometry(4, 8);
        assert_eq!(column_top(&[-1e300, 1e300], g, 2), None);
        assert_eq!(column_top(&[-1e300, 1e300], g, 3), Some(0));
        let frame = render_chart(&buffer(&[1e300, -1e300]), g);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.lines[1].text(), " \u{2847}");
    }

    #[test]
    fn frame_has_ceil_height_over_four_lines() {
        for (height, lines) in [(4, 1), (5, 2), (8, 2), (0, 0), (-4, 0)] {
            let frame = render_chart(&buffer(&[50.0]), geometry(10, height));
            assert_eq!(frame.height(), lines, "pixel height {height}");
            assert_eq!(geometry(10, height).line_count(), lines);
        }
    }

    #[test]
    fn label_sits_in_top_right_corner() {
        let frame = render_chart(&buffer(&[3.0, 42.4]), geometry(16, 8));
        let top = frame.lines[0].text();
        assert_eq!(top.chars().count(), 8);
        assert!(top.ends_with(" 42%"));
        assert!(frame.lines[0].to_markup().ends_with("{white-fg} 42%{/white-fg}"));
    }

    #[test]
    fn empty_buffer_renders_blank_frame_with_label() {
        let frame = render_chart(&SampleBuffer::default(), geometry(12, 8));
        assert_eq!(frame.lines[0].text(), "    0%");
        assert_eq!(frame.lines[1].text(), "      ");
    }

    #[test]
    fn full_value_fills_column() {
        let frame = render_chart(&buffer(&[100.0]), geometry(2, 4));
        // A single cell only has room for the label's last character.
        assert_eq!(frame.lines[0].text(), "%");
        let frame = render_chart(&buffer(&[100.0, 100.0]), geometry(2, 8));
        assert_eq!(frame.lines[1].text(), "\u{28ff}");
    }

    #[test]
    fn rendering_is_idempotent() {
        let buf = buffer(&[12.0, 77.0, 31.0]);
        let g = geometry(20, 12);
        assert_eq!(render_chart(&buf, g).to_markup(), render_chart(&buf, g).to_markup());
    }
}
