use crate::markup::{Frame, Line, Tag};
use vtop_core::{Column, Row};

/// Narrowest the fill column may get before another column is dropped.
pub const MIN_FILL_WIDTH: i64 = 12;

/// Spacing added to every fixed column's header width; wider tables breathe
/// more.
pub fn padding_for(target_width: i64) -> i64 {
    match target_width {
        w if w <= 50 => 1,
        w if w <= 80 => 2,
        _ => 3,
    }
}

/// A column that survived fitting, with its width in characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FittedColumn {
    pub column: Column,
    pub width:  i64,
}

/// Column widths for one table at one target width.
///
/// Fixed columns get their header width plus padding; the last surviving
/// column (in declaration order) is the fill column and takes whatever is
/// left.  While the fill column is narrower than [`MIN_FILL_WIDTH`] the
/// lowest-priority column is dropped, the front-most one on ties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    columns:      Vec<FittedColumn>,
    target_width: i64,
}

impl TableLayout {
    pub fn fit(columns: &[Column], target_width: i64) -> Self {
        let padding = padding_for(target_width);
        let mut remaining: Vec<&Column> = columns.iter().collect();
        let mut widths = Vec::new();

        // Each pass either accepts the layout or drops a column, and a single
        // column is always accepted: at most `columns.len()` passes run.
        for _ in 0..columns.len() {
            widths = allocate(&remaining, target_width, padding);
            let fill = widths.last().copied().unwrap_or(0);
            if fill >= MIN_FILL_WIDTH || remaining.len() <= 1 {
                break;
            }
            let dropped = remaining
                .iter()
                .enumerate()
                .min_by_key(|(_, c)| c.priority)
                .map(|(i, _)| i)
                .unwrap_or(0);
            remaining.remove(dropped);
        }

        Self {
            columns: remaining
                .into_iter()
                .zip(widths)
                .map(|(column, width)| FittedColumn { column: column.clone(), width })
                .collect(),
            target_width,
        }
    }

    pub fn columns(&self) -> &[FittedColumn] {
        &self.columns
    }

    pub fn target_width(&self) -> i64 {
        self.target_width
    }

    /// Width of the column keyed `key`, if it survived.
    pub fn width_of(&self, key: &str) -> Option<i64> {
        self.columns
            .iter()
            .find(|c| c.column.key == key)
            .map(|c| c.width)
    }

    /// Bold header line: every column name in its cell.
    pub fn render_header(&self) -> Line {
        let text: String = self
            .columns
            .iter()
            .map(|c| cell(&c.column.name, c.width))
            .collect();
        Line::styled(text, Tag::Bold)
    }

    /// One body line.  Missing values render as blank cells.
    pub fn render_row(&self, row: &Row) -> Line {
        Line::plain(
            self.columns
                .iter()
                .map(|c| cell(row.get(&c.column.key).map_or("", String::as_str), c.width))
                .collect::<String>(),
        )
    }

    /// Header followed by every row, in the order given.
    pub fn render(&self, rows: &[Row]) -> Frame {
        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(self.render_header());
        lines.extend(rows.iter().map(|row| self.render_row(row)));
        Frame::new(lines)
    }
}

fn allocate(columns: &[&Column], target_width: i64, padding: i64) -> Vec<i64> {
    let Some((_, fixed)) = columns.split_last() else {
        return Vec::new();
    };
    let mut widths: Vec<i64> = fixed
        .iter()
        .map(|c| c.name.chars().count() as i64 + padding)
        .collect();
    let used: i64 = widths.iter().sum();
    widths.push(target_width - used);
    widths
}

/// `' ' + text`, cut or space-padded to exactly `width` characters.
fn cell(text: &str, width: i64) -> String {
    let width = width.max(0) as usize;
    let mut out: String = std::iter::once(' ').chain(text.chars()).take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}
