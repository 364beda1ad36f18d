use std::collections::BTreeMap;

/// A single table row: column key → display string.
pub type Row = BTreeMap<String, String>;

/// Character-cell region a chart or table renders into.
///
/// Dimensions are signed so that regions computed from very small terminals
/// (e.g. `width - borders`) can go negative without wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// A table column.
///
/// `priority` decides which columns survive when the table is too narrow:
/// lower priorities are dropped first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Header text.
    pub name: String,
    /// Key looked up in each [`Row`].
    pub key: String,
    pub priority: i32,
}

impl Column {
    pub fn new(name: impl Into<String>, key: impl Into<String>, priority: i32) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            priority,
        }
    }

    /// Build columns whose key equals their name and whose priority is their
    /// declaration index, so the front of the list is dropped first.
    pub fn in_order<S: AsRef<str>>(names: &[S]) -> Vec<Column> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Column::new(name.as_ref(), name.as_ref(), i as i32))
            .collect()
    }
}

/// What a sensor reported on its last poll.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Reading {
    /// Nothing recorded yet (or the source failed).
    #[default]
    Empty,
    /// A single percentage, nominally in `[0, 100]`.
    Percent(f64),
    /// A full replacement row set.
    Rows(Vec<Row>),
}

impl Reading {
    /// The reading as a chart sample; anything that is not a finite
    /// percentage counts as zero.
    #[must_use]
    pub fn as_percent(&self) -> f64 {
        match self {
            Reading::Percent(v) if v.is_finite() => *v,
            _ => 0.0,
        }
    }

    /// Consume the reading as table rows; non-table readings yield no rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Row> {
        match self {
            Reading::Rows(rows) => rows,
            _ => Vec::new(),
        }
    }
}
