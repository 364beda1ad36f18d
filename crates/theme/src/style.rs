use crate::colors::Color;
use serde::Deserialize;

/// How a region's frame is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderKind {
    /// Box-drawing line characters.
    #[default]
    Line,
    /// Solid blocks painted in the border color.
    Bg,
}

/// Border settings for a bordered region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderStyle {
    pub kind: BorderKind,
    pub fg:   Color,
}

/// Visual settings for one screen region (`title`, `footer`, `chart`, `table`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionStyle {
    pub fg:     Color,
    /// `None` = the region is drawn without a frame.
    pub border: Option<BorderStyle>,
}
