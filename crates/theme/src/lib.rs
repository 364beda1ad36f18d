pub mod colors;
pub mod style;

pub use colors::Color;
pub use style::{BorderKind, BorderStyle, RegionStyle};

use serde::Deserialize;
use std::path::Path;
use vtop_core::{Result, VtopError};

/// Themes compiled into the binary, in `--list-themes` order.
pub const BUILTIN_THEMES: &[(&str, &str)] = &[
    ("parallax", include_str!("../themes/parallax.toml")),
    ("brew",     include_str!("../themes/brew.toml")),
    ("wizard",   include_str!("../themes/wizard.toml")),
];

/// Compiled theme: one [`RegionStyle`] per screen region.
///
/// Colors are pre-parsed from the theme file.  Invalid color strings fall
/// back to the terminal default with a warning rather than failing the load.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name:   String,
    pub author: String,
    pub title:  RegionStyle,
    pub footer: RegionStyle,
    pub chart:  RegionStyle,
    pub table:  RegionStyle,
}

impl Theme {
    /// Resolve a theme identifier: built-ins first, then
    /// `<themes_dir>/<name>.toml`.
    pub fn load(name: &str, themes_dir: impl AsRef<Path>) -> Result<Self> {
        if let Some((_, raw)) = BUILTIN_THEMES.iter().find(|(n, _)| *n == name) {
            return Self::parse(raw);
        }

        let path = themes_dir.as_ref().join(format!("{name}.toml"));
        if !path.exists() {
            return Err(VtopError::Theme(format!(
                "unknown theme '{name}' (not built in, no '{}')",
                path.display()
            )));
        }
        let raw = std::fs::read_to_string(&path)
            .map_err(|e| VtopError::Theme(format!("cannot read '{}': {e}", path.display())))?;
        Self::parse(&raw)
    }

    /// Parse a theme document.
    pub fn parse(raw: &str) -> Result<Self> {
        let file: ThemeFile = toml::from_str(raw)
            .map_err(|e| VtopError::Theme(format!("TOML parse error: {e}")))?;
        Ok(file.compile())
    }

    /// Look a region up by name.
    pub fn region(&self, name: &str) -> Option<&RegionStyle> {
        match name {
            "title"  => Some(&self.title),
            "footer" => Some(&self.footer),
            "chart"  => Some(&self.chart),
            "table"  => Some(&self.table),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name:   "Parallax".to_string(),
            author: "James Hall".to_string(),
            title:  RegionStyle { fg: Color::BLUE, border: None },
            footer: RegionStyle { fg: Color::BLUE, border: None },
            chart:  RegionStyle {
                fg: Color::BLUE,
                border: Some(BorderStyle { kind: BorderKind::Line, fg: Color::SKY }),
            },
            table:  RegionStyle {
                fg: Color::Default,
                border: Some(BorderStyle { kind: BorderKind::Line, fg: Color::SKY }),
            },
        }
    }
}

// ── On-disk shape ─────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ThemeFile {
    name:   String,
    author: String,
    title:  RegionFile,
    footer: RegionFile,
    chart:  RegionFile,
    table:  RegionFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RegionFile {
    fg:     Option<String>,
    border: Option<BorderFile>,
}

#[derive(Debug, Deserialize)]
struct BorderFile {
    #[serde(rename = "type", default)]
    kind: BorderKind,
    fg:   Option<String>,
}

impl ThemeFile {
    fn compile(self) -> Theme {
        Theme {
            name:   self.name,
            author: self.author,
            title:  self.title.compile("title"),
            footer: self.footer.compile("footer"),
            chart:  self.chart.compile("chart"),
            table:  self.table.compile("table"),
        }
    }
}

impl RegionFile {
    fn compile(self, region: &str) -> RegionStyle {
        RegionStyle {
            fg: color_or_default(self.fg.as_deref(), region),
            border: self.border.map(|b| BorderStyle {
                kind: b.kind,
                fg:   color_or_default(b.fg.as_deref(), region),
            }),
        }
    }
}

fn color_or_default(value: Option<&str>, region: &str) -> Color {
    let Some(value) = value else {
        return Color::Default;
    };
    Color::parse(value).unwrap_or_else(|| {
        tracing::warn!("theme region '{region}': unknown color '{value}'");
        Color::Default
    })
}
