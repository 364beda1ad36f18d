/// A terminal foreground color.
///
/// `Default` leaves the terminal's own foreground untouched (`"fg"` in theme
/// files).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    pub const WHITE: Self = Self::rgb(0xe5, 0xe5, 0xe5);
    pub const BLUE:  Self = Self::rgb(0x18, 0x7d, 0xc1); // #187dc1
    pub const SKY:   Self = Self::rgb(0x56, 0xa0, 0xd1); // #56a0d1

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RGB`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

        match hex.len() {
            6 => Some(Self::rgb(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?)),
            3 => {
                // `#abc` is shorthand for `#aabbcc`.
                let nibble = |i: usize| byte(&hex[i..i + 1]).map(|n| n * 17);
                Some(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            _ => None,
        }
    }

    /// Resolve one of the sixteen xterm color names (`"red"`,
    /// `"bright-blue"`, `"grey"`, …) or `"fg"`/`"default"`.
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "fg" | "default"                   => Self::Default,
            "black"                            => Self::rgb(0x00, 0x00, 0x00),
            "red"                              => Self::rgb(0xcd, 0x00, 0x00),
            "green"                            => Self::rgb(0x00, 0xcd, 0x00),
            "yellow"                           => Self::rgb(0xcd, 0xcd, 0x00),
            "blue"                             => Self::rgb(0x00, 0x00, 0xee),
            "magenta"                          => Self::rgb(0xcd, 0x00, 0xcd),
            "cyan"                             => Self::rgb(0x00, 0xcd, 0xcd),
            "white"                            => Self::WHITE,
            "gray" | "grey" | "bright-black"   => Self::rgb(0x7f, 0x7f, 0x7f),
            "bright-red"                       => Self::rgb(0xff, 0x00, 0x00),
            "bright-green"                     => Self::rgb(0x00, 0xff, 0x00),
            "bright-yellow"                    => Self::rgb(0xff, 0xff, 0x00),
            "bright-blue"                      => Self::rgb(0x5c, 0x5c, 0xff),
            "bright-magenta"                   => Self::rgb(0xff, 0x00, 0xff),
            "bright-cyan"                      => Self::rgb(0x00, 0xff, 0xff),
            "bright-white"                     => Self::rgb(0xff, 0xff, 0xff),
            _ => return None,
        };
        Some(color)
    }

    /// Parse either a hex string or a color name.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.starts_with('#') {
            Self::from_hex(value)
        } else {
            Self::from_name(value)
        }
    }

    /// Convert to a [`ratatui::style::Color`] for use in terminal widgets.
    #[inline]
    pub fn to_ratatui(self) -> ratatui::style::Color {
        match self {
            Self::Default => ratatui::style::Color::Reset,
            Self::Rgb { r, g, b } => ratatui::style::Color::Rgb(r, g, b),
        }
    }
}
