use crate::ColorParseError;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const TRANSPARENT: Color = Color(0, 0, 0, 0);
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 255)
    }
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(r, g, b, a)
    }

    /// Lenient hex parser: `#RGB`, `#RRGGBB`, `#RRGGBBAA` (leading `#`
    /// optional). Malformed input yields opaque black.
    pub fn from_hex(hex: &str) -> Self {
        Self::parse_hex(hex).unwrap_or(Color::BLACK)
    }

    fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let s = hex.trim_start_matches('#');
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::new(hex));
        }
        let digit = |r: &str| u8::from_str_radix(r, 16);
        let parsed = match s.len() {
            // #RGB expands each digit, CSS-style
            3 => (
                digit(&s[0..1]).map(|v| v * 17),
                digit(&s[1..2]).map(|v| v * 17),
                digit(&s[2..3]).map(|v| v * 17),
                Ok(255),
            ),
            6 => (digit(&s[0..2]), digit(&s[2..4]), digit(&s[4..6]), Ok(255)),
            8 => (
                digit(&s[0..2]),
                digit(&s[2..4]),
                digit(&s[4..6]),
                digit(&s[6..8]),
            ),
            _ => return Err(ColorParseError::new(hex)),
        };
        match parsed {
            (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Color(r, g, b, a)),
            _ => Err(ColorParseError::new(hex)),
        }
    }

    /// Strict parser for caller-supplied color strings: a small named set
    /// (`white`, `black`, `transparent`, `red`, `green`, `blue`, `gray`) or
    /// hex per [`Color::from_hex`].
    pub fn try_parse(s: &str) -> Result<Self, ColorParseError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transparent" => Ok(Color::TRANSPARENT),
            "black" => Ok(Color::BLACK),
            "white" => Ok(Color::WHITE),
            "red" => Ok(Color::from_rgb(255, 0, 0)),
            "green" => Ok(Color::from_rgb(0, 128, 0)),
            "blue" => Ok(Color::from_rgb(0, 0, 255)),
            "gray" | "grey" => Ok(Color::from_rgb(128, 128, 128)),
            other => Self::parse_hex(other),
        }
    }

    /// Parse a caller-supplied color string, falling back on `fallback` when
    /// it doesn't parse. The platform owns failure behavior for styling, so
    /// the miss is only noted at debug level.
    pub fn parse_or(s: &str, fallback: Color) -> Color {
        match Self::try_parse(s) {
            Ok(c) => c,
            Err(e) => {
                log::debug!("{e}; using fallback {fallback:?}");
                fallback
            }
        }
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Color(self.0, self.1, self.2, a)
    }
}
