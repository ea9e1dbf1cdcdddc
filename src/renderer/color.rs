//! Palette colors

use crate::consts::DEFAULT_PALETTE;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse `#rrggbb` or `#rgb`
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let digits = hex.trim().strip_prefix('#').filter(|d| d.is_ascii())?;
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            6 => Some(Rgb {
                r: channel(&digits[0..2])?,
                g: channel(&digits[2..4])?,
                b: channel(&digits[4..6])?,
            }),
            3 => {
                // #abc == #aabbcc
                let expand = |s: &str| channel(s).map(|v| v * 17);
                Some(Rgb {
                    r: expand(&digits[0..1])?,
                    g: expand(&digits[1..2])?,
                    b: expand(&digits[2..3])?,
                })
            }
            _ => None,
        }
    }

    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Resolved palette; CSS strings are built once and handed to the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    css: Vec<String>,
}

impl Palette {
    /// Parse a list of hex colors. None if empty or any entry is invalid.
    pub fn parse<S: AsRef<str>>(colors: &[S]) -> Option<Palette> {
        if colors.is_empty() {
            return None;
        }
        let css = colors
            .iter()
            .map(|c| Rgb::from_hex(c.as_ref()).map(|rgb| rgb.to_css()))
            .collect::<Option<Vec<_>>>()?;
        Some(Palette { css })
    }

    pub fn len(&self) -> usize {
        self.css.len()
    }

    pub fn is_empty(&self) -> bool {
        self.css.is_empty()
    }

    /// CSS color for a palette index (wraps around)
    pub fn css(&self, index: usize) -> &str {
        &self.css[index % self.css.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            css: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex("#ff5e5b"), Some(Rgb { r: 0xff, g: 0x5e, b: 0x5b }));
        assert_eq!(Rgb::from_hex("#FFF"), Some(Rgb { r: 255, g: 255, b: 255 }));
        assert_eq!(Rgb::from_hex("ff5e5b"), None);
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("#gggggg"), None);
    }

    #[test]
    fn test_palette_normalizes_and_wraps() {
        let palette = Palette::parse(&["#ABC", "#00a6ed"]).unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.css(0), "#aabbcc");
        assert_eq!(palette.css(3), "#00a6ed");

        assert!(Palette::parse::<&str>(&[]).is_none());
        assert!(Palette::parse(&["#00a6ed", "blue"]).is_none());
    }
}
