//! Text Styles
//!
//! Display attributes applied to highlighted ranges.

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        Some(Self::rgb(r, g, b))
    }
}

/// Character format: foreground color, weight and slant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextStyle {
    pub color: Color,
    pub bold: bool,
    pub italic: bool,
}

impl TextStyle {
    pub const fn plain(color: Color) -> Self {
        Self { color, bold: false, italic: false }
    }

    pub const fn bold(color: Color) -> Self {
        Self { color, bold: true, italic: false }
    }

    pub const fn italic(color: Color) -> Self {
        Self { color, bold: false, italic: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let color = Color::from_hex("#AA4400").unwrap();
        assert_eq!(color, Color::rgb(0xaa, 0x44, 0x00));
    }

    #[test]
    fn test_color_from_hex_rejects_garbage() {
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#gg0000").is_none());
        assert!(Color::from_hex("#ééé").is_none());
    }
}
