//! Colors, text modifiers, and box chrome.
//!
//! Every dialog takes a [`Theme`] that bundles the colors used for its
//! border, text, highlight bar, and buttons, plus a [`BorderStyle`]
//! selecting the glyph set used to draw the frame.

use bitflags::bitflags;

/// True-color RGB representation.
///
/// Uses 3 bytes for 24-bit color depth, supporting 16.7 million colors.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Default foreground (white)
    pub const DEFAULT_FG: Self = Self::WHITE;
    /// Default background (black)
    pub const DEFAULT_BG: Self = Self::BLACK;

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

bitflags! {
    /// Text style modifiers.
    ///
    /// These can be combined using bitwise OR.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0010_0000;
        /// Strikethrough text
        const STRIKETHROUGH = 0b1000_0000;
    }
}

/// Glyph set used to draw a dialog frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// Single-line box drawing: ┌─┐│└┘
    #[default]
    Single,
    /// Double-line box drawing: ╔═╗║╚╝
    Double,
    /// Rounded corners: ╭─╮│╰╯
    Rounded,
    /// Plain ASCII: +-+|++
    Ascii,
}

impl BorderStyle {
    /// Glyphs in the order: top-left, horizontal, top-right,
    /// vertical, bottom-left, bottom-right.
    pub const fn glyphs(self) -> [char; 6] {
        match self {
            Self::Single => ['┌', '─', '┐', '│', '└', '┘'],
            Self::Double => ['╔', '═', '╗', '║', '╚', '╝'],
            Self::Rounded => ['╭', '─', '╮', '│', '╰', '╯'],
            Self::Ascii => ['+', '-', '+', '|', '+', '+'],
        }
    }
}

/// Color scheme shared by all dialog flavors.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Border glyph set.
    pub border: BorderStyle,
    /// Border color.
    pub border_fg: Rgb,
    /// Title color.
    pub title_fg: Rgb,
    /// Body text color.
    pub text_fg: Rgb,
    /// Dialog background.
    pub bg: Rgb,
    /// Highlight bar foreground (the row under the cursor).
    pub highlight_fg: Rgb,
    /// Highlight bar background.
    pub highlight_bg: Rgb,
    /// Disabled choice color.
    pub disabled_fg: Rgb,
    /// Category/group header color.
    pub header_fg: Rgb,
    /// Button text color.
    pub button_fg: Rgb,
    /// Focused button background.
    pub button_focus_bg: Rgb,
    /// Scroll/slider arrow color.
    pub arrow_fg: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: BorderStyle::Single,
            border_fg: Rgb::new(90, 90, 90),
            title_fg: Rgb::new(0, 255, 255),
            text_fg: Rgb::WHITE,
            bg: Rgb::new(25, 25, 25),
            highlight_fg: Rgb::BLACK,
            highlight_bg: Rgb::new(0, 200, 100),
            disabled_fg: Rgb::new(100, 100, 100),
            header_fg: Rgb::new(200, 180, 0),
            button_fg: Rgb::WHITE,
            button_focus_bg: Rgb::new(0, 120, 200),
            arrow_fg: Rgb::new(0, 255, 255),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex() {
        let c = Rgb::from_u32(0xFF5500);
        assert_eq!(c, Rgb::new(255, 85, 0));
    }

    #[test]
    fn test_border_glyphs() {
        let g = BorderStyle::Ascii.glyphs();
        assert_eq!(g[0], '+');
        assert_eq!(g[3], '|');
    }
}
