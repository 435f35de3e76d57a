//! `Surface`: a grid of cells that dialogs render into.
//!
//! The surface stores cells in a contiguous `Vec` in row-major order:
//! `index = y * width + x`. Dialogs are small and redraw their whole
//! region every frame, so there is no diffing; a frame is serialized
//! to ANSI escape sequences and flushed in a single `write()` syscall
//! to avoid flicker.

use crate::layout::Rect;
use crate::style::{BorderStyle, Modifiers, Rgb, Theme};
use crate::text::{display_width, truncate};
use std::io::Write;
use unicode_segmentation::UnicodeSegmentation;

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Displayed character.
    pub ch: char,
    /// Foreground color.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
    /// Text modifiers.
    pub mods: Modifiers,
}

impl Cell {
    /// An empty cell: space on default colors.
    pub const EMPTY: Self = Self {
        ch: ' ',
        fg: Rgb::DEFAULT_FG,
        bg: Rgb::DEFAULT_BG,
        mods: Modifiers::empty(),
    };

    /// Create a cell holding `ch` with default colors.
    #[inline]
    pub const fn new(ch: char) -> Self {
        Self {
            ch,
            fg: Rgb::DEFAULT_FG,
            bg: Rgb::DEFAULT_BG,
            mods: Modifiers::empty(),
        }
    }

    /// Set the foreground color.
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color.
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Set text modifiers.
    #[inline]
    #[must_use]
    pub const fn with_mods(mut self, mods: Modifiers) -> Self {
        self.mods = mods;
        self
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// A grid of cells sized to the terminal window.
#[derive(Debug, Clone)]
pub struct Surface {
    cells: Vec<Cell>,
    width: u16,
    height: u16,
}

impl Surface {
    /// Create a surface filled with [`Cell::EMPTY`].
    pub fn new(width: u16, height: u16) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            cells: vec![Cell::EMPTY; size],
            width,
            height,
        }
    }

    /// Surface width in columns.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Surface height in rows.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Convert (x, y) coordinates to a linear index.
    #[inline]
    fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Get the cell at (x, y), or `None` out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Set the cell at (x, y). Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index_of(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Reset every cell to [`Cell::EMPTY`].
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Fill a rectangular region with one cell.
    pub fn fill(&mut self, area: Rect, cell: Cell) {
        for y in area.y..area.bottom().min(self.height) {
            for x in area.x..area.right().min(self.width) {
                self.set(x, y, cell);
            }
        }
    }

    /// Draw a string starting at (x, y), truncated to `max_width` cells.
    ///
    /// Wide graphemes advance the cursor by their display width; the
    /// trailing half of a wide char that would straddle the limit is
    /// dropped.
    pub fn draw_str(&mut self, x: u16, y: u16, text: &str, max_width: usize, fg: Rgb, bg: Rgb) {
        self.draw_str_mods(x, y, text, max_width, fg, bg, Modifiers::empty());
    }

    /// Like [`Surface::draw_str`] with explicit text modifiers.
    #[allow(clippy::too_many_arguments, clippy::cast_possible_truncation)]
    pub fn draw_str_mods(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        max_width: usize,
        fg: Rgb,
        bg: Rgb,
        mods: Modifiers,
    ) {
        let fitted = truncate(text, max_width, false);
        let mut col = x;
        for g in fitted.graphemes(true) {
            let gw = display_width(g) as u16;
            // Complex graphemes collapse to their first scalar; dialogs
            // render plain UI text, not arbitrary user terminal output.
            let ch = g.chars().next().unwrap_or(' ');
            self.set(col, y, Cell { ch, fg, bg, mods });
            if gw == 2 {
                // Continuation half of a wide char.
                self.set(col + 1, y, Cell { ch: '\0', fg, bg, mods });
            }
            col = col.saturating_add(gw.max(1));
        }
    }

    /// Draw a border around `area` with an optional centered title.
    pub fn draw_border(&mut self, area: Rect, style: BorderStyle, theme: &Theme, title: Option<&str>) {
        if area.width < 2 || area.height < 2 {
            return;
        }
        let [tl, hor, tr, ver, bl, br] = style.glyphs();
        let fg = theme.border_fg;
        let bg = theme.bg;
        let right = area.right() - 1;
        let bottom = area.bottom() - 1;

        for x in (area.x + 1)..right {
            self.set(x, area.y, Cell { ch: hor, fg, bg, mods: Modifiers::empty() });
            self.set(x, bottom, Cell { ch: hor, fg, bg, mods: Modifiers::empty() });
        }
        for y in (area.y + 1)..bottom {
            self.set(area.x, y, Cell { ch: ver, fg, bg, mods: Modifiers::empty() });
            self.set(right, y, Cell { ch: ver, fg, bg, mods: Modifiers::empty() });
        }
        self.set(area.x, area.y, Cell { ch: tl, fg, bg, mods: Modifiers::empty() });
        self.set(right, area.y, Cell { ch: tr, fg, bg, mods: Modifiers::empty() });
        self.set(area.x, bottom, Cell { ch: bl, fg, bg, mods: Modifiers::empty() });
        self.set(right, bottom, Cell { ch: br, fg, bg, mods: Modifiers::empty() });

        if let Some(title) = title {
            let interior = (area.width as usize).saturating_sub(4);
            let shown = truncate(title, interior, true);
            let tw = display_width(&shown);
            #[allow(clippy::cast_possible_truncation)]
            let tx = area.x + 1 + ((area.width as usize).saturating_sub(2 + tw) / 2) as u16;
            self.draw_str_mods(
                tx,
                area.y,
                &format!(" {shown} "),
                interior + 2,
                theme.title_fg,
                bg,
                Modifiers::BOLD,
            );
        }
    }

    /// Row contents as a plain string, continuation cells skipped.
    ///
    /// Used by tests to assert on rendered frames.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|c| c.ch != '\0')
            .map(|c| c.ch)
            .collect()
    }
}

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// All output is accumulated here, then flushed in a single `write()`
/// syscall to prevent terminal flickering.
pub struct AnsiBuffer {
    data: Vec<u8>,
}

impl AnsiBuffer {
    /// Create a buffer sized for a typical dialog frame (8KB).
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(8192),
        }
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Move cursor to (x, y) position (0-indexed, converted to ANSI).
    #[inline]
    #[allow(clippy::missing_panics_doc)]
    pub fn cursor_move(&mut self, x: u16, y: u16) {
        write!(self.data, "\x1b[{};{}H", y + 1, x + 1).unwrap();
    }

    /// Hide cursor.
    #[inline]
    pub fn cursor_hide(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25l");
    }

    /// Show cursor.
    #[inline]
    pub fn cursor_show(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25h");
    }

    /// Set foreground color (true color).
    #[inline]
    #[allow(clippy::missing_panics_doc)]
    pub fn set_fg(&mut self, color: Rgb) {
        write!(self.data, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b).unwrap();
    }

    /// Set background color (true color).
    #[inline]
    #[allow(clippy::missing_panics_doc)]
    pub fn set_bg(&mut self, color: Rgb) {
        write!(self.data, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b).unwrap();
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Serialize one surface region, moving the cursor per row and
    /// emitting color changes only when they differ from the previous
    /// cell.
    pub fn push_region(&mut self, surface: &Surface, area: Rect) {
        let mut last: Option<(Rgb, Rgb, Modifiers)> = None;
        for y in area.y..area.bottom().min(surface.height()) {
            self.cursor_move(area.x, y);
            for x in area.x..area.right().min(surface.width()) {
                let Some(cell) = surface.get(x, y) else { continue };
                if cell.ch == '\0' {
                    continue; // continuation half of a wide char
                }
                let key = (cell.fg, cell.bg, cell.mods);
                if last != Some(key) {
                    self.reset_attrs();
                    if cell.mods.contains(Modifiers::BOLD) {
                        self.data.extend_from_slice(b"\x1b[1m");
                    }
                    if cell.mods.contains(Modifiers::DIM) {
                        self.data.extend_from_slice(b"\x1b[2m");
                    }
                    if cell.mods.contains(Modifiers::UNDERLINE) {
                        self.data.extend_from_slice(b"\x1b[4m");
                    }
                    if cell.mods.contains(Modifiers::REVERSED) {
                        self.data.extend_from_slice(b"\x1b[7m");
                    }
                    self.set_fg(cell.fg);
                    self.set_bg(cell.bg);
                    last = Some(key);
                }
                let mut utf8 = [0u8; 4];
                self.data
                    .extend_from_slice(cell.ch.encode_utf8(&mut utf8).as_bytes());
            }
        }
        self.reset_attrs();
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for AnsiBuffer {
    fn default() -> Self {
        Self::new()
    }
}
