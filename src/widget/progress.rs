//! Progress box: a caller-driven modal progress indicator.
//!
//! Unlike the interactive dialogs, a progress box never blocks on
//! input. The caller opens it, calls [`ProgressBox::update`] as work
//! advances, and closes it when done; each update repaints the frame
//! in place.

use super::{draw_frame, draw_text_window};
use crate::console::Console;
use crate::error::DialogError;
use crate::layout::Dims;
use crate::style::Theme;
use crate::surface::Surface;
use crate::text::{display_width, natural_width, wrap};

/// Visual style for the bar fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressStyle {
    /// Classic solid bar: ████████░░░░
    Solid,
    /// ASCII style: ========
    Ascii,
    /// Block characters: ▓▓▓▓▓▓░░░░
    #[default]
    Block,
}

impl ProgressStyle {
    const fn chars(self) -> (char, char) {
        match self {
            Self::Solid => ('█', '░'),
            Self::Ascii => ('=', ' '),
            Self::Block => ('▓', '░'),
        }
    }
}

/// Configuration for [`ProgressBox`].
#[derive(Debug, Clone, Default)]
pub struct ProgressBoxConfig {
    /// Optional box title.
    pub title: Option<String>,
    /// Bar fill style.
    pub style: ProgressStyle,
    /// Whether to append a percentage readout after the bar.
    pub show_percentage: bool,
    /// Color scheme.
    pub theme: Theme,
}

/// An open progress box bound to a console.
///
/// Dropping the box without [`ProgressBox::close`] leaks the acquired
/// console; always close on the success path. Errors from `update` can
/// be ignored by callers that treat progress display as best-effort.
pub struct ProgressBox<'a> {
    console: &'a mut dyn Console,
    text: String,
    config: ProgressBoxConfig,
    progress: f32,
    owned: bool,
}

impl<'a> ProgressBox<'a> {
    /// Open a progress box over `text` at zero progress.
    ///
    /// # Errors
    ///
    /// Returns terminal-setup or first-paint failures.
    pub fn open(
        console: &'a mut dyn Console,
        text: impl Into<String>,
        config: ProgressBoxConfig,
    ) -> Result<Self, DialogError> {
        let owned = console.acquire()?;
        let mut progress_box = Self {
            console,
            text: text.into(),
            config,
            progress: 0.0,
            owned,
        };
        if let Err(e) = progress_box.paint() {
            let _ = progress_box.console.release(progress_box.owned);
            return Err(e);
        }
        Ok(progress_box)
    }

    /// Current progress fraction, always within `0.0..=1.0`.
    pub const fn progress(&self) -> f32 {
        self.progress
    }

    /// Set the fraction complete (clamped) and repaint.
    ///
    /// # Errors
    ///
    /// Returns write failures to the underlying console.
    pub fn update(&mut self, progress: f32) -> Result<(), DialogError> {
        self.progress = progress.clamp(0.0, 1.0);
        self.paint()
    }

    /// Replace the message text and repaint.
    ///
    /// # Errors
    ///
    /// Returns write failures to the underlying console.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), DialogError> {
        self.text = text.into();
        self.paint()
    }

    /// Erase the box and restore the console.
    ///
    /// # Errors
    ///
    /// Returns write failures during teardown; the console is released
    /// either way.
    pub fn close(self) -> Result<(), DialogError> {
        let dims = self.dims();
        let erased = self.console.erase(dims.border_rect());
        let released = self.console.release(self.owned);
        erased?;
        released?;
        Ok(())
    }

    fn wrapped(&self, window_w: u16) -> Vec<String> {
        let cap = (window_w.saturating_sub(4).max(1)) as usize;
        wrap(&self.text, natural_width(&self.text).clamp(1, cap))
    }

    fn dims(&self) -> Dims {
        let (w, h) = self.console.size();
        let lines = self.wrapped(w);
        let width = lines
            .iter()
            .map(|l| display_width(l))
            .max()
            .unwrap_or(1)
            .max(20);
        // 2 extra rows: spacer + bar row.
        Dims::compute(w, h, lines.len(), width, 2, 0)
    }

    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    #[allow(clippy::cast_precision_loss)]
    fn paint(&mut self) -> Result<(), DialogError> {
        let (w, h) = self.console.size();
        let dims = self.dims();
        let mut surface = Surface::new(w, h);
        let theme = &self.config.theme;
        draw_frame(&mut surface, &dims, theme, self.config.title.as_deref());
        let lines = self.wrapped(w);
        draw_text_window(&mut surface, &dims, &lines, 0, theme);

        let y = dims.extra_top() + 1;
        let pct_len: usize = if self.config.show_percentage { 5 } else { 0 };
        let bar_width = (dims.max_render_width as usize).saturating_sub(pct_len);
        let (filled_char, empty_char) = self.config.style.chars();
        let filled = (self.progress * bar_width as f32).round() as usize;

        let mut bar = String::with_capacity(bar_width + pct_len);
        for i in 0..bar_width {
            bar.push(if i < filled { filled_char } else { empty_char });
        }
        if self.config.show_percentage {
            bar.push_str(&format!(" {:>3}%", (self.progress * 100.0).round() as u32));
        }
        surface.draw_str(
            dims.text_left(),
            y,
            &bar,
            dims.max_render_width as usize,
            theme.highlight_fg,
            theme.bg,
        );

        self.console.present(&surface, dims.border_rect())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::TestConsole;

    #[test]
    fn test_progress_clamps() {
        let mut con = TestConsole::new(80, 24, []);
        let mut pb =
            ProgressBox::open(&mut con, "Working", ProgressBoxConfig::default()).unwrap();
        pb.update(1.5).unwrap();
        assert!((pb.progress() - 1.0).abs() < f32::EPSILON);
        pb.update(-0.5).unwrap();
        assert!(pb.progress().abs() < f32::EPSILON);
        pb.close().unwrap();
    }

    #[test]
    fn test_each_update_paints() {
        let mut con = TestConsole::new(80, 24, []);
        {
            let mut pb =
                ProgressBox::open(&mut con, "Copying files", ProgressBoxConfig::default())
                    .unwrap();
            pb.update(0.25).unwrap();
            pb.update(0.5).unwrap();
            pb.close().unwrap();
        }
        // Open paints once, each update once more.
        assert_eq!(con.frames.len(), 3);
        assert!((0..24).any(|r| con.frames[2].row_text(r).contains('▓')));
    }

    #[test]
    fn test_percentage_readout() {
        let mut con = TestConsole::new(80, 24, []);
        let config = ProgressBoxConfig {
            show_percentage: true,
            ..ProgressBoxConfig::default()
        };
        let mut pb = ProgressBox::open(&mut con, "Working", config).unwrap();
        pb.update(0.5).unwrap();
        pb.close().unwrap();
        // `close` erases without presenting, so the last frame is the
        // 0.5 update painted above.
        let all: String = (0..24)
            .map(|r| con.frames.last().unwrap().row_text(r))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(all.contains("50%"));
    }

    #[test]
    fn test_close_releases_console() {
        let mut con = TestConsole::new(80, 24, []);
        let pb = ProgressBox::open(&mut con, "Working", ProgressBoxConfig::default()).unwrap();
        pb.close().unwrap();
        assert_eq!(con.acquire_depth, 0);
    }
}
