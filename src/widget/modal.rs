//! Info boxes: modal scrollable text, one-shot messages, help overlay.

use super::{close_rect, draw_frame, draw_text_window, scroll_arrow_cells};
use crate::console::Console;
use crate::dispatch::{run_or_cancel, Dialog, DialogOutcome, Flow};
use crate::error::DialogError;
use crate::input::{KeyCode, KeyModifiers, PointerEvent};
use crate::keymap::{render_table, Keybinding};
use crate::layout::{Dims, Hitbox, Rect};
use crate::state::ScrollState;
use crate::style::Theme;
use crate::surface::Surface;
use crate::text::{natural_width, wrap};

/// Configuration for info and message boxes.
#[derive(Debug, Clone, Default)]
pub struct InfoBoxConfig {
    /// Optional box title.
    pub title: Option<String>,
    /// Color scheme.
    pub theme: Theme,
}

#[derive(Debug, Clone, Copy)]
enum Msg {
    ScrollUp,
    ScrollDown,
    Close,
}

struct InfoDialog<'a> {
    text: &'a str,
    config: &'a InfoBoxConfig,
    scroll: ScrollState,
}

impl InfoDialog<'_> {
    /// Wrap the text for the current window; pure function of size.
    fn wrapped(&self, window_w: u16) -> Vec<String> {
        let cap = (window_w.saturating_sub(4).max(1)) as usize;
        wrap(self.text, natural_width(self.text).clamp(1, cap))
    }
}

impl Dialog for InfoDialog<'_> {
    type Value = ();
    type Msg = Msg;

    fn layout(&self, window: (u16, u16)) -> Dims {
        let lines = self.wrapped(window.0);
        let width = lines.iter().map(|l| crate::text::display_width(l)).max().unwrap_or(1);
        Dims::compute(window.0, window.1, lines.len(), width, 0, 0)
    }

    fn render(&self, surface: &mut Surface, dims: &Dims) {
        draw_frame(surface, dims, &self.config.theme, self.config.title.as_deref());
        let lines = self.wrapped(surface.width());
        draw_text_window(surface, dims, &lines, self.scroll.idx, &self.config.theme);
    }

    fn hitboxes(&self, dims: &Dims) -> Vec<Hitbox<Msg>> {
        let (up, down) = scroll_arrow_cells(dims);
        vec![
            Hitbox::click(Rect::new(up.0, up.1, 1, 1), Msg::ScrollUp),
            Hitbox::click(Rect::new(down.0, down.1, 1, 1), Msg::ScrollDown),
            Hitbox::any_press(close_rect(dims), Msg::Close),
        ]
    }

    fn on_key(
        &mut self,
        _console: &mut dyn Console,
        code: KeyCode,
        _modifiers: KeyModifiers,
        dims: &Dims,
    ) -> Result<Flow, DialogError> {
        let total = dims.total_lines;
        let page = dims.max_text_height as usize;
        Ok(match code {
            KeyCode::Up => {
                self.scroll.line_up();
                Flow::Continue
            }
            KeyCode::Down => {
                self.scroll.line_down(total, page);
                Flow::Continue
            }
            KeyCode::PageUp => {
                self.scroll.page_up(page);
                Flow::Continue
            }
            KeyCode::PageDown => {
                self.scroll.page_down(total, page);
                Flow::Continue
            }
            KeyCode::Home => {
                self.scroll.home();
                Flow::Continue
            }
            KeyCode::End => {
                self.scroll.end(total, page);
                Flow::Continue
            }
            KeyCode::Enter => Flow::Commit,
            KeyCode::Esc => Flow::Cancel,
            _ => Flow::Continue,
        })
    }

    fn on_msg(
        &mut self,
        _console: &mut dyn Console,
        msg: Msg,
        _pointer: &PointerEvent,
        dims: &Dims,
    ) -> Result<Flow, DialogError> {
        Ok(match msg {
            Msg::ScrollUp => {
                self.scroll.line_up();
                Flow::Continue
            }
            Msg::ScrollDown => {
                self.scroll
                    .line_down(dims.total_lines, dims.max_text_height as usize);
                Flow::Continue
            }
            Msg::Close => Flow::Cancel,
        })
    }

    fn finish(&mut self) {}
}

/// Show a modal scrollable text box; blocks until dismissed.
///
/// # Errors
///
/// Returns terminal-setup errors; in-loop failures are logged and
/// reported as a cancelled outcome.
pub fn info_box(
    console: &mut dyn Console,
    text: &str,
    config: &InfoBoxConfig,
) -> Result<DialogOutcome<()>, DialogError> {
    let mut dialog = InfoDialog {
        text,
        config,
        scroll: ScrollState::new(),
    };
    run_or_cancel(console, &mut dialog)
}

/// Render a box once and return without blocking.
///
/// Non-modal flavor: the caller owns when (and whether) the region
/// gets erased, typically by the next full redraw.
///
/// # Errors
///
/// Returns an error if presenting the frame fails.
pub fn message_box(
    console: &mut dyn Console,
    text: &str,
    config: &InfoBoxConfig,
) -> Result<(), DialogError> {
    let dialog = InfoDialog {
        text,
        config,
        scroll: ScrollState::new(),
    };
    let (w, h) = console.size();
    let dims = dialog.layout((w, h));
    let mut surface = Surface::new(w, h);
    dialog.render(&mut surface, &dims);
    console.present(&surface, dims.border_rect())?;
    Ok(())
}

/// Show a keybinding reference as a modal box.
///
/// # Errors
///
/// Same contract as [`info_box`].
pub fn help_box(
    console: &mut dyn Console,
    bindings: &[Keybinding],
    theme: &Theme,
) -> Result<DialogOutcome<()>, DialogError> {
    let config = InfoBoxConfig {
        title: Some("Keys".to_owned()),
        theme: theme.clone(),
    };
    info_box(console, render_table(bindings).trim_end(), &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::TestConsole;
    use crate::input::Event;
    use crate::keymap::info_box_keys;

    fn long_text() -> String {
        (1..=30).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn test_info_box_enter_dismisses() {
        let mut con = TestConsole::new(80, 24, [Event::key(KeyCode::Enter)]);
        let out = info_box(&mut con, "hello", &InfoBoxConfig::default()).unwrap();
        assert_eq!(out, DialogOutcome::Committed(()));
    }

    #[test]
    fn test_info_box_renders_text() {
        let mut con = TestConsole::new(80, 24, [Event::key(KeyCode::Esc)]);
        let _ = info_box(&mut con, "hello world", &InfoBoxConfig::default()).unwrap();
        let frame = con.last_frame().unwrap();
        let all: String = (0..24).map(|y| frame.row_text(y)).collect();
        assert!(all.contains("hello world"));
    }

    #[test]
    fn test_info_box_scrolls_and_clamps() {
        let text = long_text();
        let mut events = vec![Event::key(KeyCode::End)];
        // Hammer past the end; clamping keeps the last line visible.
        events.extend(std::iter::repeat(Event::key(KeyCode::Down)).take(10));
        events.push(Event::key(KeyCode::Esc));
        let mut con = TestConsole::new(40, 12, events);
        let _ = info_box(&mut con, &text, &InfoBoxConfig::default()).unwrap();
        let frame = con.last_frame().unwrap();
        let all: String = (0..12).map(|y| frame.row_text(y)).collect();
        assert!(all.contains("line 30"));
        assert!(!all.contains("line 1 "));
    }

    #[test]
    fn test_info_box_scroll_arrow_click() {
        let text = long_text();
        let dialog = InfoDialog {
            text: &text,
            config: &InfoBoxConfig::default(),
            scroll: ScrollState::new(),
        };
        let dims = dialog.layout((40, 12));
        let (_, down) = scroll_arrow_cells(&dims);
        let mut con = TestConsole::new(
            40,
            12,
            [Event::click(down.0, down.1), Event::key(KeyCode::Esc)],
        );
        let _ = info_box(&mut con, &text, &InfoBoxConfig::default()).unwrap();
        let frame = con.last_frame().unwrap();
        let all: String = (0..12).map(|y| frame.row_text(y)).collect();
        // One line scrolled: line 1 gone, line 2 now first.
        assert!(!all.contains("line 1"));
        assert!(all.contains("line 2"));
    }

    #[test]
    fn test_close_button_cancels() {
        let dialog = InfoDialog {
            text: "hi",
            config: &InfoBoxConfig::default(),
            scroll: ScrollState::new(),
        };
        let dims = dialog.layout((80, 24));
        let (cx, cy) = super::super::close_cell(&dims);
        let mut con = TestConsole::new(80, 24, [Event::right_click(cx, cy)]);
        let out = info_box(&mut con, "hi", &InfoBoxConfig::default()).unwrap();
        assert!(out.is_cancelled());
    }

    #[test]
    fn test_message_box_does_not_block() {
        let mut con = TestConsole::new(80, 24, []);
        message_box(&mut con, "notice", &InfoBoxConfig::default()).unwrap();
        assert_eq!(con.frames.len(), 1);
    }

    #[test]
    fn test_help_box_lists_bindings() {
        let mut con = TestConsole::new(80, 24, [Event::key(KeyCode::Esc)]);
        let _ = help_box(&mut con, &info_box_keys(), &Theme::default()).unwrap();
        let frame = con.last_frame().unwrap();
        let all: String = (0..24).map(|y| frame.row_text(y)).collect();
        assert!(all.contains("dismiss"));
    }
}
