//! Text input box: a prompt with a single-line edit field.

use super::{close_rect, draw_frame, draw_text_window};
use crate::console::Console;
use crate::dispatch::{run_or_cancel, Dialog, DialogOutcome, Flow};
use crate::error::DialogError;
use crate::input::{KeyCode, KeyModifiers, PointerEvent};
use crate::layout::{Dims, Hitbox, Rect};
use crate::style::{Modifiers, Theme};
use crate::surface::Surface;
use crate::text::{display_width, natural_width, wrap};

/// Configuration for [`input_box`].
#[derive(Debug, Clone)]
pub struct InputBoxConfig {
    /// Optional box title.
    pub title: Option<String>,
    /// Color scheme.
    pub theme: Theme,
    /// Prompt prefix drawn before the edit field.
    pub prompt: String,
}

impl Default for InputBoxConfig {
    fn default() -> Self {
        Self {
            title: None,
            theme: Theme::default(),
            prompt: "> ".to_owned(),
        }
    }
}

/// Single-line edit state: content plus a byte-offset cursor kept on
/// char boundaries.
#[derive(Debug, Clone, Default)]
pub(crate) struct EditLine {
    content: String,
    cursor: usize,
}

impl EditLine {
    pub(crate) fn new(initial: &str) -> Self {
        Self {
            content: initial.to_owned(),
            cursor: initial.len(),
        }
    }

    pub(crate) fn content(&self) -> &str {
        &self.content
    }

    pub(crate) fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.content)
    }

    /// Cursor position in chars, for rendering.
    pub(crate) fn cursor_chars(&self) -> usize {
        self.content[..self.cursor].chars().count()
    }

    pub(crate) fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub(crate) fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.content[..self.cursor]
                .char_indices()
                .last()
                .map_or(0, |(i, _)| i);
            self.content.remove(prev);
            self.cursor = prev;
        }
    }

    pub(crate) fn delete(&mut self) {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
        }
    }

    pub(crate) fn left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.content[..self.cursor]
                .char_indices()
                .last()
                .map_or(0, |(i, _)| i);
        }
    }

    pub(crate) fn right(&mut self) {
        if self.cursor < self.content.len() {
            if let Some(c) = self.content[self.cursor..].chars().next() {
                self.cursor += c.len_utf8();
            }
        }
    }

    pub(crate) fn home(&mut self) {
        self.cursor = 0;
    }

    pub(crate) fn end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Apply a key press; returns `false` for keys this editor does
    /// not handle.
    pub(crate) fn on_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char(c) if !modifiers.control && !modifiers.alt => self.insert(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.left(),
            KeyCode::Right => self.right(),
            KeyCode::Home => self.home(),
            KeyCode::End => self.end(),
            _ => return false,
        }
        true
    }
}

#[derive(Debug, Clone, Copy)]
enum Msg {
    Close,
}

struct InputDialog<'a> {
    text: &'a str,
    config: &'a InputBoxConfig,
    edit: EditLine,
}

impl InputDialog<'_> {
    fn wrapped(&self, window_w: u16) -> Vec<String> {
        let cap = (window_w.saturating_sub(4).max(1)) as usize;
        wrap(self.text, natural_width(self.text).clamp(1, cap))
    }
}

impl Dialog for InputDialog<'_> {
    type Value = String;
    type Msg = Msg;

    fn layout(&self, window: (u16, u16)) -> Dims {
        let lines = self.wrapped(window.0);
        let width = lines
            .iter()
            .map(|l| display_width(l))
            .max()
            .unwrap_or(1)
            .max(display_width(&self.config.prompt) + display_width(self.edit.content()) + 2)
            .max(20);
        // 2 extra rows: spacer + edit field.
        Dims::compute(window.0, window.1, lines.len(), width, 2, 0)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render(&self, surface: &mut Surface, dims: &Dims) {
        let theme = &self.config.theme;
        draw_frame(surface, dims, theme, self.config.title.as_deref());
        let lines = self.wrapped(surface.width());
        draw_text_window(surface, dims, &lines, 0, theme);

        let y = dims.extra_top() + 1;
        let x = dims.text_left();
        let width = dims.max_render_width as usize;
        surface.draw_str(x, y, &self.config.prompt, width, theme.arrow_fg, theme.bg);

        let prompt_w = display_width(&self.config.prompt) as u16;
        let field_w = width.saturating_sub(prompt_w as usize);
        let cursor = self.edit.cursor_chars();
        // Keep the cursor visible by sliding the field window.
        let skip = cursor.saturating_sub(field_w.saturating_sub(1));
        let shown: String = self.edit.content().chars().skip(skip).collect();
        surface.draw_str(x + prompt_w, y, &shown, field_w, theme.text_fg, theme.bg);

        let cursor_col = x + prompt_w + (cursor - skip) as u16;
        if let Some(cell) = surface.get(cursor_col, y).copied() {
            surface.set(cursor_col, y, cell.with_mods(Modifiers::REVERSED));
        }
    }

    fn hitboxes(&self, dims: &Dims) -> Vec<Hitbox<Msg>> {
        vec![Hitbox::any_press(close_rect(dims), Msg::Close)]
    }

    fn on_key(
        &mut self,
        _console: &mut dyn Console,
        code: KeyCode,
        modifiers: KeyModifiers,
        _dims: &Dims,
    ) -> Result<Flow, DialogError> {
        Ok(match code {
            KeyCode::Enter => Flow::Commit,
            KeyCode::Esc => Flow::Cancel,
            _ => {
                self.edit.on_key(code, modifiers);
                Flow::Continue
            }
        })
    }

    fn on_msg(
        &mut self,
        _console: &mut dyn Console,
        msg: Msg,
        _pointer: &PointerEvent,
        _dims: &Dims,
    ) -> Result<Flow, DialogError> {
        match msg {
            Msg::Close => Ok(Flow::Cancel),
        }
    }

    fn finish(&mut self) -> String {
        self.edit.take()
    }
}

/// Prompt for a line of text; returns the committed string.
///
/// Escape returns a cancelled outcome; the caller keeps its initial
/// value.
///
/// # Errors
///
/// Returns terminal-setup errors; in-loop failures cancel.
pub fn input_box(
    console: &mut dyn Console,
    text: &str,
    initial: &str,
    config: &InputBoxConfig,
) -> Result<DialogOutcome<String>, DialogError> {
    let mut dialog = InputDialog {
        text,
        config,
        edit: EditLine::new(initial),
    };
    run_or_cancel(console, &mut dialog)
}
