//! Button-choice box: a message with a horizontal button bar.

use super::{close_rect, draw_button, draw_frame, draw_text_window};
use crate::console::Console;
use crate::dispatch::{run_or_cancel, Dialog, DialogOutcome, Flow};
use crate::error::DialogError;
use crate::input::{KeyCode, KeyModifiers, PointerEvent};
use crate::layout::{Dims, Hitbox, Rect};
use crate::style::Theme;
use crate::surface::Surface;
use crate::text::{display_width, natural_width, wrap};

/// Configuration for [`choice_box`].
#[derive(Debug, Clone, Default)]
pub struct ChoiceBoxConfig {
    /// Optional box title.
    pub title: Option<String>,
    /// Color scheme.
    pub theme: Theme,
    /// Button receiving initial focus.
    pub default_button: usize,
}

#[derive(Debug, Clone, Copy)]
enum Msg {
    Press(usize),
    Focus(usize),
    Close,
}

struct ChoiceBoxDialog<'a> {
    text: &'a str,
    buttons: &'a [&'a str],
    config: &'a ChoiceBoxConfig,
    focused: usize,
}

impl ChoiceBoxDialog<'_> {
    fn wrapped(&self, window_w: u16) -> Vec<String> {
        let cap = (window_w.saturating_sub(4).max(1)) as usize;
        wrap(self.text, natural_width(self.text).clamp(1, cap))
    }

    /// Total width of the rendered button bar.
    fn bar_width(&self) -> usize {
        let labels: usize = self
            .buttons
            .iter()
            .map(|b| display_width(b) + 4) // "[ " + label + " ]"
            .sum();
        labels + self.buttons.len().saturating_sub(1) // 1 gap between buttons
    }

    /// Hit rect of each button for the current dims.
    #[allow(clippy::cast_possible_truncation)]
    fn button_rects(&self, dims: &Dims) -> Vec<Rect> {
        let y = dims.extra_top() + 1;
        let mut x = dims.text_left()
            + (dims.max_render_width.saturating_sub(self.bar_width() as u16)) / 2;
        self.buttons
            .iter()
            .map(|label| {
                let w = (display_width(label) + 4) as u16;
                let r = Rect::new(x, y, w, 1);
                x += w + 1;
                r
            })
            .collect()
    }
}

impl Dialog for ChoiceBoxDialog<'_> {
    type Value = usize;
    type Msg = Msg;

    fn layout(&self, window: (u16, u16)) -> Dims {
        let lines = self.wrapped(window.0);
        let width = lines
            .iter()
            .map(|l| display_width(l))
            .max()
            .unwrap_or(1)
            .max(self.bar_width());
        // 2 extra rows: a blank spacer and the button bar.
        Dims::compute(window.0, window.1, lines.len(), width, 2, 0)
    }

    fn render(&self, surface: &mut Surface, dims: &Dims) {
        draw_frame(surface, dims, &self.config.theme, self.config.title.as_deref());
        let lines = self.wrapped(surface.width());
        draw_text_window(surface, dims, &lines, 0, &self.config.theme);
        for (i, (label, rect)) in self.buttons.iter().zip(self.button_rects(dims)).enumerate() {
            draw_button(surface, rect.x, rect.y, label, i == self.focused, &self.config.theme);
        }
    }

    fn hitboxes(&self, dims: &Dims) -> Vec<Hitbox<Msg>> {
        let mut boxes: Vec<Hitbox<Msg>> = self
            .button_rects(dims)
            .into_iter()
            .enumerate()
            .map(|(i, r)| Hitbox::click(r, Msg::Press(i)))
            .collect();
        // Moving the pointer over a button shifts focus without
        // pressing it.
        boxes.extend(self.button_rects(dims).into_iter().enumerate().map(|(i, r)| {
            Hitbox {
                area: r,
                button: None,
                kind: Some(crate::input::PointerKind::Move),
                msg: Msg::Focus(i),
            }
        }));
        boxes.push(Hitbox::any_press(close_rect(dims), Msg::Close));
        boxes
    }

    fn on_key(
        &mut self,
        _console: &mut dyn Console,
        code: KeyCode,
        modifiers: KeyModifiers,
        _dims: &Dims,
    ) -> Result<Flow, DialogError> {
        let n = self.buttons.len();
        Ok(match code {
            KeyCode::Left | KeyCode::BackTab => {
                self.focused = (self.focused + n - 1) % n;
                Flow::Continue
            }
            KeyCode::Right => {
                self.focused = (self.focused + 1) % n;
                Flow::Continue
            }
            KeyCode::Tab => {
                self.focused = if modifiers.shift {
                    (self.focused + n - 1) % n
                } else {
                    (self.focused + 1) % n
                };
                Flow::Continue
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // Digit keys jump straight to a button, 1-based.
                let i = (c as usize - '0' as usize).wrapping_sub(1);
                if i < n {
                    self.focused = i;
                }
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
        _dims: &Dims,
    ) -> Result<Flow, DialogError> {
        Ok(match msg {
            Msg::Press(i) => {
                self.focused = i;
                Flow::Commit
            }
            Msg::Focus(i) => {
                self.focused = i;
                Flow::Continue
            }
            Msg::Close => Flow::Cancel,
        })
    }

    fn finish(&mut self) -> usize {
        self.focused
    }
}

/// Show a message with a row of buttons; returns the pressed index.
///
/// # Errors
///
/// Returns [`DialogError::EmptyChoiceSet`] for an empty button list,
/// or terminal-setup errors; in-loop failures cancel.
pub fn choice_box(
    console: &mut dyn Console,
    text: &str,
    buttons: &[&str],
    config: &ChoiceBoxConfig,
) -> Result<DialogOutcome<usize>, DialogError> {
    if buttons.is_empty() {
        return Err(DialogError::EmptyChoiceSet);
    }
    let mut dialog = ChoiceBoxDialog {
        text,
        buttons,
        config,
        focused: config.default_button.min(buttons.len() - 1),
    };
    run_or_cancel(console, &mut dialog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::TestConsole;
    use crate::input::Event;

    const BUTTONS: [&str; 3] = ["Yes", "No", "Maybe"];

    #[test]
    fn test_empty_buttons_refused() {
        let mut con = TestConsole::new(80, 24, []);
        let err = choice_box(&mut con, "?", &[], &ChoiceBoxConfig::default());
        assert!(matches!(err, Err(DialogError::EmptyChoiceSet)));
    }

    #[test]
    fn test_arrow_cycle_and_commit() {
        let mut con = TestConsole::new(80, 24, [
            Event::key(KeyCode::Right),
            Event::key(KeyCode::Right),
            Event::key(KeyCode::Enter),
        ]);
        let out = choice_box(&mut con, "pick", &BUTTONS, &ChoiceBoxConfig::default()).unwrap();
        assert_eq!(out, DialogOutcome::Committed(2));
    }

    #[test]
    fn test_cycle_wraps() {
        let mut con = TestConsole::new(80, 24, [
            Event::key(KeyCode::Left),
            Event::key(KeyCode::Enter),
        ]);
        let out = choice_box(&mut con, "pick", &BUTTONS, &ChoiceBoxConfig::default()).unwrap();
        assert_eq!(out, DialogOutcome::Committed(2));
    }

    #[test]
    fn test_digit_jump() {
        let mut con = TestConsole::new(80, 24, [
            Event::key(KeyCode::Char('2')),
            Event::key(KeyCode::Enter),
        ]);
        let out = choice_box(&mut con, "pick", &BUTTONS, &ChoiceBoxConfig::default()).unwrap();
        assert_eq!(out, DialogOutcome::Committed(1));
    }

    #[test]
    fn test_click_presses_button() {
        let config = ChoiceBoxConfig::default();
        let dialog = ChoiceBoxDialog {
            text: "pick",
            buttons: &BUTTONS,
            config: &config,
            focused: 0,
        };
        let dims = dialog.layout((80, 24));
        let rects = dialog.button_rects(&dims);
        let target = rects[1];
        let mut con = TestConsole::new(80, 24, [Event::click(target.x + 1, target.y)]);
        let out = choice_box(&mut con, "pick", &BUTTONS, &config).unwrap();
        assert_eq!(out, DialogOutcome::Committed(1));
    }

    #[test]
    fn test_escape_cancels() {
        let mut con = TestConsole::new(80, 24, [Event::key(KeyCode::Esc)]);
        let out = choice_box(&mut con, "pick", &BUTTONS, &ChoiceBoxConfig::default()).unwrap();
        assert!(out.is_cancelled());
    }
}
