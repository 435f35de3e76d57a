//! Slider box: pick an integer from a bounded range.

use super::{close_rect, draw_frame, draw_text_window};
use crate::console::Console;
use crate::dispatch::{run_or_cancel, Dialog, DialogOutcome, Flow};
use crate::error::DialogError;
use crate::input::{KeyCode, KeyModifiers, PointerEvent};
use crate::layout::{Dims, Hitbox, Rect};
use crate::style::Theme;
use crate::surface::{Cell, Surface};
use crate::text::{display_width, natural_width, wrap};

/// Configuration for [`slider_box`].
#[derive(Debug, Clone, Default)]
pub struct SliderConfig {
    /// Optional box title.
    pub title: Option<String>,
    /// Color scheme.
    pub theme: Theme,
}

/// Slider position state: single-step moves wrap at the bounds.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SliderState {
    pub min: i64,
    pub max: i64,
    pub pos: i64,
}

impl SliderState {
    pub(crate) fn new(min: i64, max: i64, pos: i64) -> Self {
        Self {
            min,
            max,
            pos: pos.clamp(min, max),
        }
    }

    /// Decrement one step, wrapping `min - 1` to `max`.
    pub(crate) fn step_down(&mut self) {
        self.pos = if self.pos <= self.min { self.max } else { self.pos - 1 };
    }

    /// Increment one step, wrapping `max + 1` to `min`.
    pub(crate) fn step_up(&mut self) {
        self.pos = if self.pos >= self.max { self.min } else { self.pos + 1 };
    }
}

#[derive(Debug, Clone, Copy)]
enum Msg {
    StepDown,
    StepUp,
    Close,
}

struct SliderDialog<'a> {
    text: &'a str,
    config: &'a SliderConfig,
    state: SliderState,
}

impl SliderDialog<'_> {
    fn wrapped(&self, window_w: u16) -> Vec<String> {
        let cap = (window_w.saturating_sub(4).max(1)) as usize;
        wrap(self.text, natural_width(self.text).clamp(1, cap))
    }

    /// Rail row: `◀ ──────█────── ▶  value`.
    fn rail_row(dims: &Dims) -> u16 {
        dims.extra_top() + 1
    }

    fn arrow_cells(dims: &Dims) -> ((u16, u16), (u16, u16)) {
        let y = Self::rail_row(dims);
        (
            (dims.text_left(), y),
            (dims.text_left() + dims.max_render_width - 1, y),
        )
    }
}

impl Dialog for SliderDialog<'_> {
    type Value = i64;
    type Msg = Msg;

    fn layout(&self, window: (u16, u16)) -> Dims {
        let lines = self.wrapped(window.0);
        let width = lines
            .iter()
            .map(|l| display_width(l))
            .max()
            .unwrap_or(1)
            .max(24);
        // 2 extra rows: spacer + rail.
        Dims::compute(window.0, window.1, lines.len(), width, 2, 0)
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn render(&self, surface: &mut Surface, dims: &Dims) {
        let theme = &self.config.theme;
        draw_frame(surface, dims, theme, self.config.title.as_deref());
        let lines = self.wrapped(surface.width());
        draw_text_window(surface, dims, &lines, 0, theme);

        let y = Self::rail_row(dims);
        let left = dims.text_left();
        let value = format!(" {}", self.state.pos);
        let rail_w = (dims.max_render_width as usize)
            .saturating_sub(4 + display_width(&value))
            .max(1);

        surface.set(left, y, Cell::new('◀').with_fg(theme.arrow_fg).with_bg(theme.bg));
        let span = (self.state.max - self.state.min).max(1) as f64;
        let frac = (self.state.pos - self.state.min) as f64 / span;
        let knob = ((rail_w - 1) as f64 * frac).round() as usize;
        for i in 0..rail_w {
            let ch = if i == knob { '█' } else { '─' };
            surface.set(
                left + 2 + i as u16,
                y,
                Cell::new(ch).with_fg(theme.highlight_bg).with_bg(theme.bg),
            );
        }
        let right_arrow = left + dims.max_render_width - 1;
        surface.set(
            right_arrow,
            y,
            Cell::new('▶').with_fg(theme.arrow_fg).with_bg(theme.bg),
        );
        surface.draw_str(
            left + 2 + rail_w as u16,
            y,
            &value,
            display_width(&value),
            theme.text_fg,
            theme.bg,
        );
    }

    fn hitboxes(&self, dims: &Dims) -> Vec<Hitbox<Msg>> {
        let (down, up) = Self::arrow_cells(dims);
        vec![
            Hitbox::click(Rect::new(down.0, down.1, 1, 1), Msg::StepDown),
            Hitbox::click(Rect::new(up.0, up.1, 1, 1), Msg::StepUp),
            Hitbox::any_press(close_rect(dims), Msg::Close),
        ]
    }

    fn on_key(
        &mut self,
        _console: &mut dyn Console,
        code: KeyCode,
        _modifiers: KeyModifiers,
        _dims: &Dims,
    ) -> Result<Flow, DialogError> {
        Ok(match code {
            KeyCode::Left | KeyCode::Down => {
                self.state.step_down();
                Flow::Continue
            }
            KeyCode::Right | KeyCode::Up => {
                self.state.step_up();
                Flow::Continue
            }
            KeyCode::Home => {
                self.state.pos = self.state.min;
                Flow::Continue
            }
            KeyCode::End => {
                self.state.pos = self.state.max;
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
            Msg::StepDown => {
                self.state.step_down();
                Flow::Continue
            }
            Msg::StepUp => {
                self.state.step_up();
                Flow::Continue
            }
            Msg::Close => Flow::Cancel,
        })
    }

    fn finish(&mut self) -> i64 {
        self.state.pos
    }
}

/// Pick an integer in `[min, max]` starting at `initial`.
///
/// Single-step Left/Right wraps at the bounds; Escape yields a
/// cancelled outcome, leaving the caller's value untouched.
///
/// # Errors
///
/// Returns [`DialogError::InvalidRange`] when `min > max`, or
/// terminal-setup errors; in-loop failures cancel.
pub fn slider_box(
    console: &mut dyn Console,
    text: &str,
    min: i64,
    max: i64,
    initial: i64,
    config: &SliderConfig,
) -> Result<DialogOutcome<i64>, DialogError> {
    if min > max {
        return Err(DialogError::InvalidRange { min, max });
    }
    let mut dialog = SliderDialog {
        text,
        config,
        state: SliderState::new(min, max, initial),
    };
    run_or_cancel(console, &mut dialog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::TestConsole;
    use crate::input::Event;

    #[test]
    fn test_invalid_range_refused() {
        let mut con = TestConsole::new(80, 24, []);
        let err = slider_box(&mut con, "v", 5, 1, 3, &SliderConfig::default());
        assert!(matches!(err, Err(DialogError::InvalidRange { .. })));
    }

    #[test]
    fn test_single_step_wraps_both_ends() {
        let mut s = SliderState::new(0, 10, 10);
        s.step_up();
        assert_eq!(s.pos, 0);
        s.step_down();
        assert_eq!(s.pos, 10);
    }

    #[test]
    fn test_six_decrements_from_five_wrap_once() {
        // Six decrements from 5: 4, 3, 2, 1, 0, then wrap to 10.
        let mut events: Vec<Event> =
            std::iter::repeat(Event::key(KeyCode::Left)).take(6).collect();
        events.push(Event::key(KeyCode::Enter));
        let mut con = TestConsole::new(80, 24, events);
        let out = slider_box(&mut con, "v", 0, 10, 5, &SliderConfig::default()).unwrap();
        assert_eq!(out, DialogOutcome::Committed(10));
    }

    #[test]
    fn test_home_end_jump() {
        let mut con = TestConsole::new(80, 24, [
            Event::key(KeyCode::End),
            Event::key(KeyCode::Enter),
        ]);
        let out = slider_box(&mut con, "v", -3, 7, 0, &SliderConfig::default()).unwrap();
        assert_eq!(out, DialogOutcome::Committed(7));
    }

    #[test]
    fn test_escape_restores_initial() {
        let mut con = TestConsole::new(80, 24, [
            Event::key(KeyCode::Right),
            Event::key(KeyCode::Right),
            Event::key(KeyCode::Esc),
        ]);
        let out = slider_box(&mut con, "v", 0, 10, 4, &SliderConfig::default()).unwrap();
        assert_eq!(out.value_or(4), 4);
    }

    #[test]
    fn test_arrow_click_steps() {
        let config = SliderConfig::default();
        let dialog = SliderDialog {
            text: "v",
            config: &config,
            state: SliderState::new(0, 10, 5),
        };
        let dims = dialog.layout((80, 24));
        let (_, up) = SliderDialog::arrow_cells(&dims);
        let mut con = TestConsole::new(80, 24, [
            Event::click(up.0, up.1),
            Event::key(KeyCode::Enter),
        ]);
        let out = slider_box(&mut con, "v", 0, 10, 5, &config).unwrap();
        assert_eq!(out, DialogOutcome::Committed(6));
    }

    #[test]
    fn test_initial_clamped_into_range() {
        let mut con = TestConsole::new(80, 24, [Event::key(KeyCode::Enter)]);
        let out = slider_box(&mut con, "v", 0, 10, 99, &SliderConfig::default()).unwrap();
        assert_eq!(out, DialogOutcome::Committed(10));
    }
}
