//! Date and time pickers with per-field focus.
//!
//! Tab/Shift+Tab cycle the focused field; Up/Down adjust it with
//! single-step wrap-around. Changing the month or year clamps the day
//! to the last valid day of the target month (2024-02-29 with the
//! month stepped back lands on 2024-01-29; stepped to a non-leap
//! February it lands on the 28th).

use super::{close_rect, draw_frame, draw_text_window};
use crate::console::Console;
use crate::dispatch::{run_or_cancel, Dialog, DialogOutcome, Flow};
use crate::error::DialogError;
use crate::input::{KeyCode, KeyModifiers, PointerEvent};
use crate::layout::{Dims, Hitbox, Rect};
use crate::style::{Modifiers, Theme};
use crate::surface::Surface;
use crate::text::{display_width, natural_width, wrap};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

/// Configuration for [`date_box`] and [`time_box`].
#[derive(Debug, Clone, Default)]
pub struct DateTimeConfig {
    /// Optional box title.
    pub title: Option<String>,
    /// Color scheme.
    pub theme: Theme,
}

/// Last valid day of `(year, month)`.
fn last_day(year: i32, month: u32) -> u32 {
    let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|d| d.pred_opt())
        .map_or(28, |d| d.day())
}

/// Mutable date fields for one picker invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DateState {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateState {
    pub(crate) fn from_date(d: NaiveDate) -> Self {
        Self {
            year: d.year(),
            month: d.month(),
            day: d.day(),
        }
    }

    /// Always valid by construction: the day is re-clamped after every
    /// month/year mutation.
    pub(crate) fn to_date(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .unwrap_or_default()
    }

    fn clamp_day(&mut self) {
        self.day = self.day.min(last_day(self.year, self.month));
    }

    pub(crate) fn adjust(&mut self, field: usize, up: bool) {
        match field {
            0 => {
                self.year = if up {
                    (self.year + 1).min(9999)
                } else {
                    (self.year - 1).max(1)
                };
                self.clamp_day();
            }
            1 => {
                self.month = if up {
                    if self.month == 12 { 1 } else { self.month + 1 }
                } else if self.month == 1 {
                    12
                } else {
                    self.month - 1
                };
                self.clamp_day();
            }
            _ => {
                let last = last_day(self.year, self.month);
                self.day = if up {
                    if self.day >= last { 1 } else { self.day + 1 }
                } else if self.day <= 1 {
                    last
                } else {
                    self.day - 1
                };
            }
        }
    }
}

/// Mutable time fields for one picker invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TimeState {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeState {
    pub(crate) fn from_time(t: NaiveTime) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
            second: t.second(),
        }
    }

    pub(crate) fn to_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, self.second)
            .unwrap_or_default()
    }

    pub(crate) fn adjust(&mut self, field: usize, up: bool) {
        let wrap = |v: u32, max: u32, up: bool| {
            if up {
                if v >= max { 0 } else { v + 1 }
            } else if v == 0 {
                max
            } else {
                v - 1
            }
        };
        match field {
            0 => self.hour = wrap(self.hour, 23, up),
            1 => self.minute = wrap(self.minute, 59, up),
            _ => self.second = wrap(self.second, 59, up),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Msg {
    Focus(usize),
    Close,
}

/// Shared picker shell: three numeric fields, one focused.
struct FieldDialog<'a, S> {
    text: &'a str,
    config: &'a DateTimeConfig,
    state: S,
    focus: usize,
    render_fields: fn(&S) -> [String; 3],
    adjust: fn(&mut S, usize, bool),
    separator: char,
}

impl<S> FieldDialog<'_, S> {
    fn wrapped(&self, window_w: u16) -> Vec<String> {
        let cap = (window_w.saturating_sub(4).max(1)) as usize;
        wrap(self.text, natural_width(self.text).clamp(1, cap))
    }

    fn field_row(dims: &Dims) -> u16 {
        dims.extra_top() + 1
    }

    /// Rects of the three fields, centered on the field row.
    #[allow(clippy::cast_possible_truncation)]
    fn field_rects(&self, dims: &Dims) -> [Rect; 3] {
        let fields = (self.render_fields)(&self.state);
        let total: usize =
            fields.iter().map(|f| display_width(f)).sum::<usize>() + 2 * 3; // " x " separators
        let y = Self::field_row(dims);
        let mut x = dims.text_left()
            + (dims.max_render_width.saturating_sub(total as u16)) / 2;
        let mut rects = [Rect::ZERO; 3];
        for (i, f) in fields.iter().enumerate() {
            let w = display_width(f) as u16;
            rects[i] = Rect::new(x, y, w, 1);
            x += w + 3;
        }
        rects
    }
}

impl<S: Copy> Dialog for FieldDialog<'_, S> {
    type Value = S;
    type Msg = Msg;

    fn layout(&self, window: (u16, u16)) -> Dims {
        let lines = self.wrapped(window.0);
        let width = lines
            .iter()
            .map(|l| display_width(l))
            .max()
            .unwrap_or(1)
            .max(22);
        // 2 extra rows: spacer + field row.
        Dims::compute(window.0, window.1, lines.len(), width, 2, 0)
    }

    fn render(&self, surface: &mut Surface, dims: &Dims) {
        let theme = &self.config.theme;
        draw_frame(surface, dims, theme, self.config.title.as_deref());
        let lines = self.wrapped(surface.width());
        draw_text_window(surface, dims, &lines, 0, theme);

        let fields = (self.render_fields)(&self.state);
        let rects = self.field_rects(dims);
        for (i, (field, rect)) in fields.iter().zip(rects).enumerate() {
            let (fg, bg, mods) = if i == self.focus {
                (theme.highlight_fg, theme.highlight_bg, Modifiers::BOLD)
            } else {
                (theme.text_fg, theme.bg, Modifiers::empty())
            };
            surface.draw_str_mods(rect.x, rect.y, field, rect.width as usize, fg, bg, mods);
            if i < 2 {
                surface.draw_str(
                    rect.right() + 1,
                    rect.y,
                    &self.separator.to_string(),
                    1,
                    theme.text_fg,
                    theme.bg,
                );
            }
        }
    }

    fn hitboxes(&self, dims: &Dims) -> Vec<Hitbox<Msg>> {
        let mut boxes: Vec<Hitbox<Msg>> = self
            .field_rects(dims)
            .into_iter()
            .enumerate()
            .map(|(i, r)| Hitbox::click(r, Msg::Focus(i)))
            .collect();
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
        Ok(match code {
            KeyCode::Tab if modifiers.shift => {
                self.focus = (self.focus + 2) % 3;
                Flow::Continue
            }
            KeyCode::Tab | KeyCode::Right => {
                self.focus = (self.focus + 1) % 3;
                Flow::Continue
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.focus = (self.focus + 2) % 3;
                Flow::Continue
            }
            KeyCode::Up => {
                (self.adjust)(&mut self.state, self.focus, true);
                Flow::Continue
            }
            KeyCode::Down => {
                (self.adjust)(&mut self.state, self.focus, false);
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
            Msg::Focus(i) => {
                self.focus = i;
                Flow::Continue
            }
            Msg::Close => Flow::Cancel,
        })
    }

    fn finish(&mut self) -> S {
        self.state
    }
}

/// Pick a calendar date starting from `initial`.
///
/// Escape yields a cancelled outcome; the caller keeps its initial
/// date.
///
/// # Errors
///
/// Returns terminal-setup errors; in-loop failures cancel.
pub fn date_box(
    console: &mut dyn Console,
    text: &str,
    initial: NaiveDate,
    config: &DateTimeConfig,
) -> Result<DialogOutcome<NaiveDate>, DialogError> {
    let mut dialog = FieldDialog {
        text,
        config,
        state: DateState::from_date(initial),
        focus: 0,
        render_fields: |s: &DateState| {
            [
                format!("{:04}", s.year),
                format!("{:02}", s.month),
                format!("{:02}", s.day),
            ]
        },
        adjust: DateState::adjust,
        separator: '-',
    };
    Ok(run_or_cancel(console, &mut dialog)?.map(DateState::to_date))
}

/// Pick a time of day starting from `initial`.
///
/// Escape yields a cancelled outcome; the caller keeps its initial
/// time.
///
/// # Errors
///
/// Returns terminal-setup errors; in-loop failures cancel.
pub fn time_box(
    console: &mut dyn Console,
    text: &str,
    initial: NaiveTime,
    config: &DateTimeConfig,
) -> Result<DialogOutcome<NaiveTime>, DialogError> {
    let mut dialog = FieldDialog {
        text,
        config,
        state: TimeState::from_time(initial),
        focus: 0,
        render_fields: |s: &TimeState| {
            [
                format!("{:02}", s.hour),
                format!("{:02}", s.minute),
                format!("{:02}", s.second),
            ]
        },
        adjust: TimeState::adjust,
        separator: ':',
    };
    Ok(run_or_cancel(console, &mut dialog)?.map(TimeState::to_time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::TestConsole;
    use crate::input::Event;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_last_day() {
        assert_eq!(last_day(2024, 2), 29);
        assert_eq!(last_day(2023, 2), 28);
        assert_eq!(last_day(2024, 12), 31);
        assert_eq!(last_day(2024, 4), 30);
    }

    #[test]
    fn test_day_wraps_within_month() {
        let mut s = DateState::from_date(date(2024, 4, 30));
        s.adjust(2, true);
        assert_eq!(s.day, 1);
        s.adjust(2, false);
        assert_eq!(s.day, 30);
    }

    #[test]
    fn test_month_wrap_clamps_day() {
        // Jan 31 stepped to Feb: clamp to the last valid day.
        let mut s = DateState::from_date(date(2023, 1, 31));
        s.adjust(1, true);
        assert_eq!((s.month, s.day), (2, 28));
    }

    #[test]
    fn test_leap_day_year_step_clamps() {
        // Leap day with the year stepped to non-leap 2023.
        let mut s = DateState::from_date(date(2024, 2, 29));
        s.adjust(0, false);
        assert_eq!((s.year, s.month, s.day), (2023, 2, 28));
    }

    #[test]
    fn test_leap_day_month_step_clamps() {
        // 2024-02-29 with the month decremented: January keeps 29.
        let mut s = DateState::from_date(date(2024, 2, 29));
        s.adjust(1, false);
        assert_eq!((s.month, s.day), (1, 29));
        // And stepping back up re-enters February legally.
        s.adjust(1, true);
        assert_eq!((s.month, s.day), (2, 29));
    }

    #[test]
    fn test_time_fields_wrap() {
        let mut s = TimeState::from_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap());
        s.adjust(0, true);
        assert_eq!(s.hour, 0);
        s.adjust(1, true);
        assert_eq!(s.minute, 0);
        s.adjust(2, true);
        assert_eq!(s.second, 0);
        s.adjust(0, false);
        assert_eq!(s.hour, 23);
    }

    #[test]
    fn test_date_box_tab_and_adjust() {
        // Focus year -> Tab to month -> Up: 2024-01-31 => 2024-02-29.
        let mut con = TestConsole::new(80, 24, [
            Event::key(KeyCode::Tab),
            Event::key(KeyCode::Up),
            Event::key(KeyCode::Enter),
        ]);
        let out = date_box(&mut con, "Pick", date(2024, 1, 31), &DateTimeConfig::default())
            .unwrap();
        assert_eq!(out, DialogOutcome::Committed(date(2024, 2, 29)));
    }

    #[test]
    fn test_date_box_escape_restores_initial() {
        let initial = date(2024, 6, 15);
        let mut con = TestConsole::new(80, 24, [
            Event::key(KeyCode::Up),
            Event::key(KeyCode::Up),
            Event::key(KeyCode::Esc),
        ]);
        let out = date_box(&mut con, "Pick", initial, &DateTimeConfig::default()).unwrap();
        assert_eq!(out.value_or(initial), initial);
    }

    #[test]
    fn test_time_box_commit() {
        let initial = NaiveTime::from_hms_opt(10, 30, 0).unwrap();
        let mut con = TestConsole::new(80, 24, [
            Event::key(KeyCode::Down),
            Event::key(KeyCode::Enter),
        ]);
        let out = time_box(&mut con, "When", initial, &DateTimeConfig::default()).unwrap();
        assert_eq!(
            out,
            DialogOutcome::Committed(NaiveTime::from_hms_opt(9, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_field_click_focuses() {
        let config = DateTimeConfig::default();
        let dialog = FieldDialog {
            text: "Pick",
            config: &config,
            state: DateState::from_date(date(2024, 6, 15)),
            focus: 0,
            render_fields: |s: &DateState| {
                [
                    format!("{:04}", s.year),
                    format!("{:02}", s.month),
                    format!("{:02}", s.day),
                ]
            },
            adjust: DateState::adjust,
            separator: '-',
        };
        let dims = dialog.layout((80, 24));
        let rects = dialog.field_rects(&dims);
        let day_field = rects[2];
        let mut con = TestConsole::new(80, 24, [
            Event::click(day_field.x, day_field.y),
            Event::key(KeyCode::Up),
            Event::key(KeyCode::Enter),
        ]);
        let out = date_box(&mut con, "Pick", date(2024, 6, 15), &config).unwrap();
        assert_eq!(out, DialogOutcome::Committed(date(2024, 6, 16)));
    }
}
