//! Concrete dialog flavors.
//!
//! Each widget is a thin composition over the generic pieces: it picks
//! an extra-height/width reservation for the dimension calculator,
//! a keybinding table, a render callback, and an interpretation of
//! key/pointer events, then hands control to the dispatcher loop.

mod buttons;
mod datetime;
mod input;
mod modal;
mod progress;
mod selection;
mod slider;

pub use buttons::{choice_box, ChoiceBoxConfig};
pub use datetime::{date_box, time_box, DateTimeConfig};
pub use input::{input_box, InputBoxConfig};
pub use modal::{help_box, info_box, message_box, InfoBoxConfig};
pub use progress::{ProgressBox, ProgressBoxConfig};
pub use selection::{select_many, select_one, SelectionConfig};
pub use slider::{slider_box, SliderConfig};

use crate::layout::{Dims, Rect};
use crate::style::{Modifiers, Theme};
use crate::surface::{Cell, Surface};

/// Fill the dialog interior, draw the border, title, and close button.
///
/// The close button occupies the top-right border cell, written after
/// the border so it stays visible.
pub(crate) fn draw_frame(surface: &mut Surface, dims: &Dims, theme: &Theme, title: Option<&str>) {
    let area = dims.border_rect();
    surface.fill(area, Cell::new(' ').with_bg(theme.bg));
    surface.draw_border(area, theme.border, theme, title);
    let (cx, cy) = close_cell(dims);
    surface.set(cx, cy, Cell::new('✕').with_fg(theme.arrow_fg).with_bg(theme.bg));
}

/// Cell holding the close button.
pub(crate) const fn close_cell(dims: &Dims) -> (u16, u16) {
    (dims.border_x + dims.max_width - 1, dims.border_y)
}

/// Single-cell hitbox rect for the close button.
pub(crate) const fn close_rect(dims: &Dims) -> Rect {
    let (x, y) = close_cell(dims);
    Rect::new(x, y, 1, 1)
}

/// Draw the visible window of wrapped text lines plus scroll arrows.
///
/// Arrows sit on the right border, only when the content overflows the
/// text area; their cells double as pointer hitboxes.
pub(crate) fn draw_text_window(
    surface: &mut Surface,
    dims: &Dims,
    lines: &[String],
    scroll_idx: usize,
    theme: &Theme,
) {
    let top = dims.text_top();
    let left = dims.text_left();
    let height = dims.max_text_height as usize;

    for (row, line) in lines.iter().skip(scroll_idx).take(height).enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        surface.draw_str(
            left,
            top + row as u16,
            line,
            dims.max_render_width as usize,
            theme.text_fg,
            theme.bg,
        );
    }

    if dims.scrollable() {
        let (up, down) = scroll_arrow_cells(dims);
        let up_ch = if scroll_idx > 0 { '▲' } else { '─' };
        let down_ch = if scroll_idx + height < lines.len() { '▼' } else { '─' };
        surface.set(up.0, up.1, Cell::new(up_ch).with_fg(theme.arrow_fg).with_bg(theme.bg));
        surface.set(down.0, down.1, Cell::new(down_ch).with_fg(theme.arrow_fg).with_bg(theme.bg));
    }
}

/// Cells holding the up and down scroll arrows (right border).
pub(crate) const fn scroll_arrow_cells(dims: &Dims) -> ((u16, u16), (u16, u16)) {
    let x = dims.border_x + dims.max_width - 1;
    (
        (x, dims.text_top()),
        (x, dims.text_top() + dims.max_text_height - 1),
    )
}

/// Draw one focused/unfocused button label; returns its hit rect.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn draw_button(
    surface: &mut Surface,
    x: u16,
    y: u16,
    label: &str,
    focused: bool,
    theme: &Theme,
) -> Rect {
    let text = format!("[ {label} ]");
    let width = crate::text::display_width(&text) as u16;
    let (fg, bg, mods) = if focused {
        (theme.button_fg, theme.button_focus_bg, Modifiers::BOLD)
    } else {
        (theme.button_fg, theme.bg, Modifiers::empty())
    };
    surface.draw_str_mods(x, y, &text, width as usize, fg, bg, mods);
    Rect::new(x, y, width, 1)
}
