//! Dimension calculator for centered dialog boxes.
//!
//! Recomputed on every render pass: the window may have been resized
//! and the text content may have changed since the previous frame, so
//! nothing here is ever cached.

use crate::layout::Rect;

/// Derived geometry for one dialog frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    /// Outer box width, border included.
    pub max_width: u16,
    /// Outer box height, border included.
    pub max_height: u16,
    /// Interior width available to content.
    pub max_render_width: u16,
    /// Column of the top-left border corner.
    pub border_x: u16,
    /// Row of the top-left border corner.
    pub border_y: u16,
    /// Rows of text visible before scrolling kicks in.
    pub max_text_height: u16,
    /// Total wrapped line count of the text.
    pub total_lines: usize,
}

impl Dims {
    /// Compute geometry for a box centered in `window_w` x `window_h`.
    ///
    /// `extra_height` reserves rows below the text area for an embedded
    /// control (button bar, selection list, input bar); `extra_width`
    /// reserves columns beyond the text's natural width (long selection
    /// entries, slider rails).
    #[allow(clippy::cast_possible_truncation)]
    pub fn compute(
        window_w: u16,
        window_h: u16,
        total_lines: usize,
        natural_width: usize,
        extra_height: u16,
        extra_width: u16,
    ) -> Self {
        // Interior cap: window minus border columns and a 1-cell margin
        // on each side.
        let interior_cap = window_w.saturating_sub(4).max(1);
        let wanted = (natural_width as u16).saturating_add(extra_width).max(1);
        let max_render_width = wanted.min(interior_cap);
        let max_width = max_render_width + 2;

        let height_cap = window_h.saturating_sub(2).max(3);
        let wanted_h = (total_lines as u16)
            .saturating_add(extra_height)
            .saturating_add(2)
            .max(3);
        let max_height = wanted_h.min(height_cap);
        let max_text_height = max_height
            .saturating_sub(2)
            .saturating_sub(extra_height)
            .max(1);

        let border_x = window_w.saturating_sub(max_width) / 2;
        let border_y = window_h.saturating_sub(max_height) / 2;

        Self {
            max_width,
            max_height,
            max_render_width,
            border_x,
            border_y,
            max_text_height,
            total_lines,
        }
    }

    /// Outer border rectangle.
    pub const fn border_rect(&self) -> Rect {
        Rect::new(self.border_x, self.border_y, self.max_width, self.max_height)
    }

    /// First interior row (just under the top border).
    pub const fn text_top(&self) -> u16 {
        self.border_y + 1
    }

    /// First interior column.
    pub const fn text_left(&self) -> u16 {
        self.border_x + 1
    }

    /// First row of the embedded-control area, below the text.
    pub const fn extra_top(&self) -> u16 {
        self.text_top() + self.max_text_height
    }

    /// Whether the text needs a scroll indicator.
    pub const fn scrollable(&self) -> bool {
        self.total_lines > self.max_text_height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dims_centered() {
        let d = Dims::compute(80, 24, 3, 20, 0, 0);
        assert_eq!(d.max_render_width, 20);
        assert_eq!(d.max_width, 22);
        assert_eq!(d.max_height, 5);
        assert_eq!(d.border_x, (80 - 22) / 2);
        assert_eq!(d.border_y, (24 - 5) / 2);
        assert!(!d.scrollable());
    }

    #[test]
    fn test_dims_extra_height_shrinks_text_area() {
        let d = Dims::compute(80, 24, 3, 20, 4, 0);
        assert_eq!(d.max_text_height, 3);
        assert_eq!(d.extra_top(), d.text_top() + 3);
    }

    #[test]
    fn test_dims_clamped_to_window() {
        let d = Dims::compute(20, 10, 100, 200, 0, 0);
        assert!(d.max_width <= 18);
        assert!(d.max_height <= 8);
        assert!(d.scrollable());
    }

    #[test]
    fn test_dims_tiny_window_stays_sane() {
        let d = Dims::compute(3, 3, 1, 1, 0, 0);
        assert!(d.max_render_width >= 1);
        assert!(d.max_text_height >= 1);
    }

    #[test]
    fn test_dims_extra_width_widens_box() {
        let narrow = Dims::compute(80, 24, 1, 10, 0, 0);
        let wide = Dims::compute(80, 24, 1, 10, 0, 15);
        assert_eq!(wide.max_render_width, narrow.max_render_width + 15);
    }
}
