//! Paging/scroll state over content taller than the viewport.
//!
//! The offset is a single integer clamped to
//! `[0, max(0, total - page_height)]`. Paging forward records how far
//! it actually advanced so that paging backward retraces the same
//! distance, keeping page moves symmetric when `total` is not an exact
//! multiple of the page height.

/// Scroll offset state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    /// Current offset (first visible line).
    pub idx: usize,
    /// Lines consumed by the previous forward page move.
    last_increment: usize,
}

impl ScrollState {
    /// Start at the top.
    pub const fn new() -> Self {
        Self {
            idx: 0,
            last_increment: 0,
        }
    }

    /// Largest valid offset for the given content and viewport.
    const fn max_idx(total: usize, page_height: usize) -> usize {
        total.saturating_sub(page_height)
    }

    /// Move up one line, clamped at the top.
    pub const fn line_up(&mut self) {
        self.idx = self.idx.saturating_sub(1);
    }

    /// Move down one line, clamped at the bottom.
    pub fn line_down(&mut self, total: usize, page_height: usize) {
        self.idx = (self.idx + 1).min(Self::max_idx(total, page_height));
    }

    /// Advance a full page, recording the distance actually traveled.
    pub fn page_down(&mut self, total: usize, page_height: usize) {
        let target = (self.idx + page_height).min(Self::max_idx(total, page_height));
        self.last_increment = target - self.idx;
        self.idx = target;
    }

    /// Retreat by the distance the previous [`ScrollState::page_down`]
    /// advanced, falling back to a full page when none was recorded.
    pub fn page_up(&mut self, page_height: usize) {
        let step = if self.last_increment > 0 {
            self.last_increment
        } else {
            page_height
        };
        self.idx = self.idx.saturating_sub(step);
        self.last_increment = 0;
    }

    /// Jump to the top.
    pub const fn home(&mut self) {
        self.idx = 0;
        self.last_increment = 0;
    }

    /// Jump so the last page is visible.
    pub fn end(&mut self, total: usize, page_height: usize) {
        self.idx = Self::max_idx(total, page_height);
        self.last_increment = 0;
    }

    /// Re-clamp after content or viewport changes (resize, filter).
    pub fn clamp(&mut self, total: usize, page_height: usize) {
        self.idx = self.idx.min(Self::max_idx(total, page_height));
    }

    /// Scroll the viewport the minimum amount needed to show `line`.
    pub fn reveal(&mut self, line: usize, total: usize, page_height: usize) {
        if line < self.idx {
            self.idx = line;
        } else if page_height > 0 && line >= self.idx + page_height {
            self.idx = line + 1 - page_height;
        }
        self.clamp(total, page_height);
    }
}
