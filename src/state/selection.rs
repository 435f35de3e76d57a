//! Selection cursor and selection-set state machine.
//!
//! Tracks the highlighted index over the flattened choice list, plus
//! the committed selection for radio (single) or multi mode. The
//! cursor invariant: it always points at an enabled choice. Every
//! index mutation runs a disabled-skip correction in the direction of
//! travel.
//!
//! Wrap policy is split by granularity, deliberately: single-step
//! moves wrap at the ends, page-granularity moves clamp.

use crate::choice::FlatTree;
use regex::Regex;
use std::collections::BTreeSet;

/// Which addressing mode a selection dialog runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMode {
    /// Highlight only; Enter commits the highlighted index.
    Highlight,
    /// Radio: one committed choice.
    Radio {
        /// Committed choice, if any.
        selected: Option<usize>,
    },
    /// Multi-select: a set of committed choices.
    Multi {
        /// Committed choice set.
        selected: BTreeSet<usize>,
    },
}

/// Aggregate selection indicator for category/group header rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriState {
    /// Every enabled descendant is selected.
    All,
    /// No descendant is selected.
    None,
    /// Some but not all ("fifty-fifty").
    Mixed,
}

impl TriState {
    /// Aggregate per-choice selected flags. Empty input reads as `None`.
    pub fn aggregate(flags: impl IntoIterator<Item = bool>) -> Self {
        let mut any = false;
        let mut all = true;
        let mut seen = false;
        for f in flags {
            seen = true;
            any |= f;
            all &= f;
        }
        match (seen, any, all) {
            (false, ..) | (true, false, _) => Self::None,
            (true, true, true) => Self::All,
            (true, true, false) => Self::Mixed,
        }
    }

    /// Indicator glyph for list rendering.
    pub const fn glyph(self) -> char {
        match self {
            Self::All => '◼',
            Self::None => '◻',
            Self::Mixed => '◓',
        }
    }
}

/// Cursor + selection-set state for one dialog invocation.
#[derive(Debug, Clone)]
pub struct SelectionState {
    disabled: Vec<bool>,
    /// Highlighted index into the flat choice list.
    pub current: usize,
    /// Addressing mode with its committed selection.
    pub mode: SelectionMode,
}

impl SelectionState {
    /// Build from the disabled mask of the flattened choices.
    ///
    /// Returns `None` when no choice is enabled; selection dialogs must
    /// refuse to run in that case.
    pub fn new(disabled: Vec<bool>, start: usize, mode: SelectionMode) -> Option<Self> {
        if disabled.iter().all(|&d| d) {
            return None;
        }
        let mut state = Self {
            disabled,
            current: 0,
            mode,
        };
        state.current = state
            .seek_enabled(start.min(state.len().saturating_sub(1)), 1, true)
            .unwrap_or(0);
        Some(state)
    }

    /// Number of choices.
    pub fn len(&self) -> usize {
        self.disabled.len()
    }

    /// Whether the choice list is empty.
    pub fn is_empty(&self) -> bool {
        self.disabled.is_empty()
    }

    /// Whether choice `idx` is enabled.
    pub fn is_enabled(&self, idx: usize) -> bool {
        !self.disabled.get(idx).copied().unwrap_or(true)
    }

    /// Indices of all enabled choices.
    fn enabled_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.disabled
            .iter()
            .enumerate()
            .filter(|(_, &d)| !d)
            .map(|(i, _)| i)
    }

    /// Find an enabled index starting at `from`, stepping by `dir`
    /// (±1). With `wrap`, the search continues from the opposite end;
    /// without it, exhaustion reverses direction once.
    ///
    /// Guaranteed to terminate with `Some` by the constructor's
    /// at-least-one-enabled invariant.
    fn seek_enabled(&self, from: usize, dir: isize, wrap: bool) -> Option<usize> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        let mut idx = from.min(len - 1);
        for _ in 0..len {
            if !self.disabled[idx] {
                return Some(idx);
            }
            match Self::step(idx, dir, len, wrap) {
                Some(next) => idx = next,
                None => break,
            }
        }
        if wrap {
            None
        } else {
            // Clamped move ran off the end; look the other way.
            self.seek_enabled(from.min(len - 1), -dir, true)
        }
    }

    /// One index step with the chosen end behavior.
    const fn step(idx: usize, dir: isize, len: usize, wrap: bool) -> Option<usize> {
        if dir > 0 {
            if idx + 1 < len {
                Some(idx + 1)
            } else if wrap {
                Some(0)
            } else {
                None
            }
        } else if idx > 0 {
            Some(idx - 1)
        } else if wrap {
            Some(len - 1)
        } else {
            None
        }
    }

    /// Move the cursor up `factor` steps.
    ///
    /// `factor == 1` wraps from the first choice to the last; larger
    /// factors (page moves) clamp at the top.
    pub fn move_up(&mut self, factor: usize) {
        if factor == 1 {
            let start = if self.current == 0 {
                self.len() - 1
            } else {
                self.current - 1
            };
            self.current = self.seek_enabled(start, -1, true).unwrap_or(self.current);
        } else {
            let start = self.current.saturating_sub(factor);
            self.current = self.seek_enabled(start, -1, false).unwrap_or(self.current);
        }
    }

    /// Move the cursor down `factor` steps; same wrap policy as
    /// [`SelectionState::move_up`].
    pub fn move_down(&mut self, factor: usize) {
        if factor == 1 {
            let start = (self.current + 1) % self.len();
            self.current = self.seek_enabled(start, 1, true).unwrap_or(self.current);
        } else {
            let start = (self.current + factor).min(self.len() - 1);
            self.current = self.seek_enabled(start, 1, false).unwrap_or(self.current);
        }
    }

    /// Jump to the first enabled choice.
    pub fn move_home(&mut self) {
        self.current = self.seek_enabled(0, 1, false).unwrap_or(self.current);
    }

    /// Jump to the last enabled choice.
    pub fn move_end(&mut self) {
        self.current = self
            .seek_enabled(self.len() - 1, -1, false)
            .unwrap_or(self.current);
    }

    /// Jump directly to `idx`, correcting onto an enabled choice.
    pub fn jump_to(&mut self, idx: usize) {
        self.current = self.seek_enabled(idx, 1, true).unwrap_or(self.current);
    }

    /// Toggle the current choice.
    ///
    /// Radio mode commits the cursor; multi mode flips the cursor's
    /// membership in the selection set; highlight mode is a no-op.
    pub fn toggle_current(&mut self) {
        match &mut self.mode {
            SelectionMode::Highlight => {}
            SelectionMode::Radio { selected } => *selected = Some(self.current),
            SelectionMode::Multi { selected } => {
                if !selected.remove(&self.current) {
                    selected.insert(self.current);
                }
            }
        }
    }

    /// Three-way select-all toggle (multi mode only).
    ///
    /// All enabled selected → clear; anything less → select every
    /// enabled choice. Not idempotent by design.
    pub fn select_all(&mut self) {
        let enabled: BTreeSet<usize> = self.enabled_indices().collect();
        if let SelectionMode::Multi { selected } = &mut self.mode {
            if enabled.iter().all(|i| selected.contains(i)) {
                selected.clear();
            } else {
                selected.extend(enabled);
            }
        }
    }

    /// Whether choice `idx` is in the committed selection.
    pub fn is_selected(&self, idx: usize) -> bool {
        match &self.mode {
            SelectionMode::Highlight => false,
            SelectionMode::Radio { selected } => *selected == Some(idx),
            SelectionMode::Multi { selected } => selected.contains(&idx),
        }
    }

    /// Committed multi-selection as a sorted vector.
    pub fn selected_vec(&self) -> Vec<usize> {
        match &self.mode {
            SelectionMode::Multi { selected } => selected.iter().copied().collect(),
            SelectionMode::Radio { selected } => selected.iter().copied().collect(),
            SelectionMode::Highlight => Vec::new(),
        }
    }

    /// Tri-state aggregation over an arbitrary descendant set.
    pub fn tri_state(&self, indices: impl IntoIterator<Item = usize>) -> TriState {
        TriState::aggregate(
            indices
                .into_iter()
                .filter(|&i| self.is_enabled(i))
                .map(|i| self.is_selected(i)),
        )
    }
}

/// Flat choice indices whose `name` or `title` matches `pattern`.
///
/// Case-sensitive, matched against `"{name} {title}"` so either field
/// can hit. Disabled choices never match.
pub fn search_matches(tree: &FlatTree<'_>, pattern: &Regex) -> Vec<usize> {
    tree.choices
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.disabled)
        .filter(|(_, c)| pattern.is_match(&format!("{} {}", c.name, c.title)))
        .map(|(i, _)| i)
        .collect()
}
