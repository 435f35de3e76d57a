//! Input event model.
//!
//! A simplified vocabulary over crossterm's event types: one keyboard
//! shape, one pointer shape. A dialog receives exactly one of them per
//! loop iteration; pointer events carry the press kind so hitboxes can
//! filter on it.

/// Key codes for keyboard input.
///
/// A simplified subset of crossterm's `KeyCode`, covering the keys
/// dialogs bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Function key (F1-F12).
    F(u8),
    /// Backspace key.
    Backspace,
    /// Enter/Return key.
    Enter,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Tab key.
    Tab,
    /// Backtab (Shift+Tab).
    BackTab,
    /// Delete key.
    Delete,
    /// Escape key.
    Esc,
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Shift key held.
    pub shift: bool,
    /// Control key held.
    pub control: bool,
    /// Alt/Option key held.
    pub alt: bool,
}

impl KeyModifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };

    /// Check if any modifier is active.
    pub const fn any(&self) -> bool {
        self.shift || self.control || self.alt
    }
}

/// Pointer (mouse) button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button.
    Middle,
}

/// What the pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Button pressed.
    Press,
    /// Button released.
    Release,
    /// Pointer moved (or dragged).
    Move,
    /// Scroll wheel, positive delta = up.
    Scroll(i16),
}

/// A pointer event: position, what happened, and with which button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// X coordinate (column).
    pub x: u16,
    /// Y coordinate (row).
    pub y: u16,
    /// What happened.
    pub kind: PointerKind,
    /// Button involved, if any.
    pub button: Option<PointerButton>,
    /// Key modifiers held during the event.
    pub modifiers: KeyModifiers,
}

/// One input delivered to a dialog per loop iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key {
        /// The key code.
        code: KeyCode,
        /// Modifiers held during keypress.
        modifiers: KeyModifiers,
    },
    /// A pointer event.
    Pointer(PointerEvent),
    /// Terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl Event {
    /// Shorthand for an unmodified key press, used heavily in tests.
    pub const fn key(code: KeyCode) -> Self {
        Self::Key {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Shorthand for a left-button press at (x, y).
    pub const fn click(x: u16, y: u16) -> Self {
        Self::Pointer(PointerEvent {
            x,
            y,
            kind: PointerKind::Press,
            button: Some(PointerButton::Left),
            modifiers: KeyModifiers::NONE,
        })
    }

    /// Shorthand for a right-button press at (x, y).
    pub const fn right_click(x: u16, y: u16) -> Self {
        Self::Pointer(PointerEvent {
            x,
            y,
            kind: PointerKind::Press,
            button: Some(PointerButton::Right),
            modifiers: KeyModifiers::NONE,
        })
    }
}
