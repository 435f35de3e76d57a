//! Declarative keybinding tables.
//!
//! Each dialog flavor exposes its bindings as a pure function
//! returning a table; the help overlay renders these tables and the
//! dialogs interpret the same key codes in their event handlers. No
//! module-level mutable state.

use crate::input::KeyCode;

/// One help-table entry: the keys and what they do.
#[derive(Debug, Clone, Copy)]
pub struct Keybinding {
    /// Keys that trigger the action.
    pub keys: &'static [KeyCode],
    /// Short action label shown in the help overlay.
    pub label: &'static str,
}

/// Bindings shared by every scrollable text box.
pub fn info_box_keys() -> Vec<Keybinding> {
    vec![
        Keybinding { keys: &[KeyCode::Up, KeyCode::Down], label: "scroll line" },
        Keybinding { keys: &[KeyCode::PageUp, KeyCode::PageDown], label: "scroll page" },
        Keybinding { keys: &[KeyCode::Home, KeyCode::End], label: "jump to top/bottom" },
        Keybinding { keys: &[KeyCode::Enter], label: "dismiss" },
        Keybinding { keys: &[KeyCode::Esc], label: "dismiss" },
    ]
}

/// Bindings for single- and multi-selection dialogs.
pub fn selection_keys(multi: bool) -> Vec<Keybinding> {
    let mut keys = vec![
        Keybinding { keys: &[KeyCode::Up, KeyCode::Down], label: "move cursor" },
        Keybinding { keys: &[KeyCode::PageUp, KeyCode::PageDown], label: "move a page" },
        Keybinding { keys: &[KeyCode::Home, KeyCode::End], label: "first/last choice" },
        Keybinding { keys: &[KeyCode::Char(' ')], label: "toggle choice" },
        Keybinding { keys: &[KeyCode::Char('f')], label: "search" },
        Keybinding { keys: &[KeyCode::Tab], label: "show choice details" },
        Keybinding { keys: &[KeyCode::Char('?'), KeyCode::F(1)], label: "this help" },
        Keybinding { keys: &[KeyCode::Enter], label: "commit" },
        Keybinding { keys: &[KeyCode::Esc], label: "cancel" },
    ];
    if multi {
        keys.insert(
            4,
            Keybinding { keys: &[KeyCode::Char('a')], label: "select all / none" },
        );
    }
    keys
}

/// Bindings for the button-choice box.
pub fn choice_box_keys() -> Vec<Keybinding> {
    vec![
        Keybinding { keys: &[KeyCode::Left, KeyCode::Right, KeyCode::Tab], label: "cycle button" },
        Keybinding { keys: &[KeyCode::Enter], label: "press button" },
        Keybinding { keys: &[KeyCode::Esc], label: "cancel" },
    ]
}

/// Bindings for the slider box.
pub fn slider_keys() -> Vec<Keybinding> {
    vec![
        Keybinding { keys: &[KeyCode::Left, KeyCode::Right], label: "adjust (wraps at ends)" },
        Keybinding { keys: &[KeyCode::Home, KeyCode::End], label: "jump to min/max" },
        Keybinding { keys: &[KeyCode::Enter], label: "commit" },
        Keybinding { keys: &[KeyCode::Esc], label: "cancel" },
    ]
}

/// Bindings for the date and time pickers.
pub fn datetime_keys() -> Vec<Keybinding> {
    vec![
        Keybinding { keys: &[KeyCode::Tab, KeyCode::BackTab], label: "cycle field" },
        Keybinding { keys: &[KeyCode::Up, KeyCode::Down], label: "adjust field" },
        Keybinding { keys: &[KeyCode::Enter], label: "commit" },
        Keybinding { keys: &[KeyCode::Esc], label: "cancel" },
    ]
}

/// Bindings for the text input box.
pub fn input_box_keys() -> Vec<Keybinding> {
    vec![
        Keybinding { keys: &[KeyCode::Left, KeyCode::Right], label: "move cursor" },
        Keybinding { keys: &[KeyCode::Home, KeyCode::End], label: "start/end of line" },
        Keybinding { keys: &[KeyCode::Backspace, KeyCode::Delete], label: "delete" },
        Keybinding { keys: &[KeyCode::Enter], label: "commit" },
        Keybinding { keys: &[KeyCode::Esc], label: "cancel" },
    ]
}

/// Render a binding table as plain lines for the help overlay.
pub fn render_table(bindings: &[Keybinding]) -> String {
    let mut out = String::new();
    for b in bindings {
        let keys: Vec<String> = b.keys.iter().map(|k| key_name(*k)).collect();
        out.push_str(&format!("{:<18} {}\n", keys.join("/"), b.label));
    }
    out
}

/// Human-readable key name.
fn key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_owned(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{n}"),
        KeyCode::Backspace => "Backspace".to_owned(),
        KeyCode::Enter => "Enter".to_owned(),
        KeyCode::Left => "Left".to_owned(),
        KeyCode::Right => "Right".to_owned(),
        KeyCode::Up => "Up".to_owned(),
        KeyCode::Down => "Down".to_owned(),
        KeyCode::Home => "Home".to_owned(),
        KeyCode::End => "End".to_owned(),
        KeyCode::PageUp => "PgUp".to_owned(),
        KeyCode::PageDown => "PgDn".to_owned(),
        KeyCode::Tab => "Tab".to_owned(),
        KeyCode::BackTab => "Shift+Tab".to_owned(),
        KeyCode::Delete => "Del".to_owned(),
        KeyCode::Esc => "Esc".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_adds_select_all() {
        let single = selection_keys(false);
        let multi = selection_keys(true);
        assert_eq!(multi.len(), single.len() + 1);
        assert!(multi.iter().any(|b| b.label.contains("select all")));
    }

    #[test]
    fn test_render_table_lines() {
        let table = render_table(&slider_keys());
        assert!(table.contains("Left/Right"));
        assert!(table.contains("Esc"));
        assert_eq!(table.lines().count(), slider_keys().len());
    }
}
