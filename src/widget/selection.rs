//! Single- and multi-selection dialogs over a choice tree.
//!
//! The list renders the flattened Category → Group → Choice rows below
//! the message text, with its own scrolling viewport that follows the
//! cursor. Multi mode adds tri-state indicators on header rows and a
//! select-all toggle; both modes offer regex search, a detail view,
//! and a help overlay as nested dialogs on the same console.

use super::{close_rect, draw_frame, draw_text_window, InfoBoxConfig, InputBoxConfig};
use crate::choice::{Choice, ChoiceCategory, FlatRow, FlatTree};
use crate::console::Console;
use crate::dispatch::{run_or_cancel, Dialog, DialogOutcome, Flow};
use crate::error::DialogError;
use crate::input::{KeyCode, KeyModifiers, PointerButton, PointerEvent, PointerKind};
use crate::keymap::selection_keys;
use crate::layout::{Dims, Hitbox, Rect};
use crate::state::{search_matches, ScrollState, SelectionMode, SelectionState};
use crate::style::{Modifiers, Theme};
use crate::surface::{Cell, Surface};
use crate::text::{display_width, natural_width, wrap};
use crate::widget::{help_box, info_box, input_box};
use regex::Regex;
use std::collections::BTreeSet;

/// Configuration for [`select_one`] and [`select_many`].
#[derive(Debug, Clone, Default)]
pub struct SelectionConfig {
    /// Optional box title.
    pub title: Option<String>,
    /// Color scheme.
    pub theme: Theme,
}

#[derive(Debug, Clone, Copy)]
enum Msg {
    /// Pointer landed on the row of flat choice `idx`.
    Choice(usize),
    ListUp,
    ListDown,
    /// Catch-all for wheel events anywhere in the box.
    Wheel,
    Close,
}

struct SelectionDialog<'a> {
    text: &'a str,
    config: &'a SelectionConfig,
    tree: FlatTree<'a>,
    state: SelectionState,
    scroll: ScrollState,
    multi: bool,
    /// Cell of the previous left press, for double-click detection.
    last_click: Option<(u16, u16)>,
}

impl SelectionDialog<'_> {
    fn wrapped(&self, window_w: u16) -> Vec<String> {
        let cap = (window_w.saturating_sub(4).max(1)) as usize;
        wrap(self.text, natural_width(self.text).clamp(1, cap))
    }

    /// Text rendered for one display row, indentation included.
    fn row_text(&self, row: FlatRow) -> String {
        match row {
            FlatRow::Category(ci) => {
                let cat = &self.tree.categories[ci];
                if self.multi {
                    let tri = self.state.tri_state(self.tree.choices_in_category(ci));
                    format!("{} {}", tri.glyph(), cat.title)
                } else {
                    cat.title.clone()
                }
            }
            FlatRow::Group(ci, gi) => {
                let group = &self.tree.categories[ci].groups[gi];
                if self.multi {
                    let tri = self.state.tri_state(self.tree.choices_in_group(ci, gi));
                    format!("  {} {}", tri.glyph(), group.title)
                } else {
                    format!("  {}", group.title)
                }
            }
            FlatRow::Choice(idx) => {
                let choice = self.tree.choices[idx];
                let indent = if self.tree.headers_hidden() { "" } else { "    " };
                let marker = if self.multi {
                    if self.state.is_selected(idx) { '◼' } else { '◻' }
                } else if self.state.is_selected(idx) {
                    '●'
                } else {
                    '○'
                };
                format!("{indent}{marker} {}", choice.title)
            }
        }
    }

    fn widest_row(&self) -> usize {
        self.tree
            .rows
            .iter()
            .map(|&r| display_width(&self.row_text(r)))
            .max()
            .unwrap_or(1)
    }

    /// Visible list rows derived back out of the computed geometry.
    fn list_page(dims: &Dims) -> usize {
        (dims.max_height.saturating_sub(3).saturating_sub(dims.max_text_height)).max(1) as usize
    }

    /// First screen row of the list (one spacer under the text).
    const fn list_top(dims: &Dims) -> u16 {
        dims.extra_top() + 1
    }

    /// Keep the cursor's display row inside the list viewport.
    fn follow_cursor(&mut self, dims: &Dims) {
        if let Some(row) = self.tree.row_of_choice(self.state.current) {
            self.scroll
                .reveal(row, self.tree.rows.len(), Self::list_page(dims));
        }
    }

    /// Open the detail view for choice `idx`.
    fn show_detail(&self, console: &mut dyn Console, idx: usize) -> Result<(), DialogError> {
        let choice = self.tree.choices[idx];
        let body = choice
            .description
            .as_deref()
            .unwrap_or("No description available.");
        let config = InfoBoxConfig {
            title: Some(choice.title.clone()),
            theme: self.config.theme.clone(),
        };
        info_box(console, body, &config)?;
        Ok(())
    }

    fn notice(&self, console: &mut dyn Console, text: &str) -> Result<(), DialogError> {
        let config = InfoBoxConfig {
            title: None,
            theme: self.config.theme.clone(),
        };
        info_box(console, text, &config)?;
        Ok(())
    }

    /// The regex search flow: prompt, match, disambiguate, jump.
    fn run_search(&mut self, console: &mut dyn Console, dims: &Dims) -> Result<(), DialogError> {
        let prompt_config = InputBoxConfig {
            title: Some("Search".to_owned()),
            theme: self.config.theme.clone(),
            ..InputBoxConfig::default()
        };
        let pattern = match input_box(console, "Choice name or title (regex):", "", &prompt_config)? {
            DialogOutcome::Committed(p) if !p.is_empty() => p,
            _ => return Ok(()),
        };

        let regex = match Regex::new(&pattern) {
            Ok(r) => r,
            Err(e) => return self.notice(console, &format!("Invalid pattern: {e}")),
        };

        let matches = search_matches(&self.tree, &regex);
        match matches.as_slice() {
            [] => self.notice(console, &format!("No choice matches \"{pattern}\"")),
            [only] => {
                self.state.jump_to(*only);
                self.follow_cursor(dims);
                Ok(())
            }
            many => {
                // Several hits: disambiguate through a nested plain list.
                let titles: Vec<Choice> = many
                    .iter()
                    .map(|&i| {
                        let c = self.tree.choices[i];
                        Choice::new(c.name.clone(), c.title.clone())
                    })
                    .collect();
                let cats = vec![ChoiceCategory::flat(titles)];
                let picker_config = SelectionConfig {
                    title: Some(format!("Matches for \"{pattern}\"")),
                    theme: self.config.theme.clone(),
                };
                if let DialogOutcome::Committed(picked) =
                    select_one(console, "Jump to:", &cats, &picker_config)?
                {
                    self.state.jump_to(many[picked]);
                    self.follow_cursor(dims);
                }
                Ok(())
            }
        }
    }

    /// Left press on a choice row: first press moves the cursor and
    /// toggles, a second press on the same cell commits.
    fn handle_press(&mut self, idx: usize, pointer: &PointerEvent) -> Flow {
        if !self.state.is_enabled(idx) {
            return Flow::Continue;
        }
        let cell = (pointer.x, pointer.y);
        let again = self.last_click == Some(cell) && self.state.current == idx;
        self.last_click = Some(cell);
        self.state.jump_to(idx);
        if again {
            return Flow::Commit;
        }
        self.state.toggle_current();
        Flow::Continue
    }
}

impl Dialog for SelectionDialog<'_> {
    type Value = SelectionState;
    type Msg = Msg;

    fn layout(&self, window: (u16, u16)) -> Dims {
        let lines = self.wrapped(window.0);
        let text_width = lines.iter().map(|l| display_width(l)).max().unwrap_or(1);
        let width = text_width.max(self.widest_row()).max(24);
        #[allow(clippy::cast_possible_truncation)]
        let list_h = (self.tree.rows.len() as u16)
            .min(window.1.saturating_sub(8))
            .max(1);
        // Spacer row plus the list viewport.
        Dims::compute(window.0, window.1, lines.len(), width, list_h + 1, 0)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render(&self, surface: &mut Surface, dims: &Dims) {
        let theme = &self.config.theme;
        draw_frame(surface, dims, theme, self.config.title.as_deref());
        let lines = self.wrapped(surface.width());
        draw_text_window(surface, dims, &lines, 0, theme);

        let top = Self::list_top(dims);
        let page = Self::list_page(dims);
        let visible = self
            .tree
            .rows
            .iter()
            .skip(self.scroll.idx)
            .take(page)
            .enumerate();
        for (i, &row) in visible {
            let y = top + i as u16;
            let text = self.row_text(row);
            let (fg, bg, mods) = match row {
                FlatRow::Choice(idx) if idx == self.state.current => {
                    (theme.highlight_fg, theme.highlight_bg, Modifiers::BOLD)
                }
                FlatRow::Choice(idx) if self.tree.choices[idx].disabled => {
                    (theme.disabled_fg, theme.bg, Modifiers::empty())
                }
                FlatRow::Choice(_) => (theme.text_fg, theme.bg, Modifiers::empty()),
                FlatRow::Category(_) | FlatRow::Group(_, _) => {
                    (theme.header_fg, theme.bg, Modifiers::BOLD)
                }
            };
            surface.draw_str_mods(
                dims.text_left(),
                y,
                &text,
                dims.max_render_width as usize,
                fg,
                bg,
                mods,
            );
        }

        // List scroll arrows on the right border, mirroring the text
        // window's indicators.
        if self.tree.rows.len() > page {
            let x = dims.border_x + dims.max_width - 1;
            let up_ch = if self.scroll.idx > 0 { '▲' } else { '─' };
            let down_ch = if self.scroll.idx + page < self.tree.rows.len() {
                '▼'
            } else {
                '─'
            };
            surface.set(x, top, Cell::new(up_ch).with_fg(theme.arrow_fg).with_bg(theme.bg));
            surface.set(
                x,
                top + page as u16 - 1,
                Cell::new(down_ch).with_fg(theme.arrow_fg).with_bg(theme.bg),
            );
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn hitboxes(&self, dims: &Dims) -> Vec<Hitbox<Msg>> {
        let top = Self::list_top(dims);
        let page = Self::list_page(dims);
        let mut boxes = vec![Hitbox::any_press(close_rect(dims), Msg::Close)];

        if self.tree.rows.len() > page {
            let x = dims.border_x + dims.max_width - 1;
            boxes.push(Hitbox::click(Rect::new(x, top, 1, 1), Msg::ListUp));
            boxes.push(Hitbox::click(
                Rect::new(x, top + page as u16 - 1, 1, 1),
                Msg::ListDown,
            ));
        }

        for (i, &row) in self.tree.rows.iter().skip(self.scroll.idx).take(page).enumerate() {
            if let FlatRow::Choice(idx) = row {
                let rect = Rect::new(dims.text_left(), top + i as u16, dims.max_render_width, 1);
                boxes.push(Hitbox::any_press(rect, Msg::Choice(idx)));
            }
        }

        // Lowest priority: wheel scrolling anywhere over the box.
        boxes.push(Hitbox {
            area: dims.border_rect(),
            button: None,
            kind: None,
            msg: Msg::Wheel,
        });
        boxes
    }

    fn on_key(
        &mut self,
        console: &mut dyn Console,
        code: KeyCode,
        _modifiers: KeyModifiers,
        dims: &Dims,
    ) -> Result<Flow, DialogError> {
        self.last_click = None;
        let page = Self::list_page(dims);
        match code {
            KeyCode::Up => self.state.move_up(1),
            KeyCode::Down => self.state.move_down(1),
            KeyCode::PageUp => self.state.move_up(page),
            KeyCode::PageDown => self.state.move_down(page),
            KeyCode::Home => self.state.move_home(),
            KeyCode::End => self.state.move_end(),
            KeyCode::Char(' ') => self.state.toggle_current(),
            KeyCode::Char('a') if self.multi => self.state.select_all(),
            KeyCode::Char('f') => self.run_search(console, dims)?,
            KeyCode::Tab => self.show_detail(console, self.state.current)?,
            KeyCode::Char('?') | KeyCode::F(1) => {
                help_box(console, &selection_keys(self.multi), &self.config.theme)?;
            }
            KeyCode::Enter => return Ok(Flow::Commit),
            KeyCode::Esc => return Ok(Flow::Cancel),
            _ => {}
        }
        self.follow_cursor(dims);
        Ok(Flow::Continue)
    }

    fn on_msg(
        &mut self,
        console: &mut dyn Console,
        msg: Msg,
        pointer: &PointerEvent,
        dims: &Dims,
    ) -> Result<Flow, DialogError> {
        let flow = match msg {
            Msg::Close => Flow::Cancel,
            Msg::ListUp => {
                self.state.move_up(1);
                self.follow_cursor(dims);
                Flow::Continue
            }
            Msg::ListDown => {
                self.state.move_down(1);
                self.follow_cursor(dims);
                Flow::Continue
            }
            Msg::Choice(idx) => {
                if pointer.button == Some(PointerButton::Right) {
                    self.show_detail(console, idx)?;
                    Flow::Continue
                } else if pointer.button == Some(PointerButton::Left) {
                    self.handle_press(idx, pointer)
                } else {
                    Flow::Continue
                }
            }
            Msg::Wheel => {
                match pointer.kind {
                    PointerKind::Scroll(d) if d > 0 => self.state.move_up(1),
                    PointerKind::Scroll(_) => self.state.move_down(1),
                    _ => return Ok(Flow::Continue),
                }
                self.follow_cursor(dims);
                Flow::Continue
            }
        };
        Ok(flow)
    }

    fn finish(&mut self) -> SelectionState {
        self.state.clone()
    }
}

fn build_dialog<'a>(
    text: &'a str,
    categories: &'a [ChoiceCategory],
    config: &'a SelectionConfig,
    multi: bool,
) -> Result<SelectionDialog<'a>, DialogError> {
    let tree = FlatTree::new(categories);
    if tree.is_empty() {
        return Err(DialogError::EmptyChoiceSet);
    }
    if !tree.any_enabled() {
        return Err(DialogError::NoEnabledChoices);
    }

    let start = tree.default_highlight().unwrap_or(0);
    let defaults = tree.default_selected();
    let mode = if multi {
        SelectionMode::Multi {
            selected: defaults.into_iter().collect::<BTreeSet<_>>(),
        }
    } else {
        SelectionMode::Radio {
            selected: defaults.first().copied(),
        }
    };
    let disabled: Vec<bool> = tree.choices.iter().map(|c| c.disabled).collect();
    let state =
        SelectionState::new(disabled, start, mode).ok_or(DialogError::NoEnabledChoices)?;

    Ok(SelectionDialog {
        text,
        config,
        tree,
        state,
        scroll: ScrollState::new(),
        multi,
        last_click: None,
    })
}

/// Pick one choice from the tree; returns its index in flattening
/// order.
///
/// Enter and double-click commit the highlighted choice. Escape
/// cancels.
///
/// # Errors
///
/// [`DialogError::EmptyChoiceSet`] when the tree has no choices,
/// [`DialogError::NoEnabledChoices`] when every choice is disabled,
/// plus terminal-setup failures.
pub fn select_one(
    console: &mut dyn Console,
    text: &str,
    categories: &[ChoiceCategory],
    config: &SelectionConfig,
) -> Result<DialogOutcome<usize>, DialogError> {
    let mut dialog = build_dialog(text, categories, config, false)?;
    Ok(run_or_cancel(console, &mut dialog)?.map(|s| s.current))
}

/// Pick any number of choices from the tree; returns their indices in
/// flattening order, sorted.
///
/// Space toggles, `a` cycles select-all, Enter commits the set.
///
/// # Errors
///
/// Same preconditions as [`select_one`].
pub fn select_many(
    console: &mut dyn Console,
    text: &str,
    categories: &[ChoiceCategory],
    config: &SelectionConfig,
) -> Result<DialogOutcome<Vec<usize>>, DialogError> {
    let mut dialog = build_dialog(text, categories, config, true)?;
    Ok(run_or_cancel(console, &mut dialog)?.map(|s| s.selected_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::ChoiceGroup;
    use crate::console::TestConsole;
    use crate::input::Event;

    fn flat(names: &[&str]) -> Vec<ChoiceCategory> {
        vec![ChoiceCategory::flat(
            names.iter().map(|n| Choice::new(*n, n.to_uppercase())).collect(),
        )]
    }

    fn grouped() -> Vec<ChoiceCategory> {
        vec![ChoiceCategory::new(
            "langs",
            "Languages",
            vec![
                ChoiceGroup::new(
                    "compiled",
                    "Compiled",
                    vec![
                        Choice::new("rust", "Rust").with_description("Borrow checker included."),
                        Choice::new("go", "Go"),
                    ],
                ),
                ChoiceGroup::new("scripting", "Scripting", vec![Choice::new("lua", "Lua")]),
            ],
        )]
    }

    #[test]
    fn test_empty_tree_refused() {
        let mut con = TestConsole::new(80, 24, []);
        let cats = vec![ChoiceCategory::flat(vec![])];
        let err = select_one(&mut con, "Pick", &cats, &SelectionConfig::default()).unwrap_err();
        assert!(matches!(err, DialogError::EmptyChoiceSet));
    }

    #[test]
    fn test_all_disabled_refused() {
        let mut con = TestConsole::new(80, 24, []);
        let cats = vec![ChoiceCategory::flat(vec![
            Choice::new("a", "A").disabled(),
            Choice::new("b", "B").disabled(),
        ])];
        let err = select_one(&mut con, "Pick", &cats, &SelectionConfig::default()).unwrap_err();
        assert!(matches!(err, DialogError::NoEnabledChoices));
    }

    #[test]
    fn test_select_one_down_enter() {
        let mut con = TestConsole::new(80, 24, [
            Event::key(KeyCode::Down),
            Event::key(KeyCode::Enter),
        ]);
        let out =
            select_one(&mut con, "Pick", &flat(&["a", "b", "c"]), &SelectionConfig::default())
                .unwrap();
        assert_eq!(out, DialogOutcome::Committed(1));
    }

    #[test]
    fn test_select_one_skips_disabled() {
        let cats = vec![ChoiceCategory::flat(vec![
            Choice::new("a", "A"),
            Choice::new("b", "B").disabled(),
            Choice::new("c", "C"),
        ])];
        let mut con = TestConsole::new(80, 24, [
            Event::key(KeyCode::Down),
            Event::key(KeyCode::Enter),
        ]);
        let out = select_one(&mut con, "Pick", &cats, &SelectionConfig::default()).unwrap();
        assert_eq!(out, DialogOutcome::Committed(2));
    }

    #[test]
    fn test_select_many_toggle_and_commit() {
        let mut con = TestConsole::new(80, 24, [
            Event::key(KeyCode::Char(' ')),
            Event::key(KeyCode::Down),
            Event::key(KeyCode::Down),
            Event::key(KeyCode::Char(' ')),
            Event::key(KeyCode::Enter),
        ]);
        let out =
            select_many(&mut con, "Pick", &flat(&["a", "b", "c"]), &SelectionConfig::default())
                .unwrap();
        assert_eq!(out, DialogOutcome::Committed(vec![0, 2]));
    }

    #[test]
    fn test_select_many_select_all_cycles() {
        let mut con = TestConsole::new(80, 24, [
            Event::key(KeyCode::Char('a')),
            Event::key(KeyCode::Char('a')),
            Event::key(KeyCode::Enter),
        ]);
        let out =
            select_many(&mut con, "Pick", &flat(&["a", "b", "c"]), &SelectionConfig::default())
                .unwrap();
        assert_eq!(out, DialogOutcome::Committed(vec![]));
    }

    #[test]
    fn test_escape_discards_toggles() {
        let mut con = TestConsole::new(80, 24, [
            Event::key(KeyCode::Char(' ')),
            Event::key(KeyCode::Esc),
        ]);
        let out =
            select_many(&mut con, "Pick", &flat(&["a", "b"]), &SelectionConfig::default())
                .unwrap();
        assert!(out.is_cancelled());
    }

    #[test]
    fn test_defaults_preselected_in_multi() {
        let cats = vec![ChoiceCategory::flat(vec![
            Choice::new("a", "A").selected(),
            Choice::new("b", "B"),
            Choice::new("c", "C").selected(),
        ])];
        let mut con = TestConsole::new(80, 24, [Event::key(KeyCode::Enter)]);
        let out = select_many(&mut con, "Pick", &cats, &SelectionConfig::default()).unwrap();
        assert_eq!(out, DialogOutcome::Committed(vec![0, 2]));
    }

    #[test]
    fn test_headers_rendered_with_tri_state() {
        // Select everything, then look at the last frame: headers show
        // the all-selected glyph.
        let mut con = TestConsole::new(80, 24, [
            Event::key(KeyCode::Char('a')),
            Event::key(KeyCode::Enter),
        ]);
        let out = select_many(&mut con, "Pick", &grouped(), &SelectionConfig::default()).unwrap();
        assert_eq!(out, DialogOutcome::Committed(vec![0, 1, 2]));
        let all: String = (0..24)
            .map(|r| con.frames.last().unwrap().row_text(r))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(all.contains("◼ Languages"));
        assert!(all.contains("◼ Compiled"));
    }

    #[test]
    fn test_partial_selection_shows_mixed_glyph() {
        let mut con = TestConsole::new(80, 24, [
            Event::key(KeyCode::Char(' ')),
            Event::key(KeyCode::Enter),
        ]);
        let out = select_many(&mut con, "Pick", &grouped(), &SelectionConfig::default()).unwrap();
        assert_eq!(out, DialogOutcome::Committed(vec![0]));
        let all: String = (0..24)
            .map(|r| con.frames.last().unwrap().row_text(r))
            .collect::<Vec<_>>()
            .join("\n");
        // Only "rust" selected: its group and category read fifty-fifty.
        assert!(all.contains("◓ Languages"));
        assert!(all.contains("◓ Compiled"));
        assert!(all.contains("◻ Scripting"));
    }

    #[test]
    fn test_click_then_double_click_commits() {
        let cats = flat(&["a", "b", "c"]);
        let config = SelectionConfig::default();
        let dialog = build_dialog("Pick", &cats, &config, false).unwrap();
        let dims = dialog.layout((80, 24));
        let row_y = SelectionDialog::list_top(&dims) + 1; // row of "b"
        let x = dims.text_left();
        let mut con = TestConsole::new(80, 24, [
            Event::click(x, row_y),
            Event::click(x, row_y),
        ]);
        let out = select_one(&mut con, "Pick", &cats, &config).unwrap();
        assert_eq!(out, DialogOutcome::Committed(1));
    }

    #[test]
    fn test_single_click_only_highlights() {
        let cats = flat(&["a", "b", "c"]);
        let config = SelectionConfig::default();
        let dialog = build_dialog("Pick", &cats, &config, false).unwrap();
        let dims = dialog.layout((80, 24));
        let row_y = SelectionDialog::list_top(&dims) + 2;
        let mut con = TestConsole::new(80, 24, [
            Event::click(dims.text_left(), row_y),
            Event::key(KeyCode::Enter),
        ]);
        let out = select_one(&mut con, "Pick", &cats, &config).unwrap();
        assert_eq!(out, DialogOutcome::Committed(2));
    }

    #[test]
    fn test_right_click_opens_description() {
        let cats = grouped();
        let config = SelectionConfig::default();
        let dialog = build_dialog("Pick", &cats, &config, false).unwrap();
        let dims = dialog.layout((80, 24));
        // Row order: category, group, rust, go, group, lua.
        let rust_y = SelectionDialog::list_top(&dims) + 2;
        let mut con = TestConsole::new(80, 24, [
            Event::right_click(dims.text_left(), rust_y),
            Event::key(KeyCode::Esc), // dismiss the description box
            Event::key(KeyCode::Esc), // cancel the selection
        ]);
        let out = select_one(&mut con, "Pick", &cats, &config).unwrap();
        assert!(out.is_cancelled());
        let all: String = con
            .frames
            .iter()
            .flat_map(|f| (0..24).map(|r| f.row_text(r)).collect::<Vec<_>>())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(all.contains("Borrow checker included."));
    }

    #[test]
    fn test_search_single_match_jumps() {
        let mut con = TestConsole::new(80, 24, [
            Event::key(KeyCode::Char('f')),
            Event::key(KeyCode::Char('l')),
            Event::key(KeyCode::Char('u')),
            Event::key(KeyCode::Char('a')),
            Event::key(KeyCode::Enter), // commit the pattern
            Event::key(KeyCode::Enter), // commit the jumped-to choice
        ]);
        let out = select_one(&mut con, "Pick", &grouped(), &SelectionConfig::default()).unwrap();
        // "lua" is the third flattened choice.
        assert_eq!(out, DialogOutcome::Committed(2));
    }

    #[test]
    fn test_search_invalid_pattern_notices_and_stays() {
        let mut con = TestConsole::new(80, 24, [
            Event::key(KeyCode::Char('f')),
            Event::key(KeyCode::Char('[')),
            Event::key(KeyCode::Enter), // commit the broken pattern
            Event::key(KeyCode::Enter), // dismiss the notice
            Event::key(KeyCode::Enter), // commit the unchanged cursor
        ]);
        let out = select_one(&mut con, "Pick", &grouped(), &SelectionConfig::default()).unwrap();
        assert_eq!(out, DialogOutcome::Committed(0));
    }

    #[test]
    fn test_search_no_match_notices_and_stays() {
        let mut con = TestConsole::new(80, 24, [
            Event::key(KeyCode::Char('f')),
            Event::key(KeyCode::Char('z')),
            Event::key(KeyCode::Char('z')),
            Event::key(KeyCode::Enter),
            Event::key(KeyCode::Enter), // dismiss "no choice matches"
            Event::key(KeyCode::Enter),
        ]);
        let out = select_one(&mut con, "Pick", &grouped(), &SelectionConfig::default()).unwrap();
        assert_eq!(out, DialogOutcome::Committed(0));
    }

    #[test]
    fn test_search_multiple_matches_disambiguates() {
        // "o" matches both "go" and... only go/Go? names: rust, go, lua;
        // titles Rust, Go, Lua. Pattern "u" hits rust and lua.
        let mut con = TestConsole::new(80, 24, [
            Event::key(KeyCode::Char('f')),
            Event::key(KeyCode::Char('u')),
            Event::key(KeyCode::Enter), // commit pattern "u"
            Event::key(KeyCode::Down),  // nested picker: move to "lua"
            Event::key(KeyCode::Enter), // pick it
            Event::key(KeyCode::Enter), // commit the outer dialog
        ]);
        let out = select_one(&mut con, "Pick", &grouped(), &SelectionConfig::default()).unwrap();
        assert_eq!(out, DialogOutcome::Committed(2));
    }

    #[test]
    fn test_help_overlay_opens_and_dismisses() {
        let mut con = TestConsole::new(80, 24, [
            Event::key(KeyCode::Char('?')),
            Event::key(KeyCode::Esc), // dismiss help
            Event::key(KeyCode::Esc), // cancel selection
        ]);
        let out =
            select_one(&mut con, "Pick", &flat(&["a", "b"]), &SelectionConfig::default())
                .unwrap();
        assert!(out.is_cancelled());
        let all: String = con
            .frames
            .iter()
            .flat_map(|f| (0..24).map(|r| f.row_text(r)).collect::<Vec<_>>())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(all.contains("move cursor"));
    }

    #[test]
    fn test_detail_view_via_tab() {
        let mut con = TestConsole::new(80, 24, [
            Event::key(KeyCode::Tab),
            Event::key(KeyCode::Esc), // dismiss detail
            Event::key(KeyCode::Esc), // cancel selection
        ]);
        let out = select_one(&mut con, "Pick", &grouped(), &SelectionConfig::default()).unwrap();
        assert!(out.is_cancelled());
        let all: String = con
            .frames
            .iter()
            .flat_map(|f| (0..24).map(|r| f.row_text(r)).collect::<Vec<_>>())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(all.contains("Borrow checker included."));
    }

    #[test]
    fn test_long_list_scrolls_to_cursor() {
        let names: Vec<String> = (0..40).map(|i| format!("item{i:02}")).collect();
        let cats = vec![ChoiceCategory::flat(
            names.iter().map(|n| Choice::new(n.clone(), n.clone())).collect(),
        )];
        let mut con = TestConsole::new(80, 24, [
            Event::key(KeyCode::End),
            Event::key(KeyCode::Enter),
        ]);
        let out = select_one(&mut con, "Pick", &cats, &SelectionConfig::default()).unwrap();
        assert_eq!(out, DialogOutcome::Committed(39));
        let all: String = (0..24)
            .map(|r| con.frames.last().unwrap().row_text(r))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(all.contains("item39"));
        assert!(!all.contains("item00"));
    }

    #[test]
    fn test_page_down_moves_a_viewport() {
        let names: Vec<String> = (0..40).map(|i| format!("item{i:02}")).collect();
        let cats = vec![ChoiceCategory::flat(
            names.iter().map(|n| Choice::new(n.clone(), n.clone())).collect(),
        )];
        let config = SelectionConfig::default();
        let dialog = build_dialog("Pick", &cats, &config, false).unwrap();
        let dims = dialog.layout((80, 24));
        let page = SelectionDialog::list_page(&dims);
        let mut con = TestConsole::new(80, 24, [
            Event::key(KeyCode::PageDown),
            Event::key(KeyCode::Enter),
        ]);
        let out = select_one(&mut con, "Pick", &cats, &config).unwrap();
        assert_eq!(out, DialogOutcome::Committed(page));
    }
}
