//! Hitboxes: clickable screen regions bound to widget messages.
//!
//! Each dialog rebuilds its hitboxes every loop iteration, because the
//! geometry depends on the current window size and content. A hitbox
//! carries a message value rather than a callback; the dialog
//! interprets the message in its own event handler, which keeps the
//! pointer bindings a data table.

use crate::input::{PointerButton, PointerEvent, PointerKind};
use crate::layout::Rect;

/// A rectangular screen region bound to a message.
#[derive(Debug, Clone)]
pub struct Hitbox<M> {
    /// The clickable region.
    pub area: Rect,
    /// Required button; `None` accepts any button.
    pub button: Option<PointerButton>,
    /// Required press kind; `None` accepts any kind except `Move`.
    pub kind: Option<PointerKind>,
    /// Message emitted when the event matches.
    pub msg: M,
}

impl<M> Hitbox<M> {
    /// Hitbox matching a left-button press in `area`.
    pub const fn click(area: Rect, msg: M) -> Self {
        Self {
            area,
            button: Some(PointerButton::Left),
            kind: Some(PointerKind::Press),
            msg,
        }
    }

    /// Hitbox matching any button press in `area`.
    pub const fn any_press(area: Rect, msg: M) -> Self {
        Self {
            area,
            button: None,
            kind: Some(PointerKind::Press),
            msg,
        }
    }

    /// Hitbox matching a right-button press in `area`.
    pub const fn right_click(area: Rect, msg: M) -> Self {
        Self {
            area,
            button: Some(PointerButton::Right),
            kind: Some(PointerKind::Press),
            msg,
        }
    }

    /// Test this hitbox against a pointer event.
    ///
    /// Returns the bound message if the position is inside the region
    /// and the button/kind filters match. Out-of-range coordinates
    /// never match.
    pub fn try_handle(&self, event: &PointerEvent) -> Option<&M> {
        if !self.area.contains(event.x, event.y) {
            return None;
        }
        if let Some(required) = self.button {
            if event.button != Some(required) {
                return None;
            }
        }
        match self.kind {
            Some(required) if event.kind != required => return None,
            None if event.kind == PointerKind::Move => return None,
            _ => {}
        }
        Some(&self.msg)
    }
}

/// Test hitboxes in slice order; the first match wins.
///
/// Callers build the slice in priority order (scroll arrows before
/// embedded-control arrows before header buttons before the content
/// area), so earlier entries short-circuit later ones.
pub fn hit_first<'a, M>(hitboxes: &'a [Hitbox<M>], event: &PointerEvent) -> Option<&'a M> {
    hitboxes.iter().find_map(|h| h.try_handle(event))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyModifiers;

    fn press(x: u16, y: u16, button: PointerButton) -> PointerEvent {
        PointerEvent {
            x,
            y,
            kind: PointerKind::Press,
            button: Some(button),
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_hitbox_match_inside() {
        let hb = Hitbox::click(Rect::new(2, 2, 3, 1), 7u8);
        assert_eq!(hb.try_handle(&press(3, 2, PointerButton::Left)), Some(&7));
        assert_eq!(hb.try_handle(&press(5, 2, PointerButton::Left)), None);
    }

    #[test]
    fn test_hitbox_button_filter() {
        let hb = Hitbox::click(Rect::new(0, 0, 2, 2), ());
        assert!(hb.try_handle(&press(0, 0, PointerButton::Right)).is_none());
        assert!(hb.try_handle(&press(0, 0, PointerButton::Left)).is_some());
    }

    #[test]
    fn test_hitbox_kind_filter() {
        let hb = Hitbox::click(Rect::new(0, 0, 2, 2), ());
        let release = PointerEvent {
            kind: PointerKind::Release,
            ..press(0, 0, PointerButton::Left)
        };
        assert!(hb.try_handle(&release).is_none());
    }

    #[test]
    fn test_hitbox_motion_never_matches_unfiltered() {
        let hb = Hitbox {
            area: Rect::new(0, 0, 2, 2),
            button: None,
            kind: None,
            msg: (),
        };
        let motion = PointerEvent {
            x: 0,
            y: 0,
            kind: PointerKind::Move,
            button: None,
            modifiers: KeyModifiers::NONE,
        };
        assert!(hb.try_handle(&motion).is_none());
    }

    #[test]
    fn test_hit_first_priority_order() {
        let boxes = vec![
            Hitbox::click(Rect::new(0, 0, 4, 4), 1u8),
            Hitbox::click(Rect::new(0, 0, 8, 8), 2u8),
        ];
        // Overlapping regions: earlier entry wins.
        assert_eq!(hit_first(&boxes, &press(1, 1, PointerButton::Left)), Some(&1));
        assert_eq!(hit_first(&boxes, &press(6, 6, PointerButton::Left)), Some(&2));
        assert_eq!(hit_first(&boxes, &press(9, 9, PointerButton::Left)), None);
    }
}
