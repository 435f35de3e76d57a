//! Terminal abstraction: the seam between dialogs and the real console.
//!
//! Dialogs talk to a [`Console`] trait object: window size, a blocking
//! event read, and frame presentation. [`CrosstermConsole`] drives a
//! real terminal; [`TestConsole`] replays a scripted event queue
//! against a fixed-size in-memory surface, so full dialog loops run
//! headless in tests.

use crate::input::{Event, KeyCode, KeyModifiers, PointerButton, PointerEvent, PointerKind};
use crate::layout::Rect;
use crate::surface::{AnsiBuffer, Surface};
use crossterm::event::{self, Event as CtEvent, KeyEventKind};
use crossterm::{cursor, execute, terminal};
use std::collections::VecDeque;
use std::io::{self, Write};
use std::time::Duration;

/// Terminal services consumed by the dialog dispatcher.
pub trait Console {
    /// Current window size as (columns, rows).
    fn size(&self) -> (u16, u16);

    /// Block until the next input event.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying event source fails.
    fn read_event(&mut self) -> io::Result<Event>;

    /// Present a region of the surface to the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn present(&mut self, surface: &Surface, area: Rect) -> io::Result<()>;

    /// Erase a region of the terminal (used by dialog teardown).
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn erase(&mut self, area: Rect) -> io::Result<()>;

    /// Acquire the console for a dialog.
    ///
    /// Returns `true` if this call installed the interactive screen
    /// state (raw mode, hidden cursor, mouse capture); `false` if it
    /// was already active, as happens for nested dialogs. The matching
    /// [`Console::release`] must pass the returned flag back.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal mode switch fails.
    fn acquire(&mut self) -> io::Result<bool>;

    /// Release the console; restores terminal state only when `owned`
    /// is the `true` returned by the matching [`Console::acquire`].
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal mode switch fails.
    fn release(&mut self, owned: bool) -> io::Result<()>;
}

/// Real-terminal console backed by crossterm.
pub struct CrosstermConsole {
    out: io::Stdout,
    ansi: AnsiBuffer,
    poll_timeout: Duration,
    active: bool,
}

impl CrosstermConsole {
    /// Create a console over stdout with the default 50ms poll tick.
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            ansi: AnsiBuffer::new(),
            poll_timeout: Duration::from_millis(50),
            active: false,
        }
    }

    /// Convert a crossterm event to our [`Event`].
    ///
    /// Key releases and repeats are dropped, as are events outside the
    /// dialog vocabulary; `None` means "read again".
    fn convert_event(event: CtEvent) -> Option<Event> {
        match event {
            CtEvent::Key(key_event) => {
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                let code = Self::convert_key_code(key_event.code)?;
                let modifiers = Self::convert_modifiers(key_event.modifiers);
                Some(Event::Key { code, modifiers })
            }
            CtEvent::Mouse(mouse) => Self::convert_pointer(mouse),
            CtEvent::Resize(width, height) => Some(Event::Resize { width, height }),
            _ => None,
        }
    }

    /// Convert crossterm `KeyCode` to our `KeyCode`.
    fn convert_key_code(code: event::KeyCode) -> Option<KeyCode> {
        Some(match code {
            event::KeyCode::Char(c) => KeyCode::Char(c),
            event::KeyCode::F(n) => KeyCode::F(n),
            event::KeyCode::Backspace => KeyCode::Backspace,
            event::KeyCode::Enter => KeyCode::Enter,
            event::KeyCode::Left => KeyCode::Left,
            event::KeyCode::Right => KeyCode::Right,
            event::KeyCode::Up => KeyCode::Up,
            event::KeyCode::Down => KeyCode::Down,
            event::KeyCode::Home => KeyCode::Home,
            event::KeyCode::End => KeyCode::End,
            event::KeyCode::PageUp => KeyCode::PageUp,
            event::KeyCode::PageDown => KeyCode::PageDown,
            event::KeyCode::Tab => KeyCode::Tab,
            event::KeyCode::BackTab => KeyCode::BackTab,
            event::KeyCode::Delete => KeyCode::Delete,
            event::KeyCode::Esc => KeyCode::Esc,
            _ => return None,
        })
    }

    /// Convert crossterm `KeyModifiers` to our `KeyModifiers`.
    fn convert_modifiers(mods: event::KeyModifiers) -> KeyModifiers {
        KeyModifiers {
            shift: mods.contains(event::KeyModifiers::SHIFT),
            control: mods.contains(event::KeyModifiers::CONTROL),
            alt: mods.contains(event::KeyModifiers::ALT),
        }
    }

    /// Convert a crossterm mouse event to a pointer event.
    fn convert_pointer(mouse: event::MouseEvent) -> Option<Event> {
        let modifiers = Self::convert_modifiers(mouse.modifiers);
        let (kind, button) = match mouse.kind {
            event::MouseEventKind::Down(b) => (PointerKind::Press, Self::convert_button(b)),
            event::MouseEventKind::Up(b) => (PointerKind::Release, Self::convert_button(b)),
            event::MouseEventKind::Moved => (PointerKind::Move, None),
            event::MouseEventKind::Drag(b) => (PointerKind::Move, Self::convert_button(b)),
            event::MouseEventKind::ScrollUp => (PointerKind::Scroll(1), None),
            event::MouseEventKind::ScrollDown => (PointerKind::Scroll(-1), None),
            _ => return None,
        };
        Some(Event::Pointer(PointerEvent {
            x: mouse.column,
            y: mouse.row,
            kind,
            button,
            modifiers,
        }))
    }

    /// Convert crossterm `MouseButton` to our `PointerButton`.
    const fn convert_button(button: event::MouseButton) -> Option<PointerButton> {
        Some(match button {
            event::MouseButton::Left => PointerButton::Left,
            event::MouseButton::Right => PointerButton::Right,
            event::MouseButton::Middle => PointerButton::Middle,
        })
    }
}

impl Default for CrosstermConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for CrosstermConsole {
    fn size(&self) -> (u16, u16) {
        terminal::size().unwrap_or((80, 24))
    }

    fn read_event(&mut self) -> io::Result<Event> {
        // Poll-with-timeout loop so a quit signal or dropped terminal
        // cannot wedge the read forever on exotic platforms.
        loop {
            if event::poll(self.poll_timeout)? {
                if let Some(converted) = Self::convert_event(event::read()?) {
                    return Ok(converted);
                }
            }
        }
    }

    fn present(&mut self, surface: &Surface, area: Rect) -> io::Result<()> {
        self.ansi.clear();
        self.ansi.cursor_hide();
        self.ansi.push_region(surface, area);
        self.ansi.flush_to(&mut self.out)
    }

    fn erase(&mut self, area: Rect) -> io::Result<()> {
        let blank = " ".repeat(area.width as usize);
        self.ansi.clear();
        self.ansi.reset_attrs();
        for y in area.y..area.bottom() {
            self.ansi.cursor_move(area.x, y);
            self.ansi.write_str(&blank);
        }
        self.ansi.flush_to(&mut self.out)
    }

    fn acquire(&mut self) -> io::Result<bool> {
        if self.active {
            return Ok(false);
        }
        terminal::enable_raw_mode()?;
        execute!(
            self.out,
            event::EnableMouseCapture,
            cursor::Hide,
        )?;
        self.active = true;
        Ok(true)
    }

    fn release(&mut self, owned: bool) -> io::Result<()> {
        if !owned || !self.active {
            return Ok(());
        }
        execute!(self.out, event::DisableMouseCapture, cursor::Show)?;
        terminal::disable_raw_mode()?;
        self.out.flush()?;
        self.active = false;
        Ok(())
    }
}

/// Scripted console for tests: fixed size, queued events, captured
/// frames.
pub struct TestConsole {
    width: u16,
    height: u16,
    events: VecDeque<Event>,
    /// Every frame presented, newest last.
    pub frames: Vec<Surface>,
    /// Nesting depth of acquire/release pairs, for assertions.
    pub acquire_depth: usize,
    active: bool,
}

impl TestConsole {
    /// Create a console of the given size with a scripted event queue.
    pub fn new(width: u16, height: u16, events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            width,
            height,
            events: events.into_iter().collect(),
            frames: Vec::new(),
            acquire_depth: 0,
            active: false,
        }
    }

    /// Push more events onto the script (used by nested-dialog tests).
    pub fn push_events(&mut self, events: impl IntoIterator<Item = Event>) {
        self.events.extend(events);
    }

    /// The last presented frame, if any.
    pub fn last_frame(&self) -> Option<&Surface> {
        self.frames.last()
    }
}

impl Console for TestConsole {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn read_event(&mut self) -> io::Result<Event> {
        self.events.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "event script exhausted")
        })
    }

    fn present(&mut self, surface: &Surface, _area: Rect) -> io::Result<()> {
        self.frames.push(surface.clone());
        Ok(())
    }

    fn erase(&mut self, _area: Rect) -> io::Result<()> {
        Ok(())
    }

    fn acquire(&mut self) -> io::Result<bool> {
        self.acquire_depth += 1;
        if self.active {
            return Ok(false);
        }
        self.active = true;
        Ok(true)
    }

    fn release(&mut self, owned: bool) -> io::Result<()> {
        self.acquire_depth = self.acquire_depth.saturating_sub(1);
        if owned {
            self.active = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyCode;

    #[test]
    fn test_test_console_script() {
        let mut con = TestConsole::new(80, 24, [Event::key(KeyCode::Enter)]);
        assert_eq!(con.size(), (80, 24));
        assert_eq!(con.read_event().unwrap(), Event::key(KeyCode::Enter));
        assert!(con.read_event().is_err());
    }

    #[test]
    fn test_test_console_nested_acquire() {
        let mut con = TestConsole::new(80, 24, []);
        let outer = con.acquire().unwrap();
        let inner = con.acquire().unwrap();
        assert!(outer);
        assert!(!inner);
        con.release(inner).unwrap();
        assert!(con.active);
        con.release(outer).unwrap();
        assert!(!con.active);
    }
}
