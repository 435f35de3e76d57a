//! The render-loop dispatcher shared by every interactive dialog.
//!
//! One dialog invocation is a synchronous loop on the calling thread:
//! recompute geometry, render a frame, present it, block for the next
//! input event, translate it into a state mutation or a terminal
//! action, repeat. Console acquisition is scoped: the dispatcher
//! restores terminal state on every exit path, including errors, and
//! nested dialogs re-enter on the same thread without re-acquiring.

use crate::console::Console;
use crate::error::DialogError;
use crate::input::{Event, KeyCode, KeyModifiers, PointerEvent};
use crate::layout::{hit_first, Dims, Hitbox};
use crate::surface::Surface;

/// How a finished dialog ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome<T> {
    /// The user committed a value (Enter, button press, double-click).
    Committed(T),
    /// The user cancelled (Escape, close button); any pending edits
    /// are discarded.
    Cancelled,
}

impl<T> DialogOutcome<T> {
    /// The committed value, or `initial` when cancelled.
    pub fn value_or(self, initial: T) -> T {
        match self {
            Self::Committed(v) => v,
            Self::Cancelled => initial,
        }
    }

    /// Whether the dialog was cancelled.
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Map the committed value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DialogOutcome<U> {
        match self {
            Self::Committed(v) => DialogOutcome::Committed(f(v)),
            Self::Cancelled => DialogOutcome::Cancelled,
        }
    }
}

/// What an event handler wants the loop to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep looping.
    Continue,
    /// Exit, committing the dialog's value.
    Commit,
    /// Exit cancelled.
    Cancel,
}

/// One interactive dialog: layout, rendering, and event handling.
///
/// Handlers receive the console so they can open nested dialogs
/// (search, help, detail views); nesting is strictly sequential
/// re-entrancy on the same thread.
pub trait Dialog {
    /// Value produced on commit.
    type Value;
    /// Message carried by this dialog's hitboxes.
    type Msg: Clone;

    /// Compute geometry for the current window. Called every
    /// iteration; must not cache.
    fn layout(&self, window: (u16, u16)) -> Dims;

    /// Draw the current state.
    fn render(&self, surface: &mut Surface, dims: &Dims);

    /// Build this frame's hitboxes, highest priority first.
    fn hitboxes(&self, dims: &Dims) -> Vec<Hitbox<Self::Msg>>;

    /// Handle a key press.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures from nested dialogs.
    fn on_key(
        &mut self,
        console: &mut dyn Console,
        code: KeyCode,
        modifiers: KeyModifiers,
        dims: &Dims,
    ) -> Result<Flow, DialogError>;

    /// Handle a hitbox message.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures from nested dialogs.
    fn on_msg(
        &mut self,
        console: &mut dyn Console,
        msg: Self::Msg,
        pointer: &PointerEvent,
        dims: &Dims,
    ) -> Result<Flow, DialogError>;

    /// Produce the committed value. Called once, on [`Flow::Commit`].
    fn finish(&mut self) -> Self::Value;
}

/// Run a dialog to completion.
///
/// Acquires the console (installing the interactive screen state if
/// this is the outermost dialog), loops until a terminal action, then
/// erases the dialog region and releases the console. Teardown runs on
/// the error path too.
///
/// # Errors
///
/// Returns precondition or I/O errors; callers that want the
/// log-and-cancel behavior use [`run_or_cancel`].
pub fn run_dialog<D: Dialog>(
    console: &mut dyn Console,
    dialog: &mut D,
) -> Result<DialogOutcome<D::Value>, DialogError> {
    let owned = console.acquire()?;
    let result = run_loop(console, dialog);

    // Teardown, unconditionally: erase the dialog's region and restore
    // the terminal if this invocation installed it.
    let dims = dialog.layout(console.size());
    let erased = console.erase(dims.border_rect());
    let released = console.release(owned);

    let outcome = result?;
    erased?;
    released?;
    Ok(outcome)
}

/// Run a dialog, mapping any in-loop failure to a cancelled outcome.
///
/// The dispatcher never leaves the terminal dirty; an I/O hiccup while
/// drawing or reading is logged here and reported to the caller as a
/// plain cancel, exactly like pressing Escape.
pub fn run_or_cancel<D: Dialog>(
    console: &mut dyn Console,
    dialog: &mut D,
) -> Result<DialogOutcome<D::Value>, DialogError> {
    match run_dialog(console, dialog) {
        Err(DialogError::Io(e)) => {
            log::warn!("dialog aborted, treating as cancel: {e}");
            Ok(DialogOutcome::Cancelled)
        }
        other => other,
    }
}

fn run_loop<D: Dialog>(
    console: &mut dyn Console,
    dialog: &mut D,
) -> Result<DialogOutcome<D::Value>, DialogError> {
    loop {
        let (w, h) = console.size();
        let dims = dialog.layout((w, h));
        let mut surface = Surface::new(w, h);
        dialog.render(&mut surface, &dims);
        console.present(&surface, dims.border_rect())?;

        let event = console.read_event()?;
        let flow = match event {
            // A resize invalidates all geometry; the next iteration
            // recomputes everything.
            Event::Resize { .. } => Flow::Continue,
            Event::Key { code, modifiers } => dialog.on_key(console, code, modifiers, &dims)?,
            Event::Pointer(pointer) => {
                // Hitboxes are rebuilt fresh: geometry may have moved
                // since they were last valid.
                let hitboxes = dialog.hitboxes(&dims);
                match hit_first(&hitboxes, &pointer) {
                    Some(msg) => {
                        let msg = msg.clone();
                        dialog.on_msg(console, msg, &pointer, &dims)?
                    }
                    None => Flow::Continue,
                }
            }
        };

        match flow {
            Flow::Continue => {}
            Flow::Commit => return Ok(DialogOutcome::Committed(dialog.finish())),
            Flow::Cancel => return Ok(DialogOutcome::Cancelled),
        }
    }
}
