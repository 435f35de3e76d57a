//! Dialog state machines: scroll offsets and selection cursors.
//!
//! Pure state, no rendering: every transition is a plain method call,
//! so the machines are tested without a terminal.

mod scroll;
mod selection;

pub use scroll::ScrollState;
pub use selection::{search_matches, SelectionMode, SelectionState, TriState};
