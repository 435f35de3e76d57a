//! # Termdialog
//!
//! Modal dialog boxes for the terminal: info boxes, selection menus,
//! sliders, date/time pickers, text input, button rows, and progress
//! indicators.
//!
//! Every dialog is synchronous: it renders a centered box over the
//! current screen, blocks on input until the user commits or cancels,
//! erases itself, and returns. Nested dialogs (search, help, detail
//! views) stack on the same console without re-acquiring the terminal.
//!
//! ## Core Concepts
//!
//! - **Render-then-block loop**: geometry is recomputed every frame,
//!   so resizes never leave a stale box behind
//! - **Hitboxes**: pointer bindings are a per-frame data table, not
//!   callbacks
//! - **Console seam**: dialogs run against a [`console::Console`]
//!   trait, so the full interaction loop is testable headless
//!
//! ## Example
//!
//! ```rust,ignore
//! use termdialog::console::CrosstermConsole;
//! use termdialog::widget::{info_box, InfoBoxConfig};
//!
//! let mut console = CrosstermConsole::new();
//! info_box(&mut console, "Hello from a dialog box.", &InfoBoxConfig::default())?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod choice;
pub mod console;
pub mod dispatch;
pub mod error;
pub mod input;
pub mod keymap;
pub mod layout;
pub mod state;
pub mod style;
pub mod surface;
pub mod text;
pub mod widget;

// Re-exports for convenience
pub use choice::{Choice, ChoiceCategory, ChoiceGroup};
pub use console::{Console, CrosstermConsole};
pub use dispatch::{run_dialog, run_or_cancel, Dialog, DialogOutcome, Flow};
pub use error::DialogError;
pub use input::{Event, KeyCode, KeyModifiers};
pub use style::Theme;
pub use widget::{
    choice_box, date_box, info_box, input_box, message_box, select_many, select_one,
    slider_box, time_box, ProgressBox,
};
