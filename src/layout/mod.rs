//! Layout module: dialog geometry.
//!
//! Geometry is derived fresh every render pass from the current window
//! size and content, never cached across frames.

mod dims;
mod hitbox;
mod rect;

pub use dims::Dims;
pub use hitbox::{hit_first, Hitbox};
pub use rect::Rect;
