//! Pointer input types.
//!
//! Frontends translate their native events into [`MouseEvent`] before handing
//! them to the binding layer. Coordinates are viewport-relative; resolving them
//! into document space is the binding layer's job.

mod modifiers;
mod mouse;

pub use modifiers::Modifiers;
pub use mouse::{MouseButton, MouseEvent, ScrollDirection};

#[cfg(test)]
mod tests;
