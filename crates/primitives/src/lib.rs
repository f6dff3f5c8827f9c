//! Core types shared by the anchor registry, input bindings and surfaces.

/// Sequential direction used by spatial navigation.
pub mod direction;
/// Document-space geometry: positions and rectangles.
pub mod geometry;
/// Pointer event types and modifier state.
pub mod key;
/// Scroll container model and reveal-if-needed math.
pub mod viewport;

pub use direction::SeqDirection;
pub use geometry::{Position, Rect};
pub use key::{Modifiers, MouseButton, MouseEvent, ScrollDirection};
pub use viewport::Viewport;
