//! Pointer gesture bindings.
//!
//! Turns frontend pointer events into [`AnchorCommand`]s. The crate never
//! touches the registry; callers apply the commands they get back.

pub mod frame;
pub mod handler;
pub mod types;

pub use frame::DocumentFrame;
pub use handler::Hotkeys;
pub use types::{AnchorCommand, EventTarget};
