//! RoundMark: tiny bookmarks on a scrollable document.
//!
//! Hold the binding modifier (Alt by default) and double-click to drop an
//! anchor, scroll the wheel to jump between anchors top to bottom, double-click
//! an anchor to delete it, or release the middle button to delete them all.
//!
//! [`RoundMark`] wires the pieces together: configuration, gesture bindings
//! and the anchor registry with its surface. Frontends feed it pointer events
//! and render whatever their [`AnchorSurface`] was told to draw.

mod error;
mod logging;
mod session;

pub use error::{Error, Result};
pub use logging::setup_tracing;
pub use roundmark_anchors::{
	Anchor, AnchorId, AnchorRegistry, AnchorSurface, HeadlessSurface, Label, Marker, MarkerHandle,
	Placement, RegistryState, SurfaceEvent,
};
pub use roundmark_config::Config;
pub use roundmark_input::{AnchorCommand, DocumentFrame, EventTarget, Hotkeys};
pub use roundmark_primitives::{Modifiers, MouseButton, MouseEvent, Position, ScrollDirection, Viewport};
pub use session::RoundMark;
