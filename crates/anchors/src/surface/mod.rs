//! The seam between the registry and whatever draws markers.
//!
//! The registry never renders anything itself. It owns an [`AnchorSurface`]
//! and tells it when a marker appears, disappears, changes emphasis or needs
//! to be scrolled to. The surface owns the visual objects, and the registry
//! keeps the opaque [`AnchorSurface::Handle`] for each one. Calls only ever
//! flow from the registry to the surface.

pub mod headless;

use roundmark_primitives::Position;

use crate::codec::AnchorId;
use crate::label::Label;

/// Platform capability for anchor visuals.
///
/// # Implementing
///
/// ```ignore
/// impl AnchorSurface for DomSurface {
///     type Handle = web_sys::HtmlElement;
///
///     fn create_visual(&mut self, id: &AnchorId, position: Position, label: Label) -> Self::Handle {
///         self.spawn_marker(id.as_str(), position, label)
///     }
///     // ...
/// }
/// ```
pub trait AnchorSurface {
	/// Surface-side reference to one marker.
	type Handle;

	/// Draws a marker centered on `position` showing `label`, initially inactive.
	fn create_visual(&mut self, id: &AnchorId, position: Position, label: Label) -> Self::Handle;

	/// Removes a marker. The handle is not used again.
	fn destroy_visual(&mut self, handle: Self::Handle);

	/// Switches a marker between its active and inactive appearance.
	fn set_active(&mut self, handle: &Self::Handle, active: bool);

	/// Scrolls the marker's container so the marker is visible.
	///
	/// A marker that is already visible must not cause any scrolling.
	fn scroll_into_view(&mut self, handle: &Self::Handle);
}
