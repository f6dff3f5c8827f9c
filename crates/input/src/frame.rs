//! Viewport to document coordinate translation.

use roundmark_primitives::Position;

/// Scroll and layout offsets of the document root at event time.
///
/// Pointer events report viewport coordinates. Adding the scroll offset gives
/// a document position, and subtracting the root container's own offset (body
/// margins on a web page) gives the position markers are laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DocumentFrame {
	pub scroll_x: f64,
	pub scroll_y: f64,
	/// Left edge of the root container inside the document.
	pub offset_x: f64,
	/// Top edge of the root container inside the document.
	pub offset_y: f64,
}

impl DocumentFrame {
	/// Frame for an unscrolled document with no root offset.
	pub const ORIGIN: Self = Self {
		scroll_x: 0.0,
		scroll_y: 0.0,
		offset_x: 0.0,
		offset_y: 0.0,
	};

	pub fn new(scroll_x: f64, scroll_y: f64) -> Self {
		Self {
			scroll_x,
			scroll_y,
			..Self::ORIGIN
		}
	}

	/// Returns a copy with the root container offset set.
	pub fn with_offset(self, offset_x: f64, offset_y: f64) -> Self {
		Self {
			offset_x,
			offset_y,
			..self
		}
	}

	/// Resolves viewport coordinates into root-container space.
	///
	/// Clicks that land in the root's margin clamp to its edge.
	pub fn resolve(&self, client_x: f64, client_y: f64) -> Position {
		Position::new(client_x, client_y)
			.offset(self.scroll_x - self.offset_x, self.scroll_y - self.offset_y)
			.clamp_non_negative()
	}
}
