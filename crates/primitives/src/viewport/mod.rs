//! Scroll container model.
//!
//! A [`Viewport`] is the visible window of a scrollable document. Revealing a
//! target only moves an axis on which the target is clipped, and then centers
//! the target on that axis. A target that is already fully visible leaves the
//! viewport where it is.

use crate::geometry::Rect;

/// Visible region of a scrollable document.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
	/// Horizontal scroll offset in document units.
	pub scroll_x: f64,
	/// Vertical scroll offset in document units.
	pub scroll_y: f64,
	/// Visible width.
	pub width: f64,
	/// Visible height.
	pub height: f64,
}

impl Viewport {
	/// Creates a viewport scrolled to the document origin.
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			scroll_x: 0.0,
			scroll_y: 0.0,
			width: width.max(0.0),
			height: height.max(0.0),
		}
	}

	/// Returns true if `target` is entirely inside the visible region.
	pub fn is_visible(&self, target: Rect) -> bool {
		!overflows(target.top(), target.bottom(), self.scroll_y, self.height)
			&& !overflows(target.left(), target.right(), self.scroll_x, self.width)
	}

	/// Computes the scroll offsets that bring `target` into view.
	///
	/// Returns `None` when nothing has to move.
	pub fn reveal(&self, target: Rect) -> Option<(f64, f64)> {
		let x = reveal_axis(target.left(), target.width, self.scroll_x, self.width);
		let y = reveal_axis(target.top(), target.height, self.scroll_y, self.height);
		if x == self.scroll_x && y == self.scroll_y {
			return None;
		}
		Some((x, y))
	}

	/// Applies [`Self::reveal`], returning true if the viewport moved.
	pub fn scroll_to_reveal(&mut self, target: Rect) -> bool {
		match self.reveal(target) {
			Some((x, y)) => {
				self.scroll_x = x;
				self.scroll_y = y;
				true
			}
			None => false,
		}
	}
}

fn overflows(start: f64, end: f64, scroll: f64, extent: f64) -> bool {
	start < scroll || end > scroll + extent
}

fn reveal_axis(start: f64, size: f64, scroll: f64, extent: f64) -> f64 {
	if !overflows(start, start + size, scroll, extent) {
		return scroll;
	}
	(start + size / 2.0 - extent / 2.0).max(0.0)
}

#[cfg(test)]
mod tests;
