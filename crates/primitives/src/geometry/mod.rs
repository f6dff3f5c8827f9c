//! Document-space geometry.
//!
//! All coordinates are measured from the top-left corner of the scrollable
//! document, not the visible viewport. Values are `f64` because pointer input
//! arrives with sub-pixel precision; anything that needs a stable integer
//! identity floors them first.

/// A point in document space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

impl Position {
	/// Creates a new position.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Returns this position shifted by `(dx, dy)`.
	pub fn offset(self, dx: f64, dy: f64) -> Self {
		Self::new(self.x + dx, self.y + dy)
	}

	/// Clamps both components to be non-negative.
	pub fn clamp_non_negative(self) -> Self {
		Self::new(self.x.max(0.0), self.y.max(0.0))
	}
}

/// An axis-aligned rectangle in document space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	/// Creates a new rectangle. Negative dimensions are clamped to zero.
	pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
		Self {
			x,
			y,
			width: width.max(0.0),
			height: height.max(0.0),
		}
	}

	/// Returns a `size` x `size` square whose center is `center`.
	///
	/// Markers are drawn as circles centered on their anchor position, so this
	/// is the bounding box a surface lays them out with.
	pub fn centered(center: Position, size: f64) -> Self {
		let half = size.max(0.0) / 2.0;
		Self::new(center.x - half, center.y - half, size, size)
	}

	/// Returns the left edge x coordinate.
	pub fn left(&self) -> f64 {
		self.x
	}

	/// Returns the right edge x coordinate (exclusive).
	pub fn right(&self) -> f64 {
		self.x + self.width
	}

	/// Returns the top edge y coordinate.
	pub fn top(&self) -> f64 {
		self.y
	}

	/// Returns the bottom edge y coordinate (exclusive).
	pub fn bottom(&self) -> f64 {
		self.y + self.height
	}

	/// Returns the center point.
	pub fn center(&self) -> Position {
		Position::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
	}

	/// Returns true if `pos` lies inside (origin inclusive, far edges exclusive).
	pub fn contains(&self, pos: Position) -> bool {
		pos.x >= self.left() && pos.x < self.right() && pos.y >= self.top() && pos.y < self.bottom()
	}
}

#[cfg(test)]
mod tests;
