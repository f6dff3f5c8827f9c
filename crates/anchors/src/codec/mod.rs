//! Position encoding.
//!
//! A document position is floored to an integer [`GridPoint`], which is the
//! anchor's identity. From that point the codec derives:
//!
//! * an [`AnchorId`] token of the form `round-mark-{x}-{y}`, which surfaces can
//!   use as an element id and which parses back to the same point;
//! * an [`OrderKey`] equal to `y * max_axis + x`, a single integer that sorts
//!   anchors row-major.
//!
//! `max_axis` has to exceed the tallest document the session will see.
//! Otherwise a point at the far right of one row could share a key with a
//! point further down. It is also capped at `2^32` so keys fit in a `u64`.

use std::fmt;

use roundmark_primitives::Position;

use crate::error::CodecError;

/// Default exclusive bound for both axes, in document units.
pub const DEFAULT_MAX_AXIS: u64 = 1_000_000_000;

/// Largest accepted axis bound.
pub const MAX_AXIS_LIMIT: u64 = 1 << 32;

const ID_PREFIX: &str = "round-mark-";

/// Coordinate axis, used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
	X,
	Y,
}

impl fmt::Display for Axis {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Axis::X => f.write_str("x"),
			Axis::Y => f.write_str("y"),
		}
	}
}

/// A position floored to whole document units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct GridPoint {
	pub x: u64,
	pub y: u64,
}

impl GridPoint {
	pub const fn new(x: u64, y: u64) -> Self {
		Self { x, y }
	}
}

/// Stable identifier derived from an anchor's [`GridPoint`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnchorId(String);

impl AnchorId {
	/// Returns the id token.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for AnchorId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for AnchorId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

/// Row-major ordering key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderKey(u64);

impl OrderKey {
	pub const fn new(raw: u64) -> Self {
		Self(raw)
	}

	pub const fn get(self) -> u64 {
		self.0
	}
}

impl fmt::Display for OrderKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

/// Converts between positions, ids and order keys for one axis bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateCodec {
	max_axis: u64,
}

impl Default for CoordinateCodec {
	fn default() -> Self {
		Self {
			max_axis: DEFAULT_MAX_AXIS,
		}
	}
}

impl CoordinateCodec {
	/// Creates a codec whose coordinates must lie in `[0, max_axis)`.
	pub fn new(max_axis: u64) -> Result<Self, CodecError> {
		if max_axis == 0 || max_axis > MAX_AXIS_LIMIT {
			return Err(CodecError::InvalidBound(max_axis));
		}
		Ok(Self { max_axis })
	}

	/// Exclusive bound shared by both axes.
	pub fn max_axis(&self) -> u64 {
		self.max_axis
	}

	/// Floors `position` to a grid point, rejecting out-of-range components.
	pub fn grid_point(&self, position: Position) -> Result<GridPoint, CodecError> {
		Ok(GridPoint::new(
			self.floor_axis(Axis::X, position.x)?,
			self.floor_axis(Axis::Y, position.y)?,
		))
	}

	/// Encodes the id of the anchor that `position` would create.
	pub fn encode_id(&self, position: Position) -> Result<AnchorId, CodecError> {
		self.grid_point(position).map(|point| self.encode_point(point))
	}

	/// Formats the id token for `point`.
	pub fn encode_point(&self, point: GridPoint) -> AnchorId {
		AnchorId(format!("{ID_PREFIX}{}-{}", point.x, point.y))
	}

	/// Parses an id token back into its grid point.
	pub fn decode_id(&self, id: &str) -> Result<GridPoint, CodecError> {
		let malformed = || CodecError::MalformedId(id.to_owned());
		let (x, y) = id
			.strip_prefix(ID_PREFIX)
			.and_then(|rest| rest.split_once('-'))
			.ok_or_else(malformed)?;
		let x = parse_component(x).ok_or_else(malformed)?;
		let y = parse_component(y).ok_or_else(malformed)?;
		self.check_axis(Axis::X, x)?;
		self.check_axis(Axis::Y, y)?;
		Ok(GridPoint::new(x, y))
	}

	/// Computes the row-major key of `point`.
	///
	/// `point` is expected to come from this codec, so both components are
	/// below `max_axis` and the result cannot overflow.
	pub fn order_key(&self, point: GridPoint) -> OrderKey {
		OrderKey(point.y * self.max_axis + point.x)
	}

	/// Decodes `id` and computes its key.
	pub fn order_key_of_id(&self, id: &str) -> Result<OrderKey, CodecError> {
		self.decode_id(id).map(|point| self.order_key(point))
	}

	/// Recovers the grid point a key was computed from.
	pub fn point_from_order_key(&self, key: OrderKey) -> GridPoint {
		let x = key.0 % self.max_axis;
		let y = (key.0 - x) / self.max_axis;
		GridPoint::new(x, y)
	}

	/// Recovers the id a key was computed from.
	pub fn id_from_order_key(&self, key: OrderKey) -> AnchorId {
		self.encode_point(self.point_from_order_key(key))
	}

	fn floor_axis(&self, axis: Axis, value: f64) -> Result<u64, CodecError> {
		if !value.is_finite() || value < 0.0 || value >= self.max_axis as f64 {
			return Err(CodecError::OutOfBounds {
				axis,
				value,
				max: self.max_axis,
			});
		}
		Ok(value.floor() as u64)
	}

	fn check_axis(&self, axis: Axis, value: u64) -> Result<(), CodecError> {
		if value >= self.max_axis {
			return Err(CodecError::OutOfBounds {
				axis,
				value: value as f64,
				max: self.max_axis,
			});
		}
		Ok(())
	}
}

fn parse_component(digits: &str) -> Option<u64> {
	if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	digits.parse().ok()
}
