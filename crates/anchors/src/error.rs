//! Error types for anchor identifiers, labels and the registry.

use thiserror::Error;

use crate::codec::{Axis, MAX_AXIS_LIMIT};

/// Errors produced while encoding or decoding anchor coordinates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
	/// The token does not have the `round-mark-{x}-{y}` shape.
	#[error("malformed anchor id: {0:?}")]
	MalformedId(String),

	/// A coordinate is negative, not finite, or not below the axis bound.
	#[error("{axis} coordinate {value} is outside [0, {max})")]
	OutOfBounds {
		/// Axis the offending value belongs to.
		axis: Axis,
		/// The rejected value.
		value: f64,
		/// Exclusive upper bound of the axis.
		max: u64,
	},

	/// The axis bound cannot produce collision-free order keys.
	#[error("axis bound must be in 1..={limit}, got {0}", limit = MAX_AXIS_LIMIT)]
	InvalidBound(u64),
}

/// Errors produced when configuring the label allocator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
	#[error("label alphabet must not be empty")]
	EmptyAlphabet,
}

/// Errors surfaced by registry operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnchorError {
	#[error(transparent)]
	Codec(#[from] CodecError),

	#[error(transparent)]
	Label(#[from] LabelError),
}
