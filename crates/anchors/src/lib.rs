//! Spatially ordered anchors on a scrollable document.
//!
//! An anchor is a small marker dropped at a document position. Anchors are
//! navigated in row-major order (top to bottom, then left to right), which is
//! independent of the order they were placed in.
//!
//! * [`CoordinateCodec`] turns positions into stable ids and order keys.
//! * [`LabelAllocator`] hands out the short cyclic display labels.
//! * [`AnchorRegistry`] owns the anchors, the current selection and the
//!   wraparound navigation.
//! * [`AnchorSurface`] is the seam to whatever draws the markers.

pub mod codec;
pub mod error;
pub mod label;
pub mod registry;
pub mod surface;

pub use codec::{
	AnchorId, Axis, CoordinateCodec, DEFAULT_MAX_AXIS, GridPoint, MAX_AXIS_LIMIT, OrderKey,
};
pub use error::{AnchorError, CodecError, LabelError};
pub use label::{DEFAULT_ALPHABET, Label, LabelAllocator};
pub use registry::{Anchor, AnchorRegistry, Placement, RegistryState};
pub use surface::AnchorSurface;
pub use surface::headless::{HeadlessSurface, Marker, MarkerHandle, SurfaceEvent};
