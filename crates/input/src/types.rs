use roundmark_anchors::AnchorId;
use roundmark_primitives::Position;

/// What the pointer was over when an event fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventTarget {
	/// Anything that is not a marker.
	Document,
	/// A marker, identified by the element id its surface gave it.
	Marker(String),
}

/// A registry operation requested by a gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum AnchorCommand {
	/// Place an anchor at a document position.
	Add(Position),
	/// Remove the anchor under the pointer.
	Remove(AnchorId),
	/// Jump to the spatially previous anchor.
	Previous,
	/// Jump to the spatially next anchor.
	Next,
	/// Remove every anchor.
	Clear,
}

impl AnchorCommand {
	/// Whether the frontend should suppress the event's default handling.
	///
	/// Navigation would otherwise also scroll the page, removal would bubble
	/// up to the document and place a new anchor, and the clear chord would
	/// trigger middle-click autoscroll or paste. Placing an anchor keeps the
	/// native double-click behavior.
	pub fn prevents_default(&self) -> bool {
		!matches!(self, AnchorCommand::Add(_))
	}
}
