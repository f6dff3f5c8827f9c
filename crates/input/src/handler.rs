//! Gesture interpretation.

use roundmark_anchors::{CodecError, CoordinateCodec};
use roundmark_primitives::{Modifiers, MouseButton, MouseEvent, ScrollDirection};
use tracing::{trace, warn};

use crate::frame::DocumentFrame;
use crate::types::{AnchorCommand, EventTarget};

/// Maps pointer gestures to anchor commands.
///
/// Every gesture requires the binding modifier:
///
/// | Gesture                          | Command                    |
/// |----------------------------------|----------------------------|
/// | left double-click on document    | [`AnchorCommand::Add`]     |
/// | left double-click on a marker    | [`AnchorCommand::Remove`]  |
/// | wheel up                         | [`AnchorCommand::Previous`]|
/// | wheel down                       | [`AnchorCommand::Next`]    |
/// | middle button release            | [`AnchorCommand::Clear`]   |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotkeys {
	modifier: Modifiers,
}

impl Default for Hotkeys {
	fn default() -> Self {
		Self::new(Modifiers::ALT)
	}
}

impl Hotkeys {
	/// Creates bindings that fire while `modifier` is held.
	pub fn new(modifier: Modifiers) -> Self {
		Self { modifier }
	}

	pub fn modifier(&self) -> Modifiers {
		self.modifier
	}

	/// Interprets `event`, returning the command it triggers, if any.
	///
	/// Marker targets are parsed with `codec`; a target id that does not parse
	/// is reported as an error rather than guessed at.
	pub fn interpret(
		&self,
		event: &MouseEvent,
		target: &EventTarget,
		frame: &DocumentFrame,
		codec: &CoordinateCodec,
	) -> Result<Option<AnchorCommand>, CodecError> {
		if !event.modifiers().contains(self.modifier) {
			trace!(?event, "ignoring event without binding modifier");
			return Ok(None);
		}

		let command = match *event {
			MouseEvent::DoubleClick {
				button: MouseButton::Left,
				x,
				y,
				..
			} => match target {
				EventTarget::Document => Some(AnchorCommand::Add(frame.resolve(x, y))),
				EventTarget::Marker(element_id) => {
					let point = codec.decode_id(element_id).inspect_err(|err| {
						warn!(%element_id, error = %err, "double-click on unrecognized marker");
					})?;
					Some(AnchorCommand::Remove(codec.encode_point(point)))
				}
			},
			MouseEvent::Scroll {
				direction: ScrollDirection::Up,
				..
			} => Some(AnchorCommand::Previous),
			MouseEvent::Scroll {
				direction: ScrollDirection::Down,
				..
			} => Some(AnchorCommand::Next),
			MouseEvent::Release {
				button: MouseButton::Middle,
				..
			} => Some(AnchorCommand::Clear),
			_ => None,
		};

		if command.is_none() {
			trace!(?event, "no binding for event");
		}
		Ok(command)
	}
}
