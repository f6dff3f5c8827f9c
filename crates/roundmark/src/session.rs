//! Session wiring.

use roundmark_anchors::{AnchorRegistry, AnchorSurface, CoordinateCodec, HeadlessSurface, LabelAllocator};
use roundmark_config::Config;
use roundmark_input::{AnchorCommand, DocumentFrame, EventTarget, Hotkeys};
use roundmark_primitives::{MouseEvent, Viewport};
use tracing::debug;

use crate::error::Result;

/// One document's anchors plus the bindings that drive them.
///
/// Everything runs synchronously on the caller's event loop. Each call handles
/// one input event to completion.
pub struct RoundMark<S: AnchorSurface> {
	config: Config,
	hotkeys: Hotkeys,
	registry: AnchorRegistry<S>,
}

impl<S: AnchorSurface> RoundMark<S> {
	/// Builds a session from a validated config.
	pub fn new(config: &Config, surface: S) -> Result<Self> {
		config.validate()?;
		let codec = CoordinateCodec::new(config.max_axis)?;
		let labels = LabelAllocator::new(&config.alphabet)?;
		debug!(max_axis = config.max_axis, labels = labels.len(), "session created");
		Ok(Self {
			config: config.clone(),
			hotkeys: Hotkeys::new(config.bindings.modifier.modifiers()),
			registry: AnchorRegistry::new(codec, labels, surface),
		})
	}

	/// Interprets a pointer event and applies the command it maps to.
	///
	/// Returns the applied command so the frontend can honour
	/// [`AnchorCommand::prevents_default`]. A double-click on an element that
	/// looks like a marker but has an unparseable id is ignored.
	pub fn handle_mouse(
		&mut self,
		event: &MouseEvent,
		target: &EventTarget,
		frame: &DocumentFrame,
	) -> Result<Option<AnchorCommand>> {
		let Ok(command) = self.hotkeys.interpret(event, target, frame, self.registry.codec()) else {
			return Ok(None);
		};
		let Some(command) = command else {
			return Ok(None);
		};
		self.apply(command.clone())?;
		Ok(Some(command))
	}

	/// Applies a command to the registry.
	pub fn apply(&mut self, command: AnchorCommand) -> Result<()> {
		match command {
			AnchorCommand::Add(position) => {
				self.registry.add(position)?;
			}
			AnchorCommand::Remove(id) => {
				self.registry.remove(&id);
			}
			AnchorCommand::Previous => {
				self.registry.previous();
			}
			AnchorCommand::Next => {
				self.registry.next();
			}
			AnchorCommand::Clear => self.registry.clear(),
		}
		Ok(())
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn hotkeys(&self) -> &Hotkeys {
		&self.hotkeys
	}

	pub fn registry(&self) -> &AnchorRegistry<S> {
		&self.registry
	}

	pub fn registry_mut(&mut self) -> &mut AnchorRegistry<S> {
		&mut self.registry
	}
}

impl RoundMark<HeadlessSurface> {
	/// Builds a session drawing onto an in-memory surface sized by the config.
	pub fn headless(config: &Config, viewport: Viewport) -> Result<Self> {
		let surface = HeadlessSurface::new(
			f64::from(config.marker.diameter),
			f64::from(config.marker.font_size),
			viewport,
		);
		Self::new(config, surface)
	}
}
