//! In-memory [`AnchorSurface`].
//!
//! Keeps marker bounds, labels and emphasis in plain data and models scrolling
//! with a [`Viewport`]. Frontends that do their own drawing can read the marker
//! table each frame; tests read the [`SurfaceEvent`] log.

use std::collections::BTreeMap;

use roundmark_primitives::{Position, Rect, Viewport};

use super::AnchorSurface;
use crate::codec::AnchorId;
use crate::label::Label;

/// Handle issued by [`HeadlessSurface`]. Never reused within one surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerHandle(u64);

/// A drawn marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
	pub id: AnchorId,
	pub bounds: Rect,
	pub label: Label,
	/// Label font size in document units.
	pub font_size: f64,
	pub active: bool,
}

/// Observable surface side effects, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
	Created(AnchorId),
	Destroyed(AnchorId),
	Activated(AnchorId),
	Deactivated(AnchorId),
	/// The viewport moved to reveal `id`.
	Scrolled { id: AnchorId, x: f64, y: f64 },
}

/// Marker table plus a scrollable viewport.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
	diameter: f64,
	font_size: f64,
	viewport: Viewport,
	markers: BTreeMap<MarkerHandle, Marker>,
	next_handle: u64,
	events: Vec<SurfaceEvent>,
}

impl HeadlessSurface {
	/// Creates an empty surface drawing markers `diameter` units wide with
	/// labels set at `font_size`.
	pub fn new(diameter: f64, font_size: f64, viewport: Viewport) -> Self {
		Self {
			diameter,
			font_size,
			viewport,
			markers: BTreeMap::new(),
			next_handle: 0,
			events: Vec::new(),
		}
	}

	pub fn diameter(&self) -> f64 {
		self.diameter
	}

	pub fn font_size(&self) -> f64 {
		self.font_size
	}

	pub fn viewport(&self) -> &Viewport {
		&self.viewport
	}

	pub fn viewport_mut(&mut self) -> &mut Viewport {
		&mut self.viewport
	}

	/// Live markers in creation order.
	pub fn markers(&self) -> impl Iterator<Item = &Marker> {
		self.markers.values()
	}

	pub fn marker(&self, handle: MarkerHandle) -> Option<&Marker> {
		self.markers.get(&handle)
	}

	/// Markers currently drawn in their active appearance.
	pub fn active_markers(&self) -> impl Iterator<Item = &Marker> {
		self.markers.values().filter(|m| m.active)
	}

	/// Returns the most recently created marker whose circle contains `pos`.
	pub fn hit_test(&self, pos: Position) -> Option<&Marker> {
		let radius = self.diameter / 2.0;
		self.markers.values().rev().find(|marker| {
			let center = marker.bounds.center();
			let (dx, dy) = (pos.x - center.x, pos.y - center.y);
			dx * dx + dy * dy <= radius * radius
		})
	}

	pub fn events(&self) -> &[SurfaceEvent] {
		&self.events
	}

	/// Drains the event log.
	pub fn take_events(&mut self) -> Vec<SurfaceEvent> {
		std::mem::take(&mut self.events)
	}
}

impl AnchorSurface for HeadlessSurface {
	type Handle = MarkerHandle;

	fn create_visual(&mut self, id: &AnchorId, position: Position, label: Label) -> MarkerHandle {
		let handle = MarkerHandle(self.next_handle);
		self.next_handle += 1;
		self.markers.insert(
			handle,
			Marker {
				id: id.clone(),
				bounds: Rect::centered(position, self.diameter),
				label,
				font_size: self.font_size,
				active: false,
			},
		);
		self.events.push(SurfaceEvent::Created(id.clone()));
		handle
	}

	fn destroy_visual(&mut self, handle: MarkerHandle) {
		if let Some(marker) = self.markers.remove(&handle) {
			self.events.push(SurfaceEvent::Destroyed(marker.id));
		}
	}

	fn set_active(&mut self, handle: &MarkerHandle, active: bool) {
		let Some(marker) = self.markers.get_mut(handle) else {
			return;
		};
		if marker.active == active {
			return;
		}
		marker.active = active;
		let id = marker.id.clone();
		self.events.push(if active {
			SurfaceEvent::Activated(id)
		} else {
			SurfaceEvent::Deactivated(id)
		});
	}

	fn scroll_into_view(&mut self, handle: &MarkerHandle) {
		let Some(marker) = self.markers.get(handle) else {
			return;
		};
		if self.viewport.scroll_to_reveal(marker.bounds) {
			self.events.push(SurfaceEvent::Scrolled {
				id: marker.id.clone(),
				x: self.viewport.scroll_x,
				y: self.viewport.scroll_y,
			});
		}
	}
}
