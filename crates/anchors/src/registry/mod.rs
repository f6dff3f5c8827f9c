//! Anchor registry and spatial navigation.
//!
//! The registry keeps anchors in placement order, but placement order plays no
//! part in navigation. `next` and `previous` walk anchors by [`OrderKey`]:
//! rows top to bottom, then left to right within a row. Both wrap around at
//! either end.
//!
//! # States
//!
//! The registry is either [`RegistryState::Empty`] or
//! [`RegistryState::NonEmpty`]. In the non-empty state exactly one anchor is
//! current and its marker is the only active one. Navigation on an empty
//! registry does nothing.
//!
//! # Collisions
//!
//! Positions that floor to the same grid point share an id. Placing a second
//! anchor there replaces the first one in its original slot. The replaced
//! anchor is returned in [`Placement::replaced`], and its marker is destroyed
//! before the new marker is created.

use indexmap::IndexMap;
use roundmark_primitives::{Position, SeqDirection};
use tracing::{debug, trace, warn};

use crate::codec::{AnchorId, CoordinateCodec, GridPoint, OrderKey};
use crate::error::AnchorError;
use crate::label::{Label, LabelAllocator};
use crate::surface::AnchorSurface;

/// A placed anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
	/// Identity derived from `point`.
	pub id: AnchorId,
	/// Position the anchor was placed at.
	pub position: Position,
	/// `position` floored to whole units.
	pub point: GridPoint,
	/// Display label drawn when the anchor was placed.
	pub label: Label,
}

/// Outcome of [`AnchorRegistry::add`].
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
	/// Id of the new anchor, now current.
	pub id: AnchorId,
	/// Label assigned to the new anchor.
	pub label: Label,
	/// Anchor that previously occupied the same grid point, if any.
	pub replaced: Option<Anchor>,
}

/// Whether the registry holds any anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryState {
	Empty,
	NonEmpty,
}

struct Entry<H> {
	anchor: Anchor,
	handle: H,
}

/// Owns the anchors, the current selection and the surface that draws them.
pub struct AnchorRegistry<S: AnchorSurface> {
	codec: CoordinateCodec,
	labels: LabelAllocator,
	surface: S,
	entries: IndexMap<AnchorId, Entry<S::Handle>>,
	current: Option<AnchorId>,
}

impl<S: AnchorSurface> AnchorRegistry<S> {
	/// Creates an empty registry.
	pub fn new(codec: CoordinateCodec, labels: LabelAllocator, surface: S) -> Self {
		Self {
			codec,
			labels,
			surface,
			entries: IndexMap::new(),
			current: None,
		}
	}

	/// Places an anchor at `position` and makes it current.
	///
	/// Fails without side effects if `position` is outside the codec bounds.
	pub fn add(&mut self, position: Position) -> Result<Placement, AnchorError> {
		let point = self.codec.grid_point(position)?;
		let id = self.codec.encode_point(point);
		let label = self.labels.next();

		let replaced = self.entries.shift_remove_full(&id).map(|(index, _, old)| {
			warn!(%id, old_label = %old.anchor.label, "replacing anchor at the same grid point");
			self.surface.destroy_visual(old.handle);
			(index, old.anchor)
		});

		let handle = self.surface.create_visual(&id, position, label);
		let entry = Entry {
			anchor: Anchor {
				id: id.clone(),
				position,
				point,
				label,
			},
			handle,
		};
		let replaced = match replaced {
			Some((index, old)) => {
				self.entries.shift_insert(index, id.clone(), entry);
				Some(old)
			}
			None => {
				self.entries.insert(id.clone(), entry);
				None
			}
		};

		debug!(%id, %label, x = position.x, y = position.y, "anchor placed");
		self.set_current(&id);
		Ok(Placement { id, label, replaced })
	}

	/// Removes the anchor `id`, returning it. Unknown ids are ignored.
	///
	/// If the removed anchor was current, the selection moves to its spatial
	/// predecessor among the remaining anchors, wrapping to the last anchor
	/// when nothing precedes it.
	pub fn remove(&mut self, id: &AnchorId) -> Option<Anchor> {
		let entry = self.entries.shift_remove(id)?;
		self.surface.destroy_visual(entry.handle);
		debug!(%id, "anchor removed");

		if self.current.as_ref() == Some(id) {
			self.current = None;
			let pivot = self.codec.order_key(entry.anchor.point);
			if let Some(key) = self.neighbor(pivot, SeqDirection::Prev) {
				let successor = self.codec.id_from_order_key(key);
				self.set_current(&successor);
			}
		}
		Some(entry.anchor)
	}

	/// Removes every anchor. The label sequence keeps its position.
	pub fn clear(&mut self) {
		let count = self.entries.len();
		for (_, entry) in self.entries.drain(..) {
			self.surface.destroy_visual(entry.handle);
		}
		self.current = None;
		debug!(count, "anchors cleared");
	}

	/// Scrolls to `id` and makes it current. Returns false for unknown ids.
	pub fn show(&mut self, id: &AnchorId) -> bool {
		let Some(entry) = self.entries.get(id) else {
			return false;
		};
		self.surface.scroll_into_view(&entry.handle);
		debug!(%id, "anchor shown");
		self.set_current(id)
	}

	/// Makes `id` the only active anchor. Returns false for unknown ids.
	pub fn set_current(&mut self, id: &AnchorId) -> bool {
		if !self.entries.contains_key(id) {
			return false;
		}
		for (entry_id, entry) in &self.entries {
			self.surface.set_active(&entry.handle, entry_id == id);
		}
		self.current = Some(id.clone());
		true
	}

	/// Shows the spatially previous anchor, wrapping to the last one.
	///
	/// Returns the id that became current, or `None` if the registry is empty.
	pub fn previous(&mut self) -> Option<AnchorId> {
		self.step(SeqDirection::Prev)
	}

	/// Shows the spatially next anchor, wrapping to the first one.
	///
	/// Returns the id that became current, or `None` if the registry is empty.
	pub fn next(&mut self) -> Option<AnchorId> {
		self.step(SeqDirection::Next)
	}

	fn step(&mut self, direction: SeqDirection) -> Option<AnchorId> {
		let current = self.current.as_ref()?;
		let pivot = self.codec.order_key(self.entries.get(current)?.anchor.point);
		let key = self.neighbor(pivot, direction)?;
		let target = self.codec.id_from_order_key(key);
		trace!(?direction, %pivot, %key, %target, "navigating");
		self.show(&target).then_some(target)
	}

	/// Finds the key adjacent to `pivot` in `direction`.
	///
	/// Keys equal to `pivot` never qualify as the strict neighbor but do take
	/// part in the wraparound, so a lone anchor wraps onto itself.
	fn neighbor(&self, pivot: OrderKey, direction: SeqDirection) -> Option<OrderKey> {
		let keys = self.entries.values().map(|entry| self.codec.order_key(entry.anchor.point));
		let mut adjacent: Option<OrderKey> = None;
		let mut wrap: Option<OrderKey> = None;
		for key in keys {
			match direction {
				SeqDirection::Prev => {
					if key < pivot {
						adjacent = adjacent.max(Some(key));
					}
					wrap = wrap.max(Some(key));
				}
				SeqDirection::Next => {
					if key > pivot {
						adjacent = Some(adjacent.map_or(key, |best| best.min(key)));
					}
					wrap = Some(wrap.map_or(key, |best| best.min(key)));
				}
			}
		}
		adjacent.or(wrap)
	}

	/// The current anchor, if any.
	pub fn current(&self) -> Option<&Anchor> {
		self.current.as_ref().and_then(|id| self.get(id))
	}

	pub fn current_id(&self) -> Option<&AnchorId> {
		self.current.as_ref()
	}

	pub fn get(&self, id: &AnchorId) -> Option<&Anchor> {
		self.entries.get(id).map(|entry| &entry.anchor)
	}

	pub fn contains(&self, id: &AnchorId) -> bool {
		self.entries.contains_key(id)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn state(&self) -> RegistryState {
		if self.entries.is_empty() {
			RegistryState::Empty
		} else {
			RegistryState::NonEmpty
		}
	}

	/// Anchors in placement order.
	pub fn iter(&self) -> impl Iterator<Item = &Anchor> {
		self.entries.values().map(|entry| &entry.anchor)
	}

	/// Anchors in navigation order.
	pub fn ordered(&self) -> Vec<&Anchor> {
		let mut anchors: Vec<&Anchor> = self.iter().collect();
		anchors.sort_by_key(|anchor| self.codec.order_key(anchor.point));
		anchors
	}

	pub fn codec(&self) -> &CoordinateCodec {
		&self.codec
	}

	pub fn labels(&self) -> &LabelAllocator {
		&self.labels
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}

	pub fn surface_mut(&mut self) -> &mut S {
		&mut self.surface
	}
}
