use proptest::prelude::*;

use super::Viewport;
use crate::geometry::{Position, Rect};

#[test]
fn visible_target_does_not_scroll() {
	let viewport = Viewport::new(800.0, 600.0);
	let target = Rect::centered(Position::new(400.0, 300.0), 30.0);
	assert!(viewport.is_visible(target));
	assert_eq!(viewport.reveal(target), None);
}

#[test]
fn target_below_is_centered_vertically_only() {
	let viewport = Viewport::new(800.0, 600.0);
	let target = Rect::centered(Position::new(400.0, 5000.0), 30.0);
	assert_eq!(viewport.reveal(target), Some((0.0, 4700.0)));
}

#[test]
fn target_above_is_centered_and_clamped_at_origin() {
	let mut viewport = Viewport::new(800.0, 600.0);
	viewport.scroll_y = 2000.0;
	let target = Rect::centered(Position::new(100.0, 50.0), 30.0);
	assert_eq!(viewport.reveal(target), Some((0.0, 0.0)));
}

#[test]
fn partially_clipped_target_counts_as_hidden() {
	let viewport = Viewport::new(800.0, 600.0);
	let target = Rect::centered(Position::new(400.0, 595.0), 30.0);
	assert!(!viewport.is_visible(target));
	assert_eq!(viewport.reveal(target), Some((0.0, 295.0)));
}

#[test]
fn horizontal_overflow_centers_horizontally() {
	let viewport = Viewport::new(800.0, 600.0);
	let target = Rect::centered(Position::new(3000.0, 300.0), 30.0);
	assert_eq!(viewport.reveal(target), Some((2600.0, 0.0)));
}

#[test]
fn scroll_to_reveal_updates_offsets() {
	let mut viewport = Viewport::new(800.0, 600.0);
	let target = Rect::centered(Position::new(400.0, 5000.0), 30.0);
	assert!(viewport.scroll_to_reveal(target));
	assert!(viewport.is_visible(target));
	assert!(!viewport.scroll_to_reveal(target));
}

proptest! {
	/// Revealing twice never moves the viewport a second time.
	#[test]
	fn prop_reveal_is_idempotent(
		cx in 0.0f64..100_000.0,
		cy in 0.0f64..100_000.0,
		size in 1.0f64..2000.0,
		sx in 0.0f64..100_000.0,
		sy in 0.0f64..100_000.0,
	) {
		let mut viewport = Viewport::new(800.0, 600.0);
		viewport.scroll_x = sx;
		viewport.scroll_y = sy;
		let target = Rect::centered(Position::new(cx, cy), size);

		viewport.scroll_to_reveal(target);
		let settled = viewport;
		viewport.scroll_to_reveal(target);
		prop_assert_eq!(viewport, settled);
	}
}
