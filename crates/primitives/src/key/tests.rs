use super::{Modifiers, MouseButton, MouseEvent, ScrollDirection};

#[test]
fn contains_allows_extra_modifiers() {
	let held = Modifiers {
		alt: true,
		shift: true,
		..Modifiers::NONE
	};
	assert!(held.contains(Modifiers::ALT));
	assert!(held.contains(Modifiers::NONE));
	assert!(!held.contains(Modifiers::CTRL));
	assert!(!Modifiers::NONE.contains(Modifiers::ALT));
}

#[test]
fn wheel_delta_prefers_vertical_axis() {
	assert_eq!(ScrollDirection::from_delta(5.0, -1.0), Some(ScrollDirection::Up));
	assert_eq!(ScrollDirection::from_delta(-5.0, 3.0), Some(ScrollDirection::Down));
	assert_eq!(ScrollDirection::from_delta(-5.0, 0.0), Some(ScrollDirection::Left));
	assert_eq!(ScrollDirection::from_delta(0.0, 0.0), None);
}

#[test]
fn accessors_cover_every_variant() {
	let event = MouseEvent::DoubleClick {
		button: MouseButton::Left,
		x: 12.5,
		y: 7.0,
		modifiers: Modifiers::ALT,
	};
	assert_eq!(event.x(), 12.5);
	assert_eq!(event.y(), 7.0);
	assert_eq!(event.modifiers(), Modifiers::ALT);
}
