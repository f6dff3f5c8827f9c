use super::{Position, Rect};

#[test]
fn offset_then_clamp_stays_in_document_space() {
	let pos = Position::new(3.0, 2.0).offset(-8.0, 1192.0);
	assert_eq!(pos, Position::new(-5.0, 1194.0));
	assert_eq!(pos.clamp_non_negative(), Position::new(0.0, 1194.0));
}

#[test]
fn new_rect_clamps_negative_dimensions() {
	let rect = Rect::new(4.0, 4.0, -10.0, 3.0);
	assert_eq!(rect.width, 0.0);
	assert_eq!(rect.height, 3.0);
}

#[test]
fn rect_edges_are_exclusive() {
	let rect = Rect::new(10.0, 5.0, 3.0, 2.0);
	assert_eq!(rect.left(), 10.0);
	assert_eq!(rect.right(), 13.0);
	assert_eq!(rect.top(), 5.0);
	assert_eq!(rect.bottom(), 7.0);
}

#[test]
fn contains_uses_inclusive_origin_exclusive_max() {
	let rect = Rect::new(10.0, 5.0, 3.0, 2.0);
	assert!(rect.contains(Position::new(10.0, 5.0)));
	assert!(rect.contains(Position::new(12.5, 6.5)));
	assert!(!rect.contains(Position::new(13.0, 6.0)));
	assert!(!rect.contains(Position::new(12.0, 7.0)));
}

#[test]
fn centered_square_surrounds_its_center() {
	let rect = Rect::centered(Position::new(100.0, 40.0), 30.0);
	assert_eq!(rect, Rect::new(85.0, 25.0, 30.0, 30.0));
	assert_eq!(rect.center(), Position::new(100.0, 40.0));
}

#[test]
fn clamp_non_negative_zeroes_negative_components() {
	let pos = Position::new(-3.5, 12.0).clamp_non_negative();
	assert_eq!(pos, Position::new(0.0, 12.0));
}
