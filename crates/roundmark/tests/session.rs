//! End-to-end gesture tests against the headless surface.

use pretty_assertions::assert_eq;
use roundmark::{
	AnchorCommand, Config, DocumentFrame, Error, EventTarget, HeadlessSurface, Modifiers, MouseButton,
	MouseEvent, Position, RegistryState, RoundMark, ScrollDirection, SurfaceEvent, Viewport,
};

fn session(config: &Config) -> RoundMark<HeadlessSurface> {
	let _ = tracing_subscriber::fmt::try_init();
	RoundMark::headless(config, Viewport::new(800.0, 600.0)).unwrap()
}

fn alt_double_click(x: f64, y: f64) -> MouseEvent {
	MouseEvent::DoubleClick {
		button: MouseButton::Left,
		x,
		y,
		modifiers: Modifiers::ALT,
	}
}

fn alt_wheel(direction: ScrollDirection) -> MouseEvent {
	MouseEvent::Scroll {
		direction,
		x: 0.0,
		y: 0.0,
		modifiers: Modifiers::ALT,
	}
}

/// Clicks at viewport `(x, y)`, targeting whatever marker is drawn there.
fn click(
	rm: &mut RoundMark<HeadlessSurface>,
	frame: &DocumentFrame,
	x: f64,
	y: f64,
) -> Option<AnchorCommand> {
	let doc = frame.resolve(x, y);
	let target = match rm.registry().surface().hit_test(doc) {
		Some(marker) => EventTarget::Marker(marker.id.to_string()),
		None => EventTarget::Document,
	};
	rm.handle_mouse(&alt_double_click(x, y), &target, frame).unwrap()
}

fn current_label(rm: &RoundMark<HeadlessSurface>) -> Option<String> {
	rm.registry().current().map(|anchor| anchor.label.to_string())
}

#[test]
fn place_navigate_remove_and_clear() {
	let mut rm = session(&Config::default());
	let frame = DocumentFrame::ORIGIN;

	click(&mut rm, &frame, 10.0, 10.0);
	click(&mut rm, &frame, 10.0, 300.0);
	click(&mut rm, &frame, 400.0, 300.0);
	assert_eq!(rm.registry().len(), 3);
	assert_eq!(current_label(&rm).as_deref(), Some("3"));

	rm.handle_mouse(&alt_wheel(ScrollDirection::Up), &EventTarget::Document, &frame)
		.unwrap();
	assert_eq!(current_label(&rm).as_deref(), Some("2"));
	rm.handle_mouse(&alt_wheel(ScrollDirection::Down), &EventTarget::Document, &frame)
		.unwrap();
	rm.handle_mouse(&alt_wheel(ScrollDirection::Down), &EventTarget::Document, &frame)
		.unwrap();
	assert_eq!(current_label(&rm).as_deref(), Some("1"));

	// Double-clicking the marker at (10, 300) removes it instead of adding.
	let command = click(&mut rm, &frame, 12.0, 302.0);
	assert!(matches!(command, Some(AnchorCommand::Remove(_))));
	assert!(command.is_some_and(|c| c.prevents_default()));
	assert_eq!(rm.registry().len(), 2);
	assert_eq!(current_label(&rm).as_deref(), Some("1"));

	let clear = MouseEvent::Release {
		button: MouseButton::Middle,
		x: 0.0,
		y: 0.0,
		modifiers: Modifiers::ALT,
	};
	rm.handle_mouse(&clear, &EventTarget::Document, &frame).unwrap();
	assert_eq!(rm.registry().state(), RegistryState::Empty);
	assert_eq!(rm.registry().surface().markers().count(), 0);

	let placement = click(&mut rm, &frame, 50.0, 50.0);
	assert!(matches!(placement, Some(AnchorCommand::Add(_))));
	assert_eq!(current_label(&rm).as_deref(), Some("4"));
}

#[test]
fn navigation_scrolls_far_anchors_into_view() {
	let mut rm = session(&Config::default());

	click(&mut rm, &DocumentFrame::ORIGIN, 100.0, 100.0);
	click(&mut rm, &DocumentFrame::new(0.0, 9000.0), 100.0, 100.0);
	rm.registry_mut().surface_mut().viewport_mut().scroll_y = 9000.0;
	rm.registry_mut().surface_mut().take_events();

	rm.handle_mouse(
		&alt_wheel(ScrollDirection::Down),
		&EventTarget::Document,
		&DocumentFrame::new(0.0, 9000.0),
	)
	.unwrap();

	let surface = rm.registry().surface();
	assert_eq!(surface.viewport().scroll_y, 0.0);
	assert!(matches!(surface.events().first(), Some(SurfaceEvent::Scrolled { .. })));
	assert_eq!(
		rm.registry().current().map(|a| a.position),
		Some(Position::new(100.0, 100.0))
	);
}

#[test]
fn events_without_modifier_do_nothing() {
	let mut rm = session(&Config::default());
	let plain = MouseEvent::DoubleClick {
		button: MouseButton::Left,
		x: 5.0,
		y: 5.0,
		modifiers: Modifiers::NONE,
	};
	let command = rm
		.handle_mouse(&plain, &EventTarget::Document, &DocumentFrame::ORIGIN)
		.unwrap();
	assert_eq!(command, None);
	assert!(rm.registry().is_empty());
}

#[test]
fn unparseable_marker_target_is_ignored() {
	let mut rm = session(&Config::default());
	click(&mut rm, &DocumentFrame::ORIGIN, 5.0, 5.0);

	let command = rm
		.handle_mouse(
			&alt_double_click(5.0, 5.0),
			&EventTarget::Marker("not-a-marker".into()),
			&DocumentFrame::ORIGIN,
		)
		.unwrap();
	assert_eq!(command, None);
	assert_eq!(rm.registry().len(), 1);
}

#[test]
fn configured_modifier_and_alphabet_apply() {
	let config = Config::from_toml(
		r#"
alphabet = "XY"

[bindings]
modifier = "shift"
"#,
	)
	.unwrap();
	let mut rm = session(&config);

	let shifted = MouseEvent::DoubleClick {
		button: MouseButton::Left,
		x: 20.0,
		y: 20.0,
		modifiers: Modifiers::SHIFT,
	};
	rm.handle_mouse(&shifted, &EventTarget::Document, &DocumentFrame::ORIGIN)
		.unwrap();
	assert_eq!(current_label(&rm).as_deref(), Some("X"));

	rm.handle_mouse(&alt_double_click(40.0, 40.0), &EventTarget::Document, &DocumentFrame::ORIGIN)
		.unwrap();
	assert_eq!(rm.registry().len(), 1);
}

#[test]
fn configured_marker_size_reaches_markers() {
	let config = Config::from_toml(
		r#"
[marker]
diameter = 40
font_size = 22
"#,
	)
	.unwrap();
	let mut rm = session(&config);
	click(&mut rm, &DocumentFrame::ORIGIN, 100.0, 100.0);

	let marker = rm.registry().surface().markers().next().unwrap();
	assert_eq!(marker.font_size, 22.0);
	assert_eq!(marker.bounds.width, 40.0);
	assert_eq!(rm.registry().surface().font_size(), 22.0);
}

#[test]
fn clicks_beyond_the_axis_bound_are_errors() {
	let config = Config {
		max_axis: 1000,
		..Config::default()
	};
	let mut rm = session(&config);

	let result = rm.handle_mouse(
		&alt_double_click(10.0, 10.0),
		&EventTarget::Document,
		&DocumentFrame::new(0.0, 995.0),
	);
	assert!(matches!(result, Err(Error::Anchor(_))));
	assert!(rm.registry().is_empty());
}

#[test]
fn invalid_config_is_rejected() {
	let config = Config {
		alphabet: String::new(),
		..Config::default()
	};
	let result = RoundMark::headless(&config, Viewport::new(800.0, 600.0));
	assert!(matches!(result, Err(Error::Config(_))));
}
