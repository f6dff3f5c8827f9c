use super::Modifiers;

/// Mouse button types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
	Left,
	Right,
	Middle,
}

/// Wheel scroll direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
	Up,
	Down,
	Left,
	Right,
}

impl ScrollDirection {
	/// Classifies a wheel delta pair the way browsers report them.
	///
	/// Vertical movement wins over horizontal. A negative `delta_y` scrolls up.
	/// Returns `None` for a zero delta.
	pub fn from_delta(delta_x: f64, delta_y: f64) -> Option<Self> {
		if delta_y < 0.0 {
			Some(Self::Up)
		} else if delta_y > 0.0 {
			Some(Self::Down)
		} else if delta_x < 0.0 {
			Some(Self::Left)
		} else if delta_x > 0.0 {
			Some(Self::Right)
		} else {
			None
		}
	}
}

/// Pointer events in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseEvent {
	Press {
		button: MouseButton,
		x: f64,
		y: f64,
		modifiers: Modifiers,
	},
	Release {
		button: MouseButton,
		x: f64,
		y: f64,
		modifiers: Modifiers,
	},
	DoubleClick {
		button: MouseButton,
		x: f64,
		y: f64,
		modifiers: Modifiers,
	},
	Scroll {
		direction: ScrollDirection,
		x: f64,
		y: f64,
		modifiers: Modifiers,
	},
}

impl MouseEvent {
	/// Viewport x coordinate of the pointer.
	pub fn x(&self) -> f64 {
		match self {
			MouseEvent::Press { x, .. }
			| MouseEvent::Release { x, .. }
			| MouseEvent::DoubleClick { x, .. }
			| MouseEvent::Scroll { x, .. } => *x,
		}
	}

	/// Viewport y coordinate of the pointer.
	pub fn y(&self) -> f64 {
		match self {
			MouseEvent::Press { y, .. }
			| MouseEvent::Release { y, .. }
			| MouseEvent::DoubleClick { y, .. }
			| MouseEvent::Scroll { y, .. } => *y,
		}
	}

	pub fn modifiers(&self) -> Modifiers {
		match self {
			MouseEvent::Press { modifiers, .. }
			| MouseEvent::Release { modifiers, .. }
			| MouseEvent::DoubleClick { modifiers, .. }
			| MouseEvent::Scroll { modifiers, .. } => *modifiers,
		}
	}
}
