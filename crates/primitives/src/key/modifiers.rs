//! Modifier key state (Ctrl, Alt, Shift).

/// Modifier keys held during an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
	/// Whether Ctrl is held.
	pub ctrl: bool,
	/// Whether Alt is held.
	pub alt: bool,
	/// Whether Shift is held.
	pub shift: bool,
}

impl Modifiers {
	/// No modifiers pressed.
	pub const NONE: Self = Self {
		ctrl: false,
		alt: false,
		shift: false,
	};

	/// Only Ctrl pressed.
	pub const CTRL: Self = Self {
		ctrl: true,
		alt: false,
		shift: false,
	};

	/// Only Alt pressed.
	pub const ALT: Self = Self {
		ctrl: false,
		alt: true,
		shift: false,
	};

	/// Only Shift pressed.
	pub const SHIFT: Self = Self {
		ctrl: false,
		alt: false,
		shift: true,
	};

	/// Returns true if every modifier set in `required` is also set here.
	///
	/// Extra modifiers are allowed, so `Alt+Shift` satisfies a binding on `Alt`.
	pub const fn contains(self, required: Self) -> bool {
		(!required.ctrl || self.ctrl) && (!required.alt || self.alt) && (!required.shift || self.shift)
	}

	/// Returns true if no modifiers are set.
	pub const fn is_empty(self) -> bool {
		!self.ctrl && !self.alt && !self.shift
	}
}
