//! Display labels for anchors.
//!
//! Labels are a visual aid, not keys. The allocator walks its alphabet with a
//! cursor that only ever moves forward and wraps at the end, so once more
//! anchors have been placed than the alphabet has symbols, live anchors can
//! share a label. Removing or clearing anchors never rewinds the cursor.

use std::fmt;

use crate::error::LabelError;

/// Alphabet used when none is configured.
pub const DEFAULT_ALPHABET: &str = "123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A single-character marker label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label(char);

impl Label {
	pub const fn as_char(self) -> char {
		self.0
	}
}

impl fmt::Display for Label {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.0, f)
	}
}

/// Cyclic label source.
#[derive(Debug, Clone)]
pub struct LabelAllocator {
	alphabet: Vec<char>,
	cursor: usize,
}

impl Default for LabelAllocator {
	fn default() -> Self {
		Self {
			alphabet: DEFAULT_ALPHABET.chars().collect(),
			cursor: 0,
		}
	}
}

impl LabelAllocator {
	/// Creates an allocator over the characters of `alphabet`.
	pub fn new(alphabet: &str) -> Result<Self, LabelError> {
		let alphabet: Vec<char> = alphabet.chars().collect();
		if alphabet.is_empty() {
			return Err(LabelError::EmptyAlphabet);
		}
		Ok(Self { alphabet, cursor: 0 })
	}

	/// Returns the label under the cursor and advances it.
	pub fn next(&mut self) -> Label {
		let label = self.peek();
		self.cursor = (self.cursor + 1) % self.alphabet.len();
		label
	}

	/// Returns the label the next call to [`Self::next`] will hand out.
	pub fn peek(&self) -> Label {
		Label(self.alphabet[self.cursor])
	}

	/// Number of distinct labels before the sequence repeats.
	pub fn len(&self) -> usize {
		self.alphabet.len()
	}

	/// Always false; an allocator cannot be built over an empty alphabet.
	pub fn is_empty(&self) -> bool {
		self.alphabet.is_empty()
	}
}
