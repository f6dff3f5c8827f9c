/// Direction through an ordered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeqDirection {
	/// Towards larger keys.
	Next,
	/// Towards smaller keys.
	Prev,
}

