//! Session error type.

use roundmark_anchors::{AnchorError, CodecError, LabelError};
use roundmark_config::ConfigError;
use thiserror::Error;

/// Errors surfaced by a [`crate::RoundMark`] session.
#[derive(Debug, Error)]
pub enum Error {
	#[error("config: {0}")]
	Config(#[from] ConfigError),

	#[error("anchor: {0}")]
	Anchor(#[from] AnchorError),
}

impl From<CodecError> for Error {
	fn from(err: CodecError) -> Self {
		Self::Anchor(err.into())
	}
}

impl From<LabelError> for Error {
	fn from(err: LabelError) -> Self {
		Self::Anchor(err.into())
	}
}

pub type Result<T> = std::result::Result<T, Error>;
