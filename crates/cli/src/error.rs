//! CLI error type.

use thiserror::Error;

use crate::output::ErrorCode;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
	#[error("failed to read {path}: {source}")]
	Io {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("invalid snapshot JSON: {0}")]
	Json(#[from] serde_json::Error),

	#[error(transparent)]
	Dom(#[from] dollar::Error),

	#[error("{0}")]
	InvalidInput(String),
}

impl CliError {
	/// Stable code reported in the JSON result envelope.
	pub fn code(&self) -> ErrorCode {
		match self {
			CliError::Io { .. } => ErrorCode::IoError,
			CliError::Json(_) => ErrorCode::InvalidSnapshot,
			CliError::Dom(dollar::Error::InvalidSnapshot(_)) => ErrorCode::InvalidSnapshot,
			CliError::Dom(_) => ErrorCode::InternalError,
			CliError::InvalidInput(_) => ErrorCode::InvalidInput,
		}
	}
}
