//! Error taxonomy for the session core.

use thiserror::Error;

/// Errors surfaced by the session core.
///
/// Only [`SessionError::StorageUnavailable`] is fatal to startup. Every other
/// kind is recovered close to where it occurs and reaches callers as a
/// diagnostic or a degraded default.
#[derive(Debug, Error)]
pub enum SessionError {
	/// The durable session store could not be opened or created.
	#[error("session storage unavailable: {0}")]
	StorageUnavailable(String),

	/// A persisted artifact exists but could not be read or decoded.
	#[error("corrupt artifact: {0}")]
	CorruptArtifact(String),

	/// Profile initialization failed after exhausting its retry budget.
	#[error("profile provisioning failed: {0}")]
	ProvisioningFailure(String),

	/// A download transfer stopped before completing.
	#[error("download failed: {0}")]
	DownloadFailure(String),

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),

	#[error(transparent)]
	Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, SessionError>;
