//! Durable session blob and tab-layout persistence.

use std::path::{Path, PathBuf};

use hangar_model::SavedLayout;
use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, info};

use crate::artifact;
use crate::error::{Result, SessionError};

const TARGET: &str = "hangar.session";

const DB_FILE: &str = "session.db";
const LAYOUT_FILE: &str = "layout.json";

/// Durable store for one opaque session blob plus the last saved tab layout.
///
/// The blob lives in a single-row SQLite table and is replaced wholesale on
/// save. The layout is a sibling JSON artifact written through a temp file and
/// rename, so an interrupted save leaves the previous layout readable.
#[derive(Debug)]
pub struct SessionStore {
	conn: Connection,
	layout_path: PathBuf,
}

impl SessionStore {
	/// Opens the store under `dir`, creating the directory, database and
	/// schema as needed. Reopening an existing store is a no-op beyond the
	/// idempotent schema check.
	///
	/// This is the only operation that reports
	/// [`SessionError::StorageUnavailable`]; all later persistence depends on
	/// it, so callers should surface a failure here at startup.
	pub fn open(dir: &Path) -> Result<Self> {
		std::fs::create_dir_all(dir).map_err(|err| SessionError::StorageUnavailable(format!("cannot create {}: {}", dir.display(), err)))?;
		let db_path = dir.join(DB_FILE);
		let conn = Connection::open(&db_path).map_err(|err| SessionError::StorageUnavailable(format!("cannot open {}: {}", db_path.display(), err)))?;
		conn.execute_batch("CREATE TABLE IF NOT EXISTS session (id INTEGER PRIMARY KEY, data BLOB NOT NULL)")
			.map_err(|err| SessionError::StorageUnavailable(format!("cannot initialize {}: {}", db_path.display(), err)))?;
		debug!(target = "hangar.session", db = %db_path.display(), "session store open");
		Ok(Self {
			conn,
			layout_path: dir.join(LAYOUT_FILE),
		})
	}

	/// Stores `blob` under the fixed single-row key, replacing any previous value.
	pub fn save_session(&self, blob: &[u8]) -> Result<()> {
		self.conn.execute("INSERT OR REPLACE INTO session (id, data) VALUES (1, ?1)", params![blob])?;
		debug!(target = "hangar.session", bytes = blob.len(), "session blob saved");
		Ok(())
	}

	/// Returns the last saved session blob, or `None` on a first run.
	pub fn load_session(&self) -> Result<Option<Vec<u8>>> {
		let blob: Option<Vec<u8>> = self.conn.query_row("SELECT data FROM session WHERE id = 1", [], |row| row.get(0)).optional()?;
		Ok(blob)
	}

	/// Replaces the layout artifact with `layout`.
	pub fn save_layout(&self, layout: &SavedLayout) -> Result<()> {
		artifact::write_atomic(&self.layout_path, layout)?;
		info!(target = "hangar.session", path = %self.layout_path.display(), "tab layout saved");
		Ok(())
	}

	/// Returns the last saved layout. Empty on a first run; a damaged
	/// artifact also yields empty, with a warning.
	pub fn load_layout(&self) -> SavedLayout {
		artifact::read_or_default(&self.layout_path, TARGET)
	}

	/// Path of the layout artifact, for host diagnostics.
	pub fn layout_path(&self) -> &Path {
		&self.layout_path
	}

	/// Closes the underlying database, reporting any final error.
	pub fn close(self) -> Result<()> {
		self.conn.close().map_err(|(_, err)| err.into())
	}
}
