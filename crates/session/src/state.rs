//! Startup/shutdown composition of the individual stores.

use hangar_model::{SavedLayout, SectionConfig};
use tracing::info;

use crate::cookies::CookieStore;
use crate::error::Result;
use crate::paths::AppPaths;
use crate::profile::{Provisioner, RetryPolicy};
use crate::reconcile;
use crate::store::SessionStore;
use crate::transcripts::TranscriptStore;

/// All persistent state of one dashboard process.
///
/// Opened once at startup and handed down by reference; collaborators never
/// reach for process-wide singletons. Mutating operations take `&mut self`,
/// so a save/reload cycle cannot interleave with another writer.
#[derive(Debug)]
pub struct SessionState {
	pub cookies: CookieStore,
	pub store: SessionStore,
	pub provisioner: Provisioner,
	pub transcripts: TranscriptStore,
}

impl SessionState {
	/// Opens every store under `paths`.
	///
	/// Fails only when the session store cannot be opened or created
	/// ([`crate::SessionError::StorageUnavailable`]). Damage to individual
	/// artifacts elsewhere degrades to empty defaults with a warning.
	pub fn open(paths: &AppPaths, retry: RetryPolicy) -> Result<Self> {
		let store = SessionStore::open(paths.session_dir())?;
		let cookies = CookieStore::open(paths.cookie_file());
		let provisioner = Provisioner::new(paths.tab_cache_root(), paths.profile_root(), retry);
		let transcripts = TranscriptStore::open(paths.transcript_dir());
		info!(target = "hangar.session", data = %paths.session_dir().display(), "session state open");
		Ok(Self {
			cookies,
			store,
			provisioner,
			transcripts,
		})
	}

	/// Produces the authoritative per-section tab lists for this run: the
	/// layout saved last time merged with the current configuration.
	pub fn restore_tabs(&self, config: &SectionConfig) -> SavedLayout {
		reconcile::reconcile(&self.store.load_layout(), config)
	}

	/// Captures `layout` durably. Called at shutdown and before reloads.
	pub fn persist_layout(&mut self, layout: &SavedLayout) -> Result<()> {
		self.store.save_layout(layout)
	}

	/// Explicit save-and-reload: persists the live layout, then merges it
	/// with the (possibly just edited) configuration to produce the next tab
	/// set. One exclusive operation, so periodic captures cannot interleave
	/// with the reload.
	pub fn save_and_reload(&mut self, live: &SavedLayout, config: &SectionConfig) -> Result<SavedLayout> {
		self.store.save_layout(live)?;
		Ok(reconcile::reconcile(live, config))
	}

	/// Closes the underlying stores.
	pub fn close(self) -> Result<()> {
		info!(target = "hangar.session", "session state closing");
		self.store.close()
	}
}
