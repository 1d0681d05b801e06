//! Download lifecycle tracking.
//!
//! Tabs hand download requests to one shared manager; the manager consults an
//! external save prompt, answers with an accept-or-cancel decision the tab
//! layer applies to the transfer, and reports terminal outcomes on an event
//! channel the host UI listens to.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::SessionError;

/// Identifier handed back when a tab signals a download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DownloadId(u64);

impl fmt::Display for DownloadId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "dl-{}", self.0)
	}
}

/// Lifecycle of one download.
///
/// `Requested` moves to `Accepted` or `Cancelled` at the save prompt;
/// `Accepted` moves to `Completed` or `Interrupted` when the transfer ends.
/// Terminal states never transition again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadState {
	Requested,
	Accepted,
	Cancelled,
	Completed,
	Interrupted,
}

impl DownloadState {
	pub fn is_terminal(&self) -> bool {
		!matches!(self, DownloadState::Requested | DownloadState::Accepted)
	}
}

/// External file-save prompt consulted when a download is requested.
pub trait SavePrompt {
	/// Returns the destination chosen by the user, or `None` to cancel.
	fn choose_destination(&self, suggested_name: &str) -> Option<PathBuf>;
}

/// Answer the tab layer needs to accept or cancel the underlying transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadDecision {
	/// Proceed, writing to `destination`.
	Accepted { id: DownloadId, destination: PathBuf },
	/// No destination was chosen; the transfer should be cancelled.
	Cancelled { id: DownloadId },
}

/// Terminal outcomes delivered to the host UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadEvent {
	/// A transfer finished; carries the final file name for display.
	Finished { id: DownloadId, file_name: String },
	/// A transfer stopped before completing. Reported, never retried.
	Interrupted { id: DownloadId, reason: String },
}

impl DownloadEvent {
	/// Error form of a failed outcome, for hosts that surface downloads
	/// through their error reporting.
	pub fn as_error(&self) -> Option<SessionError> {
		match self {
			DownloadEvent::Interrupted { id, reason } => Some(SessionError::DownloadFailure(format!("{id}: {reason}"))),
			DownloadEvent::Finished { .. } => None,
		}
	}
}

#[derive(Debug)]
struct Download {
	source: Url,
	state: DownloadState,
	destination: Option<PathBuf>,
}

/// Tracks downloads triggered from any tab and reports their outcomes.
///
/// Persistence is out of scope here: downloads exist only for the lifetime of
/// the process and are never restored.
#[derive(Debug)]
pub struct DownloadManager {
	downloads: HashMap<DownloadId, Download>,
	next_id: u64,
	events: mpsc::UnboundedSender<DownloadEvent>,
}

impl DownloadManager {
	/// Creates a manager plus the receiving end of its outcome channel.
	pub fn new() -> (Self, mpsc::UnboundedReceiver<DownloadEvent>) {
		let (events, receiver) = mpsc::unbounded_channel();
		let manager = Self {
			downloads: HashMap::new(),
			next_id: 0,
			events,
		};
		(manager, receiver)
	}

	/// Handles a download signalled by a tab: asks `prompt` for a destination
	/// and either binds the transfer to it or cancels.
	pub fn request(&mut self, source: Url, suggested_name: &str, prompt: &dyn SavePrompt) -> DownloadDecision {
		let id = self.next_id();
		let mut download = Download {
			source: source.clone(),
			state: DownloadState::Requested,
			destination: None,
		};

		let decision = match prompt.choose_destination(suggested_name) {
			Some(destination) => {
				download.state = DownloadState::Accepted;
				download.destination = Some(destination.clone());
				info!(target = "hangar.download", id = %id, source = %source, destination = %destination.display(), "download accepted");
				DownloadDecision::Accepted { id, destination }
			}
			None => {
				download.state = DownloadState::Cancelled;
				debug!(target = "hangar.download", id = %id, source = %source, "download cancelled at prompt");
				DownloadDecision::Cancelled { id }
			}
		};
		self.downloads.insert(id, download);
		decision
	}

	/// Records a finished transfer and notifies listeners with the final file
	/// name. Signals for unknown downloads or downloads already in a terminal
	/// state are logged and dropped.
	pub fn mark_completed(&mut self, id: DownloadId) {
		let Some(download) = self.downloads.get_mut(&id) else {
			debug!(target = "hangar.download", id = %id, "completion for unknown download ignored");
			return;
		};
		if download.state != DownloadState::Accepted {
			debug!(target = "hangar.download", id = %id, state = ?download.state, "completion ignored in this state");
			return;
		}
		download.state = DownloadState::Completed;
		let file_name = download.destination.as_deref().map(file_name_of).unwrap_or_default();
		info!(target = "hangar.download", id = %id, file = %file_name, "download finished");
		let _ = self.events.send(DownloadEvent::Finished { id, file_name });
	}

	/// Records an interrupted transfer. Late or duplicate signals are dropped
	/// the same way as in [`DownloadManager::mark_completed`].
	pub fn mark_interrupted(&mut self, id: DownloadId, reason: &str) {
		let Some(download) = self.downloads.get_mut(&id) else {
			debug!(target = "hangar.download", id = %id, "interruption for unknown download ignored");
			return;
		};
		if download.state != DownloadState::Accepted {
			debug!(target = "hangar.download", id = %id, state = ?download.state, "interruption ignored in this state");
			return;
		}
		download.state = DownloadState::Interrupted;
		warn!(target = "hangar.download", id = %id, source = %download.source, reason, "download interrupted");
		let _ = self.events.send(DownloadEvent::Interrupted {
			id,
			reason: reason.to_string(),
		});
	}

	/// Current state of a download, if known.
	pub fn state(&self, id: DownloadId) -> Option<DownloadState> {
		self.downloads.get(&id).map(|d| d.state)
	}

	fn next_id(&mut self) -> DownloadId {
		self.next_id += 1;
		DownloadId(self.next_id)
	}
}

fn file_name_of(path: &Path) -> String {
	path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default()
}
