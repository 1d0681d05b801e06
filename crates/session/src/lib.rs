//! Session, cookie, layout and storage-profile persistence for the Hangar
//! dashboard.
//!
//! The dashboard shell embeds web-content tabs grouped into sections; this
//! crate owns everything about them that must survive a restart and the logic
//! that merges what was saved with what is configured now. Rendering, chat
//! protocols and service control stay in the host application.

/// Shared read/write discipline for JSON artifacts.
mod artifact;
/// Durable per-domain cookie persistence.
pub mod cookies;
/// Download lifecycle tracking.
pub mod download;
/// Error taxonomy for the session core.
pub mod error;
/// Per-application storage path resolution.
pub mod paths;
/// Storage profile provisioning for tabs and sections.
pub mod profile;
/// Merging a saved tab layout with the live configuration.
pub mod reconcile;
/// Startup/shutdown composition of the stores.
pub mod state;
/// Durable session blob and tab-layout persistence.
pub mod store;
/// Chat transcript persistence for the service panels.
pub mod transcripts;

pub use cookies::CookieStore;
pub use download::{DownloadDecision, DownloadEvent, DownloadId, DownloadManager, DownloadState, SavePrompt};
pub use error::{Result, SessionError};
pub use paths::AppPaths;
pub use profile::{Provisioner, RetryPolicy, StorageProfile};
pub use reconcile::{reconcile, reconcile_section};
pub use state::SessionState;
pub use store::SessionStore;
pub use transcripts::{ChatHistory, ChatId, ChatMessage, ChatTranscript, TranscriptStore};
