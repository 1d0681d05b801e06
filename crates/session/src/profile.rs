//! Storage profile provisioning for tabs and sections.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tempfile::TempDir;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::artifact;
use crate::error::{Result, SessionError};

/// Retry budget for persistent-profile initialization.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
	/// Total attempts before degrading to an ephemeral profile.
	pub attempts: u32,
	/// Fixed pause between attempts.
	pub delay: Duration,
}

impl Default for RetryPolicy {
	fn default() -> Self {
		Self {
			attempts: 5,
			delay: Duration::from_secs(1),
		}
	}
}

/// Isolated storage context backing one tab or one named area.
///
/// Holds the on-disk root the renderer should point its storage at. Ephemeral
/// profiles own a temp directory that is removed when the handle drops.
#[derive(Debug)]
pub struct StorageProfile {
	path: PathBuf,
	kind: ProfileKind,
}

#[derive(Debug)]
enum ProfileKind {
	Persistent,
	/// The temp dir handle keeps the directory alive until the profile drops.
	Ephemeral(Option<TempDir>),
}

impl StorageProfile {
	/// On-disk root of this profile's storage.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Whether the profile survives a restart.
	pub fn is_persistent(&self) -> bool {
		matches!(self.kind, ProfileKind::Persistent)
	}
}

/// Marker written into a persistent profile once initialization succeeds.
#[derive(Debug, Serialize, Deserialize)]
struct ProfileManifest {
	schema: u32,
	name: String,
}

/// Creates and tracks on-disk storage profiles.
///
/// Tab caches are derived from the endpoint, so every tab pointing at the same
/// service shares one directory and the mapping survives restarts with no
/// registry to maintain. Named profiles are initialized with a bounded retry
/// and degrade to an ephemeral profile rather than failing the caller.
#[derive(Debug)]
pub struct Provisioner {
	cache_root: PathBuf,
	profile_root: PathBuf,
	retry: RetryPolicy,
}

impl Provisioner {
	pub fn new(cache_root: impl Into<PathBuf>, profile_root: impl Into<PathBuf>, retry: RetryPolicy) -> Self {
		Self {
			cache_root: cache_root.into(),
			profile_root: profile_root.into(),
			retry,
		}
	}

	/// Path `provision` uses for `endpoint`, without touching the filesystem.
	pub fn cache_dir(&self, endpoint: &Url) -> PathBuf {
		self.cache_root.join(endpoint_digest(endpoint))
	}

	/// Returns the cache-backed profile for `endpoint`, creating its
	/// directory if absent. Two tabs on the same endpoint get the same path.
	pub fn provision(&self, endpoint: &Url) -> Result<StorageProfile> {
		let dir = self.cache_dir(endpoint);
		std::fs::create_dir_all(&dir).map_err(|err| SessionError::ProvisioningFailure(format!("cannot create {}: {}", dir.display(), err)))?;
		debug!(target = "hangar.profile", endpoint = %endpoint, dir = %dir.display(), "tab cache ready");
		Ok(StorageProfile {
			path: dir,
			kind: ProfileKind::Persistent,
		})
	}

	/// Initializes the named persistent profile, retrying on failure and
	/// degrading to an ephemeral profile once the retry budget is exhausted.
	///
	/// Never fails: the caller always gets a usable profile, possibly one
	/// that will not survive a restart. Degradation is logged as a warning.
	pub async fn provision_persistent(&self, name: &str) -> StorageProfile {
		let name = normalize_name(name);
		let mut last_error = String::new();
		for attempt in 1..=self.retry.attempts.max(1) {
			match self.init_persistent(&name) {
				Ok(path) => {
					debug!(target = "hangar.profile", name = %name, attempt, dir = %path.display(), "persistent profile ready");
					return StorageProfile {
						path,
						kind: ProfileKind::Persistent,
					};
				}
				Err(err) => {
					debug!(target = "hangar.profile", name = %name, attempt, error = %err, "profile init failed");
					last_error = err.to_string();
					if attempt < self.retry.attempts {
						tokio::time::sleep(self.retry.delay).await;
					}
				}
			}
		}
		warn!(
			target = "hangar.profile",
			name = %name,
			attempts = self.retry.attempts,
			error = %last_error,
			"persistent profile unavailable; using ephemeral storage"
		);
		ephemeral_profile(&name)
	}

	fn init_persistent(&self, name: &str) -> Result<PathBuf> {
		let dir = self.profile_root.join(name);
		std::fs::create_dir_all(dir.join("storage"))?;
		std::fs::create_dir_all(dir.join("cache"))?;
		artifact::write_atomic(
			&dir.join("profile.json"),
			&ProfileManifest {
				schema: 1,
				name: name.to_string(),
			},
		)?;
		Ok(dir)
	}

	/// Deletes the cache directory provisioned for `endpoint`. Missing
	/// directories are fine; the next `provision` recreates them.
	pub fn clear_cache(&self, endpoint: &Url) -> Result<()> {
		let dir = self.cache_dir(endpoint);
		remove_dir_if_present(&dir)?;
		info!(target = "hangar.profile", endpoint = %endpoint, dir = %dir.display(), "tab cache cleared");
		Ok(())
	}

	/// Deletes every provisioned tab cache.
	pub fn clear_all_caches(&self) -> Result<()> {
		remove_dir_if_present(&self.cache_root)?;
		info!(target = "hangar.profile", root = %self.cache_root.display(), "all tab caches cleared");
		Ok(())
	}
}

fn remove_dir_if_present(dir: &Path) -> Result<()> {
	match std::fs::remove_dir_all(dir) {
		Ok(()) => Ok(()),
		Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
		Err(err) => Err(err.into()),
	}
}

/// Hex digest of the endpoint; stable across runs and filesystem-safe.
fn endpoint_digest(endpoint: &Url) -> String {
	let mut hasher = Sha256::new();
	hasher.update(endpoint.as_str().as_bytes());
	format!("{:x}", hasher.finalize())
}

/// Restricts profile names to one path component of safe characters.
fn normalize_name(name: &str) -> String {
	let normalized: String = name.chars().map(|c| if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') { c } else { '-' }).collect();
	if normalized.is_empty() || normalized == "." || normalized == ".." {
		"default".to_string()
	} else {
		normalized
	}
}

fn ephemeral_profile(name: &str) -> StorageProfile {
	match TempDir::with_prefix(format!("hangar-{name}-")) {
		Ok(dir) => StorageProfile {
			path: dir.path().to_path_buf(),
			kind: ProfileKind::Ephemeral(Some(dir)),
		},
		Err(err) => {
			// Temp dir creation failing too leaves only an unmanaged path.
			error!(target = "hangar.profile", error = %err, "temp dir unavailable for ephemeral profile");
			let path = std::env::temp_dir().join(format!("hangar-{}-{}", name, uuid::Uuid::new_v4()));
			if let Err(err) = std::fs::create_dir_all(&path) {
				error!(target = "hangar.profile", dir = %path.display(), error = %err, "ephemeral profile dir not created");
			}
			StorageProfile {
				path,
				kind: ProfileKind::Ephemeral(None),
			}
		}
	}
}
