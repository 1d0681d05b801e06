//! Shared read/write discipline for JSON artifacts.
//!
//! Every artifact follows the same recovery policy: a missing file is a clean
//! first run and yields the default silently, while an unreadable or
//! undecodable file also yields the default but logs a warning, so genuine
//! corruption stays visible without blocking startup.
//!
//! Writes go to a `.tmp` sibling first and are renamed into place, so an
//! interrupted save leaves the previous artifact intact.

use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::{Result, SessionError};

/// Loads `path`, falling back to `T::default()` when the artifact is missing
/// or damaged. `target` attributes the warning to the owning store.
pub(crate) fn read_or_default<T>(path: &Path, target: &'static str) -> T
where
	T: DeserializeOwned + Default,
{
	let bytes = match std::fs::read(path) {
		Ok(bytes) => bytes,
		Err(err) if err.kind() == ErrorKind::NotFound => return T::default(),
		Err(err) => {
			warn!(target = target, path = %path.display(), error = %err, "artifact unreadable; starting empty");
			return T::default();
		}
	};
	match serde_json::from_slice(&bytes) {
		Ok(value) => value,
		Err(err) => {
			let err = SessionError::CorruptArtifact(format!("{}: {}", path.display(), err));
			warn!(target = target, error = %err, "artifact corrupt; starting empty");
			T::default()
		}
	}
}

/// Serializes `value` to `path`, replacing any previous artifact atomically.
pub(crate) fn write_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent)?;
	}
	let bytes = serde_json::to_vec_pretty(value)?;
	let tmp = path.with_extension("tmp");
	std::fs::write(&tmp, &bytes)?;
	match std::fs::rename(&tmp, path) {
		Ok(()) => Ok(()),
		Err(_) => {
			// Some platforms refuse to rename over an existing file.
			std::fs::remove_file(path).ok();
			match std::fs::rename(&tmp, path) {
				Ok(()) => Ok(()),
				Err(err) => {
					std::fs::remove_file(&tmp).ok();
					Err(err.into())
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::BTreeMap;
	use tempfile::TempDir;

	type Map = BTreeMap<String, Vec<String>>;

	#[test]
	fn write_then_read_round_trips() {
		let dir = TempDir::new().expect("tempdir");
		let path = dir.path().join("nested").join("data.json");
		let mut value = Map::new();
		value.insert("k".into(), vec!["v".into()]);

		write_atomic(&path, &value).expect("write");
		let loaded: Map = read_or_default(&path, "hangar.test");
		assert_eq!(loaded, value);
	}

	#[test]
	fn missing_artifact_yields_default() {
		let dir = TempDir::new().expect("tempdir");
		let loaded: Map = read_or_default(&dir.path().join("absent.json"), "hangar.test");
		assert!(loaded.is_empty());
	}

	#[test]
	fn leftover_tmp_does_not_shadow_artifact() {
		let dir = TempDir::new().expect("tempdir");
		let path = dir.path().join("data.json");
		let mut value = Map::new();
		value.insert("k".into(), vec!["v".into()]);
		write_atomic(&path, &value).expect("write");

		// A crash between tmp-write and rename leaves a stray sibling behind.
		std::fs::write(path.with_extension("tmp"), b"{\"truncated").expect("stray tmp");
		let loaded: Map = read_or_default(&path, "hangar.test");
		assert_eq!(loaded, value);

		value.insert("k2".into(), vec![]);
		write_atomic(&path, &value).expect("rewrite over stray tmp");
		let loaded: Map = read_or_default(&path, "hangar.test");
		assert_eq!(loaded, value);
	}
}
