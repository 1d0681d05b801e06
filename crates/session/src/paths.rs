//! Per-application storage path resolution.

use std::path::{Path, PathBuf};

/// Root directories for everything the session core persists.
///
/// The relative layout underneath the roots is fixed; only the roots move.
/// They are either resolved from the platform's user-scoped locations or all
/// placed under one directory for portable installs and tests.
#[derive(Debug, Clone)]
pub struct AppPaths {
	config_dir: PathBuf,
	data_dir: PathBuf,
	cache_dir: PathBuf,
}

impl AppPaths {
	/// Resolves user-scoped roots for `app`, falling back to the current
	/// directory on platforms without standard locations.
	pub fn for_app(app: &str) -> Self {
		let fallback = || PathBuf::from(".");
		Self {
			config_dir: dirs::config_dir().unwrap_or_else(fallback).join(app),
			data_dir: dirs::data_local_dir().unwrap_or_else(fallback).join(app),
			cache_dir: dirs::cache_dir().unwrap_or_else(fallback).join(app),
		}
	}

	/// Places every root under `root`.
	pub fn rooted(root: impl Into<PathBuf>) -> Self {
		let root = root.into();
		Self {
			config_dir: root.join("config"),
			data_dir: root.join("data"),
			cache_dir: root.join("cache"),
		}
	}

	/// Cookie artifact (`<config>/cookies.json`).
	pub fn cookie_file(&self) -> PathBuf {
		self.config_dir.join("cookies.json")
	}

	/// Directory holding the session database and the layout artifact.
	pub fn session_dir(&self) -> &Path {
		&self.data_dir
	}

	/// Root for named persistent profiles (`<data>/profiles`).
	pub fn profile_root(&self) -> PathBuf {
		self.data_dir.join("profiles")
	}

	/// Root for per-endpoint tab caches (`<cache>/tabs`).
	pub fn tab_cache_root(&self) -> PathBuf {
		self.cache_dir.join("tabs")
	}

	/// Directory holding chat transcript artifacts (`<data>/history`).
	pub fn transcript_dir(&self) -> PathBuf {
		self.data_dir.join("history")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rooted_layout_is_fixed() {
		let paths = AppPaths::rooted("/tmp/hangar-test");
		assert_eq!(paths.cookie_file(), Path::new("/tmp/hangar-test/config/cookies.json"));
		assert_eq!(paths.session_dir(), Path::new("/tmp/hangar-test/data"));
		assert_eq!(paths.profile_root(), Path::new("/tmp/hangar-test/data/profiles"));
		assert_eq!(paths.tab_cache_root(), Path::new("/tmp/hangar-test/cache/tabs"));
		assert_eq!(paths.transcript_dir(), Path::new("/tmp/hangar-test/data/history"));
	}

	#[test]
	fn user_scoped_roots_end_with_app_name() {
		let paths = AppPaths::for_app("hangar");
		assert!(paths.cookie_file().to_string_lossy().contains("hangar"));
		assert!(paths.profile_root().to_string_lossy().contains("hangar"));
	}
}
