//! Durable per-domain cookie persistence.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use hangar_model::Cookie;
use tracing::debug;

use crate::artifact;
use crate::error::Result;

const TARGET: &str = "hangar.cookies";

/// Domain-keyed store of raw cookie forms, mirrored to one JSON artifact.
///
/// The artifact is a bare map of `domain -> [raw form, ...]` and is rewritten
/// whole on every mutation. Mutations take `&mut self`, which is what keeps
/// writers serialized.
#[derive(Debug)]
pub struct CookieStore {
	path: PathBuf,
	domains: BTreeMap<String, Vec<String>>,
}

impl CookieStore {
	/// Opens the store backed by `path`. A missing artifact is an empty
	/// store; a damaged one degrades to empty with a warning.
	pub fn open(path: impl Into<PathBuf>) -> Self {
		let path = path.into();
		let domains = artifact::read_or_default(&path, TARGET);
		Self { path, domains }
	}

	/// Records `cookies` under `domain` and persists the store.
	///
	/// A cookie whose raw form is already present for the domain is skipped,
	/// so repeated captures of an unchanged engine state stay idempotent.
	pub fn save(&mut self, domain: &str, cookies: &[Cookie]) -> Result<()> {
		let stored = self.domains.entry(domain.to_string()).or_default();
		let mut added = 0usize;
		for cookie in cookies {
			if !stored.iter().any(|raw| raw == &cookie.raw) {
				stored.push(cookie.raw.clone());
				added += 1;
			}
		}
		debug!(target = "hangar.cookies", domain, added, total = stored.len(), "cookies recorded");
		self.persist()
	}

	/// Returns every cookie recorded for `domain`, parsed back into structured
	/// form. Unknown domains yield an empty list; stored forms that no longer
	/// parse are skipped.
	pub fn load(&self, domain: &str) -> Vec<Cookie> {
		let Some(stored) = self.domains.get(domain) else {
			return Vec::new();
		};
		stored
			.iter()
			.filter_map(|raw| {
				let cookie = Cookie::parse(domain, raw);
				if cookie.is_none() {
					debug!(target = "hangar.cookies", domain, raw = %raw, "skipping unparseable stored cookie");
				}
				cookie
			})
			.collect()
	}

	/// Removes every cookie stored under `domain` whose parsed name equals
	/// `name`, then persists the store.
	///
	/// Matching is on the parsed name field only; a cookie whose value or
	/// attributes merely contain `name` as a substring is untouched.
	pub fn remove(&mut self, domain: &str, name: &str) -> Result<()> {
		let Some(stored) = self.domains.get_mut(domain) else {
			return Ok(());
		};
		let before = stored.len();
		stored.retain(|raw| Cookie::parse(domain, raw).is_none_or(|cookie| cookie.name != name));
		let removed = before - stored.len();
		debug!(target = "hangar.cookies", domain, name, removed, "cookies removed");
		self.persist()
	}

	/// Domains with at least one stored cookie.
	pub fn domains(&self) -> impl Iterator<Item = &str> {
		self.domains.keys().map(String::as_str)
	}

	/// Artifact backing this store.
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn persist(&self) -> Result<()> {
		artifact::write_atomic(&self.path, &self.domains)
	}
}
