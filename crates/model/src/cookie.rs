//! Cookie value type and raw-form parsing.

use serde::{Deserialize, Serialize};

/// One cookie as recorded by the cookie store.
///
/// `raw` is the serialized form exactly as the web engine handed it over,
/// e.g. `"SID=abc123; Path=/; Secure"`, and is the deduplication key. `name`
/// and `value` are parsed out of the leading `name=value` pair so removal and
/// lookups can compare structured fields instead of substrings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
	pub domain: String,
	pub name: String,
	pub value: String,
	pub raw: String,
}

impl Cookie {
	/// Parses a raw serialized cookie recorded under `domain`.
	///
	/// Returns `None` when no leading `name=value` pair can be extracted;
	/// attributes after the first `;` never participate in identity.
	pub fn parse(domain: &str, raw: &str) -> Option<Self> {
		let first = raw.split(';').next()?.trim();
		let (name, value) = first.split_once('=')?;
		let name = name.trim();
		if name.is_empty() {
			return None;
		}
		Some(Self {
			domain: domain.to_string(),
			name: name.to_string(),
			value: value.trim().to_string(),
			raw: raw.to_string(),
		})
	}
}
