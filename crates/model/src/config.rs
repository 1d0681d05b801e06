//! Read-only view of the user-edited endpoint configuration.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::section::Section;

/// One configured endpoint within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
	pub name: String,
	pub endpoint: Url,
}

/// Ordered mapping of sections to their configured endpoints.
///
/// Built by the host's configuration loader and handed to the session core as
/// a read-only snapshot; edits happen in the host's settings UI and arrive as
/// a freshly built value on the next save/reload cycle. Section order and
/// entry order are the loader's order, which is what reconciliation treats as
/// "configuration order".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionConfig {
	sections: Vec<(Section, Vec<ConfigEntry>)>,
}

impl SectionConfig {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends an entry, creating the section on first sight.
	///
	/// Duplicate endpoints within a section are kept as-is; consumers decide
	/// how to collapse them.
	pub fn push(&mut self, section: impl Into<Section>, name: impl Into<String>, endpoint: Url) {
		let section = section.into();
		let entry = ConfigEntry { name: name.into(), endpoint };
		if let Some(index) = self.sections.iter().position(|(s, _)| *s == section) {
			self.sections[index].1.push(entry);
		} else {
			self.sections.push((section, vec![entry]));
		}
	}

	/// Entries configured for `section`, empty when the section is unknown.
	pub fn entries(&self, section: &Section) -> &[ConfigEntry] {
		self.sections.iter().find(|(s, _)| s == section).map(|(_, e)| e.as_slice()).unwrap_or(&[])
	}

	/// Sections in configuration order.
	pub fn sections(&self) -> impl Iterator<Item = &Section> {
		self.sections.iter().map(|(s, _)| s)
	}

	/// Sections paired with their entries, in configuration order.
	pub fn iter(&self) -> impl Iterator<Item = (&Section, &[ConfigEntry])> {
		self.sections.iter().map(|(s, e)| (s, e.as_slice()))
	}

	pub fn is_empty(&self) -> bool {
		self.sections.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn url(s: &str) -> Url {
		Url::parse(s).expect("valid url")
	}

	#[test]
	fn push_preserves_loader_order() {
		let mut config = SectionConfig::new();
		config.push("LLMs", "Claude", url("http://claude.local/"));
		config.push("TTS", "Piper", url("http://piper.local/"));
		config.push("LLMs", "Ollama", url("http://ollama.local/"));

		let sections: Vec<_> = config.sections().map(Section::as_str).collect();
		assert_eq!(sections, ["LLMs", "TTS"]);

		let names: Vec<_> = config.entries(&Section::new("LLMs")).iter().map(|e| e.name.as_str()).collect();
		assert_eq!(names, ["Claude", "Ollama"]);
	}

	#[test]
	fn unknown_section_has_no_entries() {
		let config = SectionConfig::new();
		assert!(config.entries(&Section::new("STS")).is_empty());
	}

	#[test]
	fn duplicate_endpoints_are_kept() {
		let mut config = SectionConfig::new();
		config.push("LLMs", "First", url("http://same.local/"));
		config.push("LLMs", "Second", url("http://same.local/"));
		assert_eq!(config.entries(&Section::new("LLMs")).len(), 2);
	}
}
