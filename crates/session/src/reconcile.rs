//! Merging a saved tab layout with the live endpoint configuration.
//!
//! Restores run this on startup and after every explicit save/reload, so the
//! tab set always reflects the configuration while keeping the user's own
//! ordering and labels wherever the endpoints still exist.

use std::collections::HashMap;

use hangar_model::{ConfigEntry, SavedLayout, SectionConfig, Tab};
use url::Url;

/// Produces the definitive ordered tab list for one section.
///
/// Saved tabs whose endpoint still exists in `entries` come first, in saved
/// order and under their saved labels. Configured endpoints never seen in the
/// saved list are appended in configuration order under their configured
/// names. Saved tabs whose endpoint left the configuration are dropped.
///
/// Endpoint equality is the sole identity test; renaming an entry in the
/// configuration does not disturb a saved tab for the same endpoint.
pub fn reconcile_section(saved: &[Tab], entries: &[ConfigEntry]) -> Vec<Tab> {
	// Last occurrence wins when the configuration repeats an endpoint.
	let mut remaining: HashMap<&Url, &str> = entries.iter().map(|entry| (&entry.endpoint, entry.name.as_str())).collect();

	let mut tabs = Vec::with_capacity(entries.len());
	for tab in saved {
		if remaining.remove(&tab.endpoint).is_some() {
			tabs.push(tab.clone());
		}
	}
	for entry in entries {
		if let Some(name) = remaining.remove(&entry.endpoint) {
			tabs.push(Tab::new(name, entry.endpoint.clone()));
		}
	}
	tabs
}

/// Reconciles every configured section of `layout` against `config`.
///
/// The result covers exactly the configured sections: sections absent from
/// the configuration disappear, and sections never saved before appear with
/// their configured entries verbatim.
pub fn reconcile(layout: &SavedLayout, config: &SectionConfig) -> SavedLayout {
	let mut result = SavedLayout::new();
	for (section, entries) in config.iter() {
		result.set_section(section.clone(), reconcile_section(layout.section(section), entries));
	}
	result
}

#[cfg(test)]
mod tests {
	use super::*;
	use hangar_model::Section;

	fn url(s: &str) -> Url {
		Url::parse(s).expect("valid url")
	}

	fn tab(name: &str, endpoint: &str) -> Tab {
		Tab::new(name, url(endpoint))
	}

	fn entries(pairs: &[(&str, &str)]) -> Vec<ConfigEntry> {
		pairs
			.iter()
			.map(|(name, endpoint)| ConfigEntry {
				name: name.to_string(),
				endpoint: url(endpoint),
			})
			.collect()
	}

	#[test]
	fn saved_order_and_labels_win_for_surviving_endpoints() {
		// Saved [A, B, C]; configuration renames B and appends D.
		let saved = [tab("A", "http://a.local/"), tab("B", "http://b.local/"), tab("C", "http://c.local/")];
		let config = entries(&[
			("A", "http://a.local/"),
			("B renamed", "http://b.local/"),
			("C", "http://c.local/"),
			("D", "http://d.local/"),
		]);

		let merged = reconcile_section(&saved, &config);
		let names: Vec<_> = merged.iter().map(|t| t.name.as_str()).collect();
		assert_eq!(names, ["A", "B", "C", "D"]);
	}

	#[test]
	fn tabs_for_removed_endpoints_are_dropped() {
		let saved = [tab("A", "http://a.local/"), tab("B", "http://b.local/")];
		let config = entries(&[("B", "http://b.local/")]);

		let merged = reconcile_section(&saved, &config);
		let names: Vec<_> = merged.iter().map(|t| t.name.as_str()).collect();
		assert_eq!(names, ["B"]);
	}

	#[test]
	fn new_endpoints_append_in_configuration_order() {
		let saved = [tab("Old", "http://old.local/")];
		let config = entries(&[("New1", "http://n1.local/"), ("Old", "http://old.local/"), ("New2", "http://n2.local/")]);

		let merged = reconcile_section(&saved, &config);
		let names: Vec<_> = merged.iter().map(|t| t.name.as_str()).collect();
		assert_eq!(names, ["Old", "New1", "New2"]);
	}

	#[test]
	fn empty_configuration_empties_the_section() {
		let saved = [tab("A", "http://a.local/")];
		assert!(reconcile_section(&saved, &[]).is_empty());
	}

	#[test]
	fn empty_saved_list_yields_configuration_verbatim() {
		let config = entries(&[("A", "http://a.local/"), ("B", "http://b.local/")]);
		let merged = reconcile_section(&[], &config);
		let names: Vec<_> = merged.iter().map(|t| t.name.as_str()).collect();
		assert_eq!(names, ["A", "B"]);
	}

	#[test]
	fn duplicate_configured_endpoint_collapses_to_last_name() {
		let config = entries(&[("First", "http://same.local/"), ("Other", "http://other.local/"), ("Second", "http://same.local/")]);

		let merged = reconcile_section(&[], &config);
		let names: Vec<_> = merged.iter().map(|t| t.name.as_str()).collect();
		// One tab per endpoint, placed at the first occurrence, named by the last.
		assert_eq!(names, ["Second", "Other"]);
	}

	#[test]
	fn duplicate_saved_endpoint_is_kept_once() {
		let saved = [tab("A", "http://a.local/"), tab("A again", "http://a.local/")];
		let config = entries(&[("A", "http://a.local/")]);

		let merged = reconcile_section(&saved, &config);
		let names: Vec<_> = merged.iter().map(|t| t.name.as_str()).collect();
		assert_eq!(names, ["A"]);
	}

	#[test]
	fn sections_follow_the_configuration() {
		let mut layout = SavedLayout::new();
		layout.set_section("LLMs", vec![tab("Claude", "http://claude.local/")]);
		layout.set_section("Retired", vec![tab("Gone", "http://gone.local/")]);

		let mut config = SectionConfig::new();
		config.push("LLMs", "Claude", url("http://claude.local/"));
		config.push("TTS", "Piper", url("http://piper.local/"));

		let merged = reconcile(&layout, &config);
		assert_eq!(merged.section(&Section::new("LLMs")).len(), 1);
		assert_eq!(merged.section(&Section::new("TTS"))[0].name, "Piper");
		assert!(merged.section(&Section::new("Retired")).is_empty());
	}

	#[test]
	fn reconciling_twice_matches_reconciling_once() {
		let mut layout = SavedLayout::new();
		layout.set_section("LLMs", vec![tab("A", "http://a.local/"), tab("B", "http://b.local/"), tab("C", "http://c.local/")]);

		let mut config = SectionConfig::new();
		config.push("LLMs", "B renamed", url("http://b.local/"));
		config.push("LLMs", "D", url("http://d.local/"));

		let once = reconcile(&layout, &config);
		let twice = reconcile(&once, &config);
		assert_eq!(once, twice);
	}
}
