//! Persisted per-section tab layout.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::section::Section;
use crate::tab::{Tab, TabSurface};

/// Last-known open-tab layout of every section, captured at shutdown or on an
/// explicit save.
///
/// Serializes as a bare map of `section name -> [tab, ...]`; the artifact
/// written by `hangar-session` contains exactly this shape and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedLayout {
	sections: BTreeMap<Section, Vec<Tab>>,
}

impl SavedLayout {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_empty(&self) -> bool {
		self.sections.is_empty()
	}

	/// Replaces the tab list recorded for `section`.
	pub fn set_section(&mut self, section: impl Into<Section>, tabs: Vec<Tab>) {
		self.sections.insert(section.into(), tabs);
	}

	/// Tabs recorded for `section`, empty when the section was never saved.
	pub fn section(&self, section: &Section) -> &[Tab] {
		self.sections.get(section).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Sections paired with their saved tabs.
	pub fn sections(&self) -> impl Iterator<Item = (&Section, &[Tab])> {
		self.sections.iter().map(|(s, t)| (s, t.as_slice()))
	}

	/// Captures a section's live tabs from their rendering surfaces, pairing
	/// each display label with the endpoint the surface currently shows.
	pub fn capture_section<'a, I>(&mut self, section: impl Into<Section>, tabs: I)
	where
		I: IntoIterator<Item = (&'a str, &'a dyn TabSurface)>,
	{
		let tabs = tabs.into_iter().map(|(label, surface)| Tab::new(label, surface.current_endpoint())).collect();
		self.set_section(section, tabs);
	}
}
