use std::collections::HashSet;

use hangar_model::{ConfigEntry, SavedLayout, SectionConfig, Tab};
use hangar_session::{reconcile, reconcile_section};
use proptest::prelude::*;
use url::Url;

// A small endpoint universe keeps saved/configured overlap likely.
fn arb_endpoint() -> impl Strategy<Value = Url> {
	(0u8..12).prop_map(|i| Url::parse(&format!("http://svc-{i}.local/")).expect("valid url"))
}

fn arb_tabs() -> impl Strategy<Value = Vec<Tab>> {
	prop::collection::vec(("[a-z]{1,8}", arb_endpoint()).prop_map(|(name, endpoint)| Tab::new(name, endpoint)), 0..8)
}

fn arb_entries() -> impl Strategy<Value = Vec<ConfigEntry>> {
	prop::collection::vec(
		("[a-z]{1,8}", arb_endpoint()).prop_map(|(name, endpoint)| ConfigEntry { name, endpoint }),
		0..8,
	)
}

fn arb_layout() -> impl Strategy<Value = SavedLayout> {
	prop::collection::btree_map("[A-Z][a-z]{0,5}", arb_tabs(), 0..4).prop_map(|sections| {
		let mut layout = SavedLayout::new();
		for (section, tabs) in sections {
			layout.set_section(section, tabs);
		}
		layout
	})
}

fn arb_config() -> impl Strategy<Value = SectionConfig> {
	prop::collection::btree_map("[A-Z][a-z]{0,5}", arb_entries(), 0..4).prop_map(|sections| {
		let mut config = SectionConfig::new();
		for (section, entries) in sections {
			for entry in entries {
				config.push(section.as_str(), entry.name, entry.endpoint);
			}
		}
		config
	})
}

proptest! {
	#[test]
	fn merging_twice_equals_merging_once(layout in arb_layout(), config in arb_config()) {
		let once = reconcile(&layout, &config);
		let twice = reconcile(&once, &config);
		prop_assert_eq!(once, twice);
	}

	#[test]
	fn merged_sections_mirror_the_configuration(layout in arb_layout(), config in arb_config()) {
		let merged = reconcile(&layout, &config);
		let merged_sections: Vec<_> = merged.sections().map(|(s, _)| s.clone()).collect();
		let mut configured: Vec<_> = config.sections().cloned().collect();
		configured.sort();
		prop_assert_eq!(merged_sections, configured);
	}

	#[test]
	fn merged_endpoints_are_unique_and_configured(saved in arb_tabs(), entries in arb_entries()) {
		let merged = reconcile_section(&saved, &entries);

		let mut seen = HashSet::new();
		for tab in &merged {
			prop_assert!(seen.insert(tab.endpoint.clone()), "duplicate endpoint {}", tab.endpoint);
		}

		let configured: HashSet<_> = entries.iter().map(|e| e.endpoint.clone()).collect();
		for tab in &merged {
			prop_assert!(configured.contains(&tab.endpoint), "unconfigured endpoint {}", tab.endpoint);
		}
		prop_assert_eq!(merged.len(), configured.len());
	}

	#[test]
	fn surviving_saved_tabs_keep_their_relative_order(saved in arb_tabs(), entries in arb_entries()) {
		let merged = reconcile_section(&saved, &entries);

		// Positions of surviving saved endpoints, in saved order.
		let mut consumed = HashSet::new();
		let survivors: Vec<_> = saved
			.iter()
			.filter(|tab| entries.iter().any(|e| e.endpoint == tab.endpoint) && consumed.insert(tab.endpoint.clone()))
			.map(|tab| tab.endpoint.clone())
			.collect();

		let prefix: Vec<_> = merged.iter().take(survivors.len()).map(|tab| tab.endpoint.clone()).collect();
		prop_assert_eq!(prefix, survivors);
	}
}
