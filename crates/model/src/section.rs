//! Section identifiers grouping tabs into functional areas.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named grouping of tabs corresponding to one functional area of the dashboard.
///
/// Section names are an open set: a deployment defines a fixed handful and uses
/// them consistently across configuration and saved layouts. The associated
/// constants name the four areas the stock dashboard ships with.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Section(String);

impl Section {
	/// Language-model web UIs.
	pub const LLMS: &'static str = "LLMs";
	/// Generative image and video web UIs.
	pub const STABLE_DIFFUSION: &'static str = "StableDiffusion";
	/// Text-to-speech services.
	pub const TTS: &'static str = "TTS";
	/// Speech-to-speech services.
	pub const STS: &'static str = "STS";

	pub fn new(name: impl Into<String>) -> Self {
		Self(name.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Section {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for Section {
	fn from(name: &str) -> Self {
		Self(name.to_string())
	}
}

impl From<String> for Section {
	fn from(name: String) -> Self {
		Self(name)
	}
}
