//! Tab value type and the rendering capability seam.

use serde::{Deserialize, Serialize};
use url::Url;

/// One web-content viewer inside a section.
///
/// Identity within a section is the endpoint; `name` is a display label the
/// user may edit without changing which tab this is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
	pub name: String,
	pub endpoint: Url,
}

impl Tab {
	pub fn new(name: impl Into<String>, endpoint: Url) -> Self {
		Self { name: name.into(), endpoint }
	}
}

/// Capability surface of whatever renders a tab's content.
///
/// The session core never draws anything. It asks a surface to (re)load and
/// reads back the endpoint it currently shows, so live layouts can be captured
/// at save time even after in-page navigation.
pub trait TabSurface {
	/// Navigates the surface to `endpoint`.
	fn load(&mut self, endpoint: &Url);
	/// Reloads the current document.
	fn reload(&mut self);
	/// Endpoint currently shown, which may differ from the configured one.
	fn current_endpoint(&self) -> Url;
}
