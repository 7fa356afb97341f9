//! Explicit request context passed into page resolution and rendering.
//!
//! The host extracts these values from its own request handling; the panel
//! never reads ambient request state.

#[derive(Debug, Clone, Default)]
pub struct RequestContext {
	/// Value of the `tab` query parameter, when present.
	pub tab: Option<Box<str>>,
	/// Identifier of the active admin screen, when known. Scripts are only
	/// enqueued when this equals the panel namespace.
	pub screen: Option<Box<str>>,
}

impl RequestContext {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_tab(mut self, tab: impl Into<Box<str>>) -> Self {
		self.tab = Some(tab.into());
		self
	}

	pub fn with_screen(mut self, screen: impl Into<Box<str>>) -> Self {
		self.screen = Some(screen.into());
		self
	}
}

// vim: ts=4
