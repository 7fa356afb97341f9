//! Extensibility hooks.
//!
//! Hooks let the host extend a panel without touching this crate: override
//! the diagnostic text or the type allow-lists, inject extra form fields,
//! supply rendering for unknown field types, and observe script enqueueing.
//! Every hook is optional; an unset hook is the identity (or a no-op).

use std::sync::Arc;

use crate::field::NormalizedField;
use crate::prelude::*;
use crate::tree::Page;

/// Debug filter: may rewrite the diagnostic text. A non-empty result
/// forces the panel into the invalid state.
pub type DebugHook = Arc<dyn Fn(String, &[Page]) -> String + Send + Sync>;

/// Filter over a field type list (label targets, script types).
pub type FieldTypeListHook = Arc<dyn Fn(Vec<Box<str>>) -> Vec<Box<str>> + Send + Sync>;

/// Extra markup injected into a form, keyed by form id.
pub type FormFieldsHook = Arc<dyn Fn(&str, &Page) -> String + Send + Sync>;

/// Fallback renderer for field types without a registered strategy.
/// Receives the original type tag, the normalized field, and the stored
/// value.
pub type ExtraFieldHook =
	Arc<dyn Fn(&str, &NormalizedField, Option<&serde_json::Value>) -> String + Send + Sync>;

/// Notification with the deduplicated script types of the current page.
pub type ScriptsHook = Arc<dyn Fn(&[Box<str>]) + Send + Sync>;

#[derive(Clone, Default)]
pub struct PanelHooks {
	pub debug: Option<DebugHook>,
	pub label_for: Option<FieldTypeListHook>,
	pub script_field_types: Option<FieldTypeListHook>,
	pub form_fields: Option<FormFieldsHook>,
	pub extra_field: Option<ExtraFieldHook>,
	pub scripts: Option<ScriptsHook>,
}

impl std::fmt::Debug for PanelHooks {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PanelHooks")
			.field("debug", &self.debug.is_some())
			.field("label_for", &self.label_for.is_some())
			.field("script_field_types", &self.script_field_types.is_some())
			.field("form_fields", &self.form_fields.is_some())
			.field("extra_field", &self.extra_field.is_some())
			.field("scripts", &self.scripts.is_some())
			.finish()
	}
}

impl PanelHooks {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn on_debug<F>(mut self, f: F) -> Self
	where
		F: Fn(String, &[Page]) -> String + Send + Sync + 'static,
	{
		self.debug = Some(Arc::new(f));
		self
	}

	pub fn on_label_for<F>(mut self, f: F) -> Self
	where
		F: Fn(Vec<Box<str>>) -> Vec<Box<str>> + Send + Sync + 'static,
	{
		self.label_for = Some(Arc::new(f));
		self
	}

	pub fn on_script_field_types<F>(mut self, f: F) -> Self
	where
		F: Fn(Vec<Box<str>>) -> Vec<Box<str>> + Send + Sync + 'static,
	{
		self.script_field_types = Some(Arc::new(f));
		self
	}

	pub fn on_form_fields<F>(mut self, f: F) -> Self
	where
		F: Fn(&str, &Page) -> String + Send + Sync + 'static,
	{
		self.form_fields = Some(Arc::new(f));
		self
	}

	pub fn on_extra_field<F>(mut self, f: F) -> Self
	where
		F: Fn(&str, &NormalizedField, Option<&serde_json::Value>) -> String + Send + Sync + 'static,
	{
		self.extra_field = Some(Arc::new(f));
		self
	}

	pub fn on_scripts<F>(mut self, f: F) -> Self
	where
		F: Fn(&[Box<str>]) + Send + Sync + 'static,
	{
		self.scripts = Some(Arc::new(f));
		self
	}

	pub(crate) fn filter_debug(&self, debug: String, pages: &[Page]) -> String {
		match &self.debug {
			Some(hook) => hook(debug, pages),
			None => debug,
		}
	}

	pub(crate) fn filter_label_for(&self, types: Vec<Box<str>>) -> Vec<Box<str>> {
		match &self.label_for {
			Some(hook) => hook(types),
			None => types,
		}
	}

	pub(crate) fn filter_script_types(&self, types: Vec<Box<str>>) -> Vec<Box<str>> {
		match &self.script_field_types {
			Some(hook) => hook(types),
			None => types,
		}
	}

	pub(crate) fn render_form_fields(&self, form_id: &str, page: &Page) -> String {
		match &self.form_fields {
			Some(hook) => hook(form_id, page),
			None => String::new(),
		}
	}

	pub(crate) fn render_extra_field(
		&self,
		typ: &str,
		field: &NormalizedField,
		value: Option<&serde_json::Value>,
	) -> String {
		match &self.extra_field {
			Some(hook) => hook(typ, field, value),
			None => {
				debug!("extra field '{}' of type '{}' has no hook, skipping", field.id, typ);
				String::new()
			}
		}
	}

	pub(crate) fn notify_scripts(&self, types: &[Box<str>]) {
		if let Some(hook) = &self.scripts {
			hook(types);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_unset_hooks_are_identity() {
		let hooks = PanelHooks::new();
		assert_eq!(hooks.filter_debug("dbg".into(), &[]), "dbg");
		assert_eq!(hooks.filter_label_for(vec![Box::from("text")]), vec![Box::<str>::from("text")]);
		hooks.notify_scripts(&[]);
	}

	#[test]
	fn test_debug_hook_rewrites() {
		let hooks = PanelHooks::new().on_debug(|debug, _pages| format!("{}extra\n", debug));
		assert_eq!(hooks.filter_debug("base\n".into(), &[]), "base\nextra\n");
	}

	#[test]
	fn test_script_types_hook_extends() {
		let hooks = PanelHooks::new().on_script_field_types(|mut types| {
			types.push(Box::from("color_picker"));
			types
		});
		let types = hooks.filter_script_types(Vec::new());
		assert_eq!(types, vec![Box::<str>::from("color_picker")]);
	}
}

// vim: ts=4
