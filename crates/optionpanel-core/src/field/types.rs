//! The normalized field attribute set.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Field types that receive a label target by default. Overridable through
/// the label-for hook.
pub const DEFAULT_LABEL_FOR: [&str; 3] = ["text", "select", "textarea"];

/// Render strategy tag assigned to fields with no registered renderer.
/// These are delegated to the extra-field hook.
pub const EXTRA_FIELD_TYPE: &str = "extra_field";

/// A field with every attribute of the fixed default set resolved:
/// caller-supplied attributes override, missing ones take the default.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedField {
	pub id: Box<str>,
	/// Resolved rendering strategy tag.
	#[serde(rename = "type")]
	pub typ: Box<str>,
	pub label: Box<str>,
	#[serde(rename = "desc")]
	pub description: Box<str>,
	pub size: Option<u32>,
	pub options: Vec<(Box<str>, Box<str>)>,
	pub default: Value,
	pub content: Box<str>,
	pub attr: HashMap<Box<str>, Box<str>>,
	pub before: Box<str>,
	pub after: Box<str>,
	/// Internal type slot, reserved for renderer-private dispatch.
	#[serde(rename = "_type")]
	pub internal_type: Box<str>,
	/// Option key of the owning section.
	pub section: Box<str>,
	/// Label association target, set for types on the label-for list.
	pub label_for: Option<Box<str>>,
	/// Original type tag, kept when the field was wrapped as extra field.
	pub callback: Option<Box<str>>,
	/// Normalized sub-fields for composite rows.
	pub fields: Vec<NormalizedField>,
}

impl NormalizedField {
	/// DOM id of the rendered control.
	pub fn control_id(&self) -> String {
		match &self.label_for {
			Some(target) => target.to_string(),
			None => format!("{}_{}", self.section, self.id),
		}
	}

	/// Form input name, grouping the field under its option key.
	pub fn input_name(&self) -> String {
		format!("{}[{}]", self.section, self.id)
	}

	pub fn is_composite(&self) -> bool {
		!self.fields.is_empty()
	}
}

// vim: ts=4
