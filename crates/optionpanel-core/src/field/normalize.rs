//! Field normalization: defaults merge, label targets, script flags.

use serde_json::Value;
use std::collections::BTreeSet;

use crate::prelude::*;
use crate::tree::Field;

use super::registry::FrozenFieldTypeRegistry;
use super::types::{NormalizedField, EXTRA_FIELD_TYPE};

pub struct Normalizer<'a> {
	label_for: &'a [Box<str>],
	script_types: &'a [Box<str>],
	renderers: &'a FrozenFieldTypeRegistry,
}

impl<'a> Normalizer<'a> {
	pub fn new(
		label_for: &'a [Box<str>],
		script_types: &'a [Box<str>],
		renderers: &'a FrozenFieldTypeRegistry,
	) -> Self {
		Self { label_for, script_types, renderers }
	}

	/// Normalizes the fields of one section, collecting the script types
	/// the section needs into `scripts` (deduplicated by the set).
	pub fn normalize_fields(
		&self,
		section_key: &str,
		fields: &[Field],
		scripts: &mut BTreeSet<Box<str>>,
	) -> Vec<NormalizedField> {
		fields.iter().map(|f| self.normalize_field(section_key, f, scripts)).collect()
	}

	fn normalize_field(
		&self,
		section_key: &str,
		field: &Field,
		scripts: &mut BTreeSet<Box<str>>,
	) -> NormalizedField {
		let mut normalized = self.apply_defaults(section_key, field, scripts);
		if let Some(rows) = field.fields.as_deref() {
			normalized.fields =
				rows.iter().map(|row| self.apply_defaults(section_key, row, scripts)).collect();
		}

		// Unknown render strategies fall through to the extra-field hook.
		if normalized.typ.as_ref() != EXTRA_FIELD_TYPE && !self.renderers.contains(&normalized.typ)
		{
			debug!(
				"field '{}': no renderer for type '{}', registering as extra field",
				normalized.id, normalized.typ
			);
			normalized.callback = Some(normalized.typ.clone());
			normalized.typ = EXTRA_FIELD_TYPE.into();
		}
		normalized
	}

	/// Merges one field over the fixed default attribute set.
	fn apply_defaults(
		&self,
		section_key: &str,
		field: &Field,
		scripts: &mut BTreeSet<Box<str>>,
	) -> NormalizedField {
		let mut normalized = NormalizedField {
			id: field.id.clone(),
			typ: field.typ.clone(),
			label: field.label.clone().unwrap_or_default(),
			description: field.description.clone().unwrap_or_default(),
			size: field.size,
			options: field.options.clone().unwrap_or_default(),
			default: field.default.clone().unwrap_or(Value::Null),
			content: field.content.clone().unwrap_or_default(),
			attr: field.attr.clone().unwrap_or_default(),
			before: field.before.clone().unwrap_or_default(),
			after: field.after.clone().unwrap_or_default(),
			internal_type: Box::default(),
			section: section_key.into(),
			label_for: None,
			callback: None,
			fields: Vec::new(),
		};

		if self.script_types.iter().any(|t| t.as_ref() == normalized.typ.as_ref()) {
			scripts.insert(normalized.typ.clone());
		}
		if self.label_for.iter().any(|t| t.as_ref() == normalized.typ.as_ref()) {
			normalized.label_for = Some(format!("{}_{}", section_key, normalized.id).into());
		}
		normalized
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::field::registry::FieldTypeRegistry;

	fn boxed(items: &[&str]) -> Vec<Box<str>> {
		items.iter().map(|s| Box::from(*s)).collect()
	}

	#[test]
	fn test_defaults_merge() {
		let renderers = FieldTypeRegistry::with_builtins().freeze();
		let label_for = boxed(&["text"]);
		let normalizer = Normalizer::new(&label_for, &[], &renderers);

		let field = Field::builder("f1", "text").build().unwrap();
		let mut scripts = BTreeSet::new();
		let normalized = normalizer.normalize_fields("acme_s1", &[field], &mut scripts);

		let f = &normalized[0];
		assert_eq!(f.label.as_ref(), "");
		assert_eq!(f.default, Value::Null);
		assert_eq!(f.section.as_ref(), "acme_s1");
		assert_eq!(f.label_for.as_deref(), Some("acme_s1_f1"));
		assert!(f.attr.is_empty());
	}

	#[test]
	fn test_label_for_only_listed_types() {
		let renderers = FieldTypeRegistry::with_builtins().freeze();
		let label_for = boxed(&["text", "select", "textarea"]);
		let normalizer = Normalizer::new(&label_for, &[], &renderers);

		let fields = [
			Field::builder("a", "text").build().unwrap(),
			Field::builder("b", "checkbox").build().unwrap(),
		];
		let mut scripts = BTreeSet::new();
		let normalized = normalizer.normalize_fields("ns_s", &fields, &mut scripts);

		assert!(normalized[0].label_for.is_some());
		assert!(normalized[1].label_for.is_none());
	}

	#[test]
	fn test_script_types_dedupe() {
		let renderers = FieldTypeRegistry::with_builtins().freeze();
		let script_types = boxed(&["color_picker"]);
		let normalizer = Normalizer::new(&[], &script_types, &renderers);

		let fields = [
			Field::builder("a", "color_picker").build().unwrap(),
			Field::builder("b", "color_picker").build().unwrap(),
			Field::builder("c", "text").build().unwrap(),
		];
		let mut scripts = BTreeSet::new();
		normalizer.normalize_fields("ns_s", &fields, &mut scripts);

		assert_eq!(scripts.len(), 1);
		assert!(scripts.contains("color_picker"));
	}

	#[test]
	fn test_unknown_type_becomes_extra_field() {
		let renderers = FieldTypeRegistry::with_builtins().freeze();
		let normalizer = Normalizer::new(&[], &[], &renderers);

		let field = Field::builder("a", "color_picker").build().unwrap();
		let mut scripts = BTreeSet::new();
		let normalized = normalizer.normalize_fields("ns_s", &[field], &mut scripts);

		assert_eq!(normalized[0].typ.as_ref(), EXTRA_FIELD_TYPE);
		assert_eq!(normalized[0].callback.as_deref(), Some("color_picker"));
	}

	#[test]
	fn test_composite_rows_normalized() {
		let renderers = FieldTypeRegistry::with_builtins().freeze();
		let label_for = boxed(&["text"]);
		let normalizer = Normalizer::new(&label_for, &[], &renderers);

		let field = Field::builder("dim", "text")
			.row(Field::builder("width", "text").default_value("10").build().unwrap())
			.row(Field::builder("height", "text").default_value("20").build().unwrap())
			.build()
			.unwrap();
		let mut scripts = BTreeSet::new();
		let normalized = normalizer.normalize_fields("ns_s", &[field], &mut scripts);

		let f = &normalized[0];
		assert!(f.is_composite());
		assert_eq!(f.fields[0].label_for.as_deref(), Some("ns_s_width"));
		assert_eq!(f.fields[1].default, serde_json::json!("20"));
	}
}

// vim: ts=4
