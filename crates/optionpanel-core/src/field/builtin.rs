//! Built-in rendering strategies.
//!
//! Every strategy renders the bare control plus its description; row
//! layout and before/after decoration belong to the form renderer.

use serde_json::Value;
use std::fmt::Write as _;
use std::sync::Arc;

use crate::html::escape;

use super::registry::FieldRenderer;
use super::types::NormalizedField;

pub(crate) fn builtins() -> Vec<(Box<str>, Arc<dyn FieldRenderer>)> {
	vec![
		(Box::from("text"), Arc::new(TextRenderer) as Arc<dyn FieldRenderer>),
		(Box::from("textarea"), Arc::new(TextareaRenderer) as Arc<dyn FieldRenderer>),
		(Box::from("select"), Arc::new(SelectRenderer) as Arc<dyn FieldRenderer>),
		(Box::from("checkbox"), Arc::new(CheckboxRenderer) as Arc<dyn FieldRenderer>),
		(Box::from("radio"), Arc::new(RadioRenderer) as Arc<dyn FieldRenderer>),
		(Box::from("content"), Arc::new(ContentRenderer) as Arc<dyn FieldRenderer>),
	]
}

/// Stored value, falling back to the field default, rendered as text.
fn display_value(field: &NormalizedField, value: Option<&Value>) -> String {
	match value.unwrap_or(&field.default) {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		Value::Bool(b) => b.to_string(),
		Value::Number(n) => n.to_string(),
		other => other.to_string(),
	}
}

fn is_truthy(field: &NormalizedField, value: Option<&Value>) -> bool {
	match value.unwrap_or(&field.default) {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::String(s) => !s.is_empty() && s != "0",
		Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
		_ => true,
	}
}

/// Raw attributes, sorted by name for stable output.
fn extra_attrs(field: &NormalizedField) -> String {
	let mut attrs: Vec<_> = field.attr.iter().collect();
	attrs.sort_by(|a, b| a.0.cmp(b.0));

	let mut out = String::new();
	for (name, value) in attrs {
		let _ = write!(out, " {}=\"{}\"", escape(name), escape(value));
	}
	out
}

fn description(field: &NormalizedField) -> String {
	if field.description.is_empty() {
		String::new()
	} else {
		format!("<p class=\"description\">{}</p>", escape(&field.description))
	}
}

pub struct TextRenderer;

impl FieldRenderer for TextRenderer {
	fn render(&self, field: &NormalizedField, value: Option<&Value>) -> String {
		let size = field.size.unwrap_or(40);
		format!(
			"<input type=\"text\" id=\"{}\" name=\"{}\" value=\"{}\" size=\"{}\"{} />{}",
			escape(&field.control_id()),
			escape(&field.input_name()),
			escape(&display_value(field, value)),
			size,
			extra_attrs(field),
			description(field),
		)
	}
}

pub struct TextareaRenderer;

impl FieldRenderer for TextareaRenderer {
	fn render(&self, field: &NormalizedField, value: Option<&Value>) -> String {
		let rows = field.size.unwrap_or(5);
		format!(
			"<textarea id=\"{}\" name=\"{}\" rows=\"{}\"{}>{}</textarea>{}",
			escape(&field.control_id()),
			escape(&field.input_name()),
			rows,
			extra_attrs(field),
			escape(&display_value(field, value)),
			description(field),
		)
	}
}

pub struct SelectRenderer;

impl FieldRenderer for SelectRenderer {
	fn render(&self, field: &NormalizedField, value: Option<&Value>) -> String {
		let current = display_value(field, value);
		let mut html = format!(
			"<select id=\"{}\" name=\"{}\"{}>",
			escape(&field.control_id()),
			escape(&field.input_name()),
			extra_attrs(field),
		);
		for (option_value, option_label) in &field.options {
			let selected = if option_value.as_ref() == current { " selected=\"selected\"" } else { "" };
			let _ = write!(
				html,
				"<option value=\"{}\"{}>{}</option>",
				escape(option_value),
				selected,
				escape(option_label),
			);
		}
		html.push_str("</select>");
		html.push_str(&description(field));
		html
	}
}

pub struct CheckboxRenderer;

impl FieldRenderer for CheckboxRenderer {
	fn render(&self, field: &NormalizedField, value: Option<&Value>) -> String {
		let checked = if is_truthy(field, value) { " checked=\"checked\"" } else { "" };
		let mut html = format!(
			"<input type=\"checkbox\" id=\"{}\" name=\"{}\" value=\"1\"{}{} />",
			escape(&field.control_id()),
			escape(&field.input_name()),
			checked,
			extra_attrs(field),
		);
		if !field.description.is_empty() {
			let _ = write!(
				html,
				"<label for=\"{}\">{}</label>",
				escape(&field.control_id()),
				escape(&field.description),
			);
		}
		html
	}
}

pub struct RadioRenderer;

impl FieldRenderer for RadioRenderer {
	fn render(&self, field: &NormalizedField, value: Option<&Value>) -> String {
		let current = display_value(field, value);
		let mut html = String::new();
		for (option_value, option_label) in &field.options {
			let checked = if option_value.as_ref() == current { " checked=\"checked\"" } else { "" };
			let _ = write!(
				html,
				"<label><input type=\"radio\" name=\"{}\" value=\"{}\"{}{} /> {}</label><br />",
				escape(&field.input_name()),
				escape(option_value),
				checked,
				extra_attrs(field),
				escape(option_label),
			);
		}
		html.push_str(&description(field));
		html
	}
}

/// Static markup pass-through; the content attribute is trusted caller
/// markup and is not escaped.
pub struct ContentRenderer;

impl FieldRenderer for ContentRenderer {
	fn render(&self, field: &NormalizedField, _value: Option<&Value>) -> String {
		field.content.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	fn normalized(id: &str, typ: &str) -> NormalizedField {
		NormalizedField {
			id: id.into(),
			typ: typ.into(),
			label: Box::default(),
			description: Box::default(),
			size: None,
			options: Vec::new(),
			default: Value::Null,
			content: Box::default(),
			attr: HashMap::new(),
			before: Box::default(),
			after: Box::default(),
			internal_type: Box::default(),
			section: "acme_s1".into(),
			label_for: None,
			callback: None,
			fields: Vec::new(),
		}
	}

	#[test]
	fn test_text_renders_stored_value() {
		let field = normalized("f1", "text");
		let value = serde_json::json!("Jane");
		let html = TextRenderer.render(&field, Some(&value));

		assert!(html.contains("name=\"acme_s1[f1]\""));
		assert!(html.contains("id=\"acme_s1_f1\""));
		assert!(html.contains("value=\"Jane\""));
	}

	#[test]
	fn test_text_falls_back_to_default() {
		let mut field = normalized("f1", "text");
		field.default = serde_json::json!("John Doe");
		let html = TextRenderer.render(&field, None);

		assert!(html.contains("value=\"John Doe\""));
	}

	#[test]
	fn test_text_escapes_value() {
		let field = normalized("f1", "text");
		let value = serde_json::json!("\"><script>");
		let html = TextRenderer.render(&field, Some(&value));

		assert!(!html.contains("\"><script>"));
		assert!(html.contains("&quot;&gt;&lt;script&gt;"));
	}

	#[test]
	fn test_select_marks_selected() {
		let mut field = normalized("f1", "select");
		field.options = vec![(Box::from("a"), Box::from("A")), (Box::from("b"), Box::from("B"))];
		let value = serde_json::json!("b");
		let html = SelectRenderer.render(&field, Some(&value));

		assert!(html.contains("<option value=\"b\" selected=\"selected\">B</option>"));
		assert!(html.contains("<option value=\"a\">A</option>"));
	}

	#[test]
	fn test_checkbox_checked_states() {
		let field = normalized("f1", "checkbox");
		let on = serde_json::json!(true);
		let off = serde_json::json!("0");

		assert!(CheckboxRenderer.render(&field, Some(&on)).contains("checked"));
		assert!(!CheckboxRenderer.render(&field, Some(&off)).contains("checked"));
		assert!(!CheckboxRenderer.render(&field, None).contains("checked"));
	}

	#[test]
	fn test_radio_renders_all_options() {
		let mut field = normalized("f1", "radio");
		field.options = vec![(Box::from("x"), Box::from("X")), (Box::from("y"), Box::from("Y"))];
		field.default = serde_json::json!("x");
		let html = RadioRenderer.render(&field, None);

		assert_eq!(html.matches("type=\"radio\"").count(), 2);
		assert_eq!(html.matches("checked").count(), 1);
	}

	#[test]
	fn test_extra_attrs_sorted() {
		let mut field = normalized("f1", "text");
		field.attr.insert(Box::from("placeholder"), Box::from("x"));
		field.attr.insert(Box::from("data-role"), Box::from("y"));
		let html = TextRenderer.render(&field, None);

		let data = html.find("data-role").unwrap();
		let placeholder = html.find("placeholder").unwrap();
		assert!(data < placeholder);
	}

	#[test]
	fn test_content_passthrough() {
		let mut field = normalized("f1", "content");
		field.content = Box::from("<em>hello</em>");
		assert_eq!(ContentRenderer.render(&field, None), "<em>hello</em>");
	}
}

// vim: ts=4
