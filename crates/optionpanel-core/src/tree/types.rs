//! Tree entities and their builders.
//!
//! All entities deserialize from plain JSON so a whole tree can live in a
//! config file; validation callbacks are not serializable and can only be
//! attached through the builders.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::sync::Arc;

use crate::notices::Notices;
use crate::prelude::*;

/// Per-section validation callback. Receives the full submitted field
/// mapping, may record notices, and returns the mapping to persist.
pub type SectionValidator = Arc<dyn Fn(OptionValues, &mut Notices) -> OptionValues + Send + Sync>;

/// Submit button configuration, every part optional.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitButton {
	pub text: Option<Box<str>>,
	/// Button style suffix (e.g. "primary", "secondary").
	pub style: Option<Box<str>>,
	pub name: Option<Box<str>>,
}

/// A single labeled input descriptor within a section.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
	pub id: Box<str>,
	/// Tag selecting the rendering strategy.
	#[serde(rename = "type")]
	pub typ: Box<str>,
	pub label: Option<Box<str>>,
	#[serde(rename = "desc")]
	pub description: Option<Box<str>>,
	pub size: Option<u32>,
	/// Value/label pairs for choice fields (select, radio).
	pub options: Option<Vec<(Box<str>, Box<str>)>>,
	pub default: Option<serde_json::Value>,
	/// Raw markup for content fields.
	pub content: Option<Box<str>>,
	/// Raw attributes copied onto the rendered control.
	pub attr: Option<HashMap<Box<str>, Box<str>>>,
	pub before: Option<Box<str>>,
	pub after: Option<Box<str>>,
	/// Sub-fields for composite/repeating rows.
	pub fields: Option<Vec<Field>>,
}

impl Field {
	pub fn builder(id: impl Into<Box<str>>, typ: impl Into<Box<str>>) -> FieldBuilder {
		FieldBuilder::new(id, typ)
	}

	pub fn is_composite(&self) -> bool {
		self.fields.as_ref().is_some_and(|f| !f.is_empty())
	}
}

pub struct FieldBuilder {
	id: Box<str>,
	typ: Box<str>,
	label: Option<Box<str>>,
	description: Option<Box<str>>,
	size: Option<u32>,
	options: Vec<(Box<str>, Box<str>)>,
	default: Option<serde_json::Value>,
	content: Option<Box<str>>,
	attr: HashMap<Box<str>, Box<str>>,
	before: Option<Box<str>>,
	after: Option<Box<str>>,
	fields: Vec<Field>,
}

impl FieldBuilder {
	pub fn new(id: impl Into<Box<str>>, typ: impl Into<Box<str>>) -> Self {
		Self {
			id: id.into(),
			typ: typ.into(),
			label: None,
			description: None,
			size: None,
			options: Vec::new(),
			default: None,
			content: None,
			attr: HashMap::new(),
			before: None,
			after: None,
			fields: Vec::new(),
		}
	}

	pub fn label(mut self, label: impl Into<Box<str>>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn description(mut self, description: impl Into<Box<str>>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn size(mut self, size: u32) -> Self {
		self.size = Some(size);
		self
	}

	/// Adds one value/label choice (select, radio).
	pub fn option(mut self, value: impl Into<Box<str>>, label: impl Into<Box<str>>) -> Self {
		self.options.push((value.into(), label.into()));
		self
	}

	pub fn default_value(mut self, value: impl Into<serde_json::Value>) -> Self {
		self.default = Some(value.into());
		self
	}

	pub fn content(mut self, content: impl Into<Box<str>>) -> Self {
		self.content = Some(content.into());
		self
	}

	pub fn attr(mut self, name: impl Into<Box<str>>, value: impl Into<Box<str>>) -> Self {
		self.attr.insert(name.into(), value.into());
		self
	}

	pub fn before(mut self, before: impl Into<Box<str>>) -> Self {
		self.before = Some(before.into());
		self
	}

	pub fn after(mut self, after: impl Into<Box<str>>) -> Self {
		self.after = Some(after.into());
		self
	}

	/// Adds a sub-field row, turning this field into a composite.
	pub fn row(mut self, field: Field) -> Self {
		self.fields.push(field);
		self
	}

	pub fn build(self) -> OpResult<Field> {
		if self.id.trim().is_empty() {
			return Err(Error::ConfigError("field id is required".into()));
		}
		if self.typ.trim().is_empty() {
			return Err(Error::ConfigError(format!("field '{}' has no type", self.id)));
		}
		let fields = dedupe_by_id(self.fields, |f| &f.id, "sub-field");
		Ok(Field {
			id: self.id,
			typ: self.typ,
			label: self.label,
			description: self.description,
			size: self.size,
			options: if self.options.is_empty() { None } else { Some(self.options) },
			default: self.default,
			content: self.content,
			attr: if self.attr.is_empty() { None } else { Some(self.attr) },
			before: self.before,
			after: self.after,
			fields: if fields.is_empty() { None } else { Some(fields) },
		})
	}
}

/// A persisted-option boundary: one stored record per section.
#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize)]
pub struct Section {
	pub id: Box<str>,
	pub title: Option<Box<str>>,
	#[serde(rename = "desc")]
	pub description: Option<Box<str>>,
	#[serde(default)]
	pub fields: Vec<Field>,
	pub submit: Option<SubmitButton>,
	#[serde(skip)]
	pub validator: Option<SectionValidator>,
}

impl Debug for Section {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Section")
			.field("id", &self.id)
			.field("title", &self.title)
			.field("description", &self.description)
			.field("fields", &self.fields)
			.field("submit", &self.submit)
			.field("validator", &self.validator.is_some())
			.finish()
	}
}

impl Section {
	pub fn builder(id: impl Into<Box<str>>) -> SectionBuilder {
		SectionBuilder::new(id)
	}
}

pub struct SectionBuilder {
	id: Box<str>,
	title: Option<Box<str>>,
	description: Option<Box<str>>,
	fields: Vec<Field>,
	submit: Option<SubmitButton>,
	validator: Option<SectionValidator>,
}

impl SectionBuilder {
	pub fn new(id: impl Into<Box<str>>) -> Self {
		Self {
			id: id.into(),
			title: None,
			description: None,
			fields: Vec::new(),
			submit: None,
			validator: None,
		}
	}

	pub fn title(mut self, title: impl Into<Box<str>>) -> Self {
		self.title = Some(title.into());
		self
	}

	pub fn description(mut self, description: impl Into<Box<str>>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn field(mut self, field: Field) -> Self {
		self.fields.push(field);
		self
	}

	pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
		self.fields.extend(fields);
		self
	}

	pub fn submit(mut self, submit: SubmitButton) -> Self {
		self.submit = Some(submit);
		self
	}

	/// Attaches the validation callback run on submitted values.
	pub fn validator<F>(mut self, f: F) -> Self
	where
		F: Fn(OptionValues, &mut Notices) -> OptionValues + Send + Sync + 'static,
	{
		self.validator = Some(Arc::new(f));
		self
	}

	pub fn build(self) -> OpResult<Section> {
		if self.id.trim().is_empty() {
			return Err(Error::ConfigError("section id is required".into()));
		}
		Ok(Section {
			id: self.id,
			title: self.title,
			description: self.description,
			fields: dedupe_by_id(self.fields, |f| &f.id, "field"),
			submit: self.submit,
			validator: self.validator,
		})
	}
}

/// A top-level admin screen grouping one or more sections.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
	pub id: Box<str>,
	/// Used in tab URLs.
	pub slug: Box<str>,
	pub title: Option<Box<str>>,
	#[serde(default)]
	pub sections: Vec<Section>,
	pub submit: Option<SubmitButton>,
	/// Split this page into one independently-submitted form per section.
	#[serde(default)]
	pub multiform: bool,
}

impl Page {
	pub fn builder(id: impl Into<Box<str>>, slug: impl Into<Box<str>>) -> PageBuilder {
		PageBuilder::new(id, slug)
	}
}

pub struct PageBuilder {
	id: Box<str>,
	slug: Box<str>,
	title: Option<Box<str>>,
	sections: Vec<Section>,
	submit: Option<SubmitButton>,
	multiform: bool,
}

impl PageBuilder {
	pub fn new(id: impl Into<Box<str>>, slug: impl Into<Box<str>>) -> Self {
		Self {
			id: id.into(),
			slug: slug.into(),
			title: None,
			sections: Vec::new(),
			submit: None,
			multiform: false,
		}
	}

	pub fn title(mut self, title: impl Into<Box<str>>) -> Self {
		self.title = Some(title.into());
		self
	}

	pub fn section(mut self, section: Section) -> Self {
		self.sections.push(section);
		self
	}

	pub fn sections(mut self, sections: impl IntoIterator<Item = Section>) -> Self {
		self.sections.extend(sections);
		self
	}

	pub fn submit(mut self, submit: SubmitButton) -> Self {
		self.submit = Some(submit);
		self
	}

	pub fn multiform(mut self, multiform: bool) -> Self {
		self.multiform = multiform;
		self
	}

	pub fn build(self) -> OpResult<Page> {
		if self.id.trim().is_empty() {
			return Err(Error::ConfigError("page id is required".into()));
		}
		if self.slug.trim().is_empty() {
			return Err(Error::ConfigError(format!("page '{}' has no slug", self.id)));
		}
		Ok(Page {
			id: self.id,
			slug: self.slug,
			title: self.title,
			sections: dedupe_by_id(self.sections, |s| &s.id, "section"),
			submit: self.submit,
			multiform: self.multiform,
		})
	}
}

/// Keeps the first entry for each id; later duplicates are dropped.
fn dedupe_by_id<T>(items: Vec<T>, id: impl Fn(&T) -> &Box<str>, kind: &str) -> Vec<T> {
	let mut seen: HashSet<Box<str>> = HashSet::new();
	let mut out = Vec::with_capacity(items.len());
	for item in items {
		if seen.insert(id(&item).clone()) {
			out.push(item);
		} else {
			warn!("duplicate {} id '{}' dropped", kind, id(&item));
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_field_builder() {
		let field = Field::builder("name", "text")
			.label("Name")
			.description("Your Name")
			.default_value("John Doe")
			.size(40)
			.attr("autocomplete", "off")
			.build()
			.unwrap();

		assert_eq!(field.id.as_ref(), "name");
		assert_eq!(field.typ.as_ref(), "text");
		assert_eq!(field.default, Some(serde_json::json!("John Doe")));
		assert!(!field.is_composite());
	}

	#[test]
	fn test_field_builder_requires_id_and_type() {
		assert!(Field::builder("", "text").build().is_err());
		assert!(Field::builder("name", " ").build().is_err());
	}

	#[test]
	fn test_composite_field() {
		let field = Field::builder("dimensions", "text")
			.row(Field::builder("width", "text").build().unwrap())
			.row(Field::builder("height", "text").build().unwrap())
			.build()
			.unwrap();

		assert!(field.is_composite());
		assert_eq!(field.fields.as_ref().unwrap().len(), 2);
	}

	#[test]
	fn test_section_drops_duplicate_field_ids() {
		let section = Section::builder("general")
			.field(Field::builder("name", "text").label("first").build().unwrap())
			.field(Field::builder("name", "textarea").label("second").build().unwrap())
			.build()
			.unwrap();

		assert_eq!(section.fields.len(), 1);
		assert_eq!(section.fields[0].label.as_deref(), Some("first"));
	}

	#[test]
	fn test_page_from_json() {
		let page: Page = serde_json::from_str(
			r#"{
				"id": "p1",
				"slug": "p1",
				"title": "Page one",
				"sections": [
					{
						"id": "s1",
						"title": "Section One",
						"fields": [
							{"id": "f1", "type": "text", "label": "Name", "default": "John Doe"}
						]
					}
				]
			}"#,
		)
		.unwrap();

		assert_eq!(page.id.as_ref(), "p1");
		assert!(!page.multiform);
		assert_eq!(page.sections.len(), 1);
		assert_eq!(page.sections[0].fields[0].default, Some(serde_json::json!("John Doe")));
		assert!(page.sections[0].validator.is_none());
	}
}

// vim: ts=4
