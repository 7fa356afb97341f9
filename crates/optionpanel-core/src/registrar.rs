//! Walks the settings tree into flat registration records.
//!
//! Every (page, section) pair yields one persistence registration with its
//! option key, form group key, validator, and seed values; every section
//! additionally yields a display registration carrying its normalized
//! fields. Script requirements are collected for the current page only.

use std::collections::BTreeSet;

use crate::field::{NormalizedField, Normalizer};
use crate::prelude::*;
use crate::tree::{Page, PageTree, Section, SectionValidator};

/// Option key for a section: `{namespace}_{section.id}`.
pub fn option_key(namespace: &str, section_id: &str) -> Box<str> {
	format!("{}_{}", namespace, section_id).into()
}

/// Form registration key for a (page, section) pair. A multiform page with
/// more than one section splits into one group per section; otherwise the
/// whole page is one group.
pub fn page_group_key(namespace: &str, page: &Page, section: &Section) -> Box<str> {
	if page.multiform && page.sections.len() > 1 {
		format!("{}_{}", namespace, section.id).into()
	} else {
		format!("{}_{}", namespace, page.id).into()
	}
}

/// A section registered for persistence.
#[derive(Clone)]
pub struct RegisteredOption {
	pub page_id: Box<str>,
	pub section_id: Box<str>,
	pub option_key: Box<str>,
	pub page_group: Box<str>,
	pub validator: Option<SectionValidator>,
	/// Field defaults used to seed the record when it does not exist yet.
	pub seed: OptionValues,
}

impl std::fmt::Debug for RegisteredOption {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RegisteredOption")
			.field("page_id", &self.page_id)
			.field("section_id", &self.section_id)
			.field("option_key", &self.option_key)
			.field("page_group", &self.page_group)
			.field("validator", &self.validator.is_some())
			.field("seed", &self.seed)
			.finish()
	}
}

/// A section registered for display.
#[derive(Debug, Clone)]
pub struct RegisteredSection {
	pub page_id: Box<str>,
	pub section_id: Box<str>,
	pub option_key: Box<str>,
	pub page_group: Box<str>,
	pub title: Box<str>,
	pub description: Box<str>,
	pub fields: Vec<NormalizedField>,
}

#[derive(Default)]
pub struct Registration {
	pub options: Vec<RegisteredOption>,
	pub sections: Vec<RegisteredSection>,
	/// Deduplicated script types needed by the current page.
	pub scripts: Vec<Box<str>>,
	/// Option keys belonging to the current page, for the diagnostics text.
	pub current_keys: Vec<Box<str>>,
}

/// Flattens the tree into registration records.
pub fn build(
	tree: &PageTree,
	namespace: &str,
	current_page_id: Option<&str>,
	normalizer: &Normalizer<'_>,
) -> Registration {
	let mut registration = Registration::default();
	let mut scripts = BTreeSet::new();

	for page in tree.pages() {
		let is_current = current_page_id == Some(page.id.as_ref());
		for section in &page.sections {
			let option_key = option_key(namespace, &section.id);
			let page_group = page_group_key(namespace, page, section);

			let mut section_scripts = BTreeSet::new();
			let fields =
				normalizer.normalize_fields(&option_key, &section.fields, &mut section_scripts);

			if is_current {
				scripts.extend(section_scripts);
				registration.current_keys.push(option_key.clone());
			}

			registration.options.push(RegisteredOption {
				page_id: page.id.clone(),
				section_id: section.id.clone(),
				option_key: option_key.clone(),
				page_group: page_group.clone(),
				validator: section.validator.clone(),
				seed: seed_values(&fields),
			});
			registration.sections.push(RegisteredSection {
				page_id: page.id.clone(),
				section_id: section.id.clone(),
				option_key,
				page_group,
				title: section.title.clone().unwrap_or_default(),
				description: section.description.clone().unwrap_or_default(),
				fields,
			});
		}
	}

	registration.scripts = scripts.into_iter().collect();
	registration
}

/// Default values for every field of a section. Composite rows contribute
/// their sub-fields; the composite parent id itself is not seeded.
fn seed_values(fields: &[NormalizedField]) -> OptionValues {
	let mut seed = OptionValues::new();
	for field in fields {
		if field.is_composite() {
			for row in &field.fields {
				seed.insert(row.id.clone(), row.default.clone());
			}
		} else {
			seed.insert(field.id.clone(), field.default.clone());
		}
	}
	seed
}


// vim: ts=4
