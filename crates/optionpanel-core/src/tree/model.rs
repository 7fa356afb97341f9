//! Owned settings tree with id-indexed pages and append mutators.
//!
//! Pages are addressed through an id index so lookups stay cheap and a
//! missed lookup is an explicit `false`, not a silent scan result.

use std::collections::HashMap;

use crate::prelude::*;
use crate::request::RequestContext;

use super::types::{Field, Page, Section};

#[derive(Debug, Clone, Default)]
pub struct PageTree {
	pages: Vec<Page>,
	by_id: HashMap<Box<str>, usize>,
	by_slug: HashMap<Box<str>, usize>,
}

impl PageTree {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a tree from a page list, dropping duplicate ids/slugs.
	pub fn from_pages(pages: impl IntoIterator<Item = Page>) -> Self {
		let mut tree = Self::new();
		for page in pages {
			tree.add_page(page);
		}
		tree
	}

	/// Appends a page. Returns `false` (tree unchanged) when the page id
	/// or slug is already taken.
	pub fn add_page(&mut self, page: Page) -> bool {
		if self.by_id.contains_key(&page.id) || self.by_slug.contains_key(&page.slug) {
			warn!("page '{}' not added: duplicate id or slug", page.id);
			return false;
		}
		self.by_id.insert(page.id.clone(), self.pages.len());
		self.by_slug.insert(page.slug.clone(), self.pages.len());
		self.pages.push(page);
		true
	}

	/// Appends multiple pages. Returns `false` if any page was rejected.
	pub fn add_pages(&mut self, pages: impl IntoIterator<Item = Page>) -> bool {
		let mut all = true;
		for page in pages {
			all &= self.add_page(page);
		}
		all
	}

	/// Appends a section to the page with the given id. Returns `false`
	/// when the page is unknown or the section id is taken on that page.
	pub fn add_section(&mut self, page_id: &str, section: Section) -> bool {
		let Some(&pos) = self.by_id.get(page_id) else {
			warn!("section '{}' not added: unknown page '{}'", section.id, page_id);
			return false;
		};
		let page = &mut self.pages[pos];
		if page.sections.iter().any(|s| s.id == section.id) {
			warn!("section '{}' not added: duplicate id on page '{}'", section.id, page_id);
			return false;
		}
		page.sections.push(section);
		true
	}

	pub fn add_sections(
		&mut self,
		page_id: &str,
		sections: impl IntoIterator<Item = Section>,
	) -> bool {
		let mut all = true;
		for section in sections {
			all &= self.add_section(page_id, section);
		}
		all
	}

	/// Appends a field to a section. Returns `false` when the page or
	/// section is unknown or the field id is taken in that section.
	pub fn add_field(&mut self, page_id: &str, section_id: &str, field: Field) -> bool {
		let Some(&pos) = self.by_id.get(page_id) else {
			warn!("field '{}' not added: unknown page '{}'", field.id, page_id);
			return false;
		};
		let page = &mut self.pages[pos];
		let Some(section) = page.sections.iter_mut().find(|s| s.id.as_ref() == section_id) else {
			warn!("field '{}' not added: unknown section '{}'", field.id, section_id);
			return false;
		};
		if section.fields.iter().any(|f| f.id == field.id) {
			warn!("field '{}' not added: duplicate id in section '{}'", field.id, section_id);
			return false;
		}
		section.fields.push(field);
		true
	}

	pub fn add_fields(
		&mut self,
		page_id: &str,
		section_id: &str,
		fields: impl IntoIterator<Item = Field>,
	) -> bool {
		let mut all = true;
		for field in fields {
			all &= self.add_field(page_id, section_id, field);
		}
		all
	}

	pub fn pages(&self) -> &[Page] {
		&self.pages
	}

	pub fn page(&self, id: &str) -> Option<&Page> {
		self.by_id.get(id).map(|&pos| &self.pages[pos])
	}

	pub fn len(&self) -> usize {
		self.pages.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pages.is_empty()
	}

	/// Resolves the active page: the request's tab parameter is matched
	/// against page id, then slug; no match (or no tab) falls back to the
	/// first declared page.
	pub fn current_page(&self, ctx: &RequestContext) -> Option<&Page> {
		if let Some(tab) = ctx.tab.as_deref() {
			if let Some(&pos) = self.by_id.get(tab).or_else(|| self.by_slug.get(tab)) {
				return Some(&self.pages[pos]);
			}
		}
		self.pages.first()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tree::types::{Field, Page, Section};

	fn page(id: &str, slug: &str) -> Page {
		Page::builder(id, slug).title(id.to_uppercase()).build().unwrap()
	}

	#[test]
	fn test_add_page_rejects_duplicates() {
		let mut tree = PageTree::new();
		assert!(tree.add_page(page("p1", "one")));
		assert!(!tree.add_page(page("p1", "other")));
		assert!(!tree.add_page(page("p2", "one")));
		assert_eq!(tree.len(), 1);
	}

	#[test]
	fn test_add_section_unknown_page_is_noop() {
		let mut tree = PageTree::new();
		tree.add_page(page("p1", "one"));

		let section = Section::builder("s1").build().unwrap();
		assert!(!tree.add_section("nope", section));
		assert!(tree.page("p1").unwrap().sections.is_empty());
	}

	#[test]
	fn test_add_field_paths() {
		let mut tree = PageTree::new();
		tree.add_page(page("p1", "one"));
		tree.add_section("p1", Section::builder("s1").build().unwrap());

		let field = || Field::builder("f1", "text").build().unwrap();
		assert!(tree.add_field("p1", "s1", field()));
		// same id again in the same section
		assert!(!tree.add_field("p1", "s1", field()));
		// unknown section
		assert!(!tree.add_field("p1", "s2", field()));
		assert_eq!(tree.page("p1").unwrap().sections[0].fields.len(), 1);
	}

	#[test]
	fn test_current_page_resolution() {
		let mut tree = PageTree::new();
		tree.add_pages([page("p1", "one"), page("p2", "two")]);

		let by_default = tree.current_page(&RequestContext::new());
		assert_eq!(by_default.unwrap().id.as_ref(), "p1");

		let by_id = tree.current_page(&RequestContext::new().with_tab("p2"));
		assert_eq!(by_id.unwrap().id.as_ref(), "p2");

		let by_slug = tree.current_page(&RequestContext::new().with_tab("two"));
		assert_eq!(by_slug.unwrap().id.as_ref(), "p2");

		let unknown = tree.current_page(&RequestContext::new().with_tab("missing"));
		assert_eq!(unknown.unwrap().id.as_ref(), "p1");
	}

	#[test]
	fn test_current_page_empty_tree() {
		let tree = PageTree::new();
		assert!(tree.current_page(&RequestContext::new()).is_none());
	}
}

// vim: ts=4
