//! Reusable test fixtures
//!
//! Trees used across multiple tests, matching the shapes the renderer and
//! registrar are specified against.

#![allow(dead_code)]

use optionpanel_core::tree::{Field, Page, PageTree, Section, SubmitButton};

/// The worked example: one page, one section, one text field.
pub fn simple_tree() -> PageTree {
	let page = Page::builder("p1", "p1")
		.title("Page one")
		.section(
			Section::builder("s1")
				.title("Section One")
				.description("A sample section")
				.field(
					Field::builder("f1", "text")
						.label("Name")
						.description("Your Name")
						.default_value("John Doe")
						.build()
						.unwrap(),
				)
				.build()
				.unwrap(),
		)
		.build()
		.unwrap();
	PageTree::from_pages([page])
}

/// Two titled pages, the second with two sections.
pub fn two_page_tree(multiform: bool) -> PageTree {
	let p1 = Page::builder("general", "general")
		.title("General")
		.section(
			Section::builder("profile")
				.title("Profile")
				.field(
					Field::builder("name", "text")
						.label("Name")
						.default_value("Alice")
						.build()
						.unwrap(),
				)
				.build()
				.unwrap(),
		)
		.build()
		.unwrap();
	let p2 = Page::builder("advanced", "advanced-settings")
		.title("Advanced")
		.multiform(multiform)
		.submit(SubmitButton {
			text: Some(Box::from("Apply")),
			style: None,
			name: None,
		})
		.section(
			Section::builder("network")
				.title("Network")
				.field(
					Field::builder("host", "text")
						.label("Host")
						.default_value("localhost")
						.build()
						.unwrap(),
				)
				.build()
				.unwrap(),
		)
		.section(
			Section::builder("tuning")
				.title("Tuning")
				.field(
					Field::builder("workers", "select")
						.label("Workers")
						.option("1", "one")
						.option("2", "two")
						.default_value("1")
						.build()
						.unwrap(),
				)
				.build()
				.unwrap(),
		)
		.build()
		.unwrap();
	PageTree::from_pages([p1, p2])
}
