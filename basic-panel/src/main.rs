//! Minimal demo: one settings page with one section, backed by SQLite.
//!
//! Builds the tree, initializes the panel (seeding the option record on
//! first run), and prints the rendered admin page markup to stdout.

use std::{env, path::PathBuf, sync::Arc};

use optionpanel_core::field::FieldTypeRegistry;
use optionpanel_core::hooks::PanelHooks;
use optionpanel_core::prelude::*;
use optionpanel_core::tree::{Field, Page, PageTree, Section};
use optionpanel_option_adapter_sqlite::OptionAdapterSqlite;

fn build_tree() -> OpResult<PageTree> {
	let mut tree = PageTree::new();
	tree.add_page(
		Page::builder("example_page_simple", "example_simple")
			.title("Page one")
			.section(
				Section::builder("settings_section_one")
					.title("Section One")
					.description("A simple example section.")
					.field(
						Field::builder("text_input", "text")
							.label("Name")
							.description("Your Name")
							.default_value("John Doe")
							.build()?,
					)
					.field(
						Field::builder("enable_feature", "checkbox")
							.label("Enable feature")
							.description("Turn the example feature on")
							.default_value(false)
							.build()?,
					)
					.validator(|fields, notices| {
						if fields.get("text_input").is_none_or(|v| v.as_str().unwrap_or("").is_empty())
						{
							notices.add_error("text_input", "texterror", "Error: please enter some text.");
						}
						fields
					})
					.build()?,
			)
			.build()?,
	);
	Ok(tree)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> OpResult<()> {
	tracing_subscriber::fmt::init();

	let db_dir = PathBuf::from(env::var("DB_DIR").unwrap_or("./data".to_string()));
	std::fs::create_dir_all(&db_dir)?;

	let adapter = Arc::new(OptionAdapterSqlite::new(db_dir.join("options.db")).await?);

	let panel = Panel::init(
		build_tree()?,
		PanelOpts::new("example_plugin_simple"),
		adapter,
		PanelHooks::default(),
		FieldTypeRegistry::with_builtins(),
		&RequestContext::new(),
	)
	.await?;

	println!("{}", panel.render_header("OptionPanel Simple Example", None));
	println!("{}", panel.render_form());

	let settings = panel.section_settings("settings_section_one").await?;
	println!("<!-- stored: {:?} -->", settings);

	Ok(())
}

// vim: ts=4
