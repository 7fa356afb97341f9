//! Markup rendering for the admin page: heading, tab strip, and forms.
//!
//! Rendering is pure string assembly over the registration records built
//! at init time; an invalid panel renders its title and nothing else.

use std::fmt::Write as _;

use crate::field::{NormalizedField, EXTRA_FIELD_TYPE};
use crate::html::{escape, tab_url};
use crate::prelude::*;
use crate::registrar::{self, RegisteredSection};
use crate::service::Panel;
use crate::tree::{Page, SubmitButton};

const DEFAULT_SUBMIT_TEXT: &str = "Save Changes";
const DEFAULT_SUBMIT_STYLE: &str = "primary";
const DEFAULT_SUBMIT_NAME: &str = "submit";

impl Panel {
	/// Renders the page title and, when more than one page is titled, the
	/// tab strip. An invalid panel keeps the title but drops the tabs.
	/// `tab_id` forces the active tab marker onto the page with that id.
	pub fn render_header(&self, title: &str, tab_id: Option<&str>) -> String {
		let mut html = String::new();
		if !title.is_empty() {
			let _ = write!(html, "<h2>{}</h2>", escape(title));
		}
		if !self.is_valid() {
			return html;
		}
		let Some(current) = self.current_page() else {
			return html;
		};

		let pages = self.tree.pages();
		let titled: Vec<&Page> = pages
			.iter()
			.filter(|p| p.title.as_deref().is_some_and(|t| !t.is_empty()))
			.collect();

		// Explicit overrides are validated against the declared page ids.
		let cur_tab_id = match tab_id {
			Some(id) if pages.iter().any(|p| p.id.as_ref() == id) => id,
			_ => current.id.as_ref(),
		};

		if titled.len() > 1 {
			html.push_str("<h2 class=\"nav-tab-wrapper\">");
			for page in &titled {
				let first = pages.first().is_some_and(|p| p.id == page.id);
				let url = tab_url(&self.opts.base_url, &page.slug, first);
				let active = if cur_tab_id == page.id.as_ref() { " nav-tab-active" } else { "" };
				let _ = write!(
					html,
					"<a href=\"{}\" class=\"nav-tab{}\" id=\"{}-tab\">{}</a>",
					escape(&url),
					active,
					escape(&page.id),
					escape(page.title.as_deref().unwrap_or_default()),
				);
			}
			html.push_str("</h2>");
		} else if titled.len() == 1 {
			if let Some(title) = current.title.as_deref() {
				if !title.is_empty() {
					let _ = write!(html, "<h3>{}</h3>", escape(title));
				}
			}
		}
		html
	}

	/// Renders the form(s) of the current page: one form per form group,
	/// each carrying the hidden section id markers, hook-injected extra
	/// fields, the registered sections, and a submit control. Returns an
	/// empty string on an invalid panel.
	pub fn render_form(&self) -> String {
		if !self.is_valid() {
			return String::new();
		}
		let Some(page) = self.current_page() else {
			return String::new();
		};
		let namespace = self.opts.namespace.as_ref();

		// Hidden markers for every section of the page, repeated in each
		// form so submit handlers can tell the sections apart.
		let mut section_ids = String::new();
		for section in &page.sections {
			let key = registrar::option_key(namespace, &section.id);
			let _ = write!(
				section_ids,
				"<input id=\"{key}_section_id\" type=\"hidden\" value=\"{id}\" name=\"{key}[{marker}]\" />",
				key = escape(&key),
				id = escape(&section.id),
				marker = SECTION_ID_KEY,
			);
		}

		let multiform = page.multiform && page.sections.len() > 1;
		let forms: Vec<(&str, Option<&SubmitButton>)> = if multiform {
			page.sections.iter().map(|s| (s.id.as_ref(), s.submit.as_ref())).collect()
		} else {
			vec![(page.id.as_ref(), None)]
		};

		let mut html = String::new();
		for (form_id, form_submit) in forms {
			let group = format!("{}_{}", namespace, form_id);
			let _ = write!(
				html,
				"<form method=\"post\" action=\"{}\">",
				escape(&self.opts.form_action),
			);
			html.push_str(&section_ids);
			html.push_str(&self.hooks.render_form_fields(form_id, page));
			for section in
				self.registration.sections.iter().filter(|s| s.page_group.as_ref() == group)
			{
				html.push_str(&self.render_section(section));
			}
			html.push_str(&self.render_submit(form_id, form_submit, page));
			html.push_str("</form>");
		}
		html
	}

	/// The escaped description of the current page section whose option
	/// key matches `section_key`, or an empty string.
	pub fn render_section_description(&self, section_key: &str) -> String {
		let Some(page) = self.current_page() else {
			return String::new();
		};
		for section in &page.sections {
			let key = registrar::option_key(&self.opts.namespace, &section.id);
			if key.as_ref() == section_key {
				if let Some(desc) = section.description.as_deref() {
					return escape(desc).into_owned();
				}
			}
		}
		String::new()
	}

	fn render_section(&self, section: &RegisteredSection) -> String {
		let mut html = String::new();
		if !section.title.is_empty() {
			let _ = write!(html, "<h2>{}</h2>", escape(&section.title));
		}
		let description = self.render_section_description(&section.option_key);
		if !description.is_empty() {
			let _ = write!(html, "<p class=\"section-description\">{}</p>", description);
		}

		html.push_str("<table class=\"form-table\">");
		let page_values = self.page_values.read();
		let record = page_values.get(&section.option_key);
		for field in &section.fields {
			html.push_str(&self.render_field_row(field, record));
		}
		html.push_str("</table>");
		html
	}

	fn render_field_row(&self, field: &NormalizedField, record: Option<&OptionValues>) -> String {
		let mut html = String::new();
		html.push_str("<tr>");
		if field.label.is_empty() {
			html.push_str("<th scope=\"row\"></th>");
		} else if let Some(target) = &field.label_for {
			let _ = write!(
				html,
				"<th scope=\"row\"><label for=\"{}\">{}</label></th>",
				escape(target),
				escape(&field.label),
			);
		} else {
			let _ = write!(html, "<th scope=\"row\">{}</th>", escape(&field.label));
		}

		html.push_str("<td>");
		html.push_str(&field.before);
		if field.is_composite() {
			for row in &field.fields {
				html.push_str(&self.render_control(row, record));
			}
		} else {
			html.push_str(&self.render_control(field, record));
		}
		html.push_str(&field.after);
		html.push_str("</td></tr>");
		html
	}

	/// Dispatches one control through the renderer registry, falling back
	/// to the extra-field hook for wrapped types.
	fn render_control(&self, field: &NormalizedField, record: Option<&OptionValues>) -> String {
		let value = record.and_then(|r| r.get(field.id.as_ref()));
		if field.typ.as_ref() == EXTRA_FIELD_TYPE {
			let callback = field.callback.as_deref().unwrap_or_default();
			return self.hooks.render_extra_field(callback, field, value);
		}
		match self.renderers.get(&field.typ) {
			Some(renderer) => renderer.render(field, value),
			None => {
				debug!("no renderer for field type '{}'", field.typ);
				String::new()
			}
		}
	}

	fn render_submit(
		&self,
		form_id: &str,
		form_submit: Option<&SubmitButton>,
		page: &Page,
	) -> String {
		let submit = form_submit.or(page.submit.as_ref());
		let text = submit.and_then(|s| s.text.as_deref()).unwrap_or(DEFAULT_SUBMIT_TEXT);
		let style = submit.and_then(|s| s.style.as_deref()).unwrap_or(DEFAULT_SUBMIT_STYLE);
		let name = submit.and_then(|s| s.name.as_deref()).unwrap_or(DEFAULT_SUBMIT_NAME);
		format!(
			"<p class=\"submit\"><input type=\"submit\" name=\"{}\" id=\"{}\" class=\"button button-{}\" value=\"{}\" /></p>",
			escape(name),
			escape(form_id),
			escape(style),
			escape(text),
		)
	}
}

// vim: ts=4
