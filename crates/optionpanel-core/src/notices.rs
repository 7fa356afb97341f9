//! Validation notices recorded while a section submit is processed.
//!
//! A section's validation callback may record any number of notices
//! without interrupting the save; the host decides how to display them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
	#[serde(rename = "error")]
	Error,
	#[serde(rename = "warning")]
	Warning,
	#[serde(rename = "success")]
	Success,
}

/// A single user-visible diagnostic tied to a field or section identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
	/// Field or section id the notice refers to.
	pub setting_id: Box<str>,
	/// Stable machine-readable code (e.g. "texterror").
	pub code: Box<str>,
	pub message: Box<str>,
	pub level: NoticeLevel,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Notices {
	entries: Vec<Notice>,
}

impl Notices {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add(
		&mut self,
		setting_id: impl Into<Box<str>>,
		code: impl Into<Box<str>>,
		message: impl Into<Box<str>>,
		level: NoticeLevel,
	) {
		self.entries.push(Notice {
			setting_id: setting_id.into(),
			code: code.into(),
			message: message.into(),
			level,
		});
	}

	pub fn add_error(
		&mut self,
		setting_id: impl Into<Box<str>>,
		code: impl Into<Box<str>>,
		message: impl Into<Box<str>>,
	) {
		self.add(setting_id, code, message, NoticeLevel::Error);
	}

	pub fn entries(&self) -> &[Notice] {
		&self.entries
	}

	pub fn has_errors(&self) -> bool {
		self.entries.iter().any(|n| n.level == NoticeLevel::Error)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_add_and_query() {
		let mut notices = Notices::new();
		assert!(notices.is_empty());

		notices.add("f1", "toolong", "Value is too long", NoticeLevel::Warning);
		notices.add_error("f2", "required", "Please enter some text");

		assert_eq!(notices.len(), 2);
		assert!(notices.has_errors());
		assert_eq!(notices.entries()[1].code.as_ref(), "required");
	}
}

// vim: ts=4
