//! Adapter trait for the persisted option store.
//!
//! A panel never touches storage directly: every read and write of an
//! option record goes through an implementation of [`OptionAdapter`].
//! The record schema is deliberately loose (field id mapped to a JSON
//! value) so adapters stay agnostic of the settings tree.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::prelude::*;

/// One persisted option record: field id mapped to its stored value.
pub type OptionValues = HashMap<Box<str>, serde_json::Value>;

/// Marker key recording the owning section id inside a submitted record.
/// Written by the form's hidden input, stripped when settings are read back.
pub const SECTION_ID_KEY: &str = "section_id";

#[async_trait]
pub trait OptionAdapter: Debug + Send + Sync {
	/// Reads a stored option record by key.
	async fn read_option(&self, key: &str) -> OpResult<Option<OptionValues>>;

	/// Creates the record only when the key does not exist yet.
	///
	/// Returns `true` when the record was created, `false` (leaving the
	/// stored record untouched) when the key already existed.
	async fn create_option(&self, key: &str, values: &OptionValues) -> OpResult<bool>;

	/// Creates or replaces the record.
	async fn write_option(&self, key: &str, values: &OptionValues) -> OpResult<()>;

	/// Removes the record if present.
	async fn delete_option(&self, key: &str) -> OpResult<()>;
}

// vim: ts=4
