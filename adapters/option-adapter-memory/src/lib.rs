//! In-memory implementation of the option store.
//!
//! Records live in a `HashMap` behind a `parking_lot::RwLock`. Useful for
//! tests, demos, and panels that do not need persistence.

use parking_lot::RwLock;
use std::collections::HashMap;

use async_trait::async_trait;

use optionpanel::prelude::*;

#[derive(Debug, Default)]
pub struct OptionAdapterMemory {
	options: RwLock<HashMap<Box<str>, OptionValues>>,
}

impl OptionAdapterMemory {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of stored records.
	pub fn len(&self) -> usize {
		self.options.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.options.read().is_empty()
	}
}

#[async_trait]
impl OptionAdapter for OptionAdapterMemory {
	async fn read_option(&self, key: &str) -> OpResult<Option<OptionValues>> {
		Ok(self.options.read().get(key).cloned())
	}

	async fn create_option(&self, key: &str, values: &OptionValues) -> OpResult<bool> {
		let mut options = self.options.write();
		if options.contains_key(key) {
			return Ok(false);
		}
		options.insert(Box::from(key), values.clone());
		Ok(true)
	}

	async fn write_option(&self, key: &str, values: &OptionValues) -> OpResult<()> {
		self.options.write().insert(Box::from(key), values.clone());
		Ok(())
	}

	async fn delete_option(&self, key: &str) -> OpResult<()> {
		self.options.write().remove(key);
		Ok(())
	}
}

// vim: ts=4
