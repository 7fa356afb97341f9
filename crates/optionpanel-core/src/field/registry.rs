//! Render strategy lookup for field types.
//!
//! Dispatch by type tag goes through an explicit table instead of method
//! name reflection: callers register a strategy per tag, unknown tags fall
//! back to the extra-field hook at normalization time.

use std::collections::HashMap;
use std::sync::Arc;

use crate::prelude::*;

use super::types::NormalizedField;

/// A rendering strategy for one field type tag.
pub trait FieldRenderer: Send + Sync {
	/// Renders the control markup for a normalized field with its stored
	/// value (`None` when the record holds no entry for the field).
	fn render(&self, field: &NormalizedField, value: Option<&serde_json::Value>) -> String;
}

/// Mutable registry used while assembling a panel.
pub struct FieldTypeRegistry {
	renderers: HashMap<Box<str>, Arc<dyn FieldRenderer>>,
}

impl FieldTypeRegistry {
	pub fn new() -> Self {
		Self { renderers: HashMap::new() }
	}

	/// Registry preloaded with the built-in strategies.
	pub fn with_builtins() -> Self {
		let mut registry = Self::new();
		for (typ, renderer) in super::builtin::builtins() {
			registry.renderers.insert(typ, renderer);
		}
		registry
	}

	/// Registers a renderer for a type tag.
	pub fn register(
		&mut self,
		typ: impl Into<Box<str>>,
		renderer: Arc<dyn FieldRenderer>,
	) -> OpResult<()> {
		let typ = typ.into();
		if self.renderers.contains_key(&typ) {
			return Err(Error::ConfigError(format!("field type '{}' is already registered", typ)));
		}
		debug!("registering field type: {}", typ);
		self.renderers.insert(typ, renderer);
		Ok(())
	}

	/// Freezes the registry (makes it immutable).
	pub fn freeze(self) -> FrozenFieldTypeRegistry {
		debug!("freezing field type registry with {} renderers", self.renderers.len());
		FrozenFieldTypeRegistry { renderers: self.renderers }
	}

	pub fn len(&self) -> usize {
		self.renderers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.renderers.is_empty()
	}
}

impl Default for FieldTypeRegistry {
	fn default() -> Self {
		Self::new()
	}
}

/// Immutable registry held by the panel.
pub struct FrozenFieldTypeRegistry {
	renderers: HashMap<Box<str>, Arc<dyn FieldRenderer>>,
}

impl FrozenFieldTypeRegistry {
	pub fn get(&self, typ: &str) -> Option<&Arc<dyn FieldRenderer>> {
		self.renderers.get(typ)
	}

	pub fn contains(&self, typ: &str) -> bool {
		self.renderers.contains_key(typ)
	}

	pub fn list(&self) -> impl Iterator<Item = &str> {
		self.renderers.keys().map(AsRef::as_ref)
	}

	pub fn len(&self) -> usize {
		self.renderers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.renderers.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct NoopRenderer;

	impl FieldRenderer for NoopRenderer {
		fn render(&self, _field: &NormalizedField, _value: Option<&serde_json::Value>) -> String {
			String::new()
		}
	}

	#[test]
	fn test_register_and_freeze() {
		let mut registry = FieldTypeRegistry::new();
		registry.register("noop", Arc::new(NoopRenderer)).unwrap();
		assert!(registry.register("noop", Arc::new(NoopRenderer)).is_err());

		let frozen = registry.freeze();
		assert!(frozen.contains("noop"));
		assert!(!frozen.contains("text"));
		assert_eq!(frozen.len(), 1);
	}

	#[test]
	fn test_builtins_present() {
		let frozen = FieldTypeRegistry::with_builtins().freeze();
		for typ in ["text", "textarea", "select", "checkbox", "radio", "content"] {
			assert!(frozen.contains(typ), "missing builtin: {}", typ);
		}
	}
}

// vim: ts=4
