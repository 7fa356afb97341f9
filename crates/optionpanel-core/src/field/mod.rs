//! Field normalization and render strategy dispatch.
//!
//! - **Types** (`types.rs`): the normalized attribute set
//! - **Normalize** (`normalize.rs`): defaults merge, label targets, script flags
//! - **Registry** (`registry.rs`): type tag to renderer lookup
//! - **Builtin** (`builtin.rs`): the built-in rendering strategies

pub mod builtin;
pub mod normalize;
pub mod registry;
pub mod types;

pub use normalize::Normalizer;
pub use registry::{FieldRenderer, FieldTypeRegistry, FrozenFieldTypeRegistry};
pub use types::{NormalizedField, DEFAULT_LABEL_FOR, EXTRA_FIELD_TYPE};

// vim: ts=4
