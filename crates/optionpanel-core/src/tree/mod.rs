//! Declarative settings tree: pages contain sections, sections contain
//! fields, and each section maps 1:1 to one persisted option record.
//!
//! - **Types** (`types.rs`): tree entities and their builders
//! - **Model** (`model.rs`): the owned, id-indexed tree with mutators

pub mod model;
pub mod types;

pub use model::PageTree;
pub use types::{Field, Page, Section, SectionValidator, SubmitButton};

// vim: ts=4
