//! Core infrastructure for the OptionPanel admin settings toolkit.
//!
//! A panel is described declaratively as a tree of pages, sections, and
//! fields. This crate validates and normalizes that tree, registers one
//! persisted option record per section (seeding absent records with field
//! defaults), and renders the tabbed navigation and form markup for the
//! page selected by the request. Storage stays behind the `OptionAdapter`
//! trait from `optionpanel-types`.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod field;
pub mod hooks;
pub mod html;
pub mod notices;
pub mod prelude;
pub mod registrar;
pub mod render;
pub mod request;
pub mod service;
pub mod tree;

// Re-export commonly used types
pub use field::{FieldRenderer, FieldTypeRegistry, FrozenFieldTypeRegistry, NormalizedField};
pub use hooks::PanelHooks;
pub use notices::{Notice, NoticeLevel, Notices};
pub use request::RequestContext;
pub use service::{Panel, PanelOpts, PanelState};
pub use tree::{Field, Page, PageTree, Section, SubmitButton};

// vim: ts=4
