//! Panel service: validation, registration, and seeded storage access.
//!
//! `Panel::init` is the once-per-request entry point. It validates the
//! tree, resolves the current page from the request context, flattens the
//! tree into registration records, seeds absent option records with field
//! defaults, and snapshots the current page's records for rendering.

use lru::LruCache;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::field::{FieldTypeRegistry, FrozenFieldTypeRegistry, Normalizer, DEFAULT_LABEL_FOR};
use crate::hooks::PanelHooks;
use crate::notices::Notices;
use crate::prelude::*;
use crate::registrar::{self, Registration};
use crate::request::RequestContext;
use crate::tree::{Page, PageTree};

/// Form post endpoint served by the host.
pub const FORM_ACTION: &str = "options.php";

const DEFAULT_CACHE_SIZE: usize = 64;

#[derive(Debug, Clone)]
pub struct PanelOpts {
	/// Namespace prefixed to every option and form key. Doubles as the
	/// admin screen id that script enqueueing is gated on.
	pub namespace: Box<str>,
	/// Base URL tab links are built against.
	pub base_url: Box<str>,
	/// Endpoint the rendered forms post to.
	pub form_action: Box<str>,
	/// Capacity of the option read cache.
	pub cache_size: usize,
}

impl PanelOpts {
	pub fn new(namespace: impl Into<Box<str>>) -> Self {
		Self {
			namespace: namespace.into(),
			base_url: Box::default(),
			form_action: FORM_ACTION.into(),
			cache_size: DEFAULT_CACHE_SIZE,
		}
	}

	pub fn base_url(mut self, base_url: impl Into<Box<str>>) -> Self {
		self.base_url = base_url.into();
		self
	}

	pub fn form_action(mut self, form_action: impl Into<Box<str>>) -> Self {
		self.form_action = form_action.into();
		self
	}

	pub fn cache_size(mut self, cache_size: usize) -> Self {
		self.cache_size = cache_size;
		self
	}
}

/// Decided once in `init`, never re-evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
	Valid,
	/// Configuration errors were found; rendering is suppressed and the
	/// diagnostics stay readable through `Panel::debug`.
	Invalid,
}

/// LRU cache for option records.
pub(crate) struct OptionCache {
	cache: parking_lot::RwLock<LruCache<Box<str>, OptionValues>>,
}

impl OptionCache {
	fn new(capacity: usize) -> Self {
		let capacity = match NonZeroUsize::new(capacity) {
			Some(capacity) => capacity,
			None => NonZeroUsize::MIN,
		};
		Self { cache: parking_lot::RwLock::new(LruCache::new(capacity)) }
	}

	fn get(&self, key: &str) -> Option<OptionValues> {
		self.cache.write().get(key).cloned()
	}

	fn put(&self, key: Box<str>, values: OptionValues) {
		self.cache.write().put(key, values);
	}

	fn remove(&self, key: &str) {
		self.cache.write().pop(key);
	}
}

pub struct Panel {
	pub(crate) opts: PanelOpts,
	pub(crate) tree: PageTree,
	pub(crate) state: PanelState,
	pub(crate) debug: String,
	pub(crate) hooks: PanelHooks,
	pub(crate) renderers: FrozenFieldTypeRegistry,
	pub(crate) adapter: Arc<dyn OptionAdapter>,
	pub(crate) cache: OptionCache,
	pub(crate) registration: Registration,
	pub(crate) current_page_id: Option<Box<str>>,
	/// Option records of the current page, snapshotted for rendering.
	pub(crate) page_values: parking_lot::RwLock<HashMap<Box<str>, OptionValues>>,
}

impl Panel {
	/// Validates the tree and registers every section. Configuration
	/// problems do not error: they flip the panel to `Invalid` and stay
	/// readable through [`Panel::debug`]. Only storage failures error.
	pub async fn init(
		tree: PageTree,
		opts: PanelOpts,
		adapter: Arc<dyn OptionAdapter>,
		hooks: PanelHooks,
		renderers: FieldTypeRegistry,
		ctx: &RequestContext,
	) -> OpResult<Self> {
		let mut debug = String::new();
		if opts.namespace.trim().is_empty() {
			debug.push_str("Error: no namespace provided\n");
		}
		if tree.is_empty() {
			debug.push_str("Error: no settings pages provided\n");
		}
		if renderers.is_empty() {
			debug.push_str("Error: no field renderers registered\n");
		}

		// External overrides get the last word on the diagnostics.
		let mut debug = hooks.filter_debug(debug, tree.pages());
		let renderers = renderers.freeze();

		if !debug.is_empty() {
			let trimmed_debug = debug.trim_end();
			warn!("panel '{}' failed validation: {}", opts.namespace, trimmed_debug);
			let cache = OptionCache::new(opts.cache_size);
			return Ok(Self {
				opts,
				tree,
				state: PanelState::Invalid,
				debug,
				hooks,
				renderers,
				adapter,
				cache,
				registration: Registration::default(),
				current_page_id: None,
				page_values: parking_lot::RwLock::new(HashMap::new()),
			});
		}

		let label_for =
			hooks.filter_label_for(DEFAULT_LABEL_FOR.iter().map(|t| Box::from(*t)).collect());
		let script_types = hooks.filter_script_types(Vec::new());
		let current_page_id = tree.current_page(ctx).map(|p| p.id.clone());

		let normalizer = Normalizer::new(&label_for, &script_types, &renderers);
		let registration =
			registrar::build(&tree, &opts.namespace, current_page_id.as_deref(), &normalizer);

		if !registration.current_keys.is_empty() {
			debug.push_str("Database option(s) created for this page:\n");
			for key in &registration.current_keys {
				debug.push_str("database option: ");
				debug.push_str(key);
				debug.push('\n');
			}
		}

		// Seed absent records with field defaults. Existing records are
		// owned by the storage layer and never overwritten.
		for option in &registration.options {
			if adapter.create_option(&option.option_key, &option.seed).await? {
				info!("option '{}' created with defaults", option.option_key);
			}
		}

		let mut page_values = HashMap::new();
		for section in &registration.sections {
			if Some(section.page_id.as_ref()) != current_page_id.as_deref() {
				continue;
			}
			if let Some(values) = adapter.read_option(&section.option_key).await? {
				page_values.insert(section.option_key.clone(), values);
			}
		}

		if !registration.scripts.is_empty()
			&& ctx.screen.as_deref() == Some(opts.namespace.as_ref())
		{
			debug!("enqueueing scripts for '{}': {:?}", opts.namespace, registration.scripts);
			hooks.notify_scripts(&registration.scripts);
		}

		let cache = OptionCache::new(opts.cache_size);
		Ok(Self {
			opts,
			tree,
			state: PanelState::Valid,
			debug,
			hooks,
			renderers,
			adapter,
			cache,
			registration,
			current_page_id,
			page_values: parking_lot::RwLock::new(page_values),
		})
	}

	pub fn state(&self) -> PanelState {
		self.state
	}

	pub fn is_valid(&self) -> bool {
		self.state == PanelState::Valid
	}

	/// Diagnostic text: configuration errors and the option keys touched
	/// for the current page. Meant for display during development.
	pub fn debug(&self) -> &str {
		&self.debug
	}

	pub fn namespace(&self) -> &str {
		&self.opts.namespace
	}

	pub fn tree(&self) -> &PageTree {
		&self.tree
	}

	/// The page resolved from the request context at init time.
	pub fn current_page(&self) -> Option<&Page> {
		self.current_page_id.as_deref().and_then(|id| self.tree.page(id))
	}

	pub fn registration(&self) -> &Registration {
		&self.registration
	}

	async fn read_option_cached(&self, key: &str) -> OpResult<Option<OptionValues>> {
		if let Some(values) = self.cache.get(key) {
			debug!("option cache hit: {}", key);
			return Ok(Some(values));
		}
		let values = self.adapter.read_option(key).await?;
		if let Some(values) = &values {
			self.cache.put(Box::from(key), values.clone());
		}
		Ok(values)
	}

	/// Stored mappings for every section in the tree that has a record,
	/// keyed by section id with the section id marker stripped.
	pub async fn settings(&self) -> OpResult<HashMap<Box<str>, OptionValues>> {
		let mut settings = HashMap::new();
		for page in self.tree.pages() {
			for section in &page.sections {
				let key = registrar::option_key(&self.opts.namespace, &section.id);
				if let Some(mut values) = self.read_option_cached(&key).await? {
					values.remove(SECTION_ID_KEY);
					settings.insert(section.id.clone(), values);
				}
			}
		}
		Ok(settings)
	}

	/// One section's stored mapping, marker stripped. `None` when the
	/// section has no stored record.
	pub async fn section_settings(&self, section_id: &str) -> OpResult<Option<OptionValues>> {
		let key = registrar::option_key(&self.opts.namespace, section_id);
		let mut values = self.read_option_cached(&key).await?;
		if let Some(values) = &mut values {
			values.remove(SECTION_ID_KEY);
		}
		Ok(values)
	}

	/// Runs the section's validation callback over submitted values and
	/// persists the result. Notices recorded by the callback do not abort
	/// the save. Returns the saved mapping.
	pub async fn save_section(
		&self,
		section_id: &str,
		values: OptionValues,
		notices: &mut Notices,
	) -> OpResult<OptionValues> {
		let option = self
			.registration
			.options
			.iter()
			.find(|o| o.section_id.as_ref() == section_id)
			.ok_or(Error::NotFound)?;

		let values = match &option.validator {
			Some(validator) => validator(values, notices),
			None => values,
		};

		self.adapter.write_option(&option.option_key, &values).await?;
		self.cache.remove(&option.option_key);
		self.page_values.write().insert(option.option_key.clone(), values.clone());

		info!("option '{}' saved", option.option_key);
		Ok(values)
	}
}

// vim: ts=4
