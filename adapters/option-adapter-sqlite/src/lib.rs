//! SQLite-backed implementation of the option store.
//!
//! Records live in one table, one row per option key, JSON-encoded. The
//! schema is created on first connect so the adapter works against a
//! fresh database file.

use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};

use optionpanel::prelude::*;

mod option;
mod schema;

#[derive(Debug)]
pub struct OptionAdapterSqlite {
	db: SqlitePool,
}

impl OptionAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> OpResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.or(Err(Error::DbError))?;

		schema::init_db(&db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.or(Err(Error::DbError))?;

		Ok(Self { db })
	}
}

#[async_trait]
impl OptionAdapter for OptionAdapterSqlite {
	async fn read_option(&self, key: &str) -> OpResult<Option<OptionValues>> {
		option::read(&self.db, key).await
	}

	async fn create_option(&self, key: &str, values: &OptionValues) -> OpResult<bool> {
		option::create(&self.db, key, values).await
	}

	async fn write_option(&self, key: &str, values: &OptionValues) -> OpResult<()> {
		option::write(&self.db, key, values).await
	}

	async fn delete_option(&self, key: &str) -> OpResult<()> {
		option::delete(&self.db, key).await
	}
}

// vim: ts=4
