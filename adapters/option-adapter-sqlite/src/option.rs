//! Option record storage
//!
//! One row per option key, the record JSON-encoded in the value column.

use sqlx::{Row, SqlitePool};

use optionpanel::prelude::*;

fn encode(values: &OptionValues) -> OpResult<String> {
	serde_json::to_string(values)
		.map_err(|err| Error::Internal(format!("failed to serialize option: {}", err)))
}

/// Read a single option record by name
pub(crate) async fn read(db: &SqlitePool, name: &str) -> OpResult<Option<OptionValues>> {
	let row = sqlx::query("SELECT value FROM options WHERE name = ?")
		.bind(name)
		.fetch_optional(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(row.and_then(|r| {
		let value: Option<String> = r.get("value");
		value.and_then(|v| serde_json::from_str(&v).ok())
	}))
}

/// Create the record only when the name is not taken yet
pub(crate) async fn create(db: &SqlitePool, name: &str, values: &OptionValues) -> OpResult<bool> {
	let res = sqlx::query("INSERT OR IGNORE INTO options (name, value) VALUES (?, ?)")
		.bind(name)
		.bind(encode(values)?)
		.execute(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(res.rows_affected() > 0)
}

/// Create or replace the record
pub(crate) async fn write(db: &SqlitePool, name: &str, values: &OptionValues) -> OpResult<()> {
	sqlx::query("INSERT OR REPLACE INTO options (name, value) VALUES (?, ?)")
		.bind(name)
		.bind(encode(values)?)
		.execute(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(())
}

/// Remove the record if present
pub(crate) async fn delete(db: &SqlitePool, name: &str) -> OpResult<()> {
	sqlx::query("DELETE FROM options WHERE name = ?")
		.bind(name)
		.execute(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(())
}

// vim: ts=4
