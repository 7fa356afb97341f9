//! Database schema initialization
//!
//! Creates the options table on first use so the adapter works against a
//! fresh database file.

use sqlx::SqlitePool;

/// Initialize the database schema
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Options
	//*********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS options (
		name text NOT NULL,
		value text,
		PRIMARY KEY(name)
	)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
