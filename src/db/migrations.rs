// src/db/migrations.rs
//
// Marketing database schema
//
// The schema is versioned in `schema_version`. A fresh file gets the
// embedded schema; a known version is left alone; anything else is refused.

use log::info;
use rusqlite::Connection;

use crate::error::{AppError, AppResult};

const CURRENT_SCHEMA_VERSION: i32 = 1;

const SCHEMA_V1: &str = include_str!("../../schema.sql");

/// Bring a database up to the current schema. Safe to call repeatedly.
pub fn initialize_database(conn: &Connection) -> AppResult<()> {
    match get_schema_version(conn)? {
        0 => {
            conn.execute_batch(SCHEMA_V1)
                .map_err(|e| AppError::Other(format!("Failed to apply initial schema: {}", e)))?;
            set_schema_version(conn, CURRENT_SCHEMA_VERSION)?;
            info!("Applied marketing schema v{}", CURRENT_SCHEMA_VERSION);
            Ok(())
        }
        CURRENT_SCHEMA_VERSION => Ok(()),
        version if version > CURRENT_SCHEMA_VERSION => Err(AppError::Other(format!(
            "Schema version {} is newer than supported {}. Update the application.",
            version, CURRENT_SCHEMA_VERSION
        ))),
        version => Err(AppError::Other(format!(
            "Schema version {} is outdated. Expected {}. Manual migration required.",
            version, CURRENT_SCHEMA_VERSION
        ))),
    }
}

/// 0 when the database has never been initialized
fn get_schema_version(conn: &Connection) -> AppResult<i32> {
    let table_exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !table_exists {
        return Ok(0);
    }

    let version: Option<i32> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;

    Ok(version.unwrap_or(0))
}

fn set_schema_version(conn: &Connection, version: i32) -> AppResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
        [version],
    )?;
    Ok(())
}

/// Run SQLite's integrity check
pub fn verify_database_integrity(conn: &Connection) -> AppResult<()> {
    let result: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

    if result != "ok" {
        return Err(AppError::Other(format!("Database integrity check failed: {}", result)));
    }

    Ok(())
}

/// Size and row counts of the marketing database
pub fn get_database_stats(conn: &Connection) -> AppResult<DatabaseStats> {
    let page_count: i64 = conn.query_row("PRAGMA page_count", [], |row| row.get(0))?;
    let page_size: i64 = conn.query_row("PRAGMA page_size", [], |row| row.get(0))?;

    Ok(DatabaseStats {
        size_bytes: page_count * page_size,
        page_count,
        page_size,
        show_count: count_rows(conn, "shows")?,
        booking_count: count_rows(conn, "bookings")?,
        campaign_count: count_rows(conn, "marketing_campaigns")?,
    })
}

fn count_rows(conn: &Connection, table: &str) -> AppResult<i64> {
    let count = conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))?;
    Ok(count)
}

#[derive(Debug)]
pub struct DatabaseStats {
    pub size_bytes: i64,
    pub page_count: i64,
    pub page_size: i64,
    pub show_count: i64,
    pub booking_count: i64,
    pub campaign_count: i64,
}
