// ==========================================
// Apiary Monitor - SQLite connection setup
// ==========================================
// Goal:
// - One place for Connection::open + PRAGMA behavior, so no module ends
//   up with foreign keys enforced while another silently skips them
// - Uniform busy_timeout to absorb occasional writer contention
// ==========================================

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use std::time::Duration;

/// Default busy_timeout (milliseconds)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Schema revision the current code expects.
///
/// Used for warnings only; there is no automatic migration. The value is
/// stamped into `schema_version` by `repository::schema::init_schema`.
pub const CURRENT_SCHEMA_VERSION: i64 = 1;

/// Apply the uniform PRAGMA set to a connection.
///
/// - foreign_keys must be enabled per connection; cascade deletion of
///   inspections and production records depends on it
/// - busy_timeout must be configured per connection
pub fn configure_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Open a SQLite connection with the uniform configuration applied.
pub fn open_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_connection(&conn)?;
    Ok(conn)
}

/// Read the installed schema version (None if the table does not exist).
pub fn read_schema_version(conn: &Connection) -> rusqlite::Result<Option<i64>> {
    let has_table: bool = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version' LIMIT 1",
            [],
            |_row| Ok(true),
        )
        .optional()?
        .unwrap_or(false);

    if !has_table {
        return Ok(None);
    }

    let v: Option<i64> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
    Ok(v)
}
