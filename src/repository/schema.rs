// ==========================================
// Apiary Monitor - Schema initialization
// ==========================================
// Idempotent: CREATE TABLE IF NOT EXISTS for the three tables,
// executed inside one transaction. On failure the transaction
// rolls back and prior state is untouched.
// ==========================================

use crate::db::CURRENT_SCHEMA_VERSION;
use crate::repository::error::RepositoryResult;
use rusqlite::Connection;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version    INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS hives (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    code          TEXT NOT NULL UNIQUE,
    install_date  TEXT NOT NULL,
    location      TEXT NOT NULL,
    status        TEXT NOT NULL DEFAULT 'active'
);

CREATE TABLE IF NOT EXISTS inspections (
    id                INTEGER PRIMARY KEY AUTOINCREMENT,
    hive_id           INTEGER NOT NULL,
    inspection_date   TEXT NOT NULL,
    temperature       REAL,
    humidity          REAL,
    pest_presence     INTEGER NOT NULL DEFAULT 0,
    general_condition TEXT,
    notes             TEXT,
    FOREIGN KEY (hive_id) REFERENCES hives (id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_inspections_hive
    ON inspections(hive_id, inspection_date DESC);

CREATE TABLE IF NOT EXISTS production_records (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    hive_id          INTEGER NOT NULL,
    collection_date  TEXT NOT NULL,
    honey_quantity   REAL NOT NULL,
    quality          TEXT,
    FOREIGN KEY (hive_id) REFERENCES hives (id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_production_hive
    ON production_records(hive_id, collection_date DESC);

INSERT OR IGNORE INTO schema_version (version) VALUES (1);
"#;

/// Create-if-absent the apiary schema.
///
/// Safe to call on every startup; an already-initialized database is left
/// as it was. Dates are stored as ISO `YYYY-MM-DD` text so lexicographic
/// comparison matches date order. Cascade deletion is declared here and
/// enforced by SQLite (requires `PRAGMA foreign_keys = ON`, applied by
/// `db::configure_connection`).
pub fn init_schema(conn: &mut Connection) -> RepositoryResult<()> {
    let tx = conn.transaction()?;
    tx.execute_batch(SCHEMA_SQL)?;
    tx.commit()?;

    if let Ok(Some(v)) = crate::db::read_schema_version(conn) {
        if v != CURRENT_SCHEMA_VERSION {
            tracing::warn!(
                installed = v,
                expected = CURRENT_SCHEMA_VERSION,
                "schema version mismatch; no automatic migration is performed"
            );
        }
    }

    Ok(())
}
