// ==========================================
// Test helpers
// ==========================================
// Temp database creation plus raw seeding for rows with
// explicit historical dates (the public API always writes
// "today").
// ==========================================

use chrono::NaiveDate;
use rusqlite::{params, Connection};
use std::error::Error;
use tempfile::NamedTempFile;

/// Create a temp database file path.
///
/// # Returns
/// - NamedTempFile: keep it alive for the duration of the test
/// - String: the database path
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file.path().to_str().unwrap().to_string();
    Ok((temp_file, db_path))
}

/// Open a raw connection to an existing test database.
pub fn open_test_connection(db_path: &str) -> Result<Connection, Box<dyn Error>> {
    let conn = apiary_monitor::db::open_connection(db_path)?;
    Ok(conn)
}

/// Insert an inspection dated in the past, bypassing the API.
#[allow(dead_code)]
pub fn seed_inspection_on(
    conn: &Connection,
    hive_id: i64,
    date: NaiveDate,
) -> Result<(), Box<dyn Error>> {
    conn.execute(
        r#"
        INSERT INTO inspections (hive_id, inspection_date, temperature, humidity, pest_presence)
        VALUES (?1, ?2, 25.0, 55.0, 0)
        "#,
        params![hive_id, date.to_string()],
    )?;
    Ok(())
}

/// Insert a production record dated in the past, bypassing the API.
#[allow(dead_code)]
pub fn seed_production_on(
    conn: &Connection,
    hive_id: i64,
    date: NaiveDate,
    honey_quantity: f64,
) -> Result<(), Box<dyn Error>> {
    conn.execute(
        r#"
        INSERT INTO production_records (hive_id, collection_date, honey_quantity, quality)
        VALUES (?1, ?2, ?3, 'standard')
        "#,
        params![hive_id, date.to_string(), honey_quantity],
    )?;
    Ok(())
}

/// Row count of an apiary table.
#[allow(dead_code)]
pub fn count_rows(conn: &Connection, table: &str) -> i64 {
    // table name comes from the test itself, not from input
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
        .unwrap()
}
