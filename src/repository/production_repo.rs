// ==========================================
// Apiary Monitor - Production repository
// ==========================================
// Manages the `production_records` table, plus the read model
// feeding the production chart (full history joined to hive
// codes, collection date ascending).
// ==========================================

use crate::domain::production::ProductionRecord;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

/// One point of the production history, keyed by hive code.
///
/// Input row of the chart renderer; never exposed raw to callers of the
/// service boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionSample {
    pub hive_code: String,
    pub collection_date: NaiveDate,
    pub honey_quantity: f64,
}

/// Production record repository
pub struct ProductionRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ProductionRepository {
    /// Create a repository over an existing shared connection.
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Insert a new production record.
    ///
    /// # Returns
    /// - Ok(id): surrogate key of the inserted row
    /// - Err(ForeignKeyViolation): `hive_id` references no hive
    pub fn insert(
        &self,
        hive_id: i64,
        collection_date: NaiveDate,
        honey_quantity: f64,
        quality: Option<&str>,
    ) -> RepositoryResult<i64> {
        let mut conn = self.get_conn()?;
        let tx = conn.transaction()?;
        tx.execute(
            r#"
            INSERT INTO production_records (hive_id, collection_date, honey_quantity, quality)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![hive_id, collection_date.to_string(), honey_quantity, quality],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
    }

    /// All production records of one hive, most recent first.
    pub fn find_by_hive(&self, hive_id: i64) -> RepositoryResult<Vec<ProductionRecord>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, hive_id, collection_date, honey_quantity, quality
            FROM production_records
            WHERE hive_id = ?1
            ORDER BY collection_date DESC
            "#,
        )?;

        let rows = stmt.query_map(params![hive_id], map_production_row)?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// Full production history joined to hive codes, oldest first.
    ///
    /// Feeds the chart renderer: one series per distinct hive code.
    pub fn find_history_with_hive_code(&self) -> RepositoryResult<Vec<ProductionSample>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT h.code, p.collection_date, p.honey_quantity
            FROM production_records p
            JOIN hives h ON p.hive_id = h.id
            ORDER BY p.collection_date ASC, h.code ASC
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(ProductionSample {
                hive_code: row.get(0)?,
                collection_date: NaiveDate::parse_from_str(&row.get::<_, String>(1)?, "%Y-%m-%d")
                    .unwrap_or_else(|_| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()),
                honey_quantity: row.get(2)?,
            })
        })?;

        let mut samples = Vec::new();
        for row in rows {
            samples.push(row?);
        }
        Ok(samples)
    }
}

fn map_production_row(row: &Row) -> rusqlite::Result<ProductionRecord> {
    Ok(ProductionRecord {
        id: row.get(0)?,
        hive_id: row.get(1)?,
        collection_date: NaiveDate::parse_from_str(&row.get::<_, String>(2)?, "%Y-%m-%d")
            .unwrap_or_else(|_| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()),
        honey_quantity: row.get(3)?,
        quality: row.get(4)?,
    })
}
