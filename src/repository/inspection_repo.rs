// ==========================================
// Apiary Monitor - Inspection repository
// ==========================================
// Manages the `inspections` table. Inspections are immutable;
// there is no update path. Writes referencing a missing hive
// surface as ForeignKeyViolation (enforced by the store, not
// by a pre-check SELECT).
// ==========================================

use crate::domain::inspection::Inspection;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

/// Inspection repository
pub struct InspectionRepository {
    conn: Arc<Mutex<Connection>>,
}

impl InspectionRepository {
    /// Create a repository over an existing shared connection.
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Insert a new inspection.
    ///
    /// # Returns
    /// - Ok(id): surrogate key of the inserted row
    /// - Err(ForeignKeyViolation): `hive_id` references no hive
    #[allow(clippy::too_many_arguments)]
    pub fn insert(
        &self,
        hive_id: i64,
        inspection_date: NaiveDate,
        temperature: Option<f64>,
        humidity: Option<f64>,
        pest_presence: bool,
        general_condition: Option<&str>,
        notes: Option<&str>,
    ) -> RepositoryResult<i64> {
        let mut conn = self.get_conn()?;
        let tx = conn.transaction()?;
        tx.execute(
            r#"
            INSERT INTO inspections (
                hive_id, inspection_date, temperature, humidity,
                pest_presence, general_condition, notes
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                hive_id,
                inspection_date.to_string(),
                temperature,
                humidity,
                pest_presence,
                general_condition,
                notes,
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
    }

    /// All inspections of one hive, most recent first.
    pub fn find_by_hive(&self, hive_id: i64) -> RepositoryResult<Vec<Inspection>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, hive_id, inspection_date, temperature, humidity,
                   pest_presence, general_condition, notes
            FROM inspections
            WHERE hive_id = ?1
            ORDER BY inspection_date DESC
            "#,
        )?;

        let rows = stmt.query_map(params![hive_id], map_inspection_row)?;
        let mut inspections = Vec::new();
        for row in rows {
            inspections.push(row?);
        }
        Ok(inspections)
    }
}

fn map_inspection_row(row: &Row) -> rusqlite::Result<Inspection> {
    Ok(Inspection {
        id: row.get(0)?,
        hive_id: row.get(1)?,
        inspection_date: NaiveDate::parse_from_str(&row.get::<_, String>(2)?, "%Y-%m-%d")
            .unwrap_or_else(|_| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()),
        temperature: row.get(3)?,
        humidity: row.get(4)?,
        pest_presence: row.get(5)?,
        general_condition: row.get(6)?,
        notes: row.get(7)?,
    })
}
