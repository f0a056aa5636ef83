// ==========================================
// Apiary Monitor - Staleness alert repository
// ==========================================
// Read model: "which hives have gone too long without an
// inspection". One LEFT JOIN + GROUP BY; a hive with no
// inspections at all always qualifies.
// ==========================================

use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// One alerting hive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiveAlert {
    pub hive_code: String,
    /// Most recent inspection date; None when the hive was never inspected.
    pub last_inspection: Option<NaiveDate>,
}

/// Staleness alert repository
pub struct AlertRepository {
    conn: Arc<Mutex<Connection>>,
}

impl AlertRepository {
    /// Create a repository over an existing shared connection.
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Hives whose most recent inspection is strictly earlier than
    /// `threshold_date`, or which were never inspected.
    ///
    /// # Arguments
    /// - `threshold_date`: cutoff (typically today minus the configured
    ///   staleness window); an inspection dated exactly on the cutoff
    ///   does not alert
    ///
    /// # Returns
    /// Alerting hives ordered by code; empty when nothing qualifies.
    pub fn find_stale_hives(&self, threshold_date: NaiveDate) -> RepositoryResult<Vec<HiveAlert>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT h.code, MAX(i.inspection_date) AS last_inspection
            FROM hives h
            LEFT JOIN inspections i ON i.hive_id = h.id
            GROUP BY h.id, h.code
            HAVING MAX(i.inspection_date) < ?1 OR MAX(i.inspection_date) IS NULL
            ORDER BY h.code ASC
            "#,
        )?;

        let rows = stmt.query_map(params![threshold_date.to_string()], |row| {
            let last: Option<String> = row.get(1)?;
            Ok(HiveAlert {
                hive_code: row.get(0)?,
                last_inspection: last
                    .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()),
            })
        })?;

        let mut alerts = Vec::new();
        for row in rows {
            alerts.push(row?);
        }
        Ok(alerts)
    }
}
