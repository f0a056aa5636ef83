// ==========================================
// Apiary Monitor - Hive repository
// ==========================================
// Manages the `hives` table. Data access only, no business
// logic; every write is one explicit transaction.
// ==========================================

use crate::domain::hive::Hive;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::{Arc, Mutex};

/// Hive repository
pub struct HiveRepository {
    conn: Arc<Mutex<Connection>>,
}

impl HiveRepository {
    /// Create a repository over an existing shared connection.
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Insert a new hive.
    ///
    /// # Returns
    /// - Ok(id): surrogate key of the inserted row
    /// - Err(UniqueConstraintViolation): `code` already registered
    pub fn insert(
        &self,
        code: &str,
        location: &str,
        install_date: NaiveDate,
        status: &str,
    ) -> RepositoryResult<i64> {
        let mut conn = self.get_conn()?;
        let tx = conn.transaction()?;
        tx.execute(
            r#"
            INSERT INTO hives (code, install_date, location, status)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![code, install_date.to_string(), location, status],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
    }

    /// All hives, ordered by code ascending.
    pub fn find_all(&self) -> RepositoryResult<Vec<Hive>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, code, install_date, location, status
            FROM hives
            ORDER BY code ASC
            "#,
        )?;

        let rows = stmt.query_map([], map_hive_row)?;
        let mut hives = Vec::new();
        for row in rows {
            hives.push(row?);
        }
        Ok(hives)
    }

    /// Lookup by surrogate key.
    pub fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Hive>> {
        let conn = self.get_conn()?;
        conn.query_row(
            r#"
            SELECT id, code, install_date, location, status
            FROM hives
            WHERE id = ?1
            "#,
            params![id],
            map_hive_row,
        )
        .optional()
        .map_err(|e| e.into())
    }

    /// Delete a hive by id.
    ///
    /// The statement touches only `hives`; dependent inspections and
    /// production records are removed by the store's ON DELETE CASCADE
    /// within the same transaction.
    ///
    /// # Returns
    /// - Ok(rows): number of hive rows deleted (0 = no such id)
    pub fn delete(&self, id: i64) -> RepositoryResult<usize> {
        let mut conn = self.get_conn()?;
        let tx = conn.transaction()?;
        let rows = tx.execute("DELETE FROM hives WHERE id = ?1", params![id])?;
        tx.commit()?;
        Ok(rows)
    }
}

fn map_hive_row(row: &Row) -> rusqlite::Result<Hive> {
    Ok(Hive {
        id: row.get(0)?,
        code: row.get(1)?,
        install_date: NaiveDate::parse_from_str(&row.get::<_, String>(2)?, "%Y-%m-%d")
            .unwrap_or_else(|_| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()),
        location: row.get(3)?,
        status: row.get(4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::schema;
    use chrono::Local;

    fn setup_repo() -> HiveRepository {
        let mut conn = Connection::open_in_memory().unwrap();
        crate::db::configure_connection(&conn).unwrap();
        schema::init_schema(&mut conn).unwrap();
        HiveRepository::from_connection(Arc::new(Mutex::new(conn)))
    }

    #[test]
    fn test_insert_and_find_by_id() {
        let repo = setup_repo();
        let today = Local::now().date_naive();

        let id = repo.insert("H1", "Apiary A", today, "active").unwrap();
        let hive = repo.find_by_id(id).unwrap().unwrap();

        assert_eq!(hive.code, "H1");
        assert_eq!(hive.location, "Apiary A");
        assert_eq!(hive.install_date, today);
        assert_eq!(hive.status, "active");
    }

    #[test]
    fn test_duplicate_code_is_unique_violation() {
        let repo = setup_repo();
        let today = Local::now().date_naive();

        repo.insert("H1", "Apiary A", today, "active").unwrap();
        let err = repo.insert("H1", "Apiary B", today, "active").unwrap_err();

        assert!(matches!(err, RepositoryError::UniqueConstraintViolation(_)));
        assert_eq!(repo.find_all().unwrap().len(), 1);
    }

    #[test]
    fn test_find_all_sorted_by_code() {
        let repo = setup_repo();
        let today = Local::now().date_naive();

        repo.insert("B1", "south field", today, "active").unwrap();
        repo.insert("A1", "north field", today, "active").unwrap();

        let codes: Vec<String> = repo.find_all().unwrap().into_iter().map(|h| h.code).collect();
        assert_eq!(codes, vec!["A1".to_string(), "B1".to_string()]);
    }

    #[test]
    fn test_delete_missing_id_affects_zero_rows() {
        let repo = setup_repo();
        assert_eq!(repo.delete(42).unwrap(), 0);
    }
}
