// ==========================================
// Apiary Monitor - Hive entity
// ==========================================
// Maps 1:1 to the `hives` table; constructed only at the
// repository boundary so no raw row shape leaks upward.
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Registered hive.
///
/// `code` is globally unique across the apiary; `status` is free text
/// ("active" on registration).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hive {
    pub id: i64,                 // surrogate key (SQLite rowid)
    pub code: String,            // unique hive code, e.g. "H1"
    pub install_date: NaiveDate, // defaults to registration date
    pub location: String,
    pub status: String,          // free text, defaults to "active"
}

/// Status assigned to a hive on registration.
pub const STATUS_ACTIVE: &str = "active";
