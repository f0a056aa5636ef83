// ==========================================
// Apiary Monitor - Inspection entity
// ==========================================
// Immutable once created; removed only by cascade when the
// owning hive is deleted.
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Periodic hive inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inspection {
    pub id: i64,
    pub hive_id: i64,                // owning hive (FK)
    pub inspection_date: NaiveDate,  // defaults to creation date
    pub temperature: Option<f64>,    // °C
    pub humidity: Option<f64>,       // relative %
    pub pest_presence: bool,
    pub general_condition: Option<String>,
    pub notes: Option<String>,
}
