// ==========================================
// Apiary Monitor - Production record entity
// ==========================================
// Immutable once created; removed only by cascade when the
// owning hive is deleted.
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Honey collection record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRecord {
    pub id: i64,
    pub hive_id: i64,               // owning hive (FK)
    pub collection_date: NaiveDate, // defaults to creation date
    pub honey_quantity: f64,        // kg
    pub quality: Option<String>,    // free text grade
}
