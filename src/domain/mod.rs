// ==========================================
// Apiary Monitor - Domain model layer
// ==========================================
// Defines the persisted entities. No data access logic here;
// repositories construct these at the query boundary.
// ==========================================

pub mod hive;
pub mod inspection;
pub mod production;

// Re-export core entities
pub use hive::{Hive, STATUS_ACTIVE};
pub use inspection::Inspection;
pub use production::ProductionRecord;
