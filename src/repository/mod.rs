// ==========================================
// Apiary Monitor - Data repository layer
// ==========================================
// Responsibility: data access behind typed entities; callers
// never see raw rows or raw statements.
// Constraint: parameterized queries only.
// ==========================================

pub mod alert_repo;
pub mod error;
pub mod hive_repo;
pub mod inspection_repo;
pub mod production_repo;
pub mod schema;

// Re-export core repositories
pub use alert_repo::{AlertRepository, HiveAlert};
pub use error::{RepositoryError, RepositoryResult};
pub use hive_repo::HiveRepository;
pub use inspection_repo::InspectionRepository;
pub use production_repo::{ProductionRepository, ProductionSample};
