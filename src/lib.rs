// ==========================================
// Apiary Monitor - Core library
// ==========================================
// Beekeeping operations tracker: hive registry, periodic
// inspections, honey production records, staleness alerts and
// a per-hive production report.
// Stack: Rust + SQLite
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities
pub mod domain;

// Data repository layer - data access
pub mod repository;

// API layer - service boundary
pub mod api;

// Report layer - chart artifacts
pub mod report;

// Configuration
pub mod config;

// Database infrastructure (connection setup / uniform PRAGMAs)
pub mod db;

// Logging
pub mod logging;

// ==========================================
// Re-export core types
// ==========================================

// Domain entities
pub use domain::{Hive, Inspection, ProductionRecord};

// Repositories
pub use repository::{
    AlertRepository, HiveAlert, HiveRepository, InspectionRepository, ProductionRepository,
    RepositoryError, RepositoryResult,
};

// API
pub use api::ApiaryApi;

// Configuration
pub use config::MonitorConfig;

// Report
pub use report::ProductionChartRenderer;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
