// ==========================================
// Apiary Monitor - Service API
// ==========================================
// The public boundary of the core. Owns the database connection
// (or a degraded no-store state when it could not be opened) and
// exposes the registration, query, deletion, alert and report
// operations.
//
// Contract: writes report success as bool, reads degrade to
// empty results; no error type crosses this boundary. Causes are
// emitted on the tracing channel.
// ==========================================

use crate::config::MonitorConfig;
use crate::domain::{Hive, Inspection, ProductionRecord, STATUS_ACTIVE};
use crate::report::ProductionChartRenderer;
use crate::repository::{
    schema, AlertRepository, HiveAlert, HiveRepository, InspectionRepository,
    ProductionRepository, RepositoryError, RepositoryResult,
};
use chrono::{Duration, Local, NaiveDate};
use std::sync::{Arc, Mutex};

/// Repositories sharing one connection.
struct Store {
    hive_repo: HiveRepository,
    inspection_repo: InspectionRepository,
    production_repo: ProductionRepository,
    alert_repo: AlertRepository,
}

/// Apiary service API.
///
/// Construction never fails: when the store cannot be opened the API runs
/// in no-store mode, where every write returns `false` fast and every
/// read returns an empty result.
pub struct ApiaryApi {
    store: Option<Store>,
    config: MonitorConfig,
}

impl ApiaryApi {
    /// Open the store, initialize the schema and build the API.
    pub fn new(config: MonitorConfig) -> Self {
        let store = match Self::open_store(&config.db_path) {
            Ok(store) => {
                tracing::info!(db_path = %config.db_path, "database connection established");
                Some(store)
            }
            Err(e) => {
                tracing::error!(
                    db_path = %config.db_path,
                    error = %e,
                    "failed to open database; running in no-store mode"
                );
                None
            }
        };

        Self { store, config }
    }

    fn open_store(db_path: &str) -> RepositoryResult<Store> {
        let mut conn = crate::db::open_connection(db_path)
            .map_err(|e| RepositoryError::ConnectionUnavailable(e.to_string()))?;
        schema::init_schema(&mut conn)?;

        let conn = Arc::new(Mutex::new(conn));
        Ok(Store {
            hive_repo: HiveRepository::from_connection(conn.clone()),
            inspection_repo: InspectionRepository::from_connection(conn.clone()),
            production_repo: ProductionRepository::from_connection(conn.clone()),
            alert_repo: AlertRepository::from_connection(conn),
        })
    }

    /// Whether a store is attached (false = degraded no-store mode).
    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    fn store(&self) -> Option<&Store> {
        if self.store.is_none() {
            tracing::warn!("store unavailable; operation skipped");
        }
        self.store.as_ref()
    }

    // ==========================================
    // Registration
    // ==========================================

    /// Register a new hive with today's install date and "active" status.
    ///
    /// Returns `false` on a duplicate code (uniqueness violation, rolled
    /// back) or any other failure.
    pub fn register_hive(&self, code: &str, location: &str) -> bool {
        if code.trim().is_empty() || location.trim().is_empty() {
            tracing::warn!("hive registration rejected: code and location are required");
            return false;
        }

        let Some(store) = self.store() else {
            return false;
        };

        match store
            .hive_repo
            .insert(code, location, today(), STATUS_ACTIVE)
        {
            Ok(id) => {
                tracing::info!(code, id, "hive registered");
                true
            }
            Err(RepositoryError::UniqueConstraintViolation(msg)) => {
                tracing::warn!(code, %msg, "hive registration failed: code already exists");
                false
            }
            Err(e) => {
                tracing::error!(code, error = %e, "hive registration failed");
                false
            }
        }
    }

    /// Register an inspection of `hive_id` dated today.
    ///
    /// Returns `false` when `hive_id` references no hive (referential
    /// violation, rolled back) or on any other failure.
    pub fn register_inspection(
        &self,
        hive_id: i64,
        temperature: f64,
        humidity: f64,
        pest_presence: bool,
        general_condition: &str,
        notes: Option<&str>,
    ) -> bool {
        let Some(store) = self.store() else {
            return false;
        };

        match store.inspection_repo.insert(
            hive_id,
            today(),
            Some(temperature),
            Some(humidity),
            pest_presence,
            Some(general_condition),
            notes,
        ) {
            Ok(id) => {
                tracing::info!(hive_id, id, "inspection registered");
                true
            }
            Err(RepositoryError::ForeignKeyViolation(msg)) => {
                tracing::warn!(hive_id, %msg, "inspection rejected: hive does not exist");
                false
            }
            Err(e) => {
                tracing::error!(hive_id, error = %e, "inspection registration failed");
                false
            }
        }
    }

    /// Register a honey collection for `hive_id` dated today.
    ///
    /// Same existence-check contract as [`Self::register_inspection`].
    pub fn register_production(&self, hive_id: i64, honey_quantity: f64, quality: &str) -> bool {
        let Some(store) = self.store() else {
            return false;
        };

        match store
            .production_repo
            .insert(hive_id, today(), honey_quantity, Some(quality))
        {
            Ok(id) => {
                tracing::info!(hive_id, id, honey_quantity, "production registered");
                true
            }
            Err(RepositoryError::ForeignKeyViolation(msg)) => {
                tracing::warn!(hive_id, %msg, "production rejected: hive does not exist");
                false
            }
            Err(e) => {
                tracing::error!(hive_id, error = %e, "production registration failed");
                false
            }
        }
    }

    // ==========================================
    // Queries
    // ==========================================

    /// All hives ordered by code ascending; empty when the store is
    /// unavailable or the table is empty.
    pub fn list_hives(&self) -> Vec<Hive> {
        let Some(store) = self.store() else {
            return Vec::new();
        };

        store.hive_repo.find_all().unwrap_or_else(|e| {
            tracing::error!(error = %e, "hive listing failed");
            Vec::new()
        })
    }

    /// Lookup by surrogate key.
    pub fn get_hive_by_id(&self, id: i64) -> Option<Hive> {
        let store = self.store()?;

        store.hive_repo.find_by_id(id).unwrap_or_else(|e| {
            tracing::error!(id, error = %e, "hive lookup failed");
            None
        })
    }

    /// Inspections of one hive, most recent first.
    pub fn list_inspections_by_hive(&self, hive_id: i64) -> Vec<Inspection> {
        let Some(store) = self.store() else {
            return Vec::new();
        };

        store.inspection_repo.find_by_hive(hive_id).unwrap_or_else(|e| {
            tracing::error!(hive_id, error = %e, "inspection listing failed");
            Vec::new()
        })
    }

    /// Production records of one hive, most recent first.
    pub fn list_productions_by_hive(&self, hive_id: i64) -> Vec<ProductionRecord> {
        let Some(store) = self.store() else {
            return Vec::new();
        };

        store.production_repo.find_by_hive(hive_id).unwrap_or_else(|e| {
            tracing::error!(hive_id, error = %e, "production listing failed");
            Vec::new()
        })
    }

    // ==========================================
    // Deletion
    // ==========================================

    /// Delete a hive and, through the store's cascade, all of its
    /// inspections and production records in one transaction.
    ///
    /// An unknown id is a distinct outcome: `false` with a warning, not a
    /// silent success.
    pub fn delete_hive(&self, id: i64) -> bool {
        let Some(store) = self.store() else {
            return false;
        };

        match store.hive_repo.delete(id) {
            Ok(0) => {
                tracing::warn!(id, "hive deletion skipped: no such hive");
                false
            }
            Ok(_) => {
                tracing::info!(id, "hive deleted (dependents cascaded)");
                true
            }
            Err(e) => {
                tracing::error!(id, error = %e, "hive deletion failed");
                false
            }
        }
    }

    // ==========================================
    // Derived read models
    // ==========================================

    /// Hives overdue for inspection: newest inspection strictly older
    /// than the configured threshold, or never inspected at all.
    pub fn check_alerts(&self) -> Vec<HiveAlert> {
        let Some(store) = self.store() else {
            return Vec::new();
        };

        let threshold = today() - Duration::days(self.config.alert_threshold_days);
        match store.alert_repo.find_stale_hives(threshold) {
            Ok(alerts) => {
                tracing::info!(
                    count = alerts.len(),
                    threshold = %threshold,
                    "alert check completed"
                );
                alerts
            }
            Err(e) => {
                tracing::error!(error = %e, "alert check failed");
                Vec::new()
            }
        }
    }

    /// Render the production chart to the configured path.
    ///
    /// With no production history this is a logged no-op (still a
    /// success); otherwise the prior chart file, if any, is overwritten.
    pub fn generate_production_report(&self) -> bool {
        let Some(store) = self.store() else {
            return false;
        };

        let samples = match store.production_repo.find_history_with_hive_code() {
            Ok(samples) => samples,
            Err(e) => {
                tracing::error!(error = %e, "production history query failed");
                return false;
            }
        };

        if samples.is_empty() {
            tracing::info!("no production records; report generation skipped");
            return true;
        }

        let renderer = ProductionChartRenderer::new(self.config.report_path.clone());
        match renderer.render(&samples) {
            Ok(()) => {
                tracing::info!(
                    samples = samples.len(),
                    path = %self.config.report_path.display(),
                    "production report generated"
                );
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "production report generation failed");
                false
            }
        }
    }
}

/// Today in local time; registration dates and the alert threshold are
/// both derived from it.
fn today() -> NaiveDate {
    Local::now().date_naive()
}
