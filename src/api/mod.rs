// ==========================================
// Apiary Monitor - API layer
// ==========================================
// Service boundary over the repository layer. Callers outside
// the core interact only through these operations, never
// through raw statements.
// ==========================================

pub mod apiary_api;

pub use apiary_api::ApiaryApi;
