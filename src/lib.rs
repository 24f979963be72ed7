//! Property catalog showcase: normalizes listing records and runs the search, ranking and
//! pagination pipeline behind the landing, search and group pages.

/// Environment-driven configuration.
pub mod config;
/// Admin summary statistics.
pub mod dashboard;
/// Display normalizers for price, carpet area and unit configuration.
pub mod format;
/// Structured logging setup.
pub mod logging;
/// Catalog records.
pub mod models;
/// Filtering, text search, ranking, sorting and pagination.
pub mod search;
/// Landing-page selections.
pub mod showcase;
/// Data sources for the catalog collections.
pub mod sources;
/// Write-side rules.
pub mod validation;
