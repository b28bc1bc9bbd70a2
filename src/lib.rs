pub mod config;
pub mod db;
pub mod domain;
pub mod format;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Number of rows returned by the "top products" and "top customers" queries.
pub const TOP_RESULTS_LIMIT: i64 = 10;
