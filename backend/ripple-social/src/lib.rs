//! ripple-social
//!
//! Social-graph service for the Ripple platform: follow edges, posts and
//! comments, the deduplicated like ledger, fan-out notifications, and the
//! per-viewer home feed.
//!
//! # Modules
//!
//! - `handlers`: HTTP request handlers
//! - `routes`: path/verb wiring
//! - `services`: business logic layer
//! - `db`: database access layer, one repo per table
//! - `models`: entity structs shared across layers
//! - `middleware`: gateway-identity extraction
//! - `pagination`: offset/limit page parameters
//! - `error`: error types and HTTP mapping
//! - `config`: configuration management

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
