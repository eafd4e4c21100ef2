//! Server application models.
//!
//! Application state shared with axum handlers and type aliases for the database models
//! produced by the `entity` crate.

pub mod app;
pub mod db;
