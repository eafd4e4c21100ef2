//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries for each table, grouped by domain (shop catalog,
//! blog, url rewrites).

pub mod blog;
pub mod shop;
pub mod url_rewrite;

#[cfg(test)]
mod tests;
