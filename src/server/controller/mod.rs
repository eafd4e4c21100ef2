//! HTTP controller endpoints for the storefront API.
//!
//! Axum handlers that parse request input, call the service layer and return JSON
//! DTOs. Each handler is annotated for utoipa so it appears in the OpenAPI document.

pub mod blog;
pub mod layout;
pub mod shop;
pub mod url;
