//! Service layer.
//!
//! Services combine repositories into the DTOs served by the API: url resolution for the
//! dynamic route, header/footer layout data, shop catalog and blog content.

pub mod blog;
pub mod layout;
pub mod shop;
pub mod url;
