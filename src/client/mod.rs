pub mod app;
pub mod components;
pub mod env;
pub mod error;
pub mod locale;
pub mod router;
pub mod routes;
pub mod store;
#[cfg(test)]
pub(crate) mod testing;
pub mod theme;
pub mod util;

pub use app::App;
