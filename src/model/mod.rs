pub mod api;
pub mod blog;
pub mod content;
pub mod layout;
pub mod shop;
