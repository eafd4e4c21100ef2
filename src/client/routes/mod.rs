pub mod account;
pub mod blog;
pub mod dynamic;
pub mod home;
pub mod not_found;
pub mod shop;

pub use home::Home;
pub use not_found::NotFound;
