pub mod cart;
pub mod category;
pub mod checkout;
pub mod product;
pub mod reset_password;

pub use cart::Cart;
pub use category::Category;
pub use checkout::{Checkout, CheckoutConfirmation};
pub use product::Product;
pub use reset_password::ResetPassword;
