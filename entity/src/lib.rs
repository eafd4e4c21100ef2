pub mod prelude;

pub mod blog_post;
pub mod shop_category;
pub mod shop_product;
pub mod url_rewrite;
