pub use super::blog_post::Entity as BlogPost;
pub use super::shop_category::Entity as ShopCategory;
pub use super::shop_product::Entity as ShopProduct;
pub use super::url_rewrite::Entity as UrlRewrite;
