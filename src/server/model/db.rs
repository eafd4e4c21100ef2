//! Database model type aliases.

/// Shop category row (`entity::shop_category::Model`)
pub type CategoryModel = entity::shop_category::Model;

/// Shop product row (`entity::shop_product::Model`)
pub type ProductModel = entity::shop_product::Model;

/// Blog post row (`entity::blog_post::Model`)
pub type BlogPostModel = entity::blog_post::Model;

/// Path to content mapping (`entity::url_rewrite::Model`)
pub type UrlRewriteModel = entity::url_rewrite::Model;
