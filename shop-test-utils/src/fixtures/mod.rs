//! Test fixture modules for database record creation.
//!
//! - `content` - shop categories, products, blog posts and url rewrites

pub mod content;
