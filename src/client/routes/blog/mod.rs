pub mod listing;
pub mod post;

pub use listing::{blog_page_route, Blog, BlogListing, BlogPage};
pub use post::BlogPost;

/// Date format used for post bylines
pub const PUBLISHED_FORMAT: &str = "%-d %B %Y";
