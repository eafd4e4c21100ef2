pub mod content_boundary;
pub mod footer;
pub mod guard;
pub mod head;
pub mod header;
pub mod layout;
pub mod loader;
pub mod offline;
pub mod page;
pub mod scroll;
pub mod sidebar;

pub use content_boundary::{ContentBoundary, ContentErrorFallback};
pub use footer::{Footer, FooterQuery};
pub use guard::{OnlyUnauthenticatedRoute, ProtectedRoute};
pub use head::{page_title, HeadMetaTags};
pub use header::{Header, HeaderQuery};
pub use layout::AppLayout;
pub use loader::Loader;
pub use offline::OfflineNotice;
pub use page::Page;
pub use scroll::ScrollToTop;
pub use sidebar::{Sidebar, SidebarContainer, SidebarContents};
