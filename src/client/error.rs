use thiserror::Error;

use crate::client::util::api::FetchError;

/// Failure rendering a page, caught by the content error boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    #[error("Failed to load {what}: {source}")]
    Load {
        what: &'static str,
        #[source]
        source: FetchError,
    },
}

impl ViewError {
    pub fn load(what: &'static str) -> impl FnOnce(FetchError) -> Self {
        move |source| ViewError::Load { what, source }
    }
}
