use std::sync::Arc;

use crate::data::post_repository::PostRepository;

pub(crate) mod app_error;
pub(crate) mod handlers;
pub(crate) mod http_handlers;
pub(crate) mod middleware;
pub(crate) mod openapi;
pub(crate) mod routes;

/// Shared per-request state: a handle to the post repository. All post data
/// lives in the database; nothing is cached between requests.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub(crate) fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}
