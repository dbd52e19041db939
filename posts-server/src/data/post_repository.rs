use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::post::Post;

#[derive(Debug, Clone)]
pub(crate) struct NewPost {
    pub(crate) user_id: i32,
    pub(crate) title: String,
    pub(crate) content: String,
}

#[derive(Debug, Clone)]
pub(crate) struct PostPatch {
    pub(crate) title: String,
    pub(crate) content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Pagination {
    pub(crate) start: i64,
    pub(crate) count: i64,
}

impl Pagination {
    pub(crate) const MAX_COUNT: i64 = 10;

    /// Out-of-range values are corrected, not rejected: `count` outside
    /// 1..=10 falls back to 10, negative `start` falls back to 0.
    pub(crate) fn clamped(start: i64, count: i64) -> Self {
        let count = if (1..=Self::MAX_COUNT).contains(&count) {
            count
        } else {
            Self::MAX_COUNT
        };
        Self {
            start: start.max(0),
            count,
        }
    }
}

/// One database statement per operation; every statement binds its inputs
/// as parameters, never by string concatenation.
#[async_trait]
pub(crate) trait PostRepository: Send + Sync {
    /// Empty result sets come back as an empty vec, never as an error.
    async fn list_posts(&self, page: Pagination) -> Result<Vec<Post>, DomainError>;

    async fn get_post(&self, id: i32) -> Result<Post, DomainError>;

    /// The returned post carries the database-assigned id.
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError>;

    /// Pass-through contract: zero affected rows is still `Ok(())`.
    async fn update_post(&self, id: i32, patch: PostPatch) -> Result<(), DomainError>;

    /// Pass-through contract, same as `update_post`.
    async fn delete_post(&self, id: i32) -> Result<(), DomainError>;
}
