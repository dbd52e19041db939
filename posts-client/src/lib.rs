//! Client library for the posts REST API.
//!
//! Wraps the five endpoints of `posts-server` (list, get, create, update,
//! delete) behind a typed [`PostsClient`] built on `reqwest`. Server error
//! envelopes (`{"error": "..."}`) are decoded into [`PostsClientError`].
#![warn(missing_docs)]

mod error;
mod http_client;
mod models;

pub use error::{PostsClientError, PostsClientResult};
pub use http_client::PostsClient;
pub use models::{NewPost, Post};
