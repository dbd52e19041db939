use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::{PostsClientError, PostsClientResult};
use crate::models::{NewPost, Post};

#[derive(Debug, Serialize)]
struct UpdatePostRequestDto<'a> {
    title: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorResponseDto {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct DeleteResponseDto {
    result: String,
}

#[derive(Serialize)]
struct ListPostsQuery {
    count: i64,
    start: i64,
}

/// HTTP client for the posts REST API.
#[derive(Debug, Clone)]
pub struct PostsClient {
    base_url: String,
    client: Client,
}

impl PostsClient {
    /// Creates a client with the server's base URL, for example
    /// `http://127.0.0.1:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()
            .expect("failed to build reqwest client");

        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn decode_error(response: reqwest::Response) -> PostsClientError {
        let status = response.status();

        let message = match response.json::<ErrorResponseDto>().await {
            Ok(body) => body.error,
            Err(_) => None,
        };
        PostsClientError::from_http_status(status, message)
    }

    async fn send<TRes>(&self, request: reqwest::RequestBuilder) -> PostsClientResult<TRes>
    where
        TRes: DeserializeOwned,
    {
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        Ok(response.json::<TRes>().await?)
    }

    /// Lists posts. `count` and `start` are corrected server-side
    /// (`count` clamped to 1..=10, negative `start` reset to 0); an empty
    /// result comes back as an empty vec.
    pub async fn list_posts(&self, start: i64, count: i64) -> PostsClientResult<Vec<Post>> {
        let request = self
            .client
            .get(self.endpoint("/posts"))
            .query(&ListPostsQuery { count, start });
        self.send(request).await
    }

    /// Fetches a single post by id.
    pub async fn get_post(&self, id: i32) -> PostsClientResult<Post> {
        self.send(self.client.get(self.endpoint(&format!("/posts/{id}"))))
            .await
    }

    /// Creates a post; the returned post carries the server-assigned id.
    pub async fn create_post(&self, new_post: &NewPost) -> PostsClientResult<Post> {
        self.send(self.client.post(self.endpoint("/posts")).json(new_post))
            .await
    }

    /// Replaces a post's title and content. The server echoes the submitted
    /// fields and never changes the stored `user_id`; it reports success
    /// even when no row matched the id.
    pub async fn update_post(
        &self,
        id: i32,
        title: &str,
        content: &str,
    ) -> PostsClientResult<Post> {
        let payload = UpdatePostRequestDto { title, content };
        self.send(
            self.client
                .put(self.endpoint(&format!("/posts/{id}")))
                .json(&payload),
        )
        .await
    }

    /// Deletes a post by id. Succeeds even when no row matched.
    pub async fn delete_post(&self, id: i32) -> PostsClientResult<()> {
        let _: DeleteResponseDto = self
            .send(self.client.delete(self.endpoint(&format!("/posts/{id}"))))
            .await?;
        Ok(())
    }
}
