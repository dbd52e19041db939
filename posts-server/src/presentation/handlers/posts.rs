use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::data::post_repository::{NewPost, Pagination, PostPatch};
use crate::domain::post::Post;
use crate::presentation::AppState;
use crate::presentation::app_error::{AppError, AppResult};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct CreatePostDto {
    pub(crate) user_id: i32,
    #[validate(length(min = 1))]
    pub(crate) title: String,
    #[validate(length(min = 1))]
    pub(crate) content: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct UpdatePostDto {
    /// Echoed back in the response but never written by the update
    /// statement; absent means 0.
    #[serde(default)]
    pub(crate) user_id: i32,
    #[validate(length(min = 1))]
    pub(crate) title: String,
    #[validate(length(min = 1))]
    pub(crate) content: String,
}

/// Raw query strings: anything non-numeric collapses to 0 before clamping,
/// mirroring the lenient contract of the original API.
#[derive(Debug, Deserialize)]
pub(crate) struct ListPostsQuery {
    pub(crate) count: Option<String>,
    pub(crate) start: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct PostDto {
    pub(crate) id: i32,
    pub(crate) user_id: i32,
    pub(crate) title: String,
    pub(crate) content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct DeleteResponseDto {
    pub(crate) result: String,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            title: post.title,
            content: post.content,
        }
    }
}

fn invalid_payload() -> AppError {
    AppError::BadRequest("Invalid request payload".to_string())
}

fn invalid_post_id() -> AppError {
    AppError::BadRequest("Invalid post ID".to_string())
}

/// The `{id}` segment must consist solely of decimal digits; axum has no
/// regex route constraints, so the check lives here and yields the 400
/// envelope instead of a router-level 404.
fn parse_post_id(raw: &str) -> Result<i32, AppError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_post_id());
    }
    raw.parse().map_err(|_| invalid_post_id())
}

fn numeric_or_zero(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.parse().ok()).unwrap_or(0)
}

#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    params(
        ("count" = Option<String>, Query, description = "Page size, clamped to 1..=10; non-numeric values count as 0"),
        ("start" = Option<String>, Query, description = "Rows to skip; negative or non-numeric values count as 0")
    ),
    responses(
        (status = 200, description = "Posts listed", body = [PostDto]),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<ListPostsQuery>,
) -> AppResult<(StatusCode, Json<Vec<PostDto>>)> {
    let count = numeric_or_zero(query.count.as_deref());
    let start = numeric_or_zero(query.start.as_deref());
    let page = Pagination::clamped(start, count);

    let posts = state.posts.list_posts(page).await?;
    let posts = posts.into_iter().map(PostDto::from).collect();

    Ok((StatusCode::OK, Json(posts)))
}

#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = "posts",
    params(
        ("id" = String, Path, description = "Post id, decimal digits only")
    ),
    responses(
        (status = 200, description = "Post found", body = PostDto),
        (status = 400, description = "Invalid post ID"),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    let id = parse_post_id(&id)?;

    let post = state.posts.get_post(id).await?;

    Ok((StatusCode::OK, Json(PostDto::from(post))))
}

#[utoipa::path(
    post,
    path = "/posts",
    tag = "posts",
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Post created", body = PostDto),
        (status = 400, description = "Invalid request payload"),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn create_post(
    State(state): State<AppState>,
    payload: Result<Json<CreatePostDto>, JsonRejection>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    let Json(dto) = payload.map_err(|_| invalid_payload())?;
    dto.validate()?;

    let created = state
        .posts
        .create_post(NewPost {
            user_id: dto.user_id,
            title: dto.title,
            content: dto.content,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(PostDto::from(created))))
}

#[utoipa::path(
    put,
    path = "/posts/{id}",
    tag = "posts",
    params(
        ("id" = String, Path, description = "Post id, decimal digits only")
    ),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Post updated", body = PostDto),
        (status = 400, description = "Invalid post ID or request payload"),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePostDto>, JsonRejection>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    let id = parse_post_id(&id)?;
    let Json(dto) = payload.map_err(|_| invalid_payload())?;
    dto.validate()?;

    state
        .posts
        .update_post(
            id,
            PostPatch {
                title: dto.title.clone(),
                content: dto.content.clone(),
            },
        )
        .await?;

    // The response echoes the submitted fields with the path id as the
    // authoritative one; the statement above never touches user_id, and
    // zero matched rows still count as success.
    Ok((
        StatusCode::OK,
        Json(PostDto {
            id,
            user_id: dto.user_id,
            title: dto.title,
            content: dto.content,
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/posts/{id}",
    tag = "posts",
    params(
        ("id" = String, Path, description = "Post id, decimal digits only")
    ),
    responses(
        (status = 200, description = "Post deleted (or never existed)", body = DeleteResponseDto),
        (status = 400, description = "Invalid post ID"),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<(StatusCode, Json<DeleteResponseDto>)> {
    let id = parse_post_id(&id)?;

    state.posts.delete_post(id).await?;

    Ok((
        StatusCode::OK,
        Json(DeleteResponseDto {
            result: "success".to_string(),
        }),
    ))
}
