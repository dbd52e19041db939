use axum::{Json, Router, routing::get};
use serde::Serialize;

use super::{AppState, routes};

pub(crate) fn routes(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .merge(routes::router())
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthzResponse {
    status: &'static str,
}

async fn health_handler() -> Json<HealthzResponse> {
    Json(HealthzResponse { status: "ok" })
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::routes;
    use super::test_support::{FailingPostRepo, InMemoryPostRepo, sample_post};
    use crate::data::post_repository::PostRepository;
    use crate::presentation::AppState;

    fn app_with(repo: Arc<dyn PostRepository>) -> Router {
        routes(AppState::new(repo))
    }

    fn empty_app() -> Router {
        app_with(Arc::new(InMemoryPostRepo::new()))
    }

    fn request(method: Method, uri: &str, body: Option<&str>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request must build")
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(req).await.expect("request must succeed");
        let status = response.status();
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .expect("content-type must be set"),
            "application/json"
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body must be readable");
        let value = serde_json::from_slice(&bytes).expect("body must be json");
        (status, value)
    }

    #[tokio::test]
    async fn healthz_reports_ok() {
        let (status, body) = send(empty_app(), request(Method::GET, "/healthz", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn list_posts_returns_empty_array_not_null() {
        let (status, body) = send(empty_app(), request(Method::GET, "/posts", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn list_posts_clamps_count_and_start() {
        let posts = (1..=12)
            .map(|id| sample_post(id, 1, &format!("t{id}"), "c"))
            .collect();
        let repo = Arc::new(InMemoryPostRepo::seeded(posts));

        // count=0 resets to 10, start=-5 resets to 0
        let (status, body) = send(
            app_with(repo.clone()),
            request(Method::GET, "/posts?count=0&start=-5", None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let items = body.as_array().expect("body must be an array");
        assert_eq!(items.len(), 10);
        assert_eq!(items[0]["id"], 1);

        // non-numeric count collapses to 0, then resets to 10
        let (_, body) = send(
            app_with(repo.clone()),
            request(Method::GET, "/posts?count=abc", None),
        )
        .await;
        assert_eq!(body.as_array().expect("array").len(), 10);

        // in-range values pass through
        let (_, body) = send(
            app_with(repo),
            request(Method::GET, "/posts?count=3&start=2", None),
        )
        .await;
        let items = body.as_array().expect("body must be an array");
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["id"], 3);
    }

    #[tokio::test]
    async fn create_post_assigns_id_and_roundtrips() {
        let repo = Arc::new(InMemoryPostRepo::new());

        let (status, body) = send(
            app_with(repo.clone()),
            request(
                Method::POST,
                "/posts",
                Some(r#"{"user_id":1,"title":"T","content":"C"}"#),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"id": 1, "user_id": 1, "title": "T", "content": "C"}));

        let (status, body) = send(app_with(repo), request(Method::GET, "/posts/1", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id": 1, "user_id": 1, "title": "T", "content": "C"}));
    }

    #[tokio::test]
    async fn create_post_ignores_id_in_body() {
        let (status, body) = send(
            empty_app(),
            request(
                Method::POST,
                "/posts",
                Some(r#"{"id":99,"user_id":1,"title":"T","content":"C"}"#),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 1);
    }

    #[tokio::test]
    async fn create_post_rejects_malformed_body() {
        let (status, body) = send(
            empty_app(),
            request(Method::POST, "/posts", Some("not json")),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid request payload"}));

        // missing required user_id is a payload error as well
        let (status, body) = send(
            empty_app(),
            request(Method::POST, "/posts", Some(r#"{"title":"T","content":"C"}"#)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid request payload"}));
    }

    #[tokio::test]
    async fn create_post_rejects_empty_fields() {
        let (status, _) = send(
            empty_app(),
            request(
                Method::POST,
                "/posts",
                Some(r#"{"user_id":1,"title":"","content":"C"}"#),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_post_missing_returns_404_envelope() {
        let (status, body) = send(empty_app(), request(Method::GET, "/posts/999999", None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Post not found"}));
    }

    #[tokio::test]
    async fn get_post_rejects_non_numeric_id() {
        for uri in ["/posts/abc", "/posts/1x", "/posts/-1"] {
            let (status, body) = send(empty_app(), request(Method::GET, uri, None)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri} must be rejected");
            assert_eq!(body, json!({"error": "Invalid post ID"}));
        }
    }

    #[tokio::test]
    async fn update_post_echoes_body_with_path_id() {
        let repo = Arc::new(InMemoryPostRepo::seeded(vec![sample_post(
            7, 3, "old", "old body",
        )]));

        let (status, body) = send(
            app_with(repo.clone()),
            request(
                Method::PUT,
                "/posts/7",
                Some(r#"{"id":99,"user_id":5,"title":"new","content":"new body"}"#),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        // the body id is ignored, the submitted user_id is only echoed
        assert_eq!(body, json!({"id": 7, "user_id": 5, "title": "new", "content": "new body"}));

        // the stored row keeps its user_id; only title/content change
        let (_, body) = send(app_with(repo), request(Method::GET, "/posts/7", None)).await;
        assert_eq!(body, json!({"id": 7, "user_id": 3, "title": "new", "content": "new body"}));
    }

    #[tokio::test]
    async fn update_post_defaults_missing_user_id_to_zero() {
        let repo = Arc::new(InMemoryPostRepo::seeded(vec![sample_post(1, 3, "t", "c")]));

        let (status, body) = send(
            app_with(repo),
            request(
                Method::PUT,
                "/posts/1",
                Some(r#"{"title":"new","content":"new body"}"#),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user_id"], 0);
    }

    #[tokio::test]
    async fn update_post_on_missing_id_still_reports_success() {
        let (status, body) = send(
            empty_app(),
            request(
                Method::PUT,
                "/posts/999",
                Some(r#"{"title":"new","content":"new body"}"#),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 999);
    }

    #[tokio::test]
    async fn update_post_rejects_malformed_body() {
        let (status, body) = send(
            empty_app(),
            request(Method::PUT, "/posts/1", Some("{broken")),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid request payload"}));
    }

    #[tokio::test]
    async fn delete_post_returns_success_envelope() {
        let repo = Arc::new(InMemoryPostRepo::seeded(vec![sample_post(1, 1, "t", "c")]));

        let (status, body) = send(
            app_with(repo.clone()),
            request(Method::DELETE, "/posts/1", None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"result": "success"}));

        let (status, _) = send(app_with(repo), request(Method::GET, "/posts/1", None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_post_on_missing_id_still_reports_success() {
        let (status, body) = send(
            empty_app(),
            request(Method::DELETE, "/posts/999999", None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"result": "success"}));
    }

    #[tokio::test]
    async fn database_errors_surface_as_500_with_detail() {
        let (status, body) = send(
            app_with(Arc::new(FailingPostRepo)),
            request(Method::GET, "/posts", None),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "connection refused"}));
    }
}
