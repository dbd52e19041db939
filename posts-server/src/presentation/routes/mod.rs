pub(crate) mod posts;

use axum::Router;

use crate::presentation::AppState;

pub(crate) fn router() -> Router<AppState> {
    posts::router()
}
