//! Route definitions for the `/todos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::todo;
use crate::state::AppState;

/// Routes mounted at `/todos`.
///
/// ```text
/// GET    /todos                -> list
/// POST   /todos                -> create
/// PUT    /todos                -> update   (id in body)
/// DELETE /todos?id={id}        -> delete   (or id in body)
/// ```
///
/// OPTIONS preflights are answered by the CORS layer in
/// [`build_app_router`](crate::router::build_app_router).
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/todos",
        get(todo::list)
            .post(todo::create)
            .put(todo::update)
            .delete(todo::delete),
    )
}
