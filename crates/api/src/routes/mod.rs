pub mod health;
pub mod todo;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                                          service + database health
///
/// /todos                                           list (GET), create (POST),
///                                                  update (PUT), delete (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(todo::router())
}
