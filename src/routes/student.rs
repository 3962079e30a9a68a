//! Student CRUD route table.

use crate::handlers::student::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn student_routes(state: AppState) -> Router {
    Router::new()
        .route("/student", post(create))
        .route("/students", get(list))
        .route("/student/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
