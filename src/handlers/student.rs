//! Student CRUD handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::model::{Student, StudentPayload};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<StudentPayload>,
) -> Result<Json<Student>, AppError> {
    let student = state.students.create(body).await?;
    Ok(Json(student))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Student>>, AppError> {
    Ok(Json(state.students.list().await?))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Student>, AppError> {
    Ok(Json(state.students.get(id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<StudentPayload>,
) -> Result<Json<Student>, AppError> {
    Ok(Json(state.students.update(id, body).await?))
}

/// Responds with a plain-text confirmation.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<&'static str, AppError> {
    state.students.delete(id).await
}
