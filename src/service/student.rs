//! Student CRUD over any [`StudentStore`].

use crate::error::AppError;
use crate::model::{Student, StudentPayload};
use crate::store::StudentStore;
use std::sync::Arc;

/// Confirmation returned by a successful delete.
pub const DELETED_MESSAGE: &str = "Student has been deleted!";

#[derive(Clone)]
pub struct StudentService {
    store: Arc<dyn StudentStore>,
}

impl StudentService {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        StudentService { store }
    }

    pub fn store(&self) -> &dyn StudentStore {
        self.store.as_ref()
    }

    pub async fn create(&self, payload: StudentPayload) -> Result<Student, AppError> {
        let student = self.store.insert(payload).await?;
        tracing::info!(id = student.id, "student created");
        Ok(student)
    }

    pub async fn list(&self) -> Result<Vec<Student>, AppError> {
        self.store.find_all().await
    }

    pub async fn get(&self, id: i64) -> Result<Student, AppError> {
        self.store.find_by_id(id).await?.ok_or(AppError::NotFound(id))
    }

    /// Overwrites name, branch and mail of an existing record.
    pub async fn update(&self, id: i64, payload: StudentPayload) -> Result<Student, AppError> {
        let mut student = self.get(id).await?;
        student.apply(payload);
        let saved = self.store.save(&student).await?;
        tracing::info!(id, "student updated");
        Ok(saved)
    }

    pub async fn delete(&self, id: i64) -> Result<&'static str, AppError> {
        if !self.store.exists_by_id(id).await? {
            return Err(AppError::NotFound(id));
        }
        self.store.delete_by_id(id).await?;
        tracing::info!(id, "student deleted");
        Ok(DELETED_MESSAGE)
    }
}
