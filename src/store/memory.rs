//! In-process store backed by a `BTreeMap`, used by tests and the `memory` backend.

use super::StudentStore;
use crate::error::AppError;
use crate::model::{Student, StudentPayload};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Student>,
    last_id: i64,
}

#[derive(Default)]
pub struct InMemoryStudentStore {
    inner: RwLock<Inner>,
}

impl InMemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudentStore for InMemoryStudentStore {
    async fn insert(&self, payload: StudentPayload) -> Result<Student, AppError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.last_id += 1;
        let student = Student {
            id: inner.last_id,
            name: payload.name,
            branch: payload.branch,
            mail: payload.mail,
        };
        inner.rows.insert(student.id, student.clone());
        Ok(student)
    }

    async fn save(&self, student: &Student) -> Result<Student, AppError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        match inner.rows.get_mut(&student.id) {
            Some(row) => {
                *row = student.clone();
                Ok(row.clone())
            }
            None => Err(AppError::NotFound(student.id)),
        }
    }

    async fn find_all(&self) -> Result<Vec<Student>, AppError> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(inner.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(inner.rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(inner.rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.rows.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
