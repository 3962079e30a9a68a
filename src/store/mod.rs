//! Record store: the persistence capability the student service is built on.

mod memory;
mod postgres;

pub use memory::InMemoryStudentStore;
pub use postgres::{ensure_database_exists, ensure_students_table, PgStudentStore};

use crate::error::AppError;
use crate::model::{Student, StudentPayload};
use async_trait::async_trait;

/// Storage operations over the `students` table.
///
/// Ids are assigned by the store on [`insert`](StudentStore::insert) and are
/// never handed out twice by the same store.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Persist a new record and return it with its assigned id.
    async fn insert(&self, payload: StudentPayload) -> Result<Student, AppError>;

    /// Write back an existing record. Fails with `NotFound` if the row is gone.
    async fn save(&self, student: &Student) -> Result<Student, AppError>;

    /// All records, ordered by id.
    async fn find_all(&self) -> Result<Vec<Student>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Remove a record. Deleting a missing id is a no-op.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;

    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;

    /// Short backend name reported by the probes (`postgres`, `memory`).
    fn backend(&self) -> &'static str;
}
