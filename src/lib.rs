//! Student registry: REST backend for student records.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{ServerConfig, StoreBackend};
pub use error::{translate, AppError, ConfigError};
pub use model::{Student, StudentPayload};
pub use routes::{app, probe_routes, student_routes};
pub use service::StudentService;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_students_table, InMemoryStudentStore, PgStudentStore, StudentStore};
