//! Business logic layer between HTTP handlers and the record store.

pub mod student;

pub use student::{StudentService, DELETED_MESSAGE};
