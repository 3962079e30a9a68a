//! Shared application state for all routes.

use crate::service::StudentService;

#[derive(Clone)]
pub struct AppState {
    pub students: StudentService,
}
