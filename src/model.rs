//! Student entity and request payload.

use serde::{Deserialize, Serialize};

/// A persisted student record. `id` is assigned by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: Option<String>,
    pub branch: Option<String>,
    pub mail: Option<String>,
}

/// Body of create and update requests. An `id` in the body is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StudentPayload {
    pub name: Option<String>,
    pub branch: Option<String>,
    pub mail: Option<String>,
}

impl Student {
    /// Overwrites every mutable field with the payload's values. `id` is kept.
    pub fn apply(&mut self, payload: StudentPayload) {
        self.name = payload.name;
        self.branch = payload.branch;
        self.mail = payload.mail;
    }
}
