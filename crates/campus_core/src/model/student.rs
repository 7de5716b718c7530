//! Student domain model.

use serde::{Deserialize, Serialize};

/// Student profile record. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: String,
    pub name: String,
    pub dept: String,
    pub year: u32,
    pub contact: String,
}

impl Student {
    pub fn new(
        student_id: impl Into<String>,
        name: impl Into<String>,
        dept: impl Into<String>,
        year: u32,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            name: name.into(),
            dept: dept.into(),
            year,
            contact: contact.into(),
        }
    }
}
