pub mod create_student;
pub mod delete_student;
pub mod get_student;
pub mod list_students;
pub mod update_student;

use crate::application::error::AppResult;
use crate::domain::students::student::StudentFields;

/// Unvalidated student attributes as received from a client.
#[derive(Debug, Clone, Default)]
pub struct StudentInput {
    pub name: String,
    pub age: Option<i64>,
    pub major: Option<String>,
}

impl StudentInput {
    pub(crate) fn validate(&self) -> AppResult<StudentFields> {
        Ok(StudentFields::new(
            &self.name,
            self.age,
            self.major.as_deref(),
        )?)
    }
}
