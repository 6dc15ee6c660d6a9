use crate::application::error::AppResult;
use crate::application::ports::student_repository::StudentRepository;
use crate::domain::students::student::Student;

pub struct ListStudents<'a, R: StudentRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: StudentRepository + ?Sized> ListStudents<'a, R> {
    pub async fn execute(&self) -> AppResult<Vec<Student>> {
        Ok(self.repo.list().await?)
    }
}
