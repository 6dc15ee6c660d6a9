use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::error::{AppError, AppResult};
use crate::application::use_cases::students::StudentInput;
use crate::application::use_cases::students::create_student::CreateStudent;
use crate::application::use_cases::students::delete_student::DeleteStudent;
use crate::application::use_cases::students::get_student::GetStudent;
use crate::application::use_cases::students::list_students::ListStudents;
use crate::application::use_cases::students::update_student::UpdateStudent;
use crate::bootstrap::app_context::AppContext;
use crate::domain::students::student as domain;
use crate::presentation::http::auth::AuthUser;
use crate::presentation::http::error::{ApiJson, ApiPath};

#[derive(Debug, Serialize, ToSchema)]
pub struct Student {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
}

impl From<domain::Student> for Student {
    fn from(s: domain::Student) -> Self {
        Self {
            id: s.id,
            name: s.name,
            age: s.age,
            major: s.major,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct StudentRequest {
    pub name: String,
    pub age: Option<i64>,
    pub major: Option<String>,
}

impl From<StudentRequest> for StudentInput {
    fn from(req: StudentRequest) -> Self {
        Self {
            name: req.name,
            age: req.age,
            major: req.major,
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route(
            "/students",
            get(list_students)
                .post(create_student)
                .fallback(method_not_allowed),
        )
        .route(
            "/students/:id",
            get(get_student)
                .put(update_student)
                .delete(delete_student)
                .fallback(method_not_allowed),
        )
        .with_state(ctx)
}

// Unsupported methods still go through the bearer check first.
async fn method_not_allowed(_user: AuthUser) -> AppError {
    AppError::MethodNotAllowed
}

#[utoipa::path(get, path = "/students", tag = "Students", responses(
    (status = 200, body = [Student]),
    (status = 401, body = crate::presentation::http::error::ErrorBody)
))]
pub async fn list_students(
    State(ctx): State<AppContext>,
    _user: AuthUser,
) -> AppResult<Json<Vec<Student>>> {
    let repo = ctx.student_repo();
    let uc = ListStudents {
        repo: repo.as_ref(),
    };
    let items = uc.execute().await?;
    Ok(Json(items.into_iter().map(Student::from).collect()))
}

#[utoipa::path(post, path = "/students", tag = "Students", request_body = StudentRequest, responses(
    (status = 201, body = Student),
    (status = 401, body = crate::presentation::http::error::ErrorBody),
    (status = 422, body = crate::presentation::http::error::ErrorBody)
))]
pub async fn create_student(
    State(ctx): State<AppContext>,
    _user: AuthUser,
    ApiJson(req): ApiJson<StudentRequest>,
) -> AppResult<(StatusCode, Json<Student>)> {
    let repo = ctx.student_repo();
    let uc = CreateStudent {
        repo: repo.as_ref(),
    };
    let student = uc.execute(&req.into()).await?;
    Ok((StatusCode::CREATED, Json(student.into())))
}

#[utoipa::path(get, path = "/students/{id}", tag = "Students",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, body = Student),
        (status = 401, body = crate::presentation::http::error::ErrorBody),
        (status = 404, body = crate::presentation::http::error::ErrorBody)
    ))]
pub async fn get_student(
    State(ctx): State<AppContext>,
    _user: AuthUser,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Student>> {
    let repo = ctx.student_repo();
    let uc = GetStudent {
        repo: repo.as_ref(),
    };
    Ok(Json(uc.execute(id).await?.into()))
}

#[utoipa::path(put, path = "/students/{id}", tag = "Students", request_body = StudentRequest,
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, body = Student),
        (status = 401, body = crate::presentation::http::error::ErrorBody),
        (status = 404, body = crate::presentation::http::error::ErrorBody),
        (status = 422, body = crate::presentation::http::error::ErrorBody)
    ))]
pub async fn update_student(
    State(ctx): State<AppContext>,
    _user: AuthUser,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<StudentRequest>,
) -> AppResult<Json<Student>> {
    let repo = ctx.student_repo();
    let uc = UpdateStudent {
        repo: repo.as_ref(),
    };
    Ok(Json(uc.execute(id, &req.into()).await?.into()))
}

#[utoipa::path(delete, path = "/students/{id}", tag = "Students",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 204),
        (status = 401, body = crate::presentation::http::error::ErrorBody),
        (status = 404, body = crate::presentation::http::error::ErrorBody)
    ))]
pub async fn delete_student(
    State(ctx): State<AppContext>,
    _user: AuthUser,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<StatusCode> {
    let repo = ctx.student_repo();
    let uc = DeleteStudent {
        repo: repo.as_ref(),
    };
    uc.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
