use axum::{Json, Router, routing::get};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
        paths(
            crate::presentation::http::health::root,
            crate::presentation::http::health::health,
            crate::presentation::http::auth::register,
            crate::presentation::http::auth::login,
            crate::presentation::http::auth::me,
            crate::presentation::http::auth::change_password,
            crate::presentation::http::students::list_students,
            crate::presentation::http::students::create_student,
            crate::presentation::http::students::get_student,
            crate::presentation::http::students::update_student,
            crate::presentation::http::students::delete_student,
        ),
        components(schemas(
            crate::presentation::http::auth::RegisterRequest,
            crate::presentation::http::auth::LoginRequest,
            crate::presentation::http::auth::LoginResponse,
            crate::presentation::http::auth::UserResponse,
            crate::presentation::http::auth::ChangePasswordRequest,
            crate::presentation::http::students::Student,
            crate::presentation::http::students::StudentRequest,
            crate::presentation::http::error::ErrorBody,
            crate::presentation::http::health::HealthResp,
            crate::presentation::http::health::WelcomeResp,
        )),
        modifiers(&BearerAuth),
        security(("bearer_auth" = [])),
        tags(
            (name = "Auth", description = "Registration, login and session identity"),
            (name = "Students", description = "Student records"),
            (name = "Health", description = "System health checks")
        )
    )]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub fn routes() -> Router {
    Router::new().route(
        "/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }).fallback(super::method_not_allowed),
    )
}
