pub mod auth;
pub mod error;
pub mod health;
pub mod openapi;
pub mod students;

use axum::Router;

use crate::application::error::AppError;
use crate::bootstrap::app_context::AppContext;

/// All HTTP routes, without transport layers (CORS, tracing).
pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .merge(health::routes(ctx.pool()))
        .merge(auth::routes(ctx.clone()))
        .merge(students::routes(ctx))
        .merge(openapi::routes())
        .fallback(route_not_found)
}

async fn route_not_found() -> AppError {
    AppError::NotFound("route")
}

pub(crate) async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
