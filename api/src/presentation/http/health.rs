use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::infrastructure::db::DbPool;
use crate::presentation::http::method_not_allowed;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResp {
    pub status: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WelcomeResp {
    pub message: &'static str,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    security(()),
    responses((status = 200, body = HealthResp))
)]
pub async fn health(State(pool): State<DbPool>) -> Json<HealthResp> {
    let db_ok = sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(&pool)
        .await
        .is_ok();
    let status = if db_ok { "ok" } else { "degraded" };
    Json(HealthResp { status })
}

#[utoipa::path(get, path = "/", tag = "Health", security(()), responses((status = 200, body = WelcomeResp)))]
pub async fn root() -> Json<WelcomeResp> {
    Json(WelcomeResp {
        message: "Welcome to the Student API",
    })
}

pub fn routes(pool: DbPool) -> Router {
    Router::new()
        .route("/", get(root).fallback(method_not_allowed))
        .route("/health", get(health).fallback(method_not_allowed))
        .with_state(pool)
}
