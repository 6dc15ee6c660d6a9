use crate::application::error::{AppError, AppResult};
use crate::application::ports::user_repository::UserRow;
use crate::application::use_cases::auth::change_password::{
    ChangePassword as ChangePasswordUc, ChangePasswordRequest as ChangePasswordDto,
};
use crate::application::use_cases::auth::login::{Login as LoginUc, LoginRequest as LoginDto};
use crate::application::use_cases::auth::me::GetMe;
use crate::application::use_cases::auth::register::{
    Register as RegisterUc, RegisterRequest as RegisterDto,
};
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::error::ApiJson;
use crate::presentation::http::method_not_allowed;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<UserRow> for UserResponse {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    /// Seconds until the token expires.
    pub expires_in: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/register", post(register).fallback(method_not_allowed))
        .route("/login", post(login).fallback(method_not_allowed))
        .route("/me", get(me).fallback(method_not_allowed))
        .route("/me/password", put(change_password).fallback(method_not_allowed))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/register", tag = "Auth", request_body = RegisterRequest, security(()), responses(
    (status = 201, body = UserResponse),
    (status = 409, body = crate::presentation::http::error::ErrorBody, description = "Username already taken"),
    (status = 422, body = crate::presentation::http::error::ErrorBody)
))]
pub async fn register(
    State(ctx): State<AppContext>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let repo = ctx.user_repo();
    let hasher = ctx.password_hasher();
    let uc = RegisterUc {
        repo: repo.as_ref(),
        hasher: hasher.as_ref(),
    };
    let dto = RegisterDto {
        username: req.username,
        password: req.password,
    };
    let user = uc.execute(&dto).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[utoipa::path(post, path = "/login", tag = "Auth", request_body = LoginRequest, security(()), responses(
    (status = 200, body = LoginResponse),
    (status = 401, body = crate::presentation::http::error::ErrorBody, description = "Invalid credentials")
))]
pub async fn login(
    State(ctx): State<AppContext>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let repo = ctx.user_repo();
    let hasher = ctx.password_hasher();
    let tokens = ctx.token_service();
    let uc = LoginUc {
        repo: repo.as_ref(),
        hasher: hasher.as_ref(),
        tokens: tokens.as_ref(),
    };
    let dto = LoginDto {
        username: req.username,
        password: req.password,
    };
    let outcome = uc.execute(&dto).await?;
    Ok(Json(LoginResponse {
        token: outcome.token.token,
        token_type: "Bearer".to_string(),
        expires_in: outcome.token.expires_in,
    }))
}

#[utoipa::path(get, path = "/me", tag = "Auth", responses(
    (status = 200, body = UserResponse),
    (status = 401, body = crate::presentation::http::error::ErrorBody)
))]
pub async fn me(State(ctx): State<AppContext>, user: AuthUser) -> AppResult<Json<UserResponse>> {
    let repo = ctx.user_repo();
    let uc = GetMe {
        repo: repo.as_ref(),
    };
    let row = uc.execute(&user.username).await?;
    Ok(Json(row.into()))
}

#[utoipa::path(put, path = "/me/password", tag = "Auth", request_body = ChangePasswordRequest, responses(
    (status = 204),
    (status = 401, body = crate::presentation::http::error::ErrorBody, description = "Missing token or wrong current password"),
    (status = 422, body = crate::presentation::http::error::ErrorBody)
))]
pub async fn change_password(
    State(ctx): State<AppContext>,
    user: AuthUser,
    ApiJson(req): ApiJson<ChangePasswordRequest>,
) -> AppResult<StatusCode> {
    let repo = ctx.user_repo();
    let hasher = ctx.password_hasher();
    let uc = ChangePasswordUc {
        repo: repo.as_ref(),
        hasher: hasher.as_ref(),
    };
    let dto = ChangePasswordDto {
        current_password: req.current_password,
        new_password: req.new_password,
    };
    uc.execute(&user.username, &dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Bearer extractor ---
use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;

/// Caller identity taken from a verified `Authorization: Bearer` token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
}

#[axum::async_trait]
impl FromRequestParts<AppContext> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &AppContext,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(AppError::InvalidToken)?;
        let username = ctx.token_service().verify(token).map_err(|e| {
            tracing::debug!(reason = %e, "bearer_rejected");
            AppError::from(e)
        })?;
        Ok(AuthUser { username })
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(auth: &str) -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(
            axum::http::header::AUTHORIZATION,
            HeaderValue::from_str(auth).unwrap(),
        );
        h
    }

    #[test]
    fn extracts_bearer_token() {
        assert_eq!(bearer_token(&headers("Bearer abc.def.ghi")), Some("abc.def.ghi"));
        assert_eq!(bearer_token(&headers("bearer  abc")), Some("abc"));
    }

    #[test]
    fn ignores_other_schemes_and_empty_tokens() {
        assert_eq!(bearer_token(&headers("Basic dXNlcjpwdw==")), None);
        assert_eq!(bearer_token(&headers("Bearer ")), None);
        assert_eq!(bearer_token(&headers("Bearer")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
