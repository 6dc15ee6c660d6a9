use std::sync::Arc;

use crate::application::ports::password_hasher::PasswordHasherPort;
use crate::application::ports::student_repository::StudentRepository;
use crate::application::ports::token_port::TokenPort;
use crate::application::ports::user_repository::UserRepository;
use crate::bootstrap::config::Config;
use crate::infrastructure::crypto::Argon2PasswordHasher;
use crate::infrastructure::crypto::jwt::JwtTokenService;
use crate::infrastructure::db::DbPool;
use crate::infrastructure::db::repositories::student_repository_sqlx::SqlxStudentRepository;
use crate::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    user_repo: Arc<dyn UserRepository>,
    student_repo: Arc<dyn StudentRepository>,
    password_hasher: Arc<dyn PasswordHasherPort>,
    token_service: Arc<dyn TokenPort>,
    pool: DbPool,
}

impl AppServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        student_repo: Arc<dyn StudentRepository>,
        password_hasher: Arc<dyn PasswordHasherPort>,
        token_service: Arc<dyn TokenPort>,
        pool: DbPool,
    ) -> Self {
        Self {
            user_repo,
            student_repo,
            password_hasher,
            token_service,
            pool,
        }
    }

    /// Standard wiring: sqlx repositories over `pool`, argon2 and HS256 JWT.
    pub fn from_pool(cfg: &Config, pool: DbPool) -> Self {
        Self::new(
            Arc::new(SqlxUserRepository::new(pool.clone())),
            Arc::new(SqlxStudentRepository::new(pool.clone())),
            Arc::new(Argon2PasswordHasher::default()),
            Arc::new(JwtTokenService::new(&cfg.token)),
            pool,
        )
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }

    pub fn student_repo(&self) -> Arc<dyn StudentRepository> {
        self.services.student_repo.clone()
    }

    pub fn password_hasher(&self) -> Arc<dyn PasswordHasherPort> {
        self.services.password_hasher.clone()
    }

    pub fn token_service(&self) -> Arc<dyn TokenPort> {
        self.services.token_service.clone()
    }

    pub fn pool(&self) -> DbPool {
        self.services.pool.clone()
    }
}
