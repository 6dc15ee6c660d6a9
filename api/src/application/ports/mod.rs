pub mod password_hasher;
pub mod student_repository;
pub mod token_port;
pub mod user_repository;
