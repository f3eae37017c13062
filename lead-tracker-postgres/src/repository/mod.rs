pub mod client_repository;
pub mod db_init;
pub mod identity_repository;
pub mod listener;
pub mod user_repository;

pub use client_repository::ClientRepositoryImpl;
pub use identity_repository::PgIdentityProvider;
pub use user_repository::UserRepositoryImpl;
