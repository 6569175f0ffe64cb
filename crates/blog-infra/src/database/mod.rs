//! Storage backends: PostgreSQL through SeaORM, and an in-memory fallback.

mod memory;
mod pool;

#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

#[cfg(feature = "postgres")]
pub mod entity;

pub use memory::{InMemoryCommentRepository, InMemoryPostRepository, InMemoryStore};
pub use pool::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use pool::connect;
#[cfg(feature = "postgres")]
pub use postgres_base::PostgresBaseRepository;
#[cfg(feature = "postgres")]
pub use postgres_repo::{PostgresCommentRepository, PostgresPostRepository};

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;
