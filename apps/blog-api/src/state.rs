//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::{CommentService, PostService};
use blog_infra::InMemoryStore;

#[cfg(feature = "postgres")]
use blog_infra::{PostgresCommentRepository, PostgresPostRepository};
#[cfg(feature = "postgres")]
use sea_orm::DbConn;

use crate::config::AppConfig;

/// Where posts and comments are kept.
#[derive(Clone)]
pub enum Storage {
    Memory,
    #[cfg(feature = "postgres")]
    Postgres(Arc<DbConn>),
}

impl Storage {
    pub fn name(&self) -> &'static str {
        match self {
            Storage::Memory => "memory",
            #[cfg(feature = "postgres")]
            Storage::Postgres(_) => "postgres",
        }
    }

    /// Check the backend is reachable.
    pub async fn ping(&self) -> Result<(), String> {
        match self {
            Storage::Memory => Ok(()),
            #[cfg(feature = "postgres")]
            Storage::Postgres(conn) => conn.ping().await.map_err(|e| e.to_string()),
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub comments: CommentService,
    pub storage: Storage,
}

impl AppState {
    /// Build the application state for the configured storage backend.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        match &config.database {
            #[cfg(feature = "postgres")]
            Some(db_config) => {
                let conn = blog_infra::database::connect(db_config).await?;

                if config.auto_migrate {
                    use migration::MigratorTrait;

                    migration::Migrator::up(&conn, None).await?;
                    tracing::info!("Database migrations applied");
                }

                Ok(Self::postgres(conn))
            }
            #[cfg(not(feature = "postgres"))]
            Some(_) => {
                tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
                Ok(Self::in_memory())
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Ok(Self::in_memory())
            }
        }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        let store = InMemoryStore::new();
        let posts = Arc::new(store.post_repository());
        let comments = Arc::new(store.comment_repository());

        Self {
            posts: PostService::new(posts.clone()),
            comments: CommentService::new(posts, comments),
            storage: Storage::Memory,
        }
    }

    /// State backed by PostgreSQL.
    #[cfg(feature = "postgres")]
    pub fn postgres(conn: DbConn) -> Self {
        let conn = Arc::new(conn);
        let posts = Arc::new(PostgresPostRepository::new(conn.clone()));
        let comments = Arc::new(PostgresCommentRepository::new(conn.clone()));

        tracing::info!("Application state initialized with PostgreSQL storage");

        Self {
            posts: PostService::new(posts.clone()),
            comments: CommentService::new(posts, comments),
            storage: Storage::Postgres(conn),
        }
    }
}
