//! Application state - shared across all handlers.

use std::sync::Arc;

use bloglist_core::ports::BlogRepository;
use bloglist_infra::InMemoryBlogRepository;
use bloglist_infra::database::DatabaseConfig;

#[cfg(feature = "postgres")]
use bloglist_infra::{DatabaseConnections, PostgresBlogRepository};

/// Which store backs the blog repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl StoreKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreKind::Postgres => "postgres",
            StoreKind::Memory => "memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogRepository>,
    pub store: StoreKind,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state, connecting to the database if configured.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> anyhow::Result<Self> {
        #[cfg(feature = "postgres")]
        if let Some(config) = db_config {
            let connections = Arc::new(DatabaseConnections::init(config).await?);
            let repo = Arc::new(PostgresBlogRepository::from_shared(Arc::clone(
                &connections.main,
            )));
            tracing::info!("Application state initialized (postgres)");
            return Ok(Self {
                blogs: repo,
                store: StoreKind::Postgres,
                db: Some(connections),
            });
        }

        if db_config.is_some() {
            tracing::warn!("DATABASE_URL set but postgres support is disabled. Using memory store.");
        } else {
            tracing::warn!("DATABASE_URL not set. Running with in-memory blog store.");
        }

        Ok(Self::in_memory(Arc::new(InMemoryBlogRepository::new())))
    }

    /// State backed by the given in-memory repository.
    pub fn in_memory(repo: Arc<InMemoryBlogRepository>) -> Self {
        Self {
            blogs: repo,
            store: StoreKind::Memory,
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    /// Release the database pool, if any. Call after the server has stopped.
    pub async fn shutdown(self) {
        #[cfg(feature = "postgres")]
        if let Some(db) = self.db {
            drop(self.blogs);
            match Arc::try_unwrap(db) {
                Ok(connections) => {
                    if let Err(e) = connections.close().await {
                        tracing::error!("Failed to close database connection: {}", e);
                    }
                }
                Err(_) => tracing::warn!("Database handle still shared at shutdown; not closed"),
            }
        }
    }
}
