#[cfg(feature = "postgres")]
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr, Schema};

/// Configuration for the blog database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
    pub const IDLE_TIMEOUT: Duration = Duration::from_secs(300);
}

/// Process-wide database handle.
///
/// Opened once at startup with [`DatabaseConnections::init`] and released
/// with [`DatabaseConnections::close`] when the server stops.
#[cfg(feature = "postgres")]
pub struct DatabaseConnections {
    pub main: Arc<DbConn>,
}

#[cfg(feature = "postgres")]
impl DatabaseConnections {
    /// Connect and make sure the `blogs` table exists.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(DatabaseConfig::CONNECT_TIMEOUT)
            .idle_timeout(DatabaseConfig::IDLE_TIMEOUT)
            .sqlx_logging(false)
            .to_owned();

        let main = Database::connect(opts).await?;
        tracing::info!("Database connected (pool: {})", config.max_connections);

        let connections = Self {
            main: Arc::new(main),
        };
        connections.ensure_schema().await?;
        Ok(connections)
    }

    /// Issue `CREATE TABLE IF NOT EXISTS` for every entity.
    pub async fn ensure_schema(&self) -> Result<(), DbErr> {
        let backend = self.main.get_database_backend();
        let schema = Schema::new(backend);

        let mut blogs = schema.create_table_from_entity(super::entity::blog::Entity);
        blogs.if_not_exists();
        self.main.execute(backend.build(&blogs)).await?;

        tracing::debug!("Schema ensured");
        Ok(())
    }

    /// Round-trip to the server.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.main.ping().await
    }

    /// Close the pool, waiting for checked-out connections.
    ///
    /// Repositories built with `from_shared` must be dropped first; a handle
    /// that is still shared is left open.
    pub async fn close(self) -> Result<(), DbErr> {
        match Arc::try_unwrap(self.main) {
            Ok(main) => {
                main.close().await?;
                tracing::info!("Database connection closed");
            }
            Err(_) => tracing::warn!("Database handle still shared at shutdown; not closed"),
        }
        Ok(())
    }
}
