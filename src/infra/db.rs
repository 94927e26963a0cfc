//! Database connection and initialization.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, Statement,
};

use crate::config::{Config, DB_MAX_CONNECTIONS};
use crate::errors::AppResult;

/// Idempotent schema bootstrap, executed once at connect time.
///
/// `id` is varchar rather than a numeric column so 64-bit ids survive
/// JSON transport without precision loss.
const CREATE_USER_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS "user" (
    id       VARCHAR(32)  PRIMARY KEY,
    name     VARCHAR(255) NOT NULL,
    password VARCHAR(255) NOT NULL
)
"#;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Connect to the database and ensure the schema exists.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let mut options = ConnectOptions::new(config.database_url());
        options.max_connections(DB_MAX_CONNECTIONS);

        let connection = SeaDatabase::connect(options).await?;
        let db = Self { connection };
        db.init_schema().await?;

        tracing::info!("Database connected and schema ensured");
        Ok(db)
    }

    /// Wrap an existing connection (used by tests).
    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self { connection }
    }

    /// Get a reference to the database connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> AppResult<()> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }

    /// Close the underlying pool. Call on shutdown.
    pub async fn close(&self) -> AppResult<()> {
        self.connection.clone().close().await?;
        Ok(())
    }

    async fn init_schema(&self) -> AppResult<()> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                CREATE_USER_TABLE.to_string(),
            ))
            .await?;
        Ok(())
    }
}
