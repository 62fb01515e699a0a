//! # PostgreSQL Store Backend
//!
//! Production backend over a PostgreSQL connection pool (deadpool-postgres).
//! One table, `accounts`, created at startup from
//! `migrations/001_initial_schema.sql`.
//!
//! ## Connection Pooling
//!
//! Each operation checks a client out of the pool for the duration of a
//! single query; nothing is held across requests.

use async_trait::async_trait;
use deadpool_postgres::{Config, Pool, Runtime};
use tokio_postgres::{Config as TokioConfig, NoTls, Row};
use tracing::{debug, info};

use super::models::{Account, NewAccount};
use super::{AccountStore, StoreError};

/// Helper to convert a database row to an Account
fn row_to_account(row: &Row) -> Account {
    Account {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        address: row.get("address"),
        phone_number: row.get("phone_number"),
        date_joined: row.get("date_joined"),
    }
}

/// PostgreSQL-backed account store.
#[derive(Clone)]
pub struct PostgresStore {
    /// The connection pool
    pool: Pool,
}

impl PostgresStore {
    /// Connect to the PostgreSQL database.
    ///
    /// Creates a connection pool (max 10 connections) and verifies
    /// connectivity with a probe query before returning.
    ///
    /// ## Arguments
    ///
    /// * `database_url` - PostgreSQL connection string
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        info!("Connecting to database...");

        // Parse the connection string using tokio_postgres::Config
        let tokio_config = database_url.parse::<TokioConfig>()
            .map_err(|e| StoreError::ConfigError(format!("Invalid database URL: {}", e)))?;

        // Convert to deadpool config
        let mut config = Config::new();

        if let Some(dbname) = tokio_config.get_dbname() {
            config.dbname = Some(dbname.to_string());
        }
        if let Some(user) = tokio_config.get_user() {
            config.user = Some(user.to_string());
        }
        if let Some(password) = tokio_config.get_password() {
            // Password is &[u8], convert to String
            config.password = Some(String::from_utf8_lossy(password).to_string());
        }
        if let Some(host) = tokio_config.get_hosts().first() {
            if let tokio_postgres::config::Host::Tcp(host_str) = host {
                config.host = Some(host_str.clone());
            }
        }
        if let Some(port) = tokio_config.get_ports().first() {
            config.port = Some(*port);
        }

        // Set pool size
        config.pool = Some(deadpool_postgres::PoolConfig {
            max_size: 10,
            ..Default::default()
        });

        // Create pool
        let pool = config
            .create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;

        // Test connection
        let client = pool.get().await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;

        client.query("SELECT 1", &[]).await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;

        info!("Database connection established");

        Ok(Self { pool })
    }

    /// Bootstrap the database schema.
    ///
    /// Reads `migrations/001_initial_schema.sql` and executes it as one
    /// batch. The schema uses `IF NOT EXISTS`, so running it against an
    /// already-initialized database is harmless.
    pub async fn run_migrations(&self) -> Result<(), StoreError> {
        info!("Running database migrations...");

        let client = self.pool.get().await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;

        // Read migration file (path depends on where the binary is launched)
        let migration_paths = [
            "migrations/001_initial_schema.sql",
            "../migrations/001_initial_schema.sql",
        ];

        let mut migration_sql = None;
        for path in &migration_paths {
            match std::fs::read_to_string(path) {
                Ok(content) => {
                    info!("Found migration file at: {}", path);
                    migration_sql = Some(content);
                    break;
                }
                Err(e) => {
                    debug!("Tried path '{}': {}", path, e);
                }
            }
        }

        let migration_sql = migration_sql.ok_or_else(|| {
            StoreError::MigrationError(format!(
                "Could not find migration file. Tried paths: {:?}",
                migration_paths
            ))
        })?;

        client.batch_execute(&migration_sql).await
            .map_err(|e| StoreError::MigrationError(e.to_string()))?;

        info!("Migrations completed successfully");
        Ok(())
    }
}

#[async_trait]
impl AccountStore for PostgresStore {
    async fn create(&self, account: NewAccount) -> Result<Account, StoreError> {
        debug!("Creating account for: {}", account.name);

        let client = self.pool.get().await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;

        let row = client.query_one(
            r#"
            INSERT INTO accounts (name, email, address, phone_number, date_joined)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, address, phone_number, date_joined
            "#,
            &[
                &account.name,
                &account.email,
                &account.address,
                &account.phone_number,
                &account.date_joined,
            ],
        ).await?;

        let account = row_to_account(&row);
        info!("Account created with id: {}", account.id);
        Ok(account)
    }

    async fn find(&self, id: i32) -> Result<Option<Account>, StoreError> {
        debug!("Fetching account: {}", id);

        let client = self.pool.get().await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;

        let rows = client.query(
            r#"
            SELECT id, name, email, address, phone_number, date_joined
            FROM accounts
            WHERE id = $1
            "#,
            &[&id],
        ).await?;

        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(row_to_account(&rows[0])))
        }
    }

    async fn update(&self, account: &Account) -> Result<(), StoreError> {
        debug!("Updating account: {}", account.id);

        let client = self.pool.get().await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;

        // No existence check here; callers fetch via find() first
        let rows_affected = client.execute(
            r#"
            UPDATE accounts
            SET
                name = $2,
                email = $3,
                address = $4,
                phone_number = $5,
                date_joined = $6
            WHERE id = $1
            "#,
            &[
                &account.id,
                &account.name,
                &account.email,
                &account.address,
                &account.phone_number,
                &account.date_joined,
            ],
        ).await?;

        if rows_affected == 0 {
            debug!("Update touched no rows for account: {}", account.id);
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        debug!("Deleting account: {}", id);

        let client = self.pool.get().await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;

        let rows_affected = client.execute(
            "DELETE FROM accounts WHERE id = $1",
            &[&id],
        ).await?;

        if rows_affected == 0 {
            debug!("Delete touched no rows for account: {}", id);
        }
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Account>, StoreError> {
        debug!("Fetching all accounts");

        let client = self.pool.get().await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;

        let rows = client.query(
            r#"
            SELECT id, name, email, address, phone_number, date_joined
            FROM accounts
            "#,
            &[],
        ).await?;

        Ok(rows.iter().map(row_to_account).collect())
    }
}
