use async_trait::async_trait;
use mongodb::{options::ClientOptions, Client};
use std::time::Duration;
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum ConnectivityError {
    #[error("{0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("database probe timed out after {0:?}")]
    Timeout(Duration),

    #[error("{0}")]
    Other(String),
}

/// Read-only view of the optional database used by the `/test` diagnostics.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    fn is_available(&self) -> bool;
    fn name(&self) -> Option<String>;
    async fn list_collection_names(&self) -> Result<Vec<String>, ConnectivityError>;
}

#[derive(Clone)]
pub struct Database {
    client: Client,
    db_name: Option<String>,
}

impl Database {
    /// Builds a client from `DATABASE_URL`. No round trip is made here; the
    /// first server contact happens when the probe runs.
    pub async fn connect(uri: &str, db_name: Option<&str>) -> Result<Self, ConnectivityError> {
        let mut client_options = ClientOptions::parse(uri).await?;

        client_options.max_pool_size = Some(4);
        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let db_name = db_name
            .map(str::to_string)
            .or_else(|| client_options.default_database.clone());

        let client = Client::with_options(client_options)?;

        Ok(Self { client, db_name })
    }

    /// `Ok(None)` when no database is configured; `Err` when `DATABASE_URL`
    /// is set but unusable.
    pub async fn from_config(config: &Config) -> Result<Option<Self>, ConnectivityError> {
        let Some(uri) = config.database_url.as_deref() else {
            return Ok(None);
        };
        let db = Self::connect(uri, config.database_name.as_deref()).await?;
        log::info!(
            "database probe configured for {}",
            db.db_name().unwrap_or("<no database name>")
        );
        Ok(Some(db))
    }

    pub fn db_name(&self) -> Option<&str> {
        self.db_name.as_deref()
    }
}

#[async_trait]
impl DatabaseProbe for Database {
    fn is_available(&self) -> bool {
        self.db_name.is_some()
    }

    fn name(&self) -> Option<String> {
        self.db_name.clone()
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, ConnectivityError> {
        let name = self
            .db_name
            .as_deref()
            .ok_or_else(|| ConnectivityError::Other("no database name configured".to_string()))?;
        let names = self.client.database(name).list_collection_names().await?;
        Ok(names)
    }
}
