//! MongoDB connection shared by the survey collections (assignments,
//! submissions, sessions).

use mongodb::{bson::doc, options::ClientOptions, Client, Collection};
use std::time::Duration;

use crate::{config::Config, errors::AppResult};

#[derive(Clone)]
pub struct Database {
    client: Client,
    db_name: String,
}

impl Database {
    /// Connect and verify the database answers a ping before any repository
    /// is built on top of it. Survey traffic is modest, so the pool stays
    /// small and selection gives up quickly instead of queueing requests.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let mut options = ClientOptions::parse(&config.mongo_conn_string).await?;
        options.app_name = Some("compass-server".to_string());
        options.max_pool_size = Some(5);
        options.connect_timeout = Some(Duration::from_secs(5));
        options.server_selection_timeout = Some(Duration::from_secs(5));

        let database = Self {
            client: Client::with_options(options)?,
            db_name: config.mongo_db_name.clone(),
        };
        database.health_check().await?;
        log::info!("Connected to MongoDB database '{}'", database.db_name);

        Ok(database)
    }

    pub fn get_collection<T>(&self, name: &str) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.client.database(&self.db_name).collection(name)
    }

    /// Pings the survey database itself, so a readiness probe fails when the
    /// configured database is unreachable, not just the cluster.
    pub async fn health_check(&self) -> AppResult<()> {
        self.client
            .database(&self.db_name)
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }
}
