use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use serde::{Deserialize, Serialize};

use crate::{db::Database, errors::AppResult, models::domain::session::SurveySession};

/// Durable store of one survey session per assignment token. Any keyed store
/// satisfies this; tests use an in-memory map.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Overwrites any prior value for the token.
    async fn save(&self, token: &str, session: &SurveySession) -> AppResult<()>;

    /// Most recently saved session, or None when absent. Corrupt stored data
    /// is also None: the survey restarts instead of crashing.
    async fn load(&self, token: &str) -> AppResult<Option<SurveySession>>;

    /// Called only on successful full completion.
    async fn clear(&self, token: &str) -> AppResult<()>;
}

/// Storage key for a token, namespaced the same way the dashboard's browser
/// storage was.
pub fn session_key(token: &str) -> String {
    format!("survey_session:{}", token)
}

#[derive(Debug, Deserialize, Serialize)]
struct SessionRecord {
    key: String,
    session_json: String,
    updated_at: DateTime<Utc>,
}

pub struct MongoSessionStore {
    collection: Collection<SessionRecord>,
}

impl MongoSessionStore {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("survey_sessions");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for survey_sessions collection");

        let key_index = IndexModel::builder()
            .keys(doc! { "key": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("key_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(key_index).await?;

        log::info!("Successfully created indexes for survey_sessions collection");
        Ok(())
    }
}

#[async_trait]
impl SessionStore for MongoSessionStore {
    async fn save(&self, token: &str, session: &SurveySession) -> AppResult<()> {
        let record = SessionRecord {
            key: session_key(token),
            session_json: serde_json::to_string(session)?,
            updated_at: Utc::now(),
        };

        self.collection
            .replace_one(doc! { "key": session_key(token) }, &record)
            .upsert(true)
            .await?;
        Ok(())
    }

    async fn load(&self, token: &str) -> AppResult<Option<SurveySession>> {
        let record = self
            .collection
            .find_one(doc! { "key": session_key(token) })
            .await?;

        let Some(record) = record else {
            return Ok(None);
        };

        match serde_json::from_str::<SurveySession>(&record.session_json) {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                log::warn!(
                    "stored session for token '{}' is unreadable ({}); treating as absent",
                    token,
                    err
                );
                Ok(None)
            }
        }
    }

    async fn clear(&self, token: &str) -> AppResult<()> {
        self.collection
            .delete_one(doc! { "key": session_key(token) })
            .await?;
        Ok(())
    }
}
