use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::assignment::{AssignmentStatus, EvaluationAssignment},
};

#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    async fn find_by_token(&self, token: &str) -> AppResult<Option<EvaluationAssignment>>;
    async fn update_status(
        &self,
        id: &str,
        status: AssignmentStatus,
        completed_at: Option<DateTime<Utc>>,
    ) -> AppResult<()>;
}

pub struct MongoAssignmentRepository {
    collection: Collection<EvaluationAssignment>,
}

impl MongoAssignmentRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("evaluation_assignments");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for evaluation_assignments collection");

        let token_index = IndexModel::builder()
            .keys(doc! { "token": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("token_unique".to_string())
                    .build(),
            )
            .build();

        let evaluator_index = IndexModel::builder()
            .keys(doc! { "evaluator_id": 1, "quarter_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("evaluator_quarter".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(token_index).await?;
        self.collection.create_index(evaluator_index).await?;

        log::info!("Successfully created indexes for evaluation_assignments collection");
        Ok(())
    }
}

#[async_trait]
impl AssignmentRepository for MongoAssignmentRepository {
    async fn find_by_token(&self, token: &str) -> AppResult<Option<EvaluationAssignment>> {
        let assignment = self.collection.find_one(doc! { "token": token }).await?;
        Ok(assignment)
    }

    async fn update_status(
        &self,
        id: &str,
        status: AssignmentStatus,
        completed_at: Option<DateTime<Utc>>,
    ) -> AppResult<()> {
        let status_bson = mongodb::bson::to_bson(&status)?;
        let mut update = doc! {
            "status": status_bson,
            "modified_at": mongodb::bson::to_bson(&Utc::now())?,
        };
        if let Some(completed_at) = completed_at {
            update.insert("completed_at", mongodb::bson::to_bson(&completed_at)?);
        }

        self.collection
            .update_one(doc! { "id": id }, doc! { "$set": update })
            .await?;
        Ok(())
    }
}
