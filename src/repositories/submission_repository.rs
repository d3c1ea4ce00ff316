use async_trait::async_trait;
use chrono::Utc;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{
        assignment::EvaluationType,
        submission::{AttributeResponseRow, AttributeScoreRow, Submission},
    },
};

#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Idempotent: the first call for a logical submission creates it, later
    /// calls return the same record.
    async fn create_or_get_submission(
        &self,
        evaluator_id: &str,
        evaluatee_id: &str,
        evaluation_type: EvaluationType,
        quarter_id: &str,
    ) -> AppResult<Submission>;

    /// Unique per (submission, attribute); re-invoking overwrites the score.
    async fn upsert_attribute_score(
        &self,
        submission_id: &str,
        attribute_name: &str,
        score: i16,
    ) -> AppResult<()>;

    /// Unique per (submission, attribute, question); re-invoking overwrites.
    async fn upsert_attribute_responses(
        &self,
        submission_id: &str,
        attribute_name: &str,
        rows: Vec<AttributeResponseRow>,
    ) -> AppResult<()>;
}

#[derive(Debug, Deserialize, Serialize)]
struct ResponseDocument {
    submission_id: String,
    attribute_name: String,
    question_id: String,
    question_text: String,
    response_value: String,
    score_context: String,
}

pub struct MongoSubmissionRepository {
    submissions: Collection<Submission>,
    scores: Collection<AttributeScoreRow>,
    responses: Collection<ResponseDocument>,
}

impl MongoSubmissionRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            submissions: db.get_collection("submissions"),
            scores: db.get_collection("attribute_scores"),
            responses: db.get_collection("attribute_responses"),
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for submission collections");

        let submission_index = IndexModel::builder()
            .keys(doc! {
                "evaluator_id": 1,
                "evaluatee_id": 1,
                "evaluation_type": 1,
                "quarter_id": 1
            })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("logical_submission_unique".to_string())
                    .build(),
            )
            .build();

        let score_index = IndexModel::builder()
            .keys(doc! { "submission_id": 1, "attribute_name": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("submission_attribute_unique".to_string())
                    .build(),
            )
            .build();

        let response_index = IndexModel::builder()
            .keys(doc! { "submission_id": 1, "attribute_name": 1, "question_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("submission_question_unique".to_string())
                    .build(),
            )
            .build();

        self.submissions.create_index(submission_index).await?;
        self.scores.create_index(score_index).await?;
        self.responses.create_index(response_index).await?;

        log::info!("Successfully created indexes for submission collections");
        Ok(())
    }
}

#[async_trait]
impl SubmissionRepository for MongoSubmissionRepository {
    async fn create_or_get_submission(
        &self,
        evaluator_id: &str,
        evaluatee_id: &str,
        evaluation_type: EvaluationType,
        quarter_id: &str,
    ) -> AppResult<Submission> {
        let filter = doc! {
            "evaluator_id": evaluator_id,
            "evaluatee_id": evaluatee_id,
            "evaluation_type": mongodb::bson::to_bson(&evaluation_type)?,
            "quarter_id": quarter_id,
        };

        if let Some(existing) = self.submissions.find_one(filter.clone()).await? {
            return Ok(existing);
        }

        let submission = Submission {
            id: Uuid::new_v4().to_string(),
            evaluator_id: evaluator_id.to_string(),
            evaluatee_id: evaluatee_id.to_string(),
            evaluation_type,
            quarter_id: quarter_id.to_string(),
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        };

        // The unique index closes the race: if another writer got there
        // first, fall back to reading their record.
        match self.submissions.insert_one(&submission).await {
            Ok(_) => Ok(submission),
            Err(_) => {
                let existing = self.submissions.find_one(filter).await?;
                existing.ok_or_else(|| {
                    crate::errors::AppError::DatabaseError(
                        "submission insert failed and no existing record found".to_string(),
                    )
                })
            }
        }
    }

    async fn upsert_attribute_score(
        &self,
        submission_id: &str,
        attribute_name: &str,
        score: i16,
    ) -> AppResult<()> {
        let row = AttributeScoreRow {
            submission_id: submission_id.to_string(),
            attribute_name: attribute_name.to_string(),
            score,
            modified_at: Some(Utc::now()),
        };

        self.scores
            .replace_one(
                doc! { "submission_id": submission_id, "attribute_name": attribute_name },
                &row,
            )
            .upsert(true)
            .await?;
        Ok(())
    }

    async fn upsert_attribute_responses(
        &self,
        submission_id: &str,
        attribute_name: &str,
        rows: Vec<AttributeResponseRow>,
    ) -> AppResult<()> {
        for row in rows {
            let document = ResponseDocument {
                submission_id: submission_id.to_string(),
                attribute_name: attribute_name.to_string(),
                question_id: row.question_id,
                question_text: row.question_text,
                response_value: row.response_value,
                score_context: row.score_context,
            };

            self.responses
                .replace_one(
                    doc! {
                        "submission_id": submission_id,
                        "attribute_name": attribute_name,
                        "question_id": &document.question_id,
                    },
                    &document,
                )
                .upsert(true)
                .await?;
        }
        Ok(())
    }
}
