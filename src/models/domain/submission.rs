use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::assignment::EvaluationType;

/// One logical submission per (evaluator, evaluatee, type, quarter).
/// Created on first completion hand-off, reused on retries.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Submission {
    pub id: String,
    pub evaluator_id: String,
    pub evaluatee_id: String,
    pub evaluation_type: EvaluationType,
    pub quarter_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

/// Per-attribute 1-10 score row, unique per (submission, attribute).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AttributeScoreRow {
    pub submission_id: String,
    pub attribute_name: String,
    pub score: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

/// Flattened answer row handed to the dashboard's reporting side.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AttributeResponseRow {
    pub question_id: String,
    pub question_text: String,
    pub response_value: String,
    pub score_context: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_round_trip_serialization() {
        let submission = Submission {
            id: "sub-1".to_string(),
            evaluator_id: "user-1".to_string(),
            evaluatee_id: "user-2".to_string(),
            evaluation_type: EvaluationType::Manager,
            quarter_id: "2026-Q3".to_string(),
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        };

        let json = serde_json::to_string(&submission).expect("submission should serialize");
        let parsed: Submission =
            serde_json::from_str(&json).expect("submission should deserialize");

        assert_eq!(submission, parsed);
    }

    #[test]
    fn response_row_carries_question_text_for_reporting() {
        let row = AttributeResponseRow {
            question_id: "reliability_mid_2".to_string(),
            question_text: "What most often gets in the way?".to_string(),
            response_value: "Competing priorities".to_string(),
            score_context: "6-8".to_string(),
        };

        let json = serde_json::to_string(&row).expect("row should serialize");
        assert!(json.contains("What most often gets in the way?"));
        assert!(json.contains("6-8"));
    }
}
