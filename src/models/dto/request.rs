use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::answer::AnswerInput;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitAnswersRequest {
    #[validate(length(min = 1, message = "at least one answer is required"))]
    pub answers: Vec<AnswerEntry>,
}

// The length validation above serializes the list into its error params, so
// entries must implement Serialize.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnswerEntry {
    pub question_id: String,
    pub value: AnswerInput,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitScoreRequest {
    #[validate(range(min = 1, max = 10, message = "score must be between 1 and 10"))]
    pub score: i16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavigateRequest {
    pub direction: NavigationDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationDirection {
    Next,
    Previous,
}
