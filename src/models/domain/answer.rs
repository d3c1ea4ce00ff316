use serde::{Deserialize, Serialize};

/// A recorded answer. Tagged so single-choice and free-text answers stay
/// distinguishable once persisted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerValue {
    Text(String),
    SingleChoice(String),
    MultiChoice(Vec<String>),
    Score(i16),
}

impl AnswerValue {
    /// An empty answer does not satisfy a required question.
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Text(s) | AnswerValue::SingleChoice(s) => s.trim().is_empty(),
            AnswerValue::MultiChoice(values) => values.is_empty(),
            AnswerValue::Score(_) => false,
        }
    }

    /// Scalar rendering used by the visibility evaluator and the hand-off rows.
    pub fn as_scalar(&self) -> Option<String> {
        match self {
            AnswerValue::Text(s) | AnswerValue::SingleChoice(s) => Some(s.clone()),
            AnswerValue::Score(n) => Some(n.to_string()),
            AnswerValue::MultiChoice(_) => None,
        }
    }

    pub fn as_set(&self) -> Option<&[String]> {
        match self {
            AnswerValue::MultiChoice(values) => Some(values),
            _ => None,
        }
    }

    /// Flat text rendering for hand-off response rows.
    pub fn render(&self) -> String {
        match self {
            AnswerValue::Text(s) | AnswerValue::SingleChoice(s) => s.clone(),
            AnswerValue::MultiChoice(values) => values.join(", "),
            AnswerValue::Score(n) => n.to_string(),
        }
    }
}

/// Raw answer as submitted over the wire: a bare string or an array of
/// strings. The engine types it against the question's declared type.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AnswerInput {
    Scalar(String),
    List(Vec<String>),
}
