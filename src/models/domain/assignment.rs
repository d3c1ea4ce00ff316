use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A survey link handed to one evaluator for one evaluatee and quarter.
/// The token is the only credential the dashboard presents.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct EvaluationAssignment {
    pub id: String,
    pub token: String,
    pub evaluator_id: String,
    pub evaluatee_id: String,
    pub evaluation_type: EvaluationType,
    pub quarter_id: String,
    pub status: AssignmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationType {
    Manager,
    Peer,
    #[serde(rename = "self")]
    SelfEval,
}

impl EvaluationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationType::Manager => "manager",
            EvaluationType::Peer => "peer",
            EvaluationType::SelfEval => "self",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Pending,
    InProgress,
    Completed,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_assignment(status: AssignmentStatus) -> EvaluationAssignment {
        EvaluationAssignment {
            id: "assignment-1".to_string(),
            token: "tok-abc".to_string(),
            evaluator_id: "user-1".to_string(),
            evaluatee_id: "user-2".to_string(),
            evaluation_type: EvaluationType::Peer,
            quarter_id: "2026-Q3".to_string(),
            status,
            completed_at: None,
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }

    #[test]
    fn assignment_round_trip_serialization() {
        let assignment = make_assignment(AssignmentStatus::Pending);

        let json = serde_json::to_string(&assignment).expect("assignment should serialize");
        let parsed: EvaluationAssignment =
            serde_json::from_str(&json).expect("assignment should deserialize");

        assert_eq!(assignment, parsed);
    }

    #[test]
    fn evaluation_type_serializes_self_without_keyword_clash() {
        let json = serde_json::to_string(&EvaluationType::SelfEval).expect("should serialize");
        assert_eq!(json, "\"self\"");
        assert_eq!(EvaluationType::SelfEval.as_str(), "self");
    }

    #[test]
    fn status_uses_snake_case_wire_names() {
        let json = serde_json::to_string(&AssignmentStatus::InProgress).expect("should serialize");
        assert_eq!(json, "\"in_progress\"");
    }
}
