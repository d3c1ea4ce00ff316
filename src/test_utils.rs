use chrono::Utc;
use uuid::Uuid;

use crate::models::domain::assignment::{
    AssignmentStatus, EvaluationAssignment, EvaluationType,
};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Creates a pending manager-evaluation assignment with a fresh token
    pub fn test_assignment() -> EvaluationAssignment {
        test_assignment_with_token(&format!("token-{}", Uuid::new_v4()))
    }

    /// Creates a pending assignment with a specific access token
    pub fn test_assignment_with_token(token: &str) -> EvaluationAssignment {
        let now = Utc::now();
        EvaluationAssignment {
            id: Uuid::new_v4().to_string(),
            token: token.to_string(),
            evaluator_id: "evaluator-1".to_string(),
            evaluatee_id: "evaluatee-1".to_string(),
            evaluation_type: EvaluationType::Manager,
            quarter_id: "2026-Q3".to_string(),
            status: AssignmentStatus::Pending,
            completed_at: None,
            created_at: Some(now),
            modified_at: Some(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_fixtures_test_assignment() {
        let assignment = test_assignment();
        assert_eq!(assignment.status, AssignmentStatus::Pending);
        assert_eq!(assignment.evaluation_type, EvaluationType::Manager);
        assert!(assignment.completed_at.is_none());
    }

    #[test]
    fn test_fixtures_test_assignment_with_token() {
        let assignment = test_assignment_with_token("custom-token");
        assert_eq!(assignment.token, "custom-token");
    }
}
