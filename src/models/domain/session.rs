use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::answer::AnswerValue;

/// Synthetic key under which an attribute's numeric score is co-located with
/// its conditional answers.
pub const ATTRIBUTE_SCORE_KEY: &str = "attribute_score";

pub type ResponseMap = HashMap<String, HashMap<String, AnswerValue>>;

/// Where within the per-attribute flow a session currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyPhase {
    Intro,
    BaseQuestions,
    Scoring,
    ConditionalQuestions,
    Complete,
}

/// Durable per-token survey progress. Everything here is plain data so it
/// serializes without surprises. The current phase is stored so explicit
/// navigation survives a reload; sessions written before the field existed
/// deserialize with `None` and get their phase reconstructed on resume.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SurveySession {
    pub assignment_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<String>,
    pub current_attribute: String,
    pub current_attribute_index: usize,
    #[serde(default)]
    pub current_phase: Option<SurveyPhase>,
    pub current_score: Option<i16>,
    pub base_responses: ResponseMap,
    pub conditional_responses: ResponseMap,
    pub completed_attributes: HashSet<String>,
    pub start_time: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    pub is_complete: bool,
}

impl SurveySession {
    pub fn new(assignment_id: &str, first_attribute: &str) -> Self {
        let now = Utc::now();
        Self {
            assignment_id: assignment_id.to_string(),
            submission_id: None,
            current_attribute: first_attribute.to_string(),
            current_attribute_index: 0,
            current_phase: Some(SurveyPhase::Intro),
            current_score: None,
            base_responses: HashMap::new(),
            conditional_responses: HashMap::new(),
            completed_attributes: HashSet::new(),
            start_time: now,
            last_activity: now,
            is_complete: false,
        }
    }

    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }

    pub fn base_answers_for(&self, attribute: &str) -> Option<&HashMap<String, AnswerValue>> {
        self.base_responses.get(attribute)
    }

    pub fn conditional_answers_for(
        &self,
        attribute: &str,
    ) -> Option<&HashMap<String, AnswerValue>> {
        self.conditional_responses.get(attribute)
    }

    /// The recorded score for an attribute, read from the synthetic
    /// `attribute_score` entry.
    pub fn score_for(&self, attribute: &str) -> Option<i16> {
        match self
            .conditional_responses
            .get(attribute)
            .and_then(|answers| answers.get(ATTRIBUTE_SCORE_KEY))
        {
            Some(AnswerValue::Score(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn record_base_answer(&mut self, attribute: &str, question_id: &str, value: AnswerValue) {
        self.base_responses
            .entry(attribute.to_string())
            .or_default()
            .insert(question_id.to_string(), value);
        self.touch();
    }

    pub fn record_conditional_answer(
        &mut self,
        attribute: &str,
        question_id: &str,
        value: AnswerValue,
    ) {
        self.conditional_responses
            .entry(attribute.to_string())
            .or_default()
            .insert(question_id.to_string(), value);
        self.touch();
    }

    /// Records the score both as the in-flight `current_score` and under the
    /// synthetic key so resume and hand-off see it without a separate lookup.
    pub fn record_score(&mut self, attribute: &str, score: i16) {
        self.current_score = Some(score);
        self.record_conditional_answer(attribute, ATTRIBUTE_SCORE_KEY, AnswerValue::Score(score));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_empty_at_first_attribute() {
        let session = SurveySession::new("assignment-1", "Reliability");

        assert_eq!(session.current_attribute, "Reliability");
        assert_eq!(session.current_attribute_index, 0);
        assert_eq!(session.current_phase, Some(SurveyPhase::Intro));
        assert_eq!(session.current_score, None);
        assert!(session.base_responses.is_empty());
        assert!(session.conditional_responses.is_empty());
        assert!(session.completed_attributes.is_empty());
        assert!(!session.is_complete);
    }

    #[test]
    fn score_is_colocated_with_conditional_answers() {
        let mut session = SurveySession::new("assignment-1", "Reliability");
        session.record_score("Reliability", 7);

        assert_eq!(session.current_score, Some(7));
        assert_eq!(session.score_for("Reliability"), Some(7));
        assert_eq!(
            session
                .conditional_responses
                .get("Reliability")
                .and_then(|a| a.get(ATTRIBUTE_SCORE_KEY)),
            Some(&AnswerValue::Score(7))
        );
    }

    #[test]
    fn session_round_trip_serialization_is_deep_equal() {
        let mut session = SurveySession::new("assignment-1", "Reliability");
        session.record_base_answer(
            "Reliability",
            "reliability_base_1",
            AnswerValue::MultiChoice(vec!["Meets agreed deadlines".to_string()]),
        );
        session.record_score("Reliability", 9);
        session.record_conditional_answer(
            "Reliability",
            "reliability_high_1",
            AnswerValue::SingleChoice("Yes".to_string()),
        );
        session.completed_attributes.insert("Reliability".to_string());

        let json = serde_json::to_string(&session).expect("session should serialize");
        let parsed: SurveySession =
            serde_json::from_str(&json).expect("session should deserialize");

        assert_eq!(session, parsed);
    }

    #[test]
    fn score_for_ignores_non_score_values_under_synthetic_key() {
        let mut session = SurveySession::new("assignment-1", "Reliability");
        session.record_conditional_answer(
            "Reliability",
            ATTRIBUTE_SCORE_KEY,
            AnswerValue::Text("7".to_string()),
        );

        assert_eq!(session.score_for("Reliability"), None);
    }

    #[test]
    fn session_json_without_a_phase_still_parses() {
        let session = SurveySession::new("assignment-1", "Reliability");
        let mut value = serde_json::to_value(&session).expect("session should serialize");
        value
            .as_object_mut()
            .expect("session serializes to an object")
            .remove("current_phase");

        let parsed: SurveySession =
            serde_json::from_value(value).expect("phase-less session should deserialize");

        assert_eq!(parsed.current_phase, None);
        assert_eq!(parsed.current_attribute, "Reliability");
    }
}
