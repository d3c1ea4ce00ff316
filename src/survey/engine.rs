//! Phase state machine for one evaluator's survey session.
//!
//! Every legal transition goes through `advance`/`previous`; handlers never
//! poke phases directly. The engine mutates only the in-memory session; the
//! service persists it after each mutation.

use std::collections::HashMap;

use crate::{
    catalog::AttributeCatalog,
    errors::{AppError, AppResult},
    models::domain::{
        answer::{AnswerInput, AnswerValue},
        attribute::{AttributeDefinition, Question, QuestionType, ScoreRange},
        session::SurveySession,
    },
    survey::visibility,
};

pub use crate::models::domain::session::SurveyPhase;

pub struct SurveyEngine<'a> {
    catalog: &'a AttributeCatalog,
    session: SurveySession,
    phase: SurveyPhase,
}

impl<'a> SurveyEngine<'a> {
    /// Fresh session at the first attribute's intro.
    pub fn new(catalog: &'a AttributeCatalog, assignment_id: &str) -> AppResult<Self> {
        let first = catalog
            .attribute_at(0)
            .ok_or_else(|| AppError::CatalogError("attribute catalog is empty".to_string()))?;

        Ok(Self {
            catalog,
            session: SurveySession::new(assignment_id, &first.name),
            phase: SurveyPhase::Intro,
        })
    }

    /// Rebuild the engine from a persisted session. The stored phase wins
    /// when it is consistent with the recorded data, so explicit navigation
    /// (including backing up within an attribute) survives a reload; sessions
    /// without a usable phase fall back to the first gap in (base answers,
    /// score, conditional answers). A session pointing at an already-completed
    /// attribute advances to the next attribute's intro instead of reopening
    /// it.
    pub fn resume(catalog: &'a AttributeCatalog, session: SurveySession) -> AppResult<Self> {
        let mut session = session;

        if session.is_complete {
            session.current_phase = Some(SurveyPhase::Complete);
            return Ok(Self {
                catalog,
                session,
                phase: SurveyPhase::Complete,
            });
        }

        while session
            .completed_attributes
            .contains(&session.current_attribute)
        {
            let next_index = session.current_attribute_index + 1;
            match catalog.attribute_at(next_index) {
                Some(def) => {
                    session.current_attribute_index = next_index;
                    session.current_attribute = def.name.clone();
                    session.current_phase = Some(SurveyPhase::Intro);
                    session.current_score = None;
                }
                None => {
                    session.is_complete = true;
                    session.current_phase = Some(SurveyPhase::Complete);
                    return Ok(Self {
                        catalog,
                        session,
                        phase: SurveyPhase::Complete,
                    });
                }
            }
        }

        // A lookup miss here means the stored session references an attribute
        // this process does not know; fatal rather than silently skipped.
        let definition = catalog.get_definition(&session.current_attribute)?;

        let phase = match session.current_phase {
            Some(stored) if stored_phase_is_usable(stored, &session) => stored,
            _ => reconstructed_phase(definition, &mut session),
        };
        // Older sessions without a stored phase pick one up here and carry it
        // forward on the next save.
        session.current_phase = Some(phase);

        Ok(Self {
            catalog,
            session,
            phase,
        })
    }

    pub fn phase(&self) -> SurveyPhase {
        self.phase
    }

    pub fn session(&self) -> &SurveySession {
        &self.session
    }

    pub fn into_session(self) -> SurveySession {
        self.session
    }

    pub fn current_definition(&self) -> AppResult<&AttributeDefinition> {
        self.catalog.get_definition(&self.session.current_attribute)
    }

    pub fn attribute_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn can_go_back(&self) -> bool {
        match self.phase {
            SurveyPhase::Intro => self.session.current_attribute_index > 0,
            SurveyPhase::Complete => false,
            _ => true,
        }
    }

    /// Record an answer to a base question. Only legal while the base
    /// questions phase is active for the current attribute.
    pub fn record_base_answer(&mut self, question_id: &str, input: AnswerInput) -> AppResult<()> {
        if self.phase != SurveyPhase::BaseQuestions {
            return Err(AppError::ValidationError(
                "base answers can only be recorded during the base questions phase".to_string(),
            ));
        }

        let definition = self.current_definition()?;
        let question = definition
            .base_questions
            .iter()
            .find(|q| q.id == question_id)
            .ok_or_else(|| {
                AppError::ValidationError(format!(
                    "'{}' is not a base question of attribute '{}'",
                    question_id, definition.name
                ))
            })?;

        let value = typed_answer(question, input)?;
        let attribute = self.session.current_attribute.clone();
        self.session.record_base_answer(&attribute, question_id, value);
        Ok(())
    }

    /// Record the 1-10 score for the current attribute. Re-recording before
    /// the conditional phase is allowed and re-derives the active set.
    pub fn record_score(&mut self, score: i16) -> AppResult<()> {
        if self.phase != SurveyPhase::Scoring {
            return Err(AppError::ValidationError(
                "a score can only be recorded during the scoring phase".to_string(),
            ));
        }

        if ScoreRange::for_score(score).is_none() {
            return Err(AppError::ValidationError(format!(
                "score must be an integer between 1 and 10, got {}",
                score
            )));
        }

        let attribute = self.session.current_attribute.clone();
        self.session.record_score(&attribute, score);
        Ok(())
    }

    /// Record an answer to a question in the active conditional set. The
    /// attribute's score must already be set; answers to questions outside
    /// the active set are rejected.
    pub fn record_conditional_answer(
        &mut self,
        question_id: &str,
        input: AnswerInput,
    ) -> AppResult<()> {
        if self.phase != SurveyPhase::ConditionalQuestions {
            return Err(AppError::ValidationError(
                "conditional answers can only be recorded during the conditional phase".to_string(),
            ));
        }

        let question = self
            .active_conditional_set()?
            .iter()
            .find(|q| q.id == question_id)
            .cloned()
            .ok_or_else(|| {
                AppError::ValidationError(format!(
                    "'{}' is not in the active conditional set",
                    question_id
                ))
            })?;

        let value = typed_answer(&question, input)?;
        let attribute = self.session.current_attribute.clone();
        self.session
            .record_conditional_answer(&attribute, question_id, value);
        Ok(())
    }

    /// The conditional question set selected by the current score. Empty when
    /// no score is set yet, or when the band has no set configured (the phase
    /// is then a pass-through).
    pub fn active_conditional_set(&self) -> AppResult<&[Question]> {
        let definition = self.current_definition()?;

        let Some(score) = self.session.current_score else {
            return Ok(&[]);
        };
        let Some(range) = ScoreRange::for_score(score) else {
            return Ok(&[]);
        };

        Ok(definition
            .conditional_set(range)
            .map(|set| set.questions.as_slice())
            .unwrap_or(&[]))
    }

    /// Questions of the active set that are currently visible, evaluated
    /// against all answers recorded for this attribute so far.
    pub fn visible_conditional_questions(&self) -> AppResult<Vec<&Question>> {
        let definition = self.current_definition()?;
        let known = definition.question_ids();
        let answers = self.attribute_answers();

        Ok(self
            .active_conditional_set()?
            .iter()
            .filter(|q| visibility::is_visible(q, &answers, &known))
            .collect())
    }

    /// Forward-transition gate. A `false` here is a normal, recoverable
    /// condition; the UI disables Next.
    pub fn can_advance(&self) -> bool {
        match self.phase {
            SurveyPhase::Intro => true,
            SurveyPhase::BaseQuestions => {
                let Ok(definition) = self.current_definition() else {
                    return false;
                };
                let empty = HashMap::new();
                let answers = self
                    .session
                    .base_answers_for(&self.session.current_attribute)
                    .unwrap_or(&empty);
                required_answered(&definition.base_questions, answers)
            }
            SurveyPhase::Scoring => self.session.current_score.is_some(),
            SurveyPhase::ConditionalQuestions => {
                let Ok(visible) = self.visible_conditional_questions() else {
                    return false;
                };
                let empty = HashMap::new();
                let answers = self
                    .session
                    .conditional_answers_for(&self.session.current_attribute)
                    .unwrap_or(&empty);
                visible
                    .iter()
                    .filter(|q| q.is_required)
                    .all(|q| answers.get(&q.id).map_or(false, |v| !v.is_empty()))
            }
            SurveyPhase::Complete => false,
        }
    }

    /// Move forward. Completing the last attribute's conditional phase lands
    /// on `Complete` and flags the session; otherwise the next attribute's
    /// intro is shown, never skipped.
    pub fn advance(&mut self) -> AppResult<SurveyPhase> {
        if !self.can_advance() {
            return Err(AppError::ValidationError(
                "cannot advance: required questions are still unanswered".to_string(),
            ));
        }

        self.phase = match self.phase {
            SurveyPhase::Intro => SurveyPhase::BaseQuestions,
            SurveyPhase::BaseQuestions => SurveyPhase::Scoring,
            SurveyPhase::Scoring => SurveyPhase::ConditionalQuestions,
            SurveyPhase::ConditionalQuestions => {
                let attribute = self.session.current_attribute.clone();
                self.session.completed_attributes.insert(attribute);

                let next_index = self.session.current_attribute_index + 1;
                match self.catalog.attribute_at(next_index) {
                    Some(def) => {
                        self.session.current_attribute_index = next_index;
                        self.session.current_attribute = def.name.clone();
                        self.session.current_score = None;
                        SurveyPhase::Intro
                    }
                    None => {
                        self.session.is_complete = true;
                        SurveyPhase::Complete
                    }
                }
            }
            SurveyPhase::Complete => {
                return Err(AppError::ValidationError(
                    "the survey is already complete".to_string(),
                ))
            }
        };

        self.session.current_phase = Some(self.phase);
        self.session.touch();
        Ok(self.phase)
    }

    /// Move backward. From an attribute's intro this jumps to the previous
    /// attribute's conditional questions (not its scoring), restores that
    /// attribute's recorded score, and reopens it for editing.
    pub fn previous(&mut self) -> AppResult<SurveyPhase> {
        self.phase = match self.phase {
            SurveyPhase::Intro => {
                if self.session.current_attribute_index == 0 {
                    return Err(AppError::ValidationError(
                        "cannot go back from the first attribute".to_string(),
                    ));
                }

                let prev_index = self.session.current_attribute_index - 1;
                let prev = self.catalog.attribute_at(prev_index).ok_or_else(|| {
                    AppError::CatalogError(format!("no attribute at index {}", prev_index))
                })?;

                self.session.current_attribute_index = prev_index;
                self.session.current_attribute = prev.name.clone();
                self.session.current_score = self.session.score_for(&prev.name);
                let reopened = prev.name.clone();
                self.session.completed_attributes.remove(&reopened);
                SurveyPhase::ConditionalQuestions
            }
            SurveyPhase::BaseQuestions => SurveyPhase::Intro,
            SurveyPhase::Scoring => SurveyPhase::BaseQuestions,
            SurveyPhase::ConditionalQuestions => SurveyPhase::Scoring,
            SurveyPhase::Complete => {
                return Err(AppError::ValidationError(
                    "the survey is already complete".to_string(),
                ))
            }
        };

        self.session.current_phase = Some(self.phase);
        self.session.touch();
        Ok(self.phase)
    }

    /// All answers recorded for the current attribute, base and conditional,
    /// as one map for visibility evaluation.
    fn attribute_answers(&self) -> HashMap<String, AnswerValue> {
        let mut merged = HashMap::new();
        if let Some(base) = self.session.base_answers_for(&self.session.current_attribute) {
            merged.extend(base.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        if let Some(conditional) = self
            .session
            .conditional_answers_for(&self.session.current_attribute)
        {
            merged.extend(conditional.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        merged
    }
}

/// A stored phase is only honored when the data it presumes exists. The
/// terminal phase is never taken from here; `is_complete` is authoritative
/// for that.
fn stored_phase_is_usable(phase: SurveyPhase, session: &SurveySession) -> bool {
    match phase {
        SurveyPhase::Intro | SurveyPhase::BaseQuestions | SurveyPhase::Scoring => true,
        SurveyPhase::ConditionalQuestions => {
            session.score_for(&session.current_attribute).is_some()
        }
        SurveyPhase::Complete => false,
    }
}

/// Phase fallback for sessions without a usable stored phase: the first gap
/// in (base answers, score) decides.
fn reconstructed_phase(
    definition: &AttributeDefinition,
    session: &mut SurveySession,
) -> SurveyPhase {
    match session.base_answers_for(&session.current_attribute) {
        None => SurveyPhase::Intro,
        Some(answers) if answers.is_empty() => SurveyPhase::Intro,
        Some(answers) => {
            if !required_answered(&definition.base_questions, answers) {
                SurveyPhase::BaseQuestions
            } else {
                match session.score_for(&session.current_attribute) {
                    None => {
                        session.current_score = None;
                        SurveyPhase::Scoring
                    }
                    Some(score) => {
                        session.current_score = Some(score);
                        SurveyPhase::ConditionalQuestions
                    }
                }
            }
        }
    }
}

fn required_answered(questions: &[Question], answers: &HashMap<String, AnswerValue>) -> bool {
    questions
        .iter()
        .filter(|q| q.is_required)
        .all(|q| answers.get(&q.id).map_or(false, |v| !v.is_empty()))
}

/// Type a raw wire answer against the question's declared type, validating
/// select answers against the configured options.
fn typed_answer(question: &Question, input: AnswerInput) -> AppResult<AnswerValue> {
    match (question.question_type, input) {
        (QuestionType::Text, AnswerInput::Scalar(s)) => Ok(AnswerValue::Text(s)),
        (QuestionType::YesNo, AnswerInput::Scalar(s)) => {
            if s == "Yes" || s == "No" {
                Ok(AnswerValue::SingleChoice(s))
            } else {
                Err(AppError::ValidationError(format!(
                    "question '{}' expects Yes or No",
                    question.id
                )))
            }
        }
        (QuestionType::SingleSelect, AnswerInput::Scalar(s)) => {
            if question.options.contains(&s) {
                Ok(AnswerValue::SingleChoice(s))
            } else {
                Err(AppError::ValidationError(format!(
                    "'{}' is not an option of question '{}'",
                    s, question.id
                )))
            }
        }
        (QuestionType::MultiSelect, AnswerInput::List(values)) => {
            if let Some(unknown) = values.iter().find(|v| !question.options.contains(v)) {
                return Err(AppError::ValidationError(format!(
                    "'{}' is not an option of question '{}'",
                    unknown, question.id
                )));
            }
            Ok(AnswerValue::MultiChoice(values))
        }
        (question_type, _) => Err(AppError::ValidationError(format!(
            "answer shape does not match {:?} question '{}'",
            question_type, question.id
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{catalog, AttributeCatalog};
    use crate::models::domain::attribute::{
        AnswerPattern, AttributeDefinition, ConditionalLogic, ConditionalQuestionSet,
        ScaleDescriptions, ShowIfAnswer,
    };
    use crate::models::domain::session::ATTRIBUTE_SCORE_KEY;

    fn scalar(s: &str) -> AnswerInput {
        AnswerInput::Scalar(s.to_string())
    }

    fn list(values: &[&str]) -> AnswerInput {
        AnswerInput::List(values.iter().map(|v| v.to_string()).collect())
    }

    /// Walk one attribute to its conditional phase with the given score.
    fn engine_at_conditional(score: i16) -> SurveyEngine<'static> {
        let mut engine = SurveyEngine::new(catalog(), "assignment-1").expect("engine");
        engine.advance().expect("intro -> base");
        engine
            .record_base_answer("rel_base_1", list(&["Meets agreed deadlines"]))
            .expect("base 1");
        engine
            .record_base_answer("rel_base_2", scalar("Shipped the Q3 report on time."))
            .expect("base 2");
        engine.advance().expect("base -> scoring");
        engine.record_score(score).expect("score");
        engine.advance().expect("scoring -> conditional");
        engine
    }

    #[test]
    fn new_engine_starts_at_first_attribute_intro() {
        let engine = SurveyEngine::new(catalog(), "assignment-1").expect("engine");

        assert_eq!(engine.phase(), SurveyPhase::Intro);
        assert_eq!(engine.session().current_attribute, "Reliability");
        assert_eq!(engine.session().current_attribute_index, 0);
        assert!(!engine.can_go_back());
    }

    #[test]
    fn base_phase_blocks_until_required_answers_present() {
        let mut engine = SurveyEngine::new(catalog(), "assignment-1").expect("engine");
        engine.advance().expect("intro -> base");

        assert_eq!(engine.phase(), SurveyPhase::BaseQuestions);
        assert!(!engine.can_advance());
        assert!(engine.advance().is_err());

        engine
            .record_base_answer("rel_base_1", list(&["Meets agreed deadlines"]))
            .expect("base 1");
        assert!(!engine.can_advance());

        engine
            .record_base_answer("rel_base_2", scalar("Delivered the migration as promised."))
            .expect("base 2");
        assert!(engine.can_advance());
    }

    #[test]
    fn empty_answers_do_not_satisfy_required_questions() {
        let mut engine = SurveyEngine::new(catalog(), "assignment-1").expect("engine");
        engine.advance().expect("intro -> base");

        engine
            .record_base_answer("rel_base_1", list(&[]))
            .expect("empty multi recorded");
        engine
            .record_base_answer("rel_base_2", scalar("   "))
            .expect("blank text recorded");

        assert!(!engine.can_advance());
    }

    #[test]
    fn scoring_phase_rejects_out_of_range_scores() {
        let mut engine = SurveyEngine::new(catalog(), "assignment-1").expect("engine");
        engine.advance().expect("intro -> base");
        engine
            .record_base_answer("rel_base_1", list(&["Meets agreed deadlines"]))
            .expect("base 1");
        engine
            .record_base_answer("rel_base_2", scalar("Example."))
            .expect("base 2");
        engine.advance().expect("base -> scoring");

        assert!(engine.record_score(0).is_err());
        assert!(engine.record_score(11).is_err());
        assert!(!engine.can_advance());

        engine.record_score(7).expect("valid score");
        assert!(engine.can_advance());
    }

    #[test]
    fn score_selects_matching_conditional_set() {
        let engine = engine_at_conditional(7);
        let set = engine.active_conditional_set().expect("set");

        assert!(set.iter().all(|q| q.id.starts_with("rel_mid_")));
    }

    #[test]
    fn select_answers_must_match_configured_options() {
        let mut engine = SurveyEngine::new(catalog(), "assignment-1").expect("engine");
        engine.advance().expect("intro -> base");

        let err = engine
            .record_base_answer("rel_base_1", list(&["Not an option"]))
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        let err = engine
            .record_base_answer("rel_base_1", scalar("Meets agreed deadlines"))
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn conditional_gate_counts_only_visible_required_questions() {
        let mut engine = engine_at_conditional(7);

        // rel_mid_1 and rel_mid_4 are required and visible; rel_mid_2 and
        // rel_mid_3 stay hidden for this choice.
        engine
            .record_conditional_answer("rel_mid_1", scalar("Inconsistent preparation"))
            .expect("mid 1");
        assert!(!engine.can_advance());

        engine
            .record_conditional_answer("rel_mid_4", scalar("Yes"))
            .expect("mid 4");
        assert!(engine.can_advance());
    }

    #[test]
    fn answering_gate_driver_makes_follow_up_required() {
        let mut engine = engine_at_conditional(7);

        engine
            .record_conditional_answer("rel_mid_1", scalar("Other"))
            .expect("mid 1");
        engine
            .record_conditional_answer("rel_mid_4", scalar("No"))
            .expect("mid 4");

        // "Other" reveals rel_mid_2, which is required.
        assert!(!engine.can_advance());

        engine
            .record_conditional_answer("rel_mid_2", scalar("Context switching."))
            .expect("mid 2");
        assert!(engine.can_advance());
    }

    #[test]
    fn rescoring_rederives_the_active_set_and_ignores_stale_answers() {
        let mut engine = engine_at_conditional(7);
        engine
            .record_conditional_answer("rel_mid_1", scalar("Occasional missed deadlines"))
            .expect("mid answer under 6-8");

        // Back to scoring, pick a 9: the active set must become "9-10" and
        // the stored 6-8 answers no longer gate advancement.
        engine.previous().expect("conditional -> scoring");
        engine.record_score(9).expect("rescore");
        engine.advance().expect("scoring -> conditional");

        let set = engine.active_conditional_set().expect("set");
        assert!(set.iter().all(|q| q.id.starts_with("rel_high_")));
        assert!(!engine.can_advance());

        engine
            .record_conditional_answer("rel_high_1", scalar("No"))
            .expect("high 1");
        engine
            .record_conditional_answer("rel_high_3", scalar("Usually"))
            .expect("high 3");
        assert!(engine.can_advance());

        // The stale answer is still stored, just irrelevant.
        assert!(engine
            .session()
            .conditional_answers_for("Reliability")
            .expect("answers")
            .contains_key("rel_mid_1"));
    }

    #[test]
    fn completing_an_attribute_shows_next_attribute_intro() {
        let mut engine = engine_at_conditional(9);
        engine
            .record_conditional_answer("rel_high_1", scalar("No"))
            .expect("high 1");
        engine
            .record_conditional_answer("rel_high_3", scalar("Always"))
            .expect("high 3");

        let phase = engine.advance().expect("conditional -> next intro");

        assert_eq!(phase, SurveyPhase::Intro);
        assert_eq!(engine.session().current_attribute, "Accountability");
        assert_eq!(engine.session().current_attribute_index, 1);
        assert_eq!(engine.session().current_score, None);
        assert!(engine
            .session()
            .completed_attributes
            .contains("Reliability"));
        assert!(!engine.session().is_complete);
    }

    #[test]
    fn previous_from_intro_reopens_prior_attribute_conditional_phase() {
        let mut engine = engine_at_conditional(9);
        engine
            .record_conditional_answer("rel_high_1", scalar("No"))
            .expect("high 1");
        engine
            .record_conditional_answer("rel_high_3", scalar("Always"))
            .expect("high 3");
        engine.advance().expect("to Accountability intro");

        let phase = engine.previous().expect("intro -> previous conditional");

        assert_eq!(phase, SurveyPhase::ConditionalQuestions);
        assert_eq!(engine.session().current_attribute, "Reliability");
        assert_eq!(engine.session().current_attribute_index, 0);
        assert_eq!(engine.session().current_score, Some(9));
        assert!(!engine
            .session()
            .completed_attributes
            .contains("Reliability"));
    }

    #[test]
    fn previous_from_first_attribute_intro_is_rejected() {
        let mut engine = SurveyEngine::new(catalog(), "assignment-1").expect("engine");

        assert!(!engine.can_go_back());
        assert!(engine.previous().is_err());
        assert_eq!(engine.phase(), SurveyPhase::Intro);
    }

    #[test]
    fn backward_navigation_mirrors_the_forward_graph_within_an_attribute() {
        let mut engine = engine_at_conditional(7);

        assert_eq!(engine.previous().expect("back"), SurveyPhase::Scoring);
        assert_eq!(engine.previous().expect("back"), SurveyPhase::BaseQuestions);
        assert_eq!(engine.previous().expect("back"), SurveyPhase::Intro);
    }

    #[test]
    fn resume_without_a_stored_phase_reconstructs_from_answer_gaps() {
        let mut engine = SurveyEngine::new(catalog(), "assignment-1").expect("engine");

        // Complete attributes 0..3 minimally, then stop right after the base
        // answers of attribute index 3 ("Taking Initiative").
        for _ in 0..3 {
            complete_current_attribute(&mut engine);
        }
        engine.advance().expect("intro -> base");
        engine
            .record_base_answer("init_base_1", list(&["Volunteers for unowned work"]))
            .expect("base 1");

        // Sessions written before the phase was stored carry no phase.
        let mut session = engine.into_session();
        session.current_phase = None;
        let resumed = SurveyEngine::resume(catalog(), session).expect("resume");

        assert_eq!(resumed.phase(), SurveyPhase::Scoring);
        assert_eq!(resumed.session().current_attribute_index, 3);
        assert_eq!(resumed.session().current_attribute, "Taking Initiative");
        assert_eq!(
            resumed.session().current_phase,
            Some(SurveyPhase::Scoring),
            "the reconstructed phase is carried forward"
        );
    }

    #[test]
    fn resume_restores_the_phase_left_by_navigation() {
        let mut engine = SurveyEngine::new(catalog(), "assignment-1").expect("engine");
        engine.advance().expect("intro -> base");

        // No answers yet: only the stored phase distinguishes this session
        // from a fresh one.
        let session = engine.into_session();
        let mut resumed = SurveyEngine::resume(catalog(), session).expect("resume");

        assert_eq!(resumed.phase(), SurveyPhase::BaseQuestions);
        resumed
            .record_base_answer("rel_base_1", list(&["Meets agreed deadlines"]))
            .expect("first base answer after reload");
    }

    #[test]
    fn resume_after_backing_into_scoring_allows_rescoring() {
        let mut engine = engine_at_conditional(7);
        engine.previous().expect("conditional -> scoring");

        let session = engine.into_session();
        let mut resumed = SurveyEngine::resume(catalog(), session).expect("resume");

        assert_eq!(resumed.phase(), SurveyPhase::Scoring);
        resumed.record_score(9).expect("rescore after reload");
        resumed.advance().expect("scoring -> conditional");

        let set = resumed.active_conditional_set().expect("set");
        assert!(set.iter().all(|q| q.id.starts_with("rel_high_")));
    }

    #[test]
    fn resume_ignores_a_stored_conditional_phase_without_a_score() {
        let engine = engine_at_conditional(7);

        // A conditional phase presumes a recorded score; strip it to mimic a
        // mangled stored session.
        let mut session = engine.into_session();
        session.current_score = None;
        if let Some(answers) = session.conditional_responses.get_mut("Reliability") {
            answers.remove(ATTRIBUTE_SCORE_KEY);
        }

        let resumed = SurveyEngine::resume(catalog(), session).expect("resume");

        assert_eq!(resumed.phase(), SurveyPhase::Scoring);
    }

    #[test]
    fn resume_with_score_lands_on_conditional_phase() {
        let engine = engine_at_conditional(7);
        let session = engine.into_session();

        let resumed = SurveyEngine::resume(catalog(), session).expect("resume");

        assert_eq!(resumed.phase(), SurveyPhase::ConditionalQuestions);
        assert_eq!(resumed.session().current_score, Some(7));
    }

    #[test]
    fn resume_skips_completed_current_attribute() {
        let mut engine = SurveyEngine::new(catalog(), "assignment-1").expect("engine");
        complete_current_attribute(&mut engine);

        // Rewind the bookkeeping as if the reload raced the attribute bump.
        let mut session = engine.into_session();
        session.current_attribute = "Reliability".to_string();
        session.current_attribute_index = 0;

        let resumed = SurveyEngine::resume(catalog(), session).expect("resume");

        assert_eq!(resumed.phase(), SurveyPhase::Intro);
        assert_eq!(resumed.session().current_attribute, "Accountability");
        assert_eq!(resumed.session().current_attribute_index, 1);
    }

    #[test]
    fn resume_of_untouched_session_lands_on_intro() {
        let engine = SurveyEngine::new(catalog(), "assignment-1").expect("engine");
        let session = engine.into_session();

        let resumed = SurveyEngine::resume(catalog(), session).expect("resume");

        assert_eq!(resumed.phase(), SurveyPhase::Intro);
        assert_eq!(resumed.session().current_attribute_index, 0);
    }

    #[test]
    fn resume_of_complete_session_is_terminal() {
        let mut session = SurveySession::new("assignment-1", "Reliability");
        session.is_complete = true;

        let resumed = SurveyEngine::resume(catalog(), session).expect("resume");

        assert_eq!(resumed.phase(), SurveyPhase::Complete);
        assert!(!resumed.can_advance());
    }

    #[test]
    fn full_survey_completes_only_after_the_tenth_attribute() {
        let mut engine = SurveyEngine::new(catalog(), "assignment-1").expect("engine");

        for i in 0..10 {
            assert!(!engine.session().is_complete, "complete too early at {}", i);
            complete_current_attribute(&mut engine);
        }

        assert_eq!(engine.phase(), SurveyPhase::Complete);
        assert!(engine.session().is_complete);
        assert_eq!(engine.session().completed_attributes.len(), 10);
        assert!(engine.advance().is_err());
    }

    #[test]
    fn empty_conditional_set_is_a_pass_through() {
        let catalog = sparse_catalog();
        let mut engine = SurveyEngine::new(catalog, "assignment-1").expect("engine");

        engine.advance().expect("intro -> base");
        engine
            .record_base_answer("focus_base_1", scalar("Yes"))
            .expect("base");
        engine.advance().expect("base -> scoring");
        engine.record_score(2).expect("score");
        engine.advance().expect("scoring -> conditional");

        // The 1-5 band has no set configured in this catalog; the phase is
        // immediately advanceable.
        assert!(engine.active_conditional_set().expect("set").is_empty());
        assert!(engine.can_advance());
        assert_eq!(engine.advance().expect("finish"), SurveyPhase::Complete);
    }

    #[test]
    fn completion_guard_tracks_newly_visible_required_questions() {
        let catalog = sparse_catalog();
        let mut engine = SurveyEngine::new(catalog, "assignment-1").expect("engine");

        engine.advance().expect("intro -> base");
        engine
            .record_base_answer("focus_base_1", scalar("Yes"))
            .expect("base");
        engine.advance().expect("base -> scoring");
        engine.record_score(9).expect("score");
        engine.advance().expect("scoring -> conditional");

        engine
            .record_conditional_answer("focus_high_1", scalar("Yes"))
            .expect("driver");

        // Answering Yes revealed a second required question; the transition
        // must flip back to blocked until it is answered.
        assert!(!engine.can_advance());

        engine
            .record_conditional_answer("focus_high_2", scalar("Because."))
            .expect("follow-up");
        assert!(engine.can_advance());
    }

    fn complete_current_attribute(engine: &mut SurveyEngine<'_>) {
        let definition = engine.current_definition().expect("definition").clone();

        engine.advance().expect("intro -> base");
        for question in &definition.base_questions {
            if !question.is_required {
                continue;
            }
            let input = minimal_input(question);
            engine
                .record_base_answer(&question.id, input)
                .expect("base answer");
        }
        engine.advance().expect("base -> scoring");
        engine.record_score(7).expect("score");
        engine.advance().expect("scoring -> conditional");

        // Answer required questions as they become visible.
        loop {
            let pending: Vec<Question> = engine
                .visible_conditional_questions()
                .expect("visible")
                .into_iter()
                .filter(|q| q.is_required)
                .filter(|q| {
                    engine
                        .session()
                        .conditional_answers_for(&engine.session().current_attribute)
                        .map_or(true, |answers| !answers.contains_key(&q.id))
                })
                .cloned()
                .collect();

            if pending.is_empty() {
                break;
            }
            for question in pending {
                let input = minimal_input(&question);
                engine
                    .record_conditional_answer(&question.id, input)
                    .expect("conditional answer");
            }
        }

        engine.advance().expect("conditional -> next");
    }

    /// A non-revealing answer for a question: last option for selects, "No"
    /// for yes/no, short text otherwise.
    fn minimal_input(question: &Question) -> AnswerInput {
        match question.question_type {
            QuestionType::Text => scalar("n/a"),
            QuestionType::YesNo => scalar("No"),
            QuestionType::SingleSelect => {
                AnswerInput::Scalar(question.options.last().expect("options").clone())
            }
            QuestionType::MultiSelect => {
                AnswerInput::List(vec![question.options.first().expect("options").clone()])
            }
        }
    }

    /// One-attribute catalog: a gated required follow-up in the 9-10 band and
    /// no 1-5 set at all.
    fn sparse_catalog() -> &'static AttributeCatalog {
        let attribute = AttributeDefinition {
            name: "Focus".to_string(),
            definition: "Test attribute".to_string(),
            scale_descriptions: ScaleDescriptions {
                excellent: "ex".to_string(),
                good: "good".to_string(),
                below_expectation: "below".to_string(),
                poor: "poor".to_string(),
            },
            base_questions: vec![Question {
                id: "focus_base_1".to_string(),
                question_text: "Focused?".to_string(),
                question_type: QuestionType::YesNo,
                options: vec![],
                is_required: true,
                conditional_logic: None,
            }],
            conditional_question_sets: vec![
                ConditionalQuestionSet {
                    score_range: ScoreRange::NineToTen,
                    questions: vec![
                        Question {
                            id: "focus_high_1".to_string(),
                            question_text: "Exceptional?".to_string(),
                            question_type: QuestionType::YesNo,
                            options: vec![],
                            is_required: true,
                            conditional_logic: None,
                        },
                        Question {
                            id: "focus_high_2".to_string(),
                            question_text: "Why?".to_string(),
                            question_type: QuestionType::Text,
                            options: vec![],
                            is_required: true,
                            conditional_logic: Some(ConditionalLogic {
                                show_if_answer: ShowIfAnswer {
                                    question_id: "focus_high_1".to_string(),
                                    answer_value: AnswerPattern::Scalar("Yes".to_string()),
                                },
                            }),
                        },
                    ],
                },
                ConditionalQuestionSet {
                    score_range: ScoreRange::SixToEight,
                    questions: vec![Question {
                        id: "focus_mid_1".to_string(),
                        question_text: "Gap?".to_string(),
                        question_type: QuestionType::Text,
                        options: vec![],
                        is_required: false,
                        conditional_logic: None,
                    }],
                },
            ],
        };

        Box::leak(Box::new(AttributeCatalog::new(vec![attribute])))
    }
}
