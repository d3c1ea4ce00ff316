use std::collections::HashMap;

use serde::Serialize;

use crate::{
    errors::AppResult,
    models::domain::{
        answer::AnswerValue,
        attribute::{Question, QuestionType, ScaleDescriptions},
        session::ATTRIBUTE_SCORE_KEY,
    },
    survey::engine::{SurveyEngine, SurveyPhase},
};

#[derive(Debug, Clone, Serialize)]
pub struct QuestionDto {
    pub id: String,
    pub question_text: String,
    pub question_type: QuestionType,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    pub is_required: bool,
}

impl From<&Question> for QuestionDto {
    fn from(question: &Question) -> Self {
        QuestionDto {
            id: question.id.clone(),
            question_text: question.question_text.clone(),
            question_type: question.question_type,
            options: question.options.clone(),
            is_required: question.is_required,
        }
    }
}

/// What the dashboard needs to render the current step of the survey.
/// Questions and answers are phase-scoped: base questions during the base
/// phase, the currently visible conditional questions during the conditional
/// phase, nothing otherwise.
#[derive(Debug, Serialize)]
pub struct SurveySnapshot {
    pub assignment_id: String,
    pub phase: SurveyPhase,
    pub current_attribute: String,
    pub current_attribute_index: usize,
    pub total_attributes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_descriptions: Option<ScaleDescriptions>,
    pub questions: Vec<QuestionDto>,
    pub answers: HashMap<String, AnswerValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_score: Option<i16>,
    pub can_advance: bool,
    pub can_go_back: bool,
    pub is_complete: bool,
    pub persistence_degraded: bool,
}

impl SurveySnapshot {
    pub fn from_engine(engine: &SurveyEngine<'_>, persistence_degraded: bool) -> AppResult<Self> {
        let session = engine.session();
        let phase = engine.phase();

        let (definition, scale_descriptions, questions, answers) = match phase {
            SurveyPhase::Intro => {
                let def = engine.current_definition()?;
                (
                    Some(def.definition.clone()),
                    Some(def.scale_descriptions.clone()),
                    vec![],
                    HashMap::new(),
                )
            }
            SurveyPhase::BaseQuestions => {
                let def = engine.current_definition()?;
                let questions = def.base_questions.iter().map(QuestionDto::from).collect();
                let answers = session
                    .base_answers_for(&session.current_attribute)
                    .cloned()
                    .unwrap_or_default();
                (None, None, questions, answers)
            }
            SurveyPhase::Scoring => {
                let def = engine.current_definition()?;
                (None, Some(def.scale_descriptions.clone()), vec![], HashMap::new())
            }
            SurveyPhase::ConditionalQuestions => {
                let questions = engine
                    .visible_conditional_questions()?
                    .into_iter()
                    .map(QuestionDto::from)
                    .collect();
                let mut answers = session
                    .conditional_answers_for(&session.current_attribute)
                    .cloned()
                    .unwrap_or_default();
                answers.remove(ATTRIBUTE_SCORE_KEY);
                (None, None, questions, answers)
            }
            SurveyPhase::Complete => (None, None, vec![], HashMap::new()),
        };

        Ok(SurveySnapshot {
            assignment_id: session.assignment_id.clone(),
            phase,
            current_attribute: session.current_attribute.clone(),
            current_attribute_index: session.current_attribute_index,
            total_attributes: engine.attribute_count(),
            definition,
            scale_descriptions,
            questions,
            answers,
            current_score: session.current_score,
            can_advance: engine.can_advance(),
            can_go_back: engine.can_go_back(),
            is_complete: session.is_complete,
            persistence_degraded,
        })
    }
}
