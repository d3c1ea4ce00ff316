//! Page controller for the survey flow.
//!
//! Every mutation reloads the durable session, applies the change through the
//! engine, and persists before answering, so a reload at any point resumes at
//! the exact step the evaluator left. A failed persistence write degrades (the
//! in-memory state for this request is still served) instead of blocking.

use std::{collections::HashMap, sync::Arc};

use chrono::Utc;

use crate::{
    catalog::AttributeCatalog,
    errors::{AppError, AppResult},
    models::{
        domain::{
            assignment::{AssignmentStatus, EvaluationAssignment},
            attribute::{AttributeDefinition, ScoreRange},
            session::SurveySession,
            submission::AttributeResponseRow,
        },
        dto::{
            request::{AnswerEntry, NavigationDirection},
            response::SurveySnapshot,
        },
    },
    repositories::{AssignmentRepository, SubmissionRepository},
    survey::{
        engine::{SurveyEngine, SurveyPhase},
        session_store::SessionStore,
        visibility,
    },
};

pub struct SurveyService {
    assignments: Arc<dyn AssignmentRepository>,
    submissions: Arc<dyn SubmissionRepository>,
    sessions: Arc<dyn SessionStore>,
    catalog: &'static AttributeCatalog,
}

impl SurveyService {
    pub fn new(
        assignments: Arc<dyn AssignmentRepository>,
        submissions: Arc<dyn SubmissionRepository>,
        sessions: Arc<dyn SessionStore>,
        catalog: &'static AttributeCatalog,
    ) -> Self {
        Self {
            assignments,
            submissions,
            sessions,
            catalog,
        }
    }

    /// Open or resume the survey behind an assignment token. Creates the
    /// session on first open and flips the assignment to in-progress.
    pub async fn open_survey(&self, token: &str) -> AppResult<SurveySnapshot> {
        let assignment = self.require_assignment(token).await?;

        let engine = match self.sessions.load(token).await? {
            Some(session) => SurveyEngine::resume(self.catalog, session)?,
            None if assignment.status == AssignmentStatus::Completed => {
                // Already handed off and cleared; surface the terminal state
                // instead of silently restarting the survey.
                let mut session =
                    SurveySession::new(&assignment.id, &self.first_attribute_name()?);
                session.is_complete = true;
                SurveyEngine::resume(self.catalog, session)?
            }
            None => SurveyEngine::new(self.catalog, &assignment.id)?,
        };

        if assignment.status == AssignmentStatus::Pending {
            self.assignments
                .update_status(&assignment.id, AssignmentStatus::InProgress, None)
                .await?;
        }

        let degraded = if engine.phase() == SurveyPhase::Complete {
            false
        } else {
            self.persist(token, engine.session()).await
        };
        SurveySnapshot::from_engine(&engine, degraded)
    }

    pub async fn submit_base_answers(
        &self,
        token: &str,
        answers: Vec<AnswerEntry>,
    ) -> AppResult<SurveySnapshot> {
        let mut engine = self.load_engine(token).await?;

        for entry in answers {
            engine.record_base_answer(&entry.question_id, entry.value)?;
        }

        let degraded = self.persist(token, engine.session()).await;
        SurveySnapshot::from_engine(&engine, degraded)
    }

    pub async fn submit_score(&self, token: &str, score: i16) -> AppResult<SurveySnapshot> {
        let mut engine = self.load_engine(token).await?;

        engine.record_score(score)?;

        let degraded = self.persist(token, engine.session()).await;
        SurveySnapshot::from_engine(&engine, degraded)
    }

    pub async fn submit_conditional_answers(
        &self,
        token: &str,
        answers: Vec<AnswerEntry>,
    ) -> AppResult<SurveySnapshot> {
        let mut engine = self.load_engine(token).await?;

        for entry in answers {
            engine.record_conditional_answer(&entry.question_id, entry.value)?;
        }

        let degraded = self.persist(token, engine.session()).await;
        SurveySnapshot::from_engine(&engine, degraded)
    }

    /// Drive the state machine forward or backward. Reaching the terminal
    /// phase triggers the hand-off; the durable session survives any hand-off
    /// failure so re-issuing the same call retries it.
    pub async fn navigate(
        &self,
        token: &str,
        direction: NavigationDirection,
    ) -> AppResult<SurveySnapshot> {
        let assignment = self.require_assignment(token).await?;
        let mut engine = self.load_engine(token).await?;

        match direction {
            NavigationDirection::Next => {
                engine.advance()?;
            }
            NavigationDirection::Previous => {
                engine.previous()?;
            }
        }

        if engine.phase() == SurveyPhase::Complete {
            let mut session = engine.into_session();
            self.hand_off(&assignment, &mut session).await?;

            if let Err(err) = self.sessions.clear(token).await {
                log::warn!(
                    "failed to clear session for token '{}' after hand-off: {}",
                    token,
                    err
                );
            }

            let engine = SurveyEngine::resume(self.catalog, session)?;
            return SurveySnapshot::from_engine(&engine, false);
        }

        let degraded = self.persist(token, engine.session()).await;
        SurveySnapshot::from_engine(&engine, degraded)
    }

    async fn require_assignment(&self, token: &str) -> AppResult<EvaluationAssignment> {
        self.assignments
            .find_by_token(token)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("assignment for token '{}'", token)))
    }

    async fn load_engine(&self, token: &str) -> AppResult<SurveyEngine<'static>> {
        let session = self.sessions.load(token).await?.ok_or_else(|| {
            AppError::NotFound(format!(
                "no survey session for token '{}'; open the survey first",
                token
            ))
        })?;
        SurveyEngine::resume(self.catalog, session)
    }

    /// Persist the session; a write failure degrades instead of failing the
    /// request, because the caller still holds the authoritative state.
    async fn persist(&self, token: &str, session: &SurveySession) -> bool {
        match self.sessions.save(token, session).await {
            Ok(()) => false,
            Err(err) => {
                log::warn!(
                    "failed to persist session for token '{}': {}; progress may not survive a reload",
                    token,
                    err
                );
                true
            }
        }
    }

    /// Push all collected scores and answers to the persistence collaborator,
    /// one score + one response batch per attribute, then mark the assignment
    /// completed. Any error propagates before the session is cleared.
    async fn hand_off(
        &self,
        assignment: &EvaluationAssignment,
        session: &mut SurveySession,
    ) -> AppResult<()> {
        let submission = self
            .submissions
            .create_or_get_submission(
                &assignment.evaluator_id,
                &assignment.evaluatee_id,
                assignment.evaluation_type,
                &assignment.quarter_id,
            )
            .await?;
        session.submission_id = Some(submission.id.clone());

        for index in 0..self.catalog.len() {
            let definition = self
                .catalog
                .attribute_at(index)
                .ok_or_else(|| AppError::CatalogError(format!("no attribute at index {}", index)))?;
            let name = definition.name.as_str();

            let score = session.score_for(name).ok_or_else(|| {
                AppError::InternalError(format!(
                    "attribute '{}' completed without a recorded score",
                    name
                ))
            })?;

            self.submissions
                .upsert_attribute_score(&submission.id, name, score)
                .await?;

            let rows = self.response_rows(session, definition, score);
            self.submissions
                .upsert_attribute_responses(&submission.id, name, rows)
                .await?;

            log::debug!(
                "handed off attribute '{}' for submission {}",
                name,
                submission.id
            );
        }

        self.assignments
            .update_status(
                &assignment.id,
                AssignmentStatus::Completed,
                Some(Utc::now()),
            )
            .await?;
        Ok(())
    }

    /// Flatten one attribute's answers into reporting rows: base answers
    /// first, then the answers of the set selected by the final score,
    /// filtered down to the questions that were actually visible. Stale
    /// answers from a previously active band are left out.
    fn response_rows(
        &self,
        session: &SurveySession,
        definition: &AttributeDefinition,
        score: i16,
    ) -> Vec<AttributeResponseRow> {
        let name = definition.name.as_str();
        let known = definition.question_ids();

        let mut merged = HashMap::new();
        if let Some(base) = session.base_answers_for(name) {
            merged.extend(base.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        if let Some(conditional) = session.conditional_answers_for(name) {
            merged.extend(conditional.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        let mut rows = Vec::new();

        if let Some(base_answers) = session.base_answers_for(name) {
            for question in &definition.base_questions {
                if let Some(value) = base_answers.get(&question.id) {
                    rows.push(AttributeResponseRow {
                        question_id: question.id.clone(),
                        question_text: question.question_text.clone(),
                        response_value: value.render(),
                        score_context: "base".to_string(),
                    });
                }
            }
        }

        let active_set = ScoreRange::for_score(score)
            .and_then(|range| definition.conditional_set(range))
            .map(|set| set.questions.as_slice())
            .unwrap_or(&[]);

        if let Some(conditional_answers) = session.conditional_answers_for(name) {
            for question in active_set {
                if !visibility::is_visible(question, &merged, &known) {
                    continue;
                }
                if let Some(value) = conditional_answers.get(&question.id) {
                    rows.push(AttributeResponseRow {
                        question_id: question.id.clone(),
                        question_text: question.question_text.clone(),
                        response_value: value.render(),
                        score_context: ScoreRange::for_score(score)
                            .map(|r| r.as_str().to_string())
                            .unwrap_or_default(),
                    });
                }
            }
        }

        rows
    }

    fn first_attribute_name(&self) -> AppResult<String> {
        self.catalog
            .attribute_at(0)
            .map(|def| def.name.clone())
            .ok_or_else(|| AppError::CatalogError("attribute catalog is empty".to_string()))
    }
}
