//! Conditional-visibility evaluator.
//!
//! Visibility is reactive: this runs against the current answers every time a
//! driving answer changes, never just once at question-set selection.

use std::collections::{HashMap, HashSet};

use crate::models::domain::{
    answer::AnswerValue,
    attribute::{AnswerPattern, Question},
};

/// Decide whether a question is shown (and therefore whether its
/// `is_required` flag counts toward advancement).
///
/// `known_ids` is the set of question ids belonging to the same attribute; a
/// predicate pointing outside it is a configuration bug and defaults to
/// visible rather than hiding the question forever.
pub fn is_visible(
    question: &Question,
    responses: &HashMap<String, AnswerValue>,
    known_ids: &HashSet<&str>,
) -> bool {
    let Some(logic) = &question.conditional_logic else {
        return true;
    };

    let show_if = &logic.show_if_answer;

    if !known_ids.contains(show_if.question_id.as_str()) {
        log::warn!(
            "question '{}' gates on '{}', which is not in this attribute; defaulting to visible",
            question.id,
            show_if.question_id
        );
        return true;
    }

    // An unanswered driver never matches.
    let Some(actual) = responses.get(&show_if.question_id) else {
        return false;
    };

    matches_pattern(&show_if.answer_value, actual)
}

fn matches_pattern(expected: &AnswerPattern, actual: &AnswerValue) -> bool {
    match (expected, actual.as_set()) {
        // Case A: list expected, list actual; any common element matches.
        (AnswerPattern::ScalarSet(exp), Some(act)) => exp.iter().any(|e| act.contains(e)),
        // Case C: scalar expected, list actual; membership.
        (AnswerPattern::Scalar(exp), Some(act)) => act.iter().any(|a| a == exp),
        // Case B: list expected, scalar actual; membership.
        (AnswerPattern::ScalarSet(exp), None) => actual
            .as_scalar()
            .map_or(false, |a| exp.iter().any(|e| e == &a)),
        // Case D: scalar on both sides; equality.
        (AnswerPattern::Scalar(exp), None) => {
            actual.as_scalar().map_or(false, |a| &a == exp)
        }
    }
}
