mod data;

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::{
    errors::{AppError, AppResult},
    models::domain::attribute::{AttributeDefinition, QuestionType, ScoreRange},
};

/// Read-only lookup over the ten fixed competency attributes. Built once per
/// process; a lookup miss is fatal for the survey session that hit it.
pub struct AttributeCatalog {
    attributes: Vec<AttributeDefinition>,
    by_name: HashMap<String, usize>,
}

impl AttributeCatalog {
    pub fn new(attributes: Vec<AttributeDefinition>) -> Self {
        let by_name = attributes
            .iter()
            .enumerate()
            .map(|(i, attr)| (attr.name.clone(), i))
            .collect();
        Self {
            attributes,
            by_name,
        }
    }

    pub fn get_definition(&self, attribute_name: &str) -> AppResult<&AttributeDefinition> {
        self.by_name
            .get(attribute_name)
            .map(|&i| &self.attributes[i])
            .ok_or_else(|| {
                AppError::CatalogError(format!(
                    "unknown attribute '{}', survey cannot proceed",
                    attribute_name
                ))
            })
    }

    pub fn attribute_at(&self, index: usize) -> Option<&AttributeDefinition> {
        self.attributes.get(index)
    }

    pub fn attribute_names(&self) -> Vec<&str> {
        self.attributes.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Configuration sanity checks, run once at startup. Select questions
    /// need options, visibility predicates must reference a question id in
    /// the same attribute, and question ids must be unique catalog-wide.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let mut seen_ids: HashSet<&str> = HashSet::new();

        for attr in &self.attributes {
            let known = attr.question_ids();
            let all_questions = attr.base_questions.iter().chain(
                attr.conditional_question_sets
                    .iter()
                    .flat_map(|set| set.questions.iter()),
            );

            for question in all_questions {
                if !seen_ids.insert(&question.id) {
                    issues.push(format!("duplicate question id '{}'", question.id));
                }

                match question.question_type {
                    QuestionType::SingleSelect | QuestionType::MultiSelect => {
                        if question.options.len() < 2 {
                            issues.push(format!(
                                "select question '{}' has fewer than two options",
                                question.id
                            ));
                        }
                    }
                    QuestionType::YesNo | QuestionType::Text => {}
                }

                if let Some(logic) = &question.conditional_logic {
                    let driver = logic.show_if_answer.question_id.as_str();
                    if !known.contains(driver) {
                        issues.push(format!(
                            "question '{}' references unknown driver '{}' in attribute '{}'",
                            question.id, driver, attr.name
                        ));
                    }
                    if driver == question.id {
                        issues.push(format!("question '{}' references itself", question.id));
                    }
                }
            }

            for range in [
                ScoreRange::NineToTen,
                ScoreRange::SixToEight,
                ScoreRange::OneToFive,
            ] {
                match attr.conditional_set(range) {
                    None => issues.push(format!(
                        "attribute '{}' is missing the '{}' conditional set",
                        attr.name,
                        range.as_str()
                    )),
                    Some(set) if set.questions.is_empty() || set.questions.len() > 9 => issues
                        .push(format!(
                            "attribute '{}' set '{}' has {} questions, expected 1-9",
                            attr.name,
                            range.as_str(),
                            set.questions.len()
                        )),
                    Some(_) => {}
                }
            }
        }

        issues
    }
}

/// The process-wide catalog. Validated loudly on first access; a malformed
/// catalog is a configuration bug, so debug builds refuse to start while
/// release builds log and fall back to default-visible behavior.
pub fn catalog() -> &'static AttributeCatalog {
    static CATALOG: Lazy<AttributeCatalog> = Lazy::new(|| {
        let catalog = AttributeCatalog::new(data::attributes());
        let issues = catalog.validate();
        for issue in &issues {
            log::error!("attribute catalog: {}", issue);
        }
        debug_assert!(issues.is_empty(), "attribute catalog is malformed: {:?}", issues);
        catalog
    });
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::attribute::AnswerPattern;

    #[test]
    fn catalog_has_ten_attributes_in_fixed_order() {
        let names = catalog().attribute_names();

        assert_eq!(
            names,
            vec![
                "Reliability",
                "Accountability",
                "Quality of Work",
                "Taking Initiative",
                "Adaptability",
                "Problem Solving",
                "Teamwork",
                "Continuous Improvement",
                "Communication Skills",
                "Leadership",
            ]
        );
    }

    #[test]
    fn every_attribute_has_two_base_questions_and_three_sets() {
        for name in catalog().attribute_names() {
            let def = catalog().get_definition(name).expect("attribute exists");

            assert_eq!(def.base_questions.len(), 2, "attribute {}", name);
            assert_eq!(def.conditional_question_sets.len(), 3, "attribute {}", name);

            for set in &def.conditional_question_sets {
                assert!(
                    (1..=9).contains(&set.questions.len()),
                    "attribute {} set {} has {} questions",
                    name,
                    set.score_range.as_str(),
                    set.questions.len()
                );
            }
        }
    }

    #[test]
    fn catalog_passes_its_own_validation() {
        assert_eq!(catalog().validate(), Vec::<String>::new());
    }

    #[test]
    fn unknown_attribute_is_a_catalog_error() {
        let err = catalog().get_definition("Charisma").unwrap_err();
        assert!(matches!(err, AppError::CatalogError(_)));
    }

    #[test]
    fn visibility_predicates_reference_earlier_questions() {
        // Every driver id must appear before its dependent within the base
        // questions followed by the dependent's own set.
        for name in catalog().attribute_names() {
            let def = catalog().get_definition(name).expect("attribute exists");

            for set in &def.conditional_question_sets {
                let mut earlier: Vec<&str> = def
                    .base_questions
                    .iter()
                    .map(|q| q.id.as_str())
                    .collect();

                for question in &set.questions {
                    if let Some(logic) = &question.conditional_logic {
                        assert!(
                            earlier.contains(&logic.show_if_answer.question_id.as_str()),
                            "question '{}' driver does not precede it",
                            question.id
                        );
                    }
                    earlier.push(question.id.as_str());
                }
            }
        }
    }

    #[test]
    fn catalog_contains_both_scalar_and_set_patterns() {
        let mut saw_scalar = false;
        let mut saw_set = false;

        for name in catalog().attribute_names() {
            let def = catalog().get_definition(name).expect("attribute exists");
            for set in &def.conditional_question_sets {
                for question in &set.questions {
                    if let Some(logic) = &question.conditional_logic {
                        match logic.show_if_answer.answer_value {
                            AnswerPattern::Scalar(_) => saw_scalar = true,
                            AnswerPattern::ScalarSet(_) => saw_set = true,
                        }
                    }
                }
            }
        }

        assert!(saw_scalar);
        assert!(saw_set);
    }
}
