use serde::{Deserialize, Serialize};

/// One of the ten fixed competency attributes, with its base questions and
/// the three score-band conditional question sets.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AttributeDefinition {
    pub name: String,
    pub definition: String,
    pub scale_descriptions: ScaleDescriptions,
    pub base_questions: Vec<Question>,
    pub conditional_question_sets: Vec<ConditionalQuestionSet>,
}

impl AttributeDefinition {
    pub fn conditional_set(&self, range: ScoreRange) -> Option<&ConditionalQuestionSet> {
        self.conditional_question_sets
            .iter()
            .find(|set| set.score_range == range)
    }

    /// Every question id belonging to this attribute, base and conditional.
    /// Conditional-visibility predicates may only reference these.
    pub fn question_ids(&self) -> std::collections::HashSet<&str> {
        self.base_questions
            .iter()
            .map(|q| q.id.as_str())
            .chain(
                self.conditional_question_sets
                    .iter()
                    .flat_map(|set| set.questions.iter().map(|q| q.id.as_str())),
            )
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScaleDescriptions {
    pub excellent: String,
    pub good: String,
    pub below_expectation: String,
    pub poor: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConditionalQuestionSet {
    pub score_range: ScoreRange,
    pub questions: Vec<Question>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Question {
    pub id: String,
    pub question_text: String,
    pub question_type: QuestionType,
    #[serde(default)]
    pub options: Vec<String>,
    pub is_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_logic: Option<ConditionalLogic>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    SingleSelect,
    MultiSelect,
    Text,
    YesNo,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConditionalLogic {
    pub show_if_answer: ShowIfAnswer,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ShowIfAnswer {
    pub question_id: String,
    pub answer_value: AnswerPattern,
}

/// The expected side of a visibility predicate: a single value or a set of
/// accepted values. Serialized as a bare string or an array of strings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AnswerPattern {
    Scalar(String),
    ScalarSet(Vec<String>),
}

/// Score band selecting which conditional question set applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ScoreRange {
    #[serde(rename = "9-10")]
    NineToTen,
    #[serde(rename = "6-8")]
    SixToEight,
    #[serde(rename = "1-5")]
    OneToFive,
}

impl ScoreRange {
    /// Band for an integer score. Scores outside 1-10 have no band.
    pub fn for_score(score: i16) -> Option<ScoreRange> {
        match score {
            9..=10 => Some(ScoreRange::NineToTen),
            6..=8 => Some(ScoreRange::SixToEight),
            1..=5 => Some(ScoreRange::OneToFive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreRange::NineToTen => "9-10",
            ScoreRange::SixToEight => "6-8",
            ScoreRange::OneToFive => "1-5",
        }
    }
}
