pub mod answer;
pub mod assignment;
pub mod attribute;
pub mod session;
pub mod submission;

pub use answer::{AnswerInput, AnswerValue};
pub use assignment::{AssignmentStatus, EvaluationAssignment, EvaluationType};
pub use attribute::{
    AnswerPattern, AttributeDefinition, ConditionalLogic, ConditionalQuestionSet, Question,
    QuestionType, ScaleDescriptions, ScoreRange, ShowIfAnswer,
};
pub use session::{SurveyPhase, SurveySession, ATTRIBUTE_SCORE_KEY};
pub use submission::{AttributeResponseRow, AttributeScoreRow, Submission};
