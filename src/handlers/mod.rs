pub mod health_handler;
pub mod survey_handler;

pub use health_handler::{health_check, health_check_live, health_check_ready};
pub use survey_handler::{
    navigate, open_survey, submit_base_answers, submit_conditional_answers, submit_score,
};
