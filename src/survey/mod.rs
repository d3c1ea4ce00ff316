pub mod engine;
pub mod session_store;
pub mod visibility;

pub use engine::{SurveyEngine, SurveyPhase};
pub use session_store::{MongoSessionStore, SessionStore};
