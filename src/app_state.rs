use std::sync::Arc;

use crate::{
    catalog::catalog,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoAssignmentRepository, MongoSubmissionRepository},
    services::SurveyService,
    survey::MongoSessionStore,
};

#[derive(Clone)]
pub struct AppState {
    pub survey_service: Arc<SurveyService>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let assignment_repository = Arc::new(MongoAssignmentRepository::new(&db));
        assignment_repository.ensure_indexes().await?;

        let submission_repository = Arc::new(MongoSubmissionRepository::new(&db));
        submission_repository.ensure_indexes().await?;

        let session_store = Arc::new(MongoSessionStore::new(&db));
        session_store.ensure_indexes().await?;

        let survey_service = Arc::new(SurveyService::new(
            assignment_repository,
            submission_repository,
            session_store,
            catalog(),
        ));

        Ok(Self {
            survey_service,
            db,
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
