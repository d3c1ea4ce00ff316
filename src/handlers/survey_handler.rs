use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{NavigateRequest, SubmitAnswersRequest, SubmitScoreRequest},
};

#[get("/api/surveys/{token}")]
pub async fn open_survey(
    state: web::Data<AppState>,
    token: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let snapshot = state.survey_service.open_survey(&token).await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[post("/api/surveys/{token}/answers")]
pub async fn submit_base_answers(
    state: web::Data<AppState>,
    token: web::Path<String>,
    request: web::Json<SubmitAnswersRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let snapshot = state
        .survey_service
        .submit_base_answers(&token, request.into_inner().answers)
        .await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[post("/api/surveys/{token}/score")]
pub async fn submit_score(
    state: web::Data<AppState>,
    token: web::Path<String>,
    request: web::Json<SubmitScoreRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let snapshot = state
        .survey_service
        .submit_score(&token, request.score)
        .await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[post("/api/surveys/{token}/conditional-answers")]
pub async fn submit_conditional_answers(
    state: web::Data<AppState>,
    token: web::Path<String>,
    request: web::Json<SubmitAnswersRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let snapshot = state
        .survey_service
        .submit_conditional_answers(&token, request.into_inner().answers)
        .await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[post("/api/surveys/{token}/navigate")]
pub async fn navigate(
    state: web::Data<AppState>,
    token: web::Path<String>,
    request: web::Json<NavigateRequest>,
) -> Result<HttpResponse, AppError> {
    let snapshot = state
        .survey_service
        .navigate(&token, request.direction)
        .await?;
    Ok(HttpResponse::Ok().json(snapshot))
}
