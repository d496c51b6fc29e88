use crate::allocation::{age_adjustment_factor, AllocationModels};
use crate::assessment::{AssessmentEngine, AssessmentResult};
use crate::config::Config;
use crate::errors::{AppError, ResultExt};
use crate::models::*;
use crate::questionnaire::QuestionSet;
use crate::risk_profile::RiskProfile;
use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Question set and allocation tables every assessment runs against.
    pub engine: AssessmentEngine,
    /// Recently computed assessments, retrievable by id until the TTL expires.
    pub assessment_cache: Cache<Uuid, AssessmentResult>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let engine = AssessmentEngine::new(
            QuestionSet::default(),
            AllocationModels::default(),
            config.require_all_answers,
        );
        let assessment_cache = Cache::builder()
            .time_to_live(Duration::from_secs(config.assessment_cache_ttl_secs))
            .max_capacity(config.assessment_cache_capacity)
            .build();

        Self {
            config,
            engine,
            assessment_cache,
        }
    }
}

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// GET /api/v1/questionnaire
///
/// Returns the risk tolerance questions in display order.
#[utoipa::path(
    get,
    path = "/api/v1/questionnaire",
    responses((status = 200, description = "Questionnaire", body = QuestionnaireResponse))
)]
pub async fn get_questionnaire(
    State(state): State<Arc<AppState>>,
) -> Json<QuestionnaireResponse> {
    let questions = state.engine.questions();
    let (min_score, max_score) = questions.score_range();

    Json(QuestionnaireResponse {
        questions: questions.questions().to_vec(),
        min_score,
        max_score,
        requires_all_answers: state.engine.requires_all_answers(),
    })
}

/// POST /api/v1/assessments
///
/// Scores a completed questionnaire and returns the risk profile, the
/// age-adjusted allocation and the recommendation text. The result is kept
/// in the session cache so it can be fetched again by id.
#[utoipa::path(
    post,
    path = "/api/v1/assessments",
    request_body = AssessmentRequest,
    responses(
        (status = 201, description = "Assessment computed", body = AssessmentResult),
        (status = 400, description = "Malformed body or answer sheet", body = ErrorResponse)
    )
)]
pub async fn create_assessment(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AssessmentResult>), AppError> {
    let Json(request) = payload?;
    tracing::info!(
        "POST /assessments - {} answer(s), age {}",
        request.answers.len(),
        request.age
    );

    let result = state
        .engine
        .assess(&request.answers, request.age)
        .context("Assessment rejected")?;

    state
        .assessment_cache
        .insert(result.id, result.clone())
        .await;

    Ok((StatusCode::CREATED, Json(result)))
}

/// GET /api/v1/assessments/:id
///
/// Returns an assessment computed earlier in the session.
#[utoipa::path(
    get,
    path = "/api/v1/assessments/{id}",
    params(("id" = Uuid, Path, description = "Assessment id returned on creation")),
    responses(
        (status = 200, description = "Assessment", body = AssessmentResult),
        (status = 404, description = "Unknown or expired", body = ErrorResponse)
    )
)]
pub async fn get_assessment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentResult>, AppError> {
    tracing::info!("GET /assessments/{}", id);

    state
        .assessment_cache
        .get(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Assessment {} not found or expired", id)))
}

/// GET /api/v1/allocations?profile=&age=
///
/// Previews the allocation for a profile and age without a questionnaire.
#[utoipa::path(
    get,
    path = "/api/v1/allocations",
    params(AllocationQuery),
    responses(
        (status = 200, description = "Allocation preview", body = AllocationPreview),
        (status = 400, description = "Unknown profile or bad age", body = ErrorResponse)
    )
)]
pub async fn preview_allocation(
    State(state): State<Arc<AppState>>,
    query: Result<Query<AllocationQuery>, QueryRejection>,
) -> Result<Json<AllocationPreview>, AppError> {
    let Query(params) = query?;
    let risk_profile: RiskProfile = params.profile.parse().map_err(AppError::BadRequest)?;
    tracing::debug!("GET /allocations - {} at {}", risk_profile, params.age);

    Ok(Json(AllocationPreview {
        risk_profile,
        age: params.age,
        age_adjustment: age_adjustment_factor(params.age),
        allocation: state.engine.preview_allocation(risk_profile, params.age),
    }))
}
