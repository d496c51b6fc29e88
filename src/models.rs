use crate::normalizer::AllocationSlice;
use crate::questionnaire::{AnswerSheet, QuizQuestion, Score};
use crate::risk_profile::RiskProfile;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// ============ Requests ============

/// Body of `POST /api/v1/assessments`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRequest {
    /// Selected option value keyed by question id.
    #[schema(value_type = Object)]
    pub answers: AnswerSheet,
    /// Age in years. Not range-checked.
    pub age: i32,
}

/// Query string of `GET /api/v1/allocations`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AllocationQuery {
    /// Conservative, Moderate or Aggressive (any letter case).
    pub profile: String,
    /// Age in years.
    pub age: i32,
}

// ============ Responses ============

/// Service status returned by `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// The questionnaire clients render before submitting an assessment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireResponse {
    pub questions: Vec<QuizQuestion>,
    #[schema(value_type = i64)]
    pub min_score: Score,
    #[schema(value_type = i64)]
    pub max_score: Score,
    /// Whether every question must be answered before submitting.
    pub requires_all_answers: bool,
}

/// Allocation for a profile and age without a questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllocationPreview {
    pub risk_profile: RiskProfile,
    pub age: i32,
    /// Unitless de-risking factor, 0.0 up to age 25 and 1.0 at age 75.
    pub age_adjustment: f64,
    pub allocation: Vec<AllocationSlice>,
}

/// JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unknown: Option<Vec<String>>,
}
