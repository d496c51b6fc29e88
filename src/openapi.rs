use crate::assessment::AssessmentResult;
use crate::handlers;
use crate::models::{
    AllocationPreview, AssessmentRequest, ErrorResponse, HealthResponse, QuestionnaireResponse,
};
use crate::normalizer::AllocationSlice;
use crate::questionnaire::{QuizOption, QuizQuestion};
use crate::risk_profile::RiskProfile;
use axum::{http::StatusCode, response::IntoResponse, Json};
use utoipa::OpenApi;

/// OpenAPI document for every public endpoint.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wealthwise API",
        description = "Risk tolerance assessment and age-adjusted asset allocation"
    ),
    paths(
        handlers::health,
        handlers::get_questionnaire,
        handlers::create_assessment,
        handlers::get_assessment,
        handlers::preview_allocation
    ),
    components(schemas(
        HealthResponse,
        QuestionnaireResponse,
        QuizQuestion,
        QuizOption,
        AssessmentRequest,
        AssessmentResult,
        AllocationSlice,
        AllocationPreview,
        RiskProfile,
        ErrorResponse
    ))
)]
pub struct ApiDoc;

/// Pretty-printed OpenAPI JSON.
pub fn openapi_json() -> Result<String, serde_json::Error> {
    ApiDoc::openapi().to_pretty_json()
}

/// Serves the OpenAPI document generated from the handler annotations.
pub async fn serve_openapi_spec() -> impl IntoResponse {
    (StatusCode::OK, Json(ApiDoc::openapi()))
}

/// Serves the Swagger UI HTML page.
///
/// The page loads the document served by `serve_openapi_spec`.
pub async fn serve_swagger_ui() -> impl IntoResponse {
    let html = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Wealthwise API - Swagger UI</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
    <style>
        body { margin: 0; padding: 0; }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = function() {
            window.ui = SwaggerUIBundle({
                url: "/api-docs/openapi.json",
                dom_id: '#swagger-ui',
                deepLinking: true,
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                layout: "StandaloneLayout"
            });
        };
    </script>
</body>
</html>
"#;
    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "text/html; charset=utf-8")],
        html,
    )
}
