//! Wealthwise Risk Assessment API Library
//!
//! Scores a risk tolerance questionnaire, classifies the investor into a
//! risk profile and derives an age-adjusted asset allocation, then serves
//! the pipeline over HTTP.
//!
//! # Modules
//!
//! - `api`: API-layer namespace (handlers, models, routes, docs).
//! - `core`: Domain-layer namespace (pipeline stages and errors).
//! - `allocation`: Base allocation tables and the age shift.
//! - `assessment`: The end-to-end assessment pipeline.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Request and response bodies.
//! - `normalizer`: Percentage normalization for display.
//! - `openapi`: OpenAPI document and Swagger UI.
//! - `questionnaire`: Questions, answer sheets and scoring.
//! - `recommendation`: Recommendation text per profile.
//! - `risk_profile`: Score to profile classification.
//! - `routes`: Router construction.

pub mod api;
pub mod core;

pub mod allocation;
pub mod assessment;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod openapi;
pub mod questionnaire;
pub mod recommendation;
pub mod risk_profile;
pub mod routes;
