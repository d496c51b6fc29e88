/// Risk tolerance assessment pipeline
///
/// Runs one completed questionnaire through every stage:
/// 1. Validate the answer sheet against the question set
/// 2. Sum the answers into a score
/// 3. Classify the score into a risk profile
/// 4. Shift the profile's base allocation for the user's age
/// 5. Normalize to whole percentages
/// 6. Attach the profile's recommendation text
use crate::allocation::{adjust_for_age, age_adjustment_factor, AllocationModels};
use crate::errors::AppError;
use crate::normalizer::{self, AllocationSlice};
use crate::questionnaire::{self, AnswerSheet, QuestionSet, Score};
use crate::recommendation::recommendation_for;
use crate::risk_profile::RiskProfile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Outcome of one completed questionnaire. Not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub id: Uuid,
    pub risk_profile: RiskProfile,
    #[schema(value_type = i64)]
    pub score: Score,
    pub age: i32,
    pub allocation: Vec<AllocationSlice>,
    pub recommendation: String,
    pub completed_at: DateTime<Utc>,
}

/// Question set and allocation tables the pipeline runs against.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    questions: QuestionSet,
    models: AllocationModels,
    require_all_answers: bool,
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::new(QuestionSet::default(), AllocationModels::default(), true)
    }
}

impl AssessmentEngine {
    pub fn new(questions: QuestionSet, models: AllocationModels, require_all_answers: bool) -> Self {
        Self {
            questions,
            models,
            require_all_answers,
        }
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn models(&self) -> &AllocationModels {
        &self.models
    }

    pub fn requires_all_answers(&self) -> bool {
        self.require_all_answers
    }

    /// Checks the answer sheet against the question set.
    ///
    /// Unknown question ids are always rejected. Missing answers are rejected
    /// only when the engine requires a complete sheet; otherwise they count 0.
    pub fn validate(&self, answers: &AnswerSheet) -> Result<(), AppError> {
        let unknown = self.questions.unknown(answers);
        let missing = if self.require_all_answers {
            self.questions.missing(answers)
        } else {
            Vec::new()
        };

        if unknown.is_empty() && missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::InvalidAnswers { missing, unknown })
        }
    }

    /// Scores, classifies and allocates one answer sheet.
    pub fn assess(&self, answers: &AnswerSheet, age: i32) -> Result<AssessmentResult, AppError> {
        self.validate(answers)?;

        let score = questionnaire::score(answers);
        let risk_profile = RiskProfile::from_score(score);
        let allocation = self.preview_allocation(risk_profile, age);

        tracing::info!(
            "Assessment complete: score={} profile={} age={} categories={}",
            score,
            risk_profile,
            age,
            allocation.len()
        );

        Ok(AssessmentResult {
            id: Uuid::new_v4(),
            risk_profile,
            score,
            age,
            allocation,
            recommendation: recommendation_for(risk_profile).to_string(),
            completed_at: Utc::now(),
        })
    }

    /// Age-adjusted, normalized allocation for a profile.
    ///
    /// Falls back to the unmodified base table when the adjusted values cannot
    /// be normalized.
    pub fn preview_allocation(&self, profile: RiskProfile, age: i32) -> Vec<AllocationSlice> {
        let base = self.models.for_profile(profile);
        let adjusted = adjust_for_age(base, age);

        tracing::debug!(
            "Allocation for {} at age {}: factor={:.3} adjusted={:?}",
            profile,
            age,
            age_adjustment_factor(age),
            adjusted
        );

        match normalizer::normalize(&adjusted) {
            Some(slices) => slices,
            None => {
                tracing::warn!(
                    "Adjusted allocation for {} at age {} has no positive total, using base table",
                    profile,
                    age
                );
                normalizer::from_raw(base)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::Allocation;

    fn sheet(values: [i32; 5]) -> AnswerSheet {
        QuestionSet::default().ids().zip(values).collect()
    }

    fn points(result: &[AllocationSlice]) -> Vec<u32> {
        result.iter().map(|s| s.value).collect()
    }

    #[test]
    fn test_moderate_at_25_keeps_base_table() {
        let engine = AssessmentEngine::default();
        let result = engine.assess(&sheet([3, 3, 3, 1, 2]), 25).unwrap();

        assert_eq!(result.score, 12);
        assert_eq!(result.risk_profile, RiskProfile::Moderate);
        assert_eq!(points(&result.allocation), vec![60, 25, 10, 3, 2]);
        assert_eq!(result.recommendation, recommendation_for(RiskProfile::Moderate));
        assert_eq!(result.age, 25);
    }

    #[test]
    fn test_moderate_at_75_shifts_to_bonds_and_cash() {
        let engine = AssessmentEngine::default();
        let result = engine.assess(&sheet([3, 3, 3, 3, 3]), 75).unwrap();

        assert_eq!(result.score, 15);
        assert_eq!(points(&result.allocation), vec![45, 35, 10, 3, 7]);
    }

    #[test]
    fn test_aggressive_drops_empty_cash() {
        let engine = AssessmentEngine::default();
        let result = engine.assess(&sheet([5, 5, 5, 5, 5]), 20).unwrap();

        assert_eq!(result.risk_profile, RiskProfile::Aggressive);
        let names: Vec<&str> = result.allocation.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Stocks", "Bonds", "Real Estate", "Commodities"]);
    }

    #[test]
    fn test_missing_answers_rejected_by_default() {
        let engine = AssessmentEngine::default();
        let mut answers = AnswerSheet::new();
        answers.record("investment_horizon", 5);

        match engine.assess(&answers, 40) {
            Err(AppError::InvalidAnswers { missing, unknown }) => {
                assert_eq!(missing.len(), 4);
                assert!(unknown.is_empty());
            }
            other => panic!("expected InvalidAnswers, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_answers_count_zero_when_lenient() {
        let engine = AssessmentEngine::new(QuestionSet::default(), AllocationModels::default(), false);
        let mut answers = AnswerSheet::new();
        answers.record("investment_horizon", 5);
        answers.record("market_drop", 5);
        answers.record("primary_goal", 3);

        let result = engine.assess(&answers, 30).unwrap();
        assert_eq!(result.score, 13);
        assert_eq!(result.risk_profile, RiskProfile::Moderate);
    }

    #[test]
    fn test_unknown_question_rejected_even_when_lenient() {
        let engine = AssessmentEngine::new(QuestionSet::default(), AllocationModels::default(), false);
        let mut answers = AnswerSheet::new();
        answers.record("shoe_size", 44);

        match engine.assess(&answers, 30) {
            Err(AppError::InvalidAnswers { missing, unknown }) => {
                assert!(missing.is_empty());
                assert_eq!(unknown, vec!["shoe_size"]);
            }
            other => panic!("expected InvalidAnswers, got {:?}", other),
        }
    }

    #[test]
    fn test_each_assessment_gets_fresh_id() {
        let engine = AssessmentEngine::default();
        let a = engine.assess(&sheet([1, 1, 1, 1, 1]), 30).unwrap();
        let b = engine.assess(&sheet([1, 1, 1, 1, 1]), 30).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.allocation, b.allocation);
    }

    #[test]
    fn test_degenerate_table_falls_back_to_base() {
        let empty = Allocation::new(0.0, 0.0, 0.0, 0.0, 0.0);
        let models = AllocationModels {
            conservative: empty,
            moderate: empty,
            aggressive: empty,
        };
        let engine = AssessmentEngine::new(QuestionSet::default(), models, true);

        // age 25: nothing shifts, total stays 0
        let slices = engine.preview_allocation(RiskProfile::Moderate, 25);
        assert!(slices.is_empty());

        // age 75 puts bonds and cash above 0 again
        let slices = engine.preview_allocation(RiskProfile::Moderate, 75);
        assert_eq!(points(&slices), vec![67, 33]);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let engine = AssessmentEngine::default();
        let result = engine.assess(&sheet([1, 1, 3, 1, 1]), 25).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["riskProfile"], "Conservative");
        assert_eq!(json["score"], 7);
        assert!(json["completedAt"].is_string());
        assert_eq!(json["allocation"][0]["name"], "Stocks");
        assert_eq!(json["allocation"][0]["value"], 30);
    }
}
