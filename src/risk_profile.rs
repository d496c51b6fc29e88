use crate::questionnaire::Score;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Highest score still classified as [`RiskProfile::Conservative`].
pub const CONSERVATIVE_MAX_SCORE: Score = 10;
/// Highest score still classified as [`RiskProfile::Moderate`].
pub const MODERATE_MAX_SCORE: Score = 18;

/// Coarse investor risk category derived from the questionnaire score.
///
/// The breakpoints are tied to the default question set (5 questions worth
/// 1/3/5 points). A different question set needs revisited breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum RiskProfile {
    #[serde(alias = "conservative")]
    Conservative,
    #[serde(alias = "moderate")]
    Moderate,
    #[serde(alias = "aggressive")]
    Aggressive,
}

impl RiskProfile {
    pub const ALL: [RiskProfile; 3] = [
        RiskProfile::Conservative,
        RiskProfile::Moderate,
        RiskProfile::Aggressive,
    ];

    /// Classifies a score:
    /// - Conservative: score <= 10
    /// - Moderate: 10 < score <= 18
    /// - Aggressive: score > 18
    pub fn from_score(score: Score) -> Self {
        if score <= CONSERVATIVE_MAX_SCORE {
            Self::Conservative
        } else if score <= MODERATE_MAX_SCORE {
            Self::Moderate
        } else {
            Self::Aggressive
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conservative => "Conservative",
            Self::Moderate => "Moderate",
            Self::Aggressive => "Aggressive",
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown risk profile '{}' (expected Conservative, Moderate or Aggressive)",
                    s
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(RiskProfile::from_score(5), RiskProfile::Conservative);
        assert_eq!(RiskProfile::from_score(10), RiskProfile::Conservative);
        assert_eq!(RiskProfile::from_score(11), RiskProfile::Moderate);
        assert_eq!(RiskProfile::from_score(18), RiskProfile::Moderate);
        assert_eq!(RiskProfile::from_score(19), RiskProfile::Aggressive);
        assert_eq!(RiskProfile::from_score(25), RiskProfile::Aggressive);
    }

    #[test]
    fn test_out_of_range_scores_still_classify() {
        assert_eq!(RiskProfile::from_score(-40), RiskProfile::Conservative);
        assert_eq!(RiskProfile::from_score(0), RiskProfile::Conservative);
        assert_eq!(RiskProfile::from_score(1_000), RiskProfile::Aggressive);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("moderate".parse::<RiskProfile>(), Ok(RiskProfile::Moderate));
        assert_eq!(" AGGRESSIVE ".parse::<RiskProfile>(), Ok(RiskProfile::Aggressive));
        assert!("reckless".parse::<RiskProfile>().is_err());
    }

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&RiskProfile::Conservative).unwrap();
        assert_eq!(json, "\"Conservative\"");

        let parsed: RiskProfile = serde_json::from_str("\"aggressive\"").unwrap();
        assert_eq!(parsed, RiskProfile::Aggressive);
    }
}
