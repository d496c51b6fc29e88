//! Base allocation models and the age-based shift applied to them.
//!
//! Every year past [`ADJUSTMENT_START_AGE`] moves a fixed share of the
//! portfolio out of stocks and into bonds and cash. The factor reaches 1.0
//! at age 75 and keeps growing after that; the per-category caps keep the
//! result in range.

use crate::risk_profile::RiskProfile;
use serde::{Deserialize, Serialize};

/// Age at which the de-risking shift starts.
pub const ADJUSTMENT_START_AGE: i32 = 25;
/// Years over which the factor grows from 0.0 to 1.0.
pub const ADJUSTMENT_SPAN_YEARS: f64 = 50.0;

/// Stock points removed per unit of adjustment factor.
pub const STOCKS_SHIFT: f64 = 15.0;
/// Bond points added per unit of adjustment factor.
pub const BONDS_SHIFT: f64 = 10.0;
/// Cash points added per unit of adjustment factor.
pub const CASH_SHIFT: f64 = 5.0;

pub const STOCKS_FLOOR: f64 = 0.0;
pub const BONDS_CAP: f64 = 100.0;
pub const CASH_CAP: f64 = 20.0;

/// Asset categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    Stocks,
    Bonds,
    RealEstate,
    Commodities,
    Cash,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 5] = [
        AssetCategory::Stocks,
        AssetCategory::Bonds,
        AssetCategory::RealEstate,
        AssetCategory::Commodities,
        AssetCategory::Cash,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Stocks => "stocks",
            Self::Bonds => "bonds",
            Self::RealEstate => "real_estate",
            Self::Commodities => "commodities",
            Self::Cash => "cash",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Stocks => "Stocks",
            Self::Bonds => "Bonds",
            Self::RealEstate => "Real Estate",
            Self::Commodities => "Commodities",
            Self::Cash => "Cash",
        }
    }

    /// Chart color tag.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Stocks => "#0088FE",
            Self::Bonds => "#00C49F",
            Self::RealEstate => "#FFBB28",
            Self::Commodities => "#FF8042",
            Self::Cash => "#8884D8",
        }
    }
}

/// Percentage points per asset category.
///
/// Base models hold whole numbers summing to 100. After an age shift the
/// values are fractional and no longer need to sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub stocks: f64,
    pub bonds: f64,
    pub real_estate: f64,
    pub commodities: f64,
    pub cash: f64,
}

impl Allocation {
    pub const fn new(stocks: f64, bonds: f64, real_estate: f64, commodities: f64, cash: f64) -> Self {
        Self {
            stocks,
            bonds,
            real_estate,
            commodities,
            cash,
        }
    }

    pub fn get(&self, category: AssetCategory) -> f64 {
        match category {
            AssetCategory::Stocks => self.stocks,
            AssetCategory::Bonds => self.bonds,
            AssetCategory::RealEstate => self.real_estate,
            AssetCategory::Commodities => self.commodities,
            AssetCategory::Cash => self.cash,
        }
    }

    /// Category values in display order.
    pub fn iter(&self) -> impl Iterator<Item = (AssetCategory, f64)> + '_ {
        AssetCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn total(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum()
    }
}

/// Base allocation per risk profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationModels {
    pub conservative: Allocation,
    pub moderate: Allocation,
    pub aggressive: Allocation,
}

impl AllocationModels {
    pub fn for_profile(&self, profile: RiskProfile) -> &Allocation {
        match profile {
            RiskProfile::Conservative => &self.conservative,
            RiskProfile::Moderate => &self.moderate,
            RiskProfile::Aggressive => &self.aggressive,
        }
    }
}

impl Default for AllocationModels {
    fn default() -> Self {
        Self {
            conservative: Allocation::new(30.0, 50.0, 10.0, 5.0, 5.0),
            moderate: Allocation::new(60.0, 25.0, 10.0, 3.0, 2.0),
            aggressive: Allocation::new(80.0, 10.0, 7.0, 3.0, 0.0),
        }
    }
}

/// `max(0, (age - 25) / 50)`: 0.0 up to age 25, 1.0 at age 75.
pub fn age_adjustment_factor(age: i32) -> f64 {
    ((f64::from(age) - f64::from(ADJUSTMENT_START_AGE)) / ADJUSTMENT_SPAN_YEARS).max(0.0)
}

/// Shifts `base` toward bonds and cash according to `age`.
///
/// Real estate and commodities are never touched. Stocks are floored at 0,
/// bonds capped at 100 and cash capped at 20 before normalization.
pub fn adjust_for_age(base: &Allocation, age: i32) -> Allocation {
    let factor = age_adjustment_factor(age);

    Allocation {
        stocks: (base.stocks - factor * STOCKS_SHIFT).max(STOCKS_FLOOR),
        bonds: (base.bonds + factor * BONDS_SHIFT).min(BONDS_CAP),
        real_estate: base.real_estate,
        commodities: base.commodities,
        cash: (base.cash + factor * CASH_SHIFT).min(CASH_CAP),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_tables_sum_to_100() {
        let models = AllocationModels::default();
        for profile in RiskProfile::ALL {
            assert_eq!(models.for_profile(profile).total(), 100.0, "{}", profile);
        }
    }

    #[test]
    fn test_age_factor() {
        assert_eq!(age_adjustment_factor(-5), 0.0);
        assert_eq!(age_adjustment_factor(18), 0.0);
        assert_eq!(age_adjustment_factor(25), 0.0);
        assert_eq!(age_adjustment_factor(50), 0.5);
        assert_eq!(age_adjustment_factor(75), 1.0);
        assert_eq!(age_adjustment_factor(125), 2.0);
    }

    #[test]
    fn test_extreme_ages_do_not_overflow() {
        assert_eq!(age_adjustment_factor(i32::MIN), 0.0);
        assert_eq!(age_adjustment_factor(i32::MIN + 10), 0.0);
        assert!(age_adjustment_factor(i32::MAX) > 4.0e7);

        let models = AllocationModels::default();
        for profile in RiskProfile::ALL {
            let base = models.for_profile(profile);
            assert_eq!(adjust_for_age(base, i32::MIN), *base);
        }
    }

    #[test]
    fn test_no_shift_at_25() {
        let models = AllocationModels::default();
        let base = models.for_profile(RiskProfile::Moderate);
        assert_eq!(adjust_for_age(base, 25), *base);
    }

    #[test]
    fn test_moderate_at_75() {
        let models = AllocationModels::default();
        let adjusted = adjust_for_age(models.for_profile(RiskProfile::Moderate), 75);

        assert_eq!(adjusted, Allocation::new(45.0, 35.0, 10.0, 3.0, 7.0));
        assert_eq!(adjusted.total(), 100.0);
    }

    #[test]
    fn test_clamps_hold_for_extreme_age() {
        let models = AllocationModels::default();
        for profile in RiskProfile::ALL {
            let adjusted = adjust_for_age(models.for_profile(profile), 500);
            assert_eq!(adjusted.stocks, 0.0);
            assert_eq!(adjusted.cash, CASH_CAP);
            assert!(adjusted.bonds <= BONDS_CAP);
        }
    }

    #[test]
    fn test_conservative_cash_caps_before_other_shifts() {
        let models = AllocationModels::default();
        // factor 4.0: cash would be 5 + 20 = 25, capped at 20
        let adjusted = adjust_for_age(models.for_profile(RiskProfile::Conservative), 225);

        assert_eq!(adjusted.cash, 20.0);
        assert_eq!(adjusted.bonds, 90.0);
        assert_eq!(adjusted.stocks, 0.0);
    }

    #[test]
    fn test_categories_in_display_order() {
        let keys: Vec<&str> = AssetCategory::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(keys, ["stocks", "bonds", "real_estate", "commodities", "cash"]);
    }
}
