use crate::risk_profile::RiskProfile;

const CONSERVATIVE: &str = "You prefer stability over growth. A portfolio weighted toward \
bonds and cash keeps swings small and protects what you have built, at the cost of slower \
long-term growth. Keep an emergency fund outside your investments, favour high-quality bond \
funds, and hold a modest slice of broad-market stock funds so inflation does not erode your \
savings.";

const MODERATE: &str = "You are comfortable with some ups and downs in exchange for growth. \
A balanced mix of stocks and bonds lets you participate in market gains while cushioning \
downturns. Diversified index funds are a good core holding; rebalance once or twice a year so \
your mix does not drift, and avoid reacting to short-term market moves.";

const AGGRESSIVE: &str = "You have a long horizon and a high tolerance for volatility. A \
stock-heavy portfolio offers the highest expected long-term growth, but expect drawdowns of \
30% or more along the way. Spread your holdings across regions and sectors, keep costs low, \
and make sure you can leave the money invested through a downturn without needing to sell.";

/// Explanatory paragraph shown alongside the allocation for `profile`.
pub fn recommendation_for(profile: RiskProfile) -> &'static str {
    match profile {
        RiskProfile::Conservative => CONSERVATIVE,
        RiskProfile::Moderate => MODERATE,
        RiskProfile::Aggressive => AGGRESSIVE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_profile_has_distinct_text() {
        let texts: Vec<&str> = RiskProfile::ALL.into_iter().map(recommendation_for).collect();

        assert!(texts.iter().all(|t| !t.is_empty()));
        assert_ne!(texts[0], texts[1]);
        assert_ne!(texts[1], texts[2]);
        assert_ne!(texts[0], texts[2]);
    }
}
