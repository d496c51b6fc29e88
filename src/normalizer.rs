use crate::allocation::{Allocation, AssetCategory};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use utoipa::ToSchema;

/// Display-ready share of one asset category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AllocationSlice {
    /// Category label, e.g. "Real Estate".
    pub name: String,
    /// Whole percentage, 1 to 100.
    pub value: u32,
    /// Chart color tag.
    pub color: String,
}

impl AllocationSlice {
    fn new(category: AssetCategory, value: u32) -> Self {
        Self {
            name: category.label().to_string(),
            value,
            color: category.color().to_string(),
        }
    }
}

/// Whole percentages for every category, in display order, summing to 100.
///
/// Uses largest-remainder rounding: each category gets the floor of its exact
/// share and the points left over go to the largest fractional parts, earlier
/// categories first on ties. Returns `None` when the total is not positive or
/// any value is negative or not finite.
pub fn percentages(allocation: &Allocation) -> Option<Vec<(AssetCategory, u32)>> {
    let total = allocation.total();
    if !total.is_finite() || total <= 0.0 {
        return None;
    }
    if allocation.iter().any(|(_, v)| !v.is_finite() || v < 0.0) {
        return None;
    }

    let exact: Vec<(AssetCategory, f64)> = allocation
        .iter()
        .map(|(c, v)| (c, v * 100.0 / total))
        .collect();

    let mut points: Vec<u32> = exact.iter().map(|(_, share)| share.floor() as u32).collect();
    let assigned: u32 = points.iter().sum();
    let leftover = 100u32.saturating_sub(assigned) as usize;

    let mut by_remainder: Vec<usize> = (0..exact.len()).collect();
    by_remainder.sort_by(|&a, &b| {
        let ra = exact[a].1 - exact[a].1.floor();
        let rb = exact[b].1 - exact[b].1.floor();
        rb.partial_cmp(&ra).unwrap_or(Ordering::Equal).then(a.cmp(&b))
    });
    for &idx in by_remainder.iter().take(leftover) {
        points[idx] += 1;
    }

    Some(
        exact
            .into_iter()
            .zip(points)
            .map(|((category, _), value)| (category, value))
            .collect(),
    )
}

/// Rescales `allocation` to whole percentages and drops categories at 0%.
pub fn normalize(allocation: &Allocation) -> Option<Vec<AllocationSlice>> {
    let shares = percentages(allocation)?;

    Some(
        shares
            .into_iter()
            .filter(|(_, value)| *value > 0)
            .map(|(category, value)| AllocationSlice::new(category, value))
            .collect(),
    )
}

/// Display slices from values taken as-is (rounded, not rescaled).
pub fn from_raw(allocation: &Allocation) -> Vec<AllocationSlice> {
    allocation
        .iter()
        .filter(|(_, v)| v.is_finite())
        .map(|(category, v)| (category, v.round().max(0.0) as u32))
        .filter(|(_, value)| *value > 0)
        .map(|(category, value)| AllocationSlice::new(category, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::AllocationModels;
    use crate::risk_profile::RiskProfile;

    fn values(slices: &[AllocationSlice]) -> Vec<(&str, u32)> {
        slices.iter().map(|s| (s.name.as_str(), s.value)).collect()
    }

    #[test]
    fn test_base_table_is_unchanged() {
        let models = AllocationModels::default();
        let slices = normalize(models.for_profile(RiskProfile::Moderate)).unwrap();

        assert_eq!(
            values(&slices),
            vec![
                ("Stocks", 60),
                ("Bonds", 25),
                ("Real Estate", 10),
                ("Commodities", 3),
                ("Cash", 2)
            ]
        );
    }

    #[test]
    fn test_zero_categories_are_filtered() {
        let models = AllocationModels::default();
        let slices = normalize(models.for_profile(RiskProfile::Aggressive)).unwrap();

        assert_eq!(slices.len(), 4);
        assert!(slices.iter().all(|s| s.name != "Cash"));
        assert_eq!(slices.iter().map(|s| s.value).sum::<u32>(), 100);
    }

    #[test]
    fn test_remainder_is_reconciled() {
        let thirds = Allocation::new(1.0, 1.0, 1.0, 0.0, 0.0);
        let shares = percentages(&thirds).unwrap();

        let points: Vec<u32> = shares.iter().map(|(_, v)| *v).collect();
        assert_eq!(points, vec![34, 33, 33, 0, 0]);
    }

    #[test]
    fn test_largest_fraction_wins_leftover() {
        // exact shares: 12.5, 37.5, 16.6.., 16.6.., 16.6..
        let uneven = Allocation::new(7.5, 22.5, 10.0, 10.0, 10.0);
        let shares = percentages(&uneven).unwrap();

        let points: Vec<u32> = shares.iter().map(|(_, v)| *v).collect();
        assert_eq!(points.iter().sum::<u32>(), 100);
        assert_eq!(points, vec![12, 37, 17, 17, 17]);
    }

    #[test]
    fn test_scales_unnormalized_values() {
        let doubled = Allocation::new(120.0, 50.0, 20.0, 6.0, 4.0);
        let slices = normalize(&doubled).unwrap();

        assert_eq!(
            values(&slices),
            vec![
                ("Stocks", 60),
                ("Bonds", 25),
                ("Real Estate", 10),
                ("Commodities", 3),
                ("Cash", 2)
            ]
        );
    }

    #[test]
    fn test_zero_total_is_guarded() {
        assert_eq!(normalize(&Allocation::new(0.0, 0.0, 0.0, 0.0, 0.0)), None);
        assert_eq!(
            normalize(&Allocation::new(-10.0, 5.0, 5.0, 0.0, 0.0)),
            None
        );
    }

    #[test]
    fn test_from_raw_keeps_values() {
        let slices = from_raw(&Allocation::new(80.0, 10.0, 7.0, 3.0, 0.0));
        assert_eq!(
            values(&slices),
            vec![("Stocks", 80), ("Bonds", 10), ("Real Estate", 7), ("Commodities", 3)]
        );
        assert_eq!(slices[0].color, "#0088FE");
    }
}
