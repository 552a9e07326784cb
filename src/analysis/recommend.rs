//! Clinic-siting recommendation
//!
//! Selects the area with the maximum aggregate patient count.

use crate::models::AreaCount;

/// Pick the area with the highest count
///
/// Returns `None` for an empty input. Ties resolve to the first entry
/// reaching the maximum in iteration order (a stable left-to-right fold
/// seeded with the first element); this tie-break is part of the contract
/// and must stay put for reproducible recommendations.
#[must_use]
pub fn best_area(counts: &[AreaCount]) -> Option<&AreaCount> {
    let (first, rest) = counts.split_first()?;
    Some(rest.iter().fold(first, |max, current| {
        if current.count > max.count { current } else { max }
    }))
}
