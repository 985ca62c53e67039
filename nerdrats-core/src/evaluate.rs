//! Badge catalog evaluation
//!
//! Pure functions over a badge track and a metric value. No storage, no
//! caching: evaluation is cheap enough to recompute on demand, and identical
//! inputs always yield identical output.

use crate::badge::BadgeDefinition;

/// Direction for [`top_n`] display sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Result of evaluating one track against a metric value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Evaluation {
    /// Every badge whose threshold is met, in catalog input order.
    pub earned: Vec<BadgeDefinition>,
    /// The earned badge with the highest threshold, if any.
    pub last: Option<BadgeDefinition>,
}

impl Evaluation {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.earned.is_empty()
    }
}

/// Evaluate a badge track against a user's cumulative metric.
///
/// `earned` keeps the catalog's relative order; callers re-sort for display
/// via [`top_n`]. `last` is the maximum-threshold earned badge, with ties at
/// the maximum broken by first occurrence in catalog order so the result is
/// reproducible for unordered catalogs.
#[must_use]
pub fn evaluate(track: &[BadgeDefinition], metric: f64) -> Evaluation {
    let earned: Vec<BadgeDefinition> = track
        .iter()
        .filter(|badge| badge.threshold <= metric)
        .cloned()
        .collect();

    let last = earned
        .iter()
        .fold(None::<&BadgeDefinition>, |best, candidate| match best {
            Some(current) if candidate.threshold > current.threshold => Some(candidate),
            Some(current) => Some(current),
            None => Some(candidate),
        })
        .cloned();

    Evaluation { earned, last }
}

/// Sort earned badges by threshold and keep the first `n` for compact display.
///
/// The sort is stable: equal thresholds preserve their relative input order,
/// so repeated calls with the same input are reproducible. `n` past the end
/// returns the whole sorted list.
#[must_use]
pub fn top_n(earned: &[BadgeDefinition], n: usize, order: SortOrder) -> Vec<BadgeDefinition> {
    let mut sorted: Vec<BadgeDefinition> = earned.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = a
            .threshold
            .partial_cmp(&b.threshold)
            .unwrap_or(std::cmp::Ordering::Equal);
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    sorted.truncate(n);
    sorted
}
