//! Leaderboard ordering
//!
//! The remote scoring API returns ranking lists without a guaranteed order;
//! the core owns the ordering rule so positions are deterministic regardless
//! of what the transport hands over.

/// One leaderboard row: a 1-based position attached to the caller's entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing<T> {
    pub position: usize,
    pub entry: T,
}

/// Order entries into a leaderboard, highest metric first.
///
/// The sort is stable, so entries with equal metrics keep their relative
/// input order. Positions use standard competition ranking: equal metrics
/// share a position and the next distinct metric skips ahead (1, 2, 2, 4).
#[must_use]
pub fn rank_by<T, F>(entries: Vec<T>, metric: F) -> Vec<Standing<T>>
where
    F: Fn(&T) -> f64,
{
    let mut ordered = entries;
    ordered.sort_by(|a, b| {
        metric(b)
            .partial_cmp(&metric(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut standings: Vec<Standing<T>> = Vec::with_capacity(ordered.len());
    let mut previous_metric: Option<f64> = None;
    let mut previous_position = 0;

    for (index, entry) in ordered.into_iter().enumerate() {
        let value = metric(&entry);
        let position = match previous_metric {
            Some(prev) if prev == value => previous_position,
            _ => index + 1,
        };
        previous_metric = Some(value);
        previous_position = position;
        standings.push(Standing { position, entry });
    }

    standings
}

/// Find the position of one entry in a ranked list, if present.
#[must_use]
pub fn position_of<T, P>(standings: &[Standing<T>], mut matches: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    standings
        .iter()
        .find(|standing| matches(&standing.entry))
        .map(|standing| standing.position)
}
