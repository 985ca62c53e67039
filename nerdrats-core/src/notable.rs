//! Cross-track achievement selection
//!
//! On session load the UI evaluates both tracks and surfaces a single "most
//! notable" achievement as a popup. The winner is the last badge whose track
//! the user has progressed furthest past, measured as `total / threshold`.

use crate::badge::BadgeDefinition;

/// Select the single achievement to surface across both tracks.
///
/// Rules, in order:
/// - neither track has a last badge: `None` (no popup);
/// - exactly one track has a last badge: that badge;
/// - both present: the badge with the strictly greater `total / threshold`
///   ratio wins. A zero threshold counts as ratio 0 rather than producing an
///   infinite comparison. An exact ratio tie prefers the distance badge.
#[must_use]
pub fn select_notable(
    last_distance: Option<&BadgeDefinition>,
    last_keydowns: Option<&BadgeDefinition>,
    distance_total: f64,
    keydown_total: f64,
) -> Option<BadgeDefinition> {
    match (last_distance, last_keydowns) {
        (None, None) => None,
        (Some(distance), None) => Some(distance.clone()),
        (None, Some(keydowns)) => Some(keydowns.clone()),
        (Some(distance), Some(keydowns)) => {
            let distance_ratio = completion_ratio(distance_total, distance.threshold);
            let keydown_ratio = completion_ratio(keydown_total, keydowns.threshold);
            if keydown_ratio > distance_ratio {
                Some(keydowns.clone())
            } else {
                Some(distance.clone())
            }
        }
    }
}

fn completion_ratio(total: f64, threshold: f64) -> f64 {
    if threshold == 0.0 {
        0.0
    } else {
        total / threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badge::Track;

    fn badge(name: &str, track: Track, threshold: f64) -> BadgeDefinition {
        BadgeDefinition {
            name: name.to_string(),
            track,
            threshold,
            glyph: String::new(),
            icon: String::new(),
            description: String::new(),
            fun_fact: String::new(),
            nerd_taunt: String::new(),
        }
    }

    #[test]
    fn nothing_earned_means_no_popup() {
        assert!(select_notable(None, None, 0.0, 0.0).is_none());
    }

    #[test]
    fn single_track_wins_by_default() {
        let distance = badge("10K", Track::Distance, 10.0);
        let picked = select_notable(Some(&distance), None, 5.0, 0.0).unwrap();
        assert_eq!(picked.name, "10K");

        let keydowns = badge("Clacker", Track::Keydowns, 1_000.0);
        let picked = select_notable(None, Some(&keydowns), 0.0, 1_500.0).unwrap();
        assert_eq!(picked.name, "Clacker");
    }

    #[test]
    fn higher_completion_ratio_wins() {
        let distance = badge("10K", Track::Distance, 10.0);
        let keydowns = badge("Clacker", Track::Keydowns, 1_000.0);

        // distance ratio 1.0 vs keydown ratio 0.5
        let picked = select_notable(Some(&distance), Some(&keydowns), 10.0, 500.0).unwrap();
        assert_eq!(picked.name, "10K");

        // distance ratio 0.5 vs keydown ratio 2.0
        let picked = select_notable(Some(&distance), Some(&keydowns), 5.0, 2_000.0).unwrap();
        assert_eq!(picked.name, "Clacker");
    }

    #[test]
    fn exact_tie_prefers_distance() {
        let distance = badge("10K", Track::Distance, 10.0);
        let keydowns = badge("Clacker", Track::Keydowns, 1_000.0);
        let picked = select_notable(Some(&distance), Some(&keydowns), 10.0, 1_000.0).unwrap();
        assert_eq!(picked.name, "10K");
    }

    #[test]
    fn zero_threshold_counts_as_zero_ratio() {
        let distance = badge("Starter", Track::Distance, 0.0);
        let keydowns = badge("Clacker", Track::Keydowns, 1_000.0);
        // Without the guard the distance ratio would be infinite and always win.
        let picked = select_notable(Some(&distance), Some(&keydowns), 50.0, 500.0).unwrap();
        assert_eq!(picked.name, "Clacker");
    }

    #[test]
    fn both_zero_thresholds_fall_back_to_distance() {
        let distance = badge("Starter", Track::Distance, 0.0);
        let keydowns = badge("Clack Zero", Track::Keydowns, 0.0);
        let picked = select_notable(Some(&distance), Some(&keydowns), 1.0, 1.0).unwrap();
        assert_eq!(picked.name, "Starter");
    }
}
