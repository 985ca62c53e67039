use nerdrats_core::{
    BadgeDefinition, SortOrder, Track, UserProgress, evaluate, rank_by, select_notable, top_n,
};

fn badge(name: &str, track: Track, threshold: f64) -> BadgeDefinition {
    BadgeDefinition {
        name: name.to_string(),
        track,
        threshold,
        glyph: "🏅".to_string(),
        icon: String::new(),
        description: String::new(),
        fun_fact: String::new(),
        nerd_taunt: String::new(),
    }
}

fn distance_track() -> Vec<BadgeDefinition> {
    vec![
        badge("5K", Track::Distance, 5.0),
        badge("10K", Track::Distance, 10.0),
        badge("20K", Track::Distance, 20.0),
    ]
}

#[test]
fn earned_is_a_subset_meeting_the_threshold() {
    let track = distance_track();
    for metric in [0.0, 4.9, 5.0, 12.0, 100.0] {
        let result = evaluate(&track, metric);
        for earned in &result.earned {
            assert!(earned.threshold <= metric);
            assert!(track.contains(earned));
        }
    }
}

#[test]
fn last_is_the_maximum_earned_threshold() {
    let track = distance_track();
    for metric in [5.0, 10.0, 15.0, 20.0, 1e9] {
        let result = evaluate(&track, metric);
        if result.earned.is_empty() {
            assert!(result.last.is_none());
            continue;
        }
        let max = result
            .earned
            .iter()
            .map(|b| b.threshold)
            .fold(f64::NEG_INFINITY, f64::max);
        assert!((result.last.as_ref().unwrap().threshold - max).abs() < f64::EPSILON);
    }
}

#[test]
fn spec_example_metric_twelve() {
    let result = evaluate(&distance_track(), 12.0);
    let names: Vec<&str> = result.earned.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["5K", "10K"]);
    assert_eq!(result.last.unwrap().name, "10K");
}

#[test]
fn evaluation_has_no_hidden_state() {
    let track = distance_track();
    let first = evaluate(&track, 12.0);
    let second = evaluate(&track, 12.0);
    assert_eq!(first, second);
}

#[test]
fn top_n_contract_on_boundaries() {
    let earned = evaluate(&distance_track(), 100.0).earned;

    assert!(top_n(&earned, 0, SortOrder::Descending).is_empty());

    let all = top_n(&earned, earned.len() + 5, SortOrder::Descending);
    assert_eq!(all.len(), earned.len());
    let thresholds: Vec<f64> = all.iter().map(|b| b.threshold).collect();
    assert_eq!(thresholds, [20.0, 10.0, 5.0]);
}

#[test]
fn selector_examples_from_both_tracks() {
    // Nothing earned anywhere.
    assert!(select_notable(None, None, 0.0, 0.0).is_none());

    // Only one track earned.
    let lone = badge("A", Track::Distance, 10.0);
    assert_eq!(select_notable(Some(&lone), None, 5.0, 0.0).unwrap().name, "A");

    // Ratio 1.0 beats ratio 0.5.
    let distance = badge("10K", Track::Distance, 10.0);
    let keydowns = badge("Clacker", Track::Keydowns, 1_000.0);
    let picked = select_notable(Some(&distance), Some(&keydowns), 10.0, 500.0).unwrap();
    assert_eq!(picked.name, "10K");

    // Exact tie goes to distance.
    let picked = select_notable(Some(&distance), Some(&keydowns), 10.0, 1_000.0).unwrap();
    assert_eq!(picked.name, "10K");
}

#[test]
fn progress_snapshot_feeds_both_tracks() {
    let progress = UserProgress::new(12.0, 1_500);
    let distance = evaluate(&distance_track(), progress.metric(Track::Distance));
    let keydown_track = vec![
        badge("Clacker", Track::Keydowns, 1_000.0),
        badge("Maniac", Track::Keydowns, 10_000.0),
    ];
    let keydowns = evaluate(&keydown_track, progress.metric(Track::Keydowns));

    let picked = select_notable(
        distance.last.as_ref(),
        keydowns.last.as_ref(),
        progress.distance_km,
        progress.keydowns as f64,
    )
    .unwrap();
    // keydown ratio 1.5 beats distance ratio 1.2
    assert_eq!(picked.name, "Clacker");
}

#[test]
fn standings_and_selection_stay_deterministic_together() {
    let rows = vec![("ana", 38.7), ("carlos", 42.5), ("bruna", 42.5)];
    let ranked = rank_by(rows.clone(), |r| r.1);
    let again = rank_by(rows, |r| r.1);
    assert_eq!(ranked, again);
    assert_eq!(ranked[0].entry.0, "carlos");
    assert_eq!(ranked[0].position, 1);
    assert_eq!(ranked[1].position, 1);
    assert_eq!(ranked[2].position, 3);
}
