// ABOUTME: Integration tests for the insight engine, trend classifier, and rule battery
// ABOUTME: Pins known vectors for trend labels, plateau windows, fueling, and load impact
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tartan Athletics

mod common;

use common::{
    init_test_logging, jumper_session, nutrition_log, runner_session, thrower_session,
};
use uuid::Uuid;

use tartan::intelligence::provider::InMemoryHistory;
use tartan::intelligence::trend_classifier::{TrendClassifier, TrendOutcome};
use tartan::intelligence::{InsightEngine, RuleEngine};
use tartan::{InsightKind, TrendDirection};

fn classify(history: &InMemoryHistory, user: Uuid) -> TrendOutcome {
    TrendClassifier::new().analyze(history, user).unwrap()
}

#[test]
fn decreasing_runner_times_classify_as_improving() {
    init_test_logging();
    let user = Uuid::new_v4();
    let mut history = InMemoryHistory::new();
    for (day, time) in [(1, 60.0), (2, 58.0), (3, 56.0), (4, 54.0)] {
        history.push_session(runner_session(user, day, time));
    }

    match classify(&history, user) {
        TrendOutcome::Classified(report) => {
            assert_eq!(report.direction, TrendDirection::Improving);
            assert_eq!(report.sample_count, 4);
        }
        other => panic!("expected classification, got {other:?}"),
    }
}

#[test]
fn increasing_runner_times_classify_as_declining() {
    init_test_logging();
    let user = Uuid::new_v4();
    let mut history = InMemoryHistory::new();
    for (day, time) in [(1, 54.0), (2, 56.0), (3, 58.0), (4, 60.0)] {
        history.push_session(runner_session(user, day, time));
    }

    match classify(&history, user) {
        TrendOutcome::Classified(report) => {
            assert_eq!(report.direction, TrendDirection::Declining);
        }
        other => panic!("expected classification, got {other:?}"),
    }
}

#[test]
fn flat_series_classifies_as_stable() {
    init_test_logging();
    let user = Uuid::new_v4();
    let mut history = InMemoryHistory::new();
    for day in 1..=4 {
        history.push_session(runner_session(user, day, 60.0));
    }

    match classify(&history, user) {
        TrendOutcome::Classified(report) => {
            assert_eq!(report.direction, TrendDirection::Stable);
        }
        other => panic!("expected classification, got {other:?}"),
    }
}

#[test]
fn rising_jump_distances_classify_as_improving() {
    init_test_logging();
    let user = Uuid::new_v4();
    let mut history = InMemoryHistory::new();
    for (day, jump) in [(1, 6.8), (3, 6.95), (5, 7.1), (7, 7.25)] {
        history.push_session(jumper_session(user, day, jump));
    }

    match classify(&history, user) {
        TrendOutcome::Classified(report) => {
            assert_eq!(report.direction, TrendDirection::Improving);
        }
        other => panic!("expected classification, got {other:?}"),
    }
}

#[test]
fn single_session_degrades_to_not_enough_data() {
    init_test_logging();
    let user = Uuid::new_v4();
    let mut history = InMemoryHistory::new();
    history.push_session(runner_session(user, 1, 60.0));

    match classify(&history, user) {
        TrendOutcome::NotEnoughData { found, .. } => assert_eq!(found, 1),
        other => panic!("expected degraded outcome, got {other:?}"),
    }
}

#[test]
fn trend_reports_nutrition_context_over_series_span() {
    init_test_logging();
    let user = Uuid::new_v4();
    let mut history = InMemoryHistory::new();
    for (day, time) in [(1, 60.0), (4, 58.0), (7, 56.0)] {
        history.push_session(runner_session(user, day, time));
    }
    // Inside the span
    history.push_log(nutrition_log(user, 2, 300.0, 100.0));
    history.push_log(nutrition_log(user, 6, 200.0, 120.0));
    // Outside the span, must not count
    history.push_log(nutrition_log(user, 20, 900.0, 900.0));

    match classify(&history, user) {
        TrendOutcome::Classified(report) => {
            assert!((report.avg_carbs_g - 250.0).abs() < 1e-9);
            assert!((report.avg_protein_g - 110.0).abs() < 1e-9);
        }
        other => panic!("expected classification, got {other:?}"),
    }
}

#[test]
fn fueling_alert_fires_on_slowdown_with_low_carbs() {
    init_test_logging();
    let user = Uuid::new_v4();
    let mut history = InMemoryHistory::new();
    // Newest-first halves: recent [60,60,60], previous [55,55,55];
    // 60 > 55 * 1.02 so performance degraded.
    for (day, time) in [
        (1, 55.0),
        (2, 55.0),
        (3, 55.0),
        (4, 60.0),
        (5, 60.0),
        (6, 60.0),
    ] {
        history.push_session(runner_session(user, day, time));
    }
    // Two distinct training days averaging under 250 g
    history.push_log(nutrition_log(user, 2, 180.0, 100.0));
    history.push_log(nutrition_log(user, 4, 200.0, 100.0));

    let insight = RuleEngine::new()
        .fueling_alert(&history, user)
        .unwrap()
        .expect("alert should fire");
    assert_eq!(insight.kind, InsightKind::FuelingAlert);
    assert!(insight.message.contains("400m Sprint"));
    assert!(insight.message.contains("60.00s"));
    assert!(insight.message.contains("55.00s"));
    assert!(insight.message.contains("190 g"));
}

#[test]
fn fueling_alert_silent_when_carbs_sufficient() {
    init_test_logging();
    let user = Uuid::new_v4();
    let mut history = InMemoryHistory::new();
    for (day, time) in [
        (1, 55.0),
        (2, 55.0),
        (3, 55.0),
        (4, 60.0),
        (5, 60.0),
        (6, 60.0),
    ] {
        history.push_session(runner_session(user, day, time));
    }
    history.push_log(nutrition_log(user, 2, 300.0, 100.0));
    history.push_log(nutrition_log(user, 4, 320.0, 100.0));

    assert!(RuleEngine::new()
        .fueling_alert(&history, user)
        .unwrap()
        .is_none());
}

#[test]
fn fueling_alert_silent_when_performance_holds() {
    init_test_logging();
    let user = Uuid::new_v4();
    let mut history = InMemoryHistory::new();
    // Recent half is faster; no degradation
    for (day, time) in [(1, 60.0), (2, 60.0), (3, 55.0), (4, 55.0)] {
        history.push_session(runner_session(user, day, time));
    }
    history.push_log(nutrition_log(user, 2, 100.0, 80.0));
    history.push_log(nutrition_log(user, 4, 100.0, 80.0));

    assert!(RuleEngine::new()
        .fueling_alert(&history, user)
        .unwrap()
        .is_none());
}

#[test]
fn plateau_silent_when_recent_max_exceeds_previous() {
    init_test_logging();
    let user = Uuid::new_v4();
    let mut history = InMemoryHistory::new();
    // Most-recent-first series [5.0, 5.2, 5.1, 5.0]:
    // recent max 5.2 > previous max 5.1, no plateau
    for (day, jump) in [(4, 5.0), (3, 5.2), (2, 5.1), (1, 5.0)] {
        history.push_session(jumper_session(user, day, jump));
    }

    assert!(RuleEngine::new()
        .plateau_detection(&history, user)
        .unwrap()
        .is_none());
}

#[test]
fn plateau_fires_when_recent_max_falls_behind() {
    init_test_logging();
    let user = Uuid::new_v4();
    let mut history = InMemoryHistory::new();
    // Most-recent-first series [5.0, 5.0, 5.2, 5.3]:
    // recent max 5.0 <= previous max 5.3
    for (day, jump) in [(4, 5.0), (3, 5.0), (2, 5.2), (1, 5.3)] {
        history.push_session(jumper_session(user, day, jump));
    }

    let insight = RuleEngine::new()
        .plateau_detection(&history, user)
        .unwrap()
        .expect("plateau should fire");
    assert_eq!(insight.kind, InsightKind::Plateau);
    assert!(insight.message.contains("Long Jump"));
    assert!(insight.message.contains("5.3"));
}

#[test]
fn plateau_tolerates_missing_jump_detail() {
    init_test_logging();
    let user = Uuid::new_v4();
    let mut history = InMemoryHistory::new();
    let mut broken = jumper_session(user, 4, 5.0);
    broken.detail = None;
    history.push_session(broken);
    history.push_session(jumper_session(user, 3, 5.0));
    history.push_session(jumper_session(user, 2, 5.2));

    // Remaining values [5.0, 5.2]: recent max 5.0 <= previous 5.2
    let insight = RuleEngine::new()
        .plateau_detection(&history, user)
        .unwrap();
    assert!(insight.is_some());
}

#[test]
fn load_impact_fires_when_weight_up_and_distance_down() {
    init_test_logging();
    let user = Uuid::new_v4();
    let mut history = InMemoryHistory::new();
    // Newest-first: halves [(6.0, 17.0), (6.0, 17.2)] and [(5.0, 18.5), (5.0, 18.3)]
    history.push_session(thrower_session(user, 4, 6.0, 17.0));
    history.push_session(thrower_session(user, 3, 6.0, 17.2));
    history.push_session(thrower_session(user, 2, 5.0, 18.5));
    history.push_session(thrower_session(user, 1, 5.0, 18.3));

    let insight = RuleEngine::new()
        .load_impact(&history, user)
        .unwrap()
        .expect("load impact should fire");
    assert_eq!(insight.kind, InsightKind::LoadImpact);
    assert!(insight.message.contains("Shot Put"));
}

#[test]
fn load_impact_unequal_halves_for_three_sessions() {
    init_test_logging();
    let user = Uuid::new_v4();
    let mut history = InMemoryHistory::new();
    // n=3 splits into windows of 2 and 1 by the ceiling rule
    history.push_session(thrower_session(user, 3, 6.0, 17.0));
    history.push_session(thrower_session(user, 2, 6.0, 17.5));
    history.push_session(thrower_session(user, 1, 5.0, 18.0));

    // Recent window mean weight 6.0 > previous 5.0; distance 17.25 < 18.0
    let insight = RuleEngine::new().load_impact(&history, user).unwrap();
    assert!(insight.is_some());
}

#[test]
fn load_impact_silent_on_missing_thrower_detail() {
    init_test_logging();
    let user = Uuid::new_v4();
    let mut history = InMemoryHistory::new();
    history.push_session(thrower_session(user, 4, 6.0, 17.0));
    let mut broken = thrower_session(user, 3, 6.0, 17.2);
    broken.detail = None;
    history.push_session(broken);
    history.push_session(thrower_session(user, 2, 5.0, 18.5));
    history.push_session(thrower_session(user, 1, 5.0, 18.3));

    assert!(RuleEngine::new().load_impact(&history, user).unwrap().is_none());
}

#[test]
fn load_impact_silent_when_distance_holds() {
    init_test_logging();
    let user = Uuid::new_v4();
    let mut history = InMemoryHistory::new();
    // Weight up but distance also up: adaptation is working
    history.push_session(thrower_session(user, 4, 6.0, 19.0));
    history.push_session(thrower_session(user, 3, 6.0, 18.8));
    history.push_session(thrower_session(user, 2, 5.0, 18.5));
    history.push_session(thrower_session(user, 1, 5.0, 18.3));

    assert!(RuleEngine::new().load_impact(&history, user).unwrap().is_none());
}

#[test]
fn engine_emits_ordered_insights_for_full_history() {
    init_test_logging();
    let user = Uuid::new_v4();
    let mut history = InMemoryHistory::new();
    for (day, time) in [
        (1, 55.0),
        (2, 55.0),
        (3, 55.0),
        (4, 60.0),
        (5, 60.0),
        (6, 60.0),
    ] {
        history.push_session(runner_session(user, day, time));
    }
    history.push_log(nutrition_log(user, 2, 180.0, 100.0));
    history.push_log(nutrition_log(user, 4, 200.0, 100.0));

    let insights = InsightEngine::new().generate(&history, user);
    let kinds: Vec<InsightKind> = insights.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![
            InsightKind::TrendAnalysis,
            InsightKind::FuelingAlert,
            InsightKind::TrainingPlan,
            InsightKind::DietPlan,
        ]
    );
}

#[test]
fn engine_falls_back_to_guidance_message_on_empty_history() {
    init_test_logging();
    let user = Uuid::new_v4();
    let history = InMemoryHistory::new();

    let insights = InsightEngine::new().generate(&history, user);
    // Both plan generators degrade to notices; nothing else fires
    assert_eq!(insights.len(), 2);
    assert!(insights.iter().all(|i| i.kind == InsightKind::DataGap));
}

#[test]
fn derived_calories_recomputed_on_save() {
    init_test_logging();
    let user = Uuid::new_v4();
    let mut history = InMemoryHistory::new();
    history.set_body_weight(user, 80.0);

    let mut session = runner_session(user, 1, 60.0);
    // Caller-supplied value must be overwritten on save
    session.calories_burned = 9999.0;
    history.push_session(session);

    let sessions = tartan::intelligence::HistoryProvider::training_sessions(
        &history, user, None, None,
    )
    .unwrap();
    // 7 MET * 80 kg * 1 h
    assert!((sessions[0].calories_burned - 560.0).abs() < f64::EPSILON);
}
