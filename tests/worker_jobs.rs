//! Integration tests for job dispatch.
//!
//! Jobs are fed in the wire format a queue consumer would deliver and the
//! reports are inspected as serialized JSON.

use serde_json::{json, Value};
use std::sync::Arc;

use negotiation_analytics::adapters::FixedClock;
use negotiation_analytics::application::{AnalyticsJob, JobDispatcher, UNPARSED_TASK};
use negotiation_analytics::config::{EngineConfig, WorkerConfig};
use negotiation_analytics::domain::foundation::Timestamp;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn dispatcher() -> JobDispatcher {
    JobDispatcher::new(
        &EngineConfig::default(),
        &WorkerConfig::default(),
        Arc::new(FixedClock::new(Timestamp::from_unix_secs(1_734_623_100))),
    )
}

async fn run(job: Value) -> Value {
    let job: AnalyticsJob = serde_json::from_value(job).expect("job should parse");
    let report = dispatcher().dispatch(job).await;
    serde_json::to_value(&report).expect("report should serialize")
}

// =============================================================================
// Acceptance scenarios
// =============================================================================

#[tokio::test]
async fn wsw_best_bundle_beats_midpoint() {
    let report = run(json!({
        "task": "optimize_bundles",
        "payload": {
            "issues": [{"id": "price", "title": "Price", "min_value": 0, "max_value": 100}],
            "utilities": {"A": {"price": 1.0}, "B": {"price": 1.0}},
            "method": "wsw"
        }
    }))
    .await;

    assert_eq!(report["status"], "success");
    assert_eq!(report["task"], "optimize_bundles");

    let best = &report["best"];
    let summed: f64 = best["party_utilities"]
        .as_object()
        .unwrap()
        .values()
        .map(|u| u.as_f64().unwrap())
        .sum();
    assert!(summed >= 1.0 - 1e-9, "midpoint sums to 1.0, best sums to {}", summed);
    assert_eq!(report["party_ids"], json!(["A", "B"]));
}

#[tokio::test]
async fn disjoint_reservations_have_no_zopa() {
    let report = run(json!({
        "task": "check_zopa",
        "payload": {
            "issues": [{"id": "price", "min_value": 0, "max_value": 100}],
            "reservations": {"A": {"price": 20}, "B": {"price": 60}},
            "targets": {"A": {"price": 20}, "B": {"price": 60}}
        }
    }))
    .await;

    assert_eq!(report["status"], "success");
    assert_eq!(report["all_issues_have_zopa"], false);
    assert_eq!(report["issues"][0]["has_zopa"], false);
    assert!(report["issues"][0]["interval"].is_null());
}

#[tokio::test]
async fn zero_probability_scenario_has_no_risk() {
    let report = run(json!({
        "task": "build_risk_tree",
        "payload": {
            "issues": [{"id": "price"}, {"id": "volume"}],
            "scenarios": [{"name": "sanctions", "probability": 0, "impacts": {"price": -0.8}}]
        }
    }))
    .await;

    assert_eq!(report["status"], "success");
    assert_eq!(report["overall_risk_index"], 0.0);
    for issue in report["issues"].as_array().unwrap() {
        assert_eq!(issue["expected_impact"], 0.0);
    }
}

#[tokio::test]
async fn first_round_offer_opens_at_ninety_percent_of_target() {
    let report = run(json!({
        "task": "propose_offer",
        "payload": {
            "party": {"id": "A", "name": "Acme"},
            "issue": {"id": "price", "title": "Price"},
            "preference": {"party_id": "A", "issue_id": "price", "weight": 0.9, "target_value": 100},
            "round_number": 1
        }
    }))
    .await;

    assert_eq!(report["status"], "success");
    assert_eq!(report["offer"]["strategy"], "opening_position");
    assert_eq!(report["offer"]["proposed_value"], 90.0);
    assert_eq!(report["offer"]["timestamp"], "2024-12-19T15:45:00Z");
}

// =============================================================================
// Failure reporting
// =============================================================================

#[tokio::test]
async fn missing_issue_id_is_reported_not_raised() {
    let report = run(json!({
        "task": "draft_position",
        "payload": {
            "party": {"id": "A"},
            "issue": {"id": "  "},
            "preference": {"party_id": "A", "issue_id": "price"}
        }
    }))
    .await;

    assert_eq!(report["status"], "failed");
    assert_eq!(report["kind"], "VALIDATION_FAILED");
    assert_eq!(report["context"]["party_id"], "A");
}

#[tokio::test]
async fn batch_mixes_successes_and_rejections_in_order() {
    let lines = [
        r#"{"task": "build_risk_tree", "payload": {"issues": []}}"#,
        r#"{"task": "teleport", "payload": {}}"#,
        r#"{"task": "check_zopa", "payload": {"issues": [], "reservations": {}}}"#,
    ];
    let batch = lines.iter().map(|line| AnalyticsJob::from_json_line(line)).collect();

    let reports = dispatcher().dispatch_all(batch).await;

    let tasks: Vec<_> = reports.iter().map(|r| r.task.as_str()).collect();
    assert_eq!(tasks, vec!["build_risk_tree", UNPARSED_TASK, "check_zopa"]);
    let statuses: Vec<_> = reports.iter().map(|r| r.is_success()).collect();
    assert_eq!(statuses, vec![true, false, true]);
}

#[tokio::test]
async fn concurrency_limit_of_one_still_completes_batch() {
    let dispatcher = JobDispatcher::new(
        &EngineConfig::default(),
        &WorkerConfig { max_concurrent_jobs: 1 },
        Arc::new(FixedClock::new(Timestamp::from_unix_secs(0))),
    );
    let batch = (0..6)
        .map(|_| AnalyticsJob::from_json_line(r#"{"task": "build_risk_tree", "payload": {"issues": []}}"#))
        .collect();

    let reports = dispatcher.dispatch_all(batch).await;

    assert_eq!(reports.len(), 6);
    assert!(reports.iter().all(|r| r.is_success()));
}
