use checkin::error::CheckInError;
use checkin::feedback::{
    Accuracy, FeedbackEntry, FeedbackStore, FeedbackSubmission, FeedbackSummary, Usefulness,
};
use rstest::rstest;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

struct TestContext {
    _dir: TempDir,
    store: FeedbackStore,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = FeedbackStore::open(dir.path().join("data").join("feedback.json"));
        Self { _dir: dir, store }
    }
}

fn submission(
    score: f64,
    enjoyment: f64,
    accurate: &str,
    useful: &str,
    suggestion: &str,
) -> FeedbackSubmission {
    FeedbackSubmission {
        overall_score: score,
        enjoyment,
        accurate: accurate.to_string(),
        useful: useful.to_string(),
        suggestion: suggestion.to_string(),
    }
}

// --- COERCION ---

#[rstest]
#[case(json!({"overallScore": 72}), 72.0)]
#[case(json!({"overallScore": "64"}), 64.0)]
#[case(json!({"overallScore": " 12.5 "}), 12.5)]
#[case(json!({"overallScore": "lots"}), 0.0)]
#[case(json!({"overallScore": null}), 0.0)]
#[case(json!({"overallScore": true}), 1.0)]
#[case(json!({"overallScore": [1, 2]}), 0.0)]
#[case(json!({}), 0.0)]
fn test_score_coercion(#[case] body: serde_json::Value, #[case] expected: f64) {
    assert_eq!(FeedbackSubmission::from_json(&body).overall_score, expected);
}

#[test]
fn test_non_object_body_becomes_empty_submission() {
    let sub = FeedbackSubmission::from_json(&json!("hello"));
    assert_eq!(sub, FeedbackSubmission::default());
}

#[test]
fn test_text_fields_only_accept_strings() {
    let sub = FeedbackSubmission::from_json(&json!({
        "accurate": "yes",
        "useful": 3,
        "suggestion": {"nested": true},
        "enjoyment": "4"
    }));
    assert_eq!(sub.accurate, "yes");
    assert_eq!(sub.useful, "");
    assert_eq!(sub.suggestion, "");
    assert_eq!(sub.enjoyment, 4.0);
}

#[test]
fn test_entry_gets_id_and_timestamp() {
    let entry = FeedbackEntry::new(submission(80.0, 5.0, "yes", "maybe", ""));
    assert_eq!(entry.id.len(), 36);
    assert!(entry.submitted_at.ends_with('Z'));
    assert!(chrono::DateTime::parse_from_rfc3339(&entry.submitted_at).is_ok());
    assert_eq!(entry.accuracy(), Some(Accuracy::Yes));
    assert_eq!(entry.usefulness(), Some(Usefulness::Maybe));
}

// --- STORE ---

#[test]
fn test_missing_file_lists_empty() {
    let ctx = TestContext::new();
    assert!(ctx.store.list().is_empty());
}

#[test]
fn test_append_persists_in_order() {
    let ctx = TestContext::new();
    let a = ctx.store.append(submission(70.0, 4.0, "yes", "yes", "")).unwrap();
    let b = ctx.store.append(submission(40.0, 2.0, "no", "no", "More questions")).unwrap();
    assert_ne!(a.id, b.id);

    // A fresh handle on the same path sees both entries.
    let reopened = FeedbackStore::open(ctx.store.path());
    let entries = reopened.list();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], a);
    assert_eq!(entries[1], b);

    let raw = fs::read_to_string(ctx.store.path()).unwrap();
    assert!(raw.contains("\"overallScore\""));
    assert!(raw.contains("\"submittedAt\""));
}

#[test]
fn test_corrupt_file_lists_empty_but_is_never_overwritten() {
    let ctx = TestContext::new();
    fs::create_dir_all(ctx.store.path().parent().unwrap()).unwrap();
    fs::write(ctx.store.path(), "{not json").unwrap();

    assert!(ctx.store.list().is_empty());
    let err = ctx.store.append(submission(50.0, 3.0, "", "", "")).unwrap_err();
    assert!(matches!(err, CheckInError::Store(_)));
    assert_eq!(fs::read_to_string(ctx.store.path()).unwrap(), "{not json");
}

#[rstest]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
#[case(f64::NEG_INFINITY)]
fn test_non_finite_numbers_do_not_lose_earlier_entries(#[case] bad: f64) {
    let ctx = TestContext::new();
    ctx.store.append(submission(70.0, 4.0, "yes", "yes", "")).unwrap();
    ctx.store.append(submission(80.0, 5.0, "yes", "yes", "")).unwrap();

    let stored = ctx.store.append(submission(bad, bad, "no", "no", "")).unwrap();
    assert_eq!(stored.overall_score, 0.0);
    assert_eq!(stored.enjoyment, 0.0);
    assert_eq!(ctx.store.list().len(), 3);

    ctx.store.append(submission(90.0, 4.0, "yes", "maybe", "")).unwrap();
    let scores: Vec<f64> = ctx.store.list().iter().map(|e| e.overall_score).collect();
    assert_eq!(scores, vec![70.0, 80.0, 0.0, 90.0]);
}

#[test]
fn test_concurrent_appends_are_not_lost() {
    let ctx = TestContext::new();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = ctx.store.clone();
            std::thread::spawn(move || {
                store
                    .append(submission(i as f64, 3.0, "yes", "yes", ""))
                    .unwrap()
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(ctx.store.list().len(), 8);
}

#[test]
fn test_csv_export() {
    let ctx = TestContext::new();
    ctx.store
        .append(submission(88.0, 5.0, "yes", "yes", "Loved it, thanks"))
        .unwrap();
    ctx.store.append(submission(35.0, 2.0, "no", "maybe", "")).unwrap();

    let mut buf = Vec::new();
    let written = ctx.store.export_csv(&mut buf).unwrap();
    assert_eq!(written, 2);

    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "id,submitted_at,overall_score,enjoyment,accurate,useful,suggestion"
    );
    // Commas inside a field are quoted.
    assert!(lines[1].ends_with(",88,5,yes,yes,\"Loved it, thanks\""));
    assert!(lines[2].ends_with(",35,2,no,maybe,"));
}

// --- SUMMARY ---

#[test]
fn test_summary_of_nothing() {
    let summary = FeedbackSummary::from_entries(&[]);
    assert_eq!(summary.total, 0);
    assert_eq!(summary.avg_enjoyment, None);
    assert_eq!(summary.avg_score, None);
    assert_eq!(summary.pct(0), None);
    assert!(summary.suggestions.is_empty());
}

#[test]
fn test_summary_counts_and_averages() {
    let entries: Vec<FeedbackEntry> = vec![
        FeedbackEntry::new(submission(80.0, 5.0, "yes", "yes", "  ")),
        FeedbackEntry::new(submission(61.0, 4.0, "somewhat", "maybe", "Add a reminder")),
        FeedbackEntry::new(submission(40.0, 4.0, "no", "yes", "")),
        FeedbackEntry::new(submission(0.0, 0.0, "", "bogus", "")),
    ];
    let summary = FeedbackSummary::from_entries(&entries);

    assert_eq!(summary.total, 4);
    assert_eq!(summary.avg_enjoyment, Some(3.3)); // 13 / 4 = 3.25
    assert_eq!(summary.avg_score, Some(45)); // 181 / 4 = 45.25
    assert_eq!(summary.accurate.yes, 1);
    assert_eq!(summary.accurate.somewhat, 1);
    assert_eq!(summary.accurate.no, 1);
    assert_eq!(summary.useful.yes, 2);
    assert_eq!(summary.useful.maybe, 1);
    assert_eq!(summary.useful.no, 0);
    assert_eq!(summary.pct(summary.useful.yes), Some(50));

    assert_eq!(summary.suggestions.len(), 1);
    let s = &summary.suggestions[0];
    assert_eq!(s.text, "Add a reminder");
    assert_eq!(s.score, 61.0);
    assert_eq!(s.date.len(), 10);
}
