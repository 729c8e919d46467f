//! Unit tests for task domain types.

use crate::account::domain::AccountId;
use crate::task::domain::{Progress, Rating, Task, TaskChanges, TaskDomainError, TaskName};
use chrono::{DateTime, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::rstest;

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid calendar date")
}

fn create_test_task() -> Task {
    let clock = DefaultClock;
    let name = TaskName::new("Quarterly report").expect("valid name");
    Task::new_assignment(
        AccountId::new(),
        name,
        date(2024, 5, 10),
        date(2024, 6, 10),
        &clock,
    )
}

// ── TaskName validation ────────────────────────────────────────────

#[rstest]
#[case("Quarterly report")]
#[case("x")]
#[case("  padded name  ")]
fn non_empty_task_names_are_accepted(#[case] input: &str) {
    let name = TaskName::new(input).expect("valid name");
    assert_eq!(name.as_str(), input);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn blank_task_name_is_rejected(#[case] input: &str) {
    let result = TaskName::new(input);
    assert!(matches!(result, Err(TaskDomainError::EmptyTaskName)));
}

// ── Rating validation ──────────────────────────────────────────────

#[rstest]
#[case(0)]
#[case(3)]
#[case(5)]
fn in_range_ratings_are_accepted(#[case] value: u8) {
    let rating = Rating::new(value).expect("valid rating");
    assert_eq!(rating.value(), value);
}

#[rstest]
#[case(6)]
#[case(100)]
fn out_of_range_rating_is_rejected(#[case] value: u8) {
    let result = Rating::new(value);
    assert!(matches!(result, Err(TaskDomainError::RatingOutOfRange(_))));
}

#[rstest]
fn default_rating_is_zero() {
    assert_eq!(Rating::default().value(), 0);
}

// ── Progress ───────────────────────────────────────────────────────

#[rstest]
fn default_progress_is_not_started() {
    assert_eq!(Progress::default().as_str(), Progress::NOT_STARTED);
}

#[rstest]
#[case(Progress::RECENTLY_STARTED)]
#[case(Progress::ONGOING)]
#[case(Progress::ON_HOLD)]
#[case(Progress::COMPLETED)]
#[case("Assigned")]
#[case("half done, waiting on review")]
#[case("")]
fn any_progress_string_is_accepted(#[case] input: &str) {
    // Progress is open text; no transition table is enforced.
    assert_eq!(Progress::new(input).as_str(), input);
}

// ── Assignment defaults ────────────────────────────────────────────

#[rstest]
fn new_assignment_starts_with_tracking_defaults() {
    let task = create_test_task();

    assert_eq!(task.progress().as_str(), "Not started");
    assert_eq!(task.report_submission(), "Not submitted");
    assert_eq!(task.review(), "Pending");
    assert_eq!(task.rating().value(), 0);
    assert!(task.actual_submission().is_none());
    assert_eq!(task.created_at(), task.updated_at());
}

#[rstest]
fn new_assignment_keeps_owner_and_dates() {
    let clock = DefaultClock;
    let owner = AccountId::new();
    let name = TaskName::new("Quarterly report").expect("valid name");
    let task = Task::new_assignment(owner, name, date(2024, 5, 10), date(2024, 6, 10), &clock);

    assert_eq!(task.owner(), owner);
    assert_eq!(task.name().as_str(), "Quarterly report");
    assert_eq!(task.assigned_on(), date(2024, 5, 10));
    assert_eq!(task.projected_submission(), date(2024, 6, 10));
}

// ── Partial update semantics ───────────────────────────────────────

#[rstest]
fn apply_update_replaces_only_present_fields() {
    let clock = DefaultClock;
    let mut task = create_test_task();

    task.apply_update(
        TaskChanges::new()
            .with_progress(Progress::new(Progress::ONGOING))
            .with_review("On track"),
        &clock,
    );

    assert_eq!(task.progress().as_str(), "Ongoing");
    assert_eq!(task.review(), "On track");
    // Absent fields keep their prior values.
    assert_eq!(task.report_submission(), "Not submitted");
    assert_eq!(task.rating().value(), 0);
}

#[rstest]
fn apply_update_sets_actual_submission_when_present() {
    let clock = DefaultClock;
    let mut task = create_test_task();

    task.apply_update(
        TaskChanges::new().with_actual_submission(date(2024, 6, 8)),
        &clock,
    );

    assert_eq!(task.actual_submission(), Some(date(2024, 6, 8)));
}

#[rstest]
fn apply_update_clears_actual_submission_when_absent() {
    let clock = DefaultClock;
    let mut task = create_test_task();
    task.apply_update(
        TaskChanges::new().with_actual_submission(date(2024, 6, 8)),
        &clock,
    );

    // An update that does not mention the date clears it.
    task.apply_update(
        TaskChanges::new().with_progress(Progress::new(Progress::COMPLETED)),
        &clock,
    );

    assert!(task.actual_submission().is_none());
    assert_eq!(task.progress().as_str(), "Completed");
}

#[rstest]
fn apply_update_accepts_completed_rating() {
    let clock = DefaultClock;
    let mut task = create_test_task();

    task.apply_update(
        TaskChanges::new()
            .with_progress(Progress::new(Progress::COMPLETED))
            .with_report_submission("Submitted")
            .with_review("Thorough work")
            .with_rating(Rating::new(4).expect("valid rating"))
            .with_actual_submission(date(2024, 6, 9)),
        &clock,
    );

    assert_eq!(task.rating().value(), 4);
    assert_eq!(task.report_submission(), "Submitted");
    assert_eq!(task.review(), "Thorough work");
    assert_eq!(task.actual_submission(), Some(date(2024, 6, 9)));
}
