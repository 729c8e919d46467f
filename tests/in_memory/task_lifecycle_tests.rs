//! End-to-end task assignment and update tests.

use super::helpers::{CoreServices, services, date, register_employee};
use foreman::account::domain::AccountId;
use foreman::task::{
    domain::{Progress, Rating, TaskChanges},
    services::{AssignTaskRequest, TaskLifecycleError},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assigned_task_is_retrievable_with_defaults(services: CoreServices) {
    let owner = register_employee(&services.credentials, "Jane Doe", "jane@x.com").await;

    let assigned = services
        .lifecycle
        .assign(AssignTaskRequest::new(
            owner,
            "Quarterly report",
            date(2024, 5, 10),
            date(2024, 6, 10),
        ))
        .await
        .expect("assignment should succeed");

    let detail = services
        .reporting
        .get_task(assigned.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(detail.task.progress().as_str(), "Not started");
    assert_eq!(detail.task.rating().value(), 0);
    assert_eq!(detail.task.report_submission(), "Not submitted");
    assert_eq!(detail.task.review(), "Pending");
    assert_eq!(detail.owner_name.as_str(), "Jane Doe");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assignment_to_unregistered_owner_is_rejected(services: CoreServices) {
    let result = services
        .lifecycle
        .assign(AssignTaskRequest::new(
            AccountId::new(),
            "Quarterly report",
            date(2024, 5, 10),
            date(2024, 6, 10),
        ))
        .await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::OwnerNotFound(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_without_submission_date_clears_prior_value(services: CoreServices) {
    let owner = register_employee(&services.credentials, "Jane Doe", "jane@x.com").await;
    let assigned = services
        .lifecycle
        .assign(AssignTaskRequest::new(
            owner,
            "Quarterly report",
            date(2024, 5, 10),
            date(2024, 6, 10),
        ))
        .await
        .expect("assignment should succeed");

    services.lifecycle
        .update(
            assigned.id(),
            TaskChanges::new().with_actual_submission(date(2024, 6, 8)),
        )
        .await
        .expect("first update should succeed");

    // Not mentioning the date on the second update clears it.
    services.lifecycle
        .update(
            assigned.id(),
            TaskChanges::new().with_progress(Progress::new(Progress::ON_HOLD)),
        )
        .await
        .expect("second update should succeed");

    let detail = services
        .reporting
        .get_task(assigned.id())
        .await
        .expect("lookup should succeed");
    assert!(detail.task.actual_submission().is_none());
    assert_eq!(detail.task.progress().as_str(), "On Hold");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_review_cycle_lands_in_reporting(services: CoreServices) {
    let owner = register_employee(&services.credentials, "Jane Doe", "jane@x.com").await;
    let assigned = services
        .lifecycle
        .assign(AssignTaskRequest::new(
            owner,
            "Quarterly report",
            date(2024, 5, 10),
            date(2024, 6, 10),
        ))
        .await
        .expect("assignment should succeed");

    services.lifecycle
        .update(
            assigned.id(),
            TaskChanges::new().with_progress(Progress::new(Progress::ONGOING)),
        )
        .await
        .expect("progress update should succeed");

    services.lifecycle
        .update(
            assigned.id(),
            TaskChanges::new()
                .with_progress(Progress::new(Progress::COMPLETED))
                .with_report_submission("Submitted")
                .with_review("Thorough work")
                .with_rating(Rating::new(5).expect("valid rating"))
                .with_actual_submission(date(2024, 6, 9)),
        )
        .await
        .expect("completion update should succeed");

    let detail = services
        .reporting
        .get_task(assigned.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(detail.task.progress().as_str(), "Completed");
    assert_eq!(detail.task.report_submission(), "Submitted");
    assert_eq!(detail.task.review(), "Thorough work");
    assert_eq!(detail.task.rating().value(), 5);
    assert_eq!(detail.task.actual_submission(), Some(date(2024, 6, 9)));
}
