//! End-to-end aggregation tests.

use super::helpers::{CoreServices, services, date, register_employee};
use foreman::reporting::views::TaskWithOwner;
use foreman::task::services::AssignTaskRequest;
use rstest::rstest;

/// Asserts the roster carries exactly the expected task names, in order.
///
/// # Errors
///
/// Returns an error when the roster length or any task name differs.
fn assert_roster_names(roster: &[TaskWithOwner], expected: &[&str]) -> Result<(), eyre::Report> {
    let names: Vec<&str> = roster
        .iter()
        .map(|entry| entry.task.name().as_str())
        .collect();
    eyre::ensure!(
        names == expected,
        "expected roster {expected:?}, found {names:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn counts_match_skewed_assignment(services: CoreServices) {
    let jane = register_employee(&services.credentials, "Jane Doe", "jane@x.com").await;
    let rosa = register_employee(&services.credentials, "Rosa Park", "rosa@x.com").await;

    for name in ["Report one", "Report two", "Report three", "Report four"] {
        services.lifecycle
            .assign(AssignTaskRequest::new(
                jane,
                name,
                date(2024, 5, 10),
                date(2024, 6, 10),
            ))
            .await
            .expect("assignment should succeed");
    }

    let summaries = services
        .reporting
        .list_accounts_with_task_counts()
        .await
        .expect("listing should succeed");

    let count_for = |id| {
        summaries
            .iter()
            .find(|summary| summary.id == id)
            .map(|summary| summary.task_count)
    };
    assert_eq!(count_for(jane), Some(4));
    assert_eq!(count_for(rosa), Some(0));

    let total: usize = summaries.iter().map(|summary| summary.task_count).sum();
    assert_eq!(total, 4);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn owner_roster_is_ordered_and_joined(services: CoreServices) -> Result<(), eyre::Report> {
    let jane = register_employee(&services.credentials, "Jane Doe", "jane@x.com").await;
    register_employee(&services.credentials, "Rosa Park", "rosa@x.com").await;

    for name in ["Report one", "Report two"] {
        services.lifecycle
            .assign(AssignTaskRequest::new(
                jane,
                name,
                date(2024, 5, 10),
                date(2024, 6, 10),
            ))
            .await
            .expect("assignment should succeed");
    }

    let roster = services
        .reporting
        .list_tasks_for_owner(jane)
        .await
        .expect("listing should succeed");

    assert_roster_names(&roster, &["Report one", "Report two"])?;
    assert!(roster
        .iter()
        .all(|entry| entry.owner_name.as_str() == "Jane Doe"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn summaries_never_expose_credentials(services: CoreServices) {
    register_employee(&services.credentials, "Jane Doe", "jane@x.com").await;

    let summaries = services
        .reporting
        .list_accounts_with_task_counts()
        .await
        .expect("listing should succeed");

    let rendered = format!("{summaries:?}");
    assert!(!rendered.contains("$2b$"));
    assert!(!rendered.contains("Secret1!"));
}
