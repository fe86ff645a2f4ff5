//! End-to-end notifier behavior through the public API, using the fake
//! backend from the `test-utils` feature.

use std::sync::Arc;
use studybell::core::{NotificationBackend, Permission, REMINDER_TITLE};
use studybell::notifier::test_utils::FakeBackend;
use studybell::notifier::Notifier;

#[tokio::test]
async fn first_run_prompts_then_shows_after_grant() {
    // The user has never decided; the fake user clicks "Allow".
    let backend = Arc::new(
        FakeBackend::new(true, Permission::Default).with_prompt_answer(Permission::Granted),
    );
    let notifier = Notifier::new(backend.clone());

    let prompt = notifier
        .request_permission_if_needed()
        .expect("undecided permission should spawn a prompt");
    prompt.await.unwrap();

    notifier
        .show_notification("You did not study Math for 3 days")
        .await
        .unwrap();

    assert_eq!(backend.request_count(), 1);
    let delivered = backend.delivered();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].title, REMINDER_TITLE);
    assert_eq!(delivered[0].body, "You did not study Math for 3 days");
}

#[tokio::test]
async fn denied_user_is_never_notified() {
    let backend = Arc::new(
        FakeBackend::new(true, Permission::Default).with_prompt_answer(Permission::Denied),
    );
    let notifier = Notifier::new(backend.clone());

    let prompt = notifier.request_permission_if_needed().unwrap();
    prompt.await.unwrap();

    let result = notifier.show_notification("still nothing").await;

    assert!(result.is_ok());
    assert_eq!(backend.permission(), Permission::Denied);
    assert!(backend.delivered().is_empty());
}

#[tokio::test]
async fn dismissed_prompt_leaves_permission_undecided() {
    // The fake user closes the prompt without deciding.
    let backend = Arc::new(FakeBackend::new(true, Permission::Default));
    let notifier = Notifier::new(backend.clone());

    let prompt = notifier.request_permission_if_needed().unwrap();
    prompt.await.unwrap();

    // Still undecided, so the prompt would reappear on the next run.
    assert_eq!(backend.permission(), Permission::Default);
    assert!(notifier.request_permission_if_needed().is_some());
}

#[tokio::test]
async fn missing_capability_is_fully_silent() {
    let backend = Arc::new(FakeBackend::new(false, Permission::Default));
    let notifier = Notifier::new(backend.clone());

    assert!(notifier.request_permission_if_needed().is_none());
    let result = notifier.show_notification("nobody home").await;

    assert!(result.is_ok());
    assert_eq!(backend.request_count(), 0);
    assert!(backend.delivered().is_empty());
}

#[tokio::test]
async fn each_show_call_produces_one_notification() {
    let backend = Arc::new(FakeBackend::new(true, Permission::Granted));
    let notifier = Notifier::new(backend.clone());

    notifier.show_notification("first").await.unwrap();
    notifier.show_notification("second").await.unwrap();

    let delivered = backend.delivered();
    assert_eq!(delivered.len(), 2);
    assert_eq!(delivered[0].body, "first");
    assert_eq!(delivered[1].body, "second");
}
