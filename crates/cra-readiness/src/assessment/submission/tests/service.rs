use super::common::*;
use crate::assessment::domain::{FacetError, Rating};
use crate::assessment::submission::repository::{
    AssessmentRepository, NotificationKind, NotificationStatus, RepositoryError,
};
use crate::assessment::submission::{AssessmentId, AssessmentSubmissionService, SubmissionError};
use crate::config::NotificationConfig;
use std::sync::Arc;

#[test]
fn submit_stores_snapshot_then_sends_both_notices() {
    let (service, repository, notifier) = build_service();

    let receipt = service.submit(submission()).expect("submission succeeds");

    assert!(receipt.assessment_id.0.starts_with("cra-"));
    assert_eq!(
        receipt.report_link,
        format!("https://cra.example/report/{}", receipt.assessment_id)
    );
    assert_eq!(receipt.summary.overall_score, Some(80));
    assert!(receipt.notifications.admin.is_delivered());
    assert!(receipt.notifications.client.is_delivered());
    assert!(receipt.notifications_persisted);

    let stored = repository
        .fetch(&receipt.assessment_id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored.notifications, receipt.notifications);
    assert_eq!(stored.snapshot.contact.company, "Medtronix");

    let events = notifier.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, NotificationKind::Admin);
    assert_eq!(events[0].recipient, "leads@cra.example");
    assert_eq!(events[0].fields["from_email"], "grace@medtronix.example");
    assert_eq!(events[0].fields["product"], "Not provided");
    assert_eq!(events[0].fields["questions_answered"], "1/22");
    assert_eq!(events[0].fields["overall_score"], "80%");
    assert_eq!(events[1].kind, NotificationKind::Client);
    assert_eq!(events[1].template, "template_client_results");
    assert_eq!(events[1].recipient, "grace@medtronix.example");
    assert_eq!(events[1].fields["sector"], "Healthcare / MedTech");
}

#[test]
fn client_failure_leaves_admin_notice_and_record_intact() {
    let (service, repository, notifier) = build_service();
    notifier.fail(Some(NotificationKind::Client));

    let receipt = service.submit(submission()).expect("submission still succeeds");

    assert!(receipt.notifications.admin.is_delivered());
    match &receipt.notifications.client {
        NotificationStatus::Failed { reason } => assert!(reason.contains("relay refused")),
        other => panic!("expected failed client notice, got {other:?}"),
    }
    assert_eq!(notifier.events().len(), 1);
    assert!(repository
        .fetch(&receipt.assessment_id)
        .expect("fetch succeeds")
        .is_some());
}

#[test]
fn admin_failure_does_not_block_client_notice() {
    let (service, _, notifier) = build_service();
    notifier.fail(Some(NotificationKind::Admin));

    let receipt = service.submit(submission()).expect("submission succeeds");

    assert_eq!(receipt.notifications.admin.label(), "failed");
    assert!(receipt.notifications.client.is_delivered());
    assert_eq!(notifier.events()[0].kind, NotificationKind::Client);
}

#[test]
fn client_copy_can_be_declined() {
    let (service, _, notifier) = build_service();
    let mut submission = submission();
    submission.send_client_copy = false;

    let receipt = service.submit(submission).expect("submission succeeds");

    assert_eq!(receipt.notifications.client, NotificationStatus::Skipped);
    assert_eq!(notifier.events().len(), 1);
}

#[test]
fn declined_client_copy_is_not_sent_on_retry() {
    let (service, repository, notifier) = build_service();
    let mut submission = submission();
    submission.send_client_copy = false;

    let receipt = service.submit(submission).expect("submission succeeds");
    let status = service
        .retry_notification(&receipt.assessment_id, NotificationKind::Client)
        .expect("retry succeeds");

    assert_eq!(status, NotificationStatus::Skipped);
    assert_eq!(notifier.events().len(), 1);
    let stored = repository
        .fetch(&receipt.assessment_id)
        .expect("fetch succeeds")
        .expect("record stored");
    assert_eq!(stored.notifications.client, NotificationStatus::Skipped);
}

#[test]
fn unpersisted_notification_log_is_flagged_on_receipt() {
    let repository = Arc::new(InsertOnlyRepository::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service = AssessmentSubmissionService::new(
        repository.clone(),
        notifier.clone(),
        notification_config(),
    );

    let receipt = service.submit(submission()).expect("submission succeeds");

    assert!(!receipt.notifications_persisted);
    assert!(receipt.notifications.admin.is_delivered());
    assert_eq!(notifier.events().len(), 2);
    let stored = repository
        .fetch(&receipt.assessment_id)
        .expect("fetch succeeds")
        .expect("record stored");
    assert_eq!(stored.notifications.admin, NotificationStatus::Pending);
}

#[test]
fn disabled_client_template_skips_and_rejects_retry() {
    let (service, _, notifier) = build_service_with(NotificationConfig {
        client_template: None,
        ..notification_config()
    });

    let receipt = service.submit(submission()).expect("submission succeeds");
    assert_eq!(receipt.notifications.client, NotificationStatus::Skipped);
    assert_eq!(notifier.events().len(), 1);

    match service.retry_notification(&receipt.assessment_id, NotificationKind::Client) {
        Err(SubmissionError::NotificationDisabled(NotificationKind::Client)) => {}
        other => panic!("expected disabled error, got {other:?}"),
    }
}

#[test]
fn retry_resends_failed_notice_and_persists_status() {
    let (service, repository, notifier) = build_service();
    notifier.fail(Some(NotificationKind::Client));
    let receipt = service.submit(submission()).expect("submission succeeds");

    notifier.fail(None);
    let status = service
        .retry_notification(&receipt.assessment_id, NotificationKind::Client)
        .expect("retry succeeds");

    assert!(status.is_delivered());
    let stored = repository
        .fetch(&receipt.assessment_id)
        .expect("fetch succeeds")
        .expect("record present");
    assert!(stored.notifications.client.is_delivered());
    assert!(stored.notifications.admin.is_delivered());
}

#[test]
fn retry_does_not_resend_delivered_notice() {
    let (service, _, notifier) = build_service();
    let receipt = service.submit(submission()).expect("submission succeeds");

    let status = service
        .retry_notification(&receipt.assessment_id, NotificationKind::Admin)
        .expect("retry succeeds");

    assert_eq!(&status, &receipt.notifications.admin);
    assert_eq!(notifier.events().len(), 2);
}

#[test]
fn submit_rejects_unknown_facets_before_storing() {
    let (service, repository, notifier) = build_service();
    let mut submission = submission();
    submission.sector = "aerospace".to_string();

    match service.submit(submission) {
        Err(SubmissionError::Facet(FacetError::UnknownSector(value))) => {
            assert_eq!(value, "aerospace")
        }
        other => panic!("expected facet error, got {other:?}"),
    }
    assert!(repository
        .records
        .lock()
        .expect("repository mutex poisoned")
        .is_empty());
    assert!(notifier.events().is_empty());
}

#[test]
fn submit_propagates_repository_outage_without_notifying() {
    let notifier = Arc::new(MemoryNotifier::default());
    let service = AssessmentSubmissionService::new(
        Arc::new(UnavailableRepository),
        notifier.clone(),
        notification_config(),
    );

    match service.submit(submission()) {
        Err(SubmissionError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected repository error, got {other:?}"),
    }
    assert!(notifier.events().is_empty());
}

#[test]
fn stale_answers_are_reported_but_not_scored() {
    let (service, _, _) = build_service();
    let mut submission = submission();
    submission
        .answers
        .set_main("z9", Rating::Optimized)
        .set_sub("b2_s1", Rating::Initial);

    let receipt = service.submit(submission).expect("submission succeeds");

    assert_eq!(receipt.warnings.stale_ids, vec!["z9".to_string()]);
    assert_eq!(receipt.warnings.orphaned_sub_ratings, vec!["b2_s1".to_string()]);
    assert_eq!(receipt.summary.overall_score, Some(80));
    assert_eq!(receipt.summary.questions_answered, 1);
}

#[test]
fn report_rescores_stored_snapshot() {
    let (service, _, _) = build_service();
    let receipt = service
        .submit(class_ii_submission())
        .expect("submission succeeds");

    let report = service
        .report(&receipt.assessment_id)
        .expect("report builds");

    assert_eq!(report.scores.overall, receipt.summary.overall_score);
    assert_eq!(report.summary(), receipt.summary);
    assert_eq!(report.class_guidance.len(), 4);
}

#[test]
fn get_propagates_not_found() {
    let (service, _, _) = build_service();

    match service.get(&AssessmentId("missing".to_string())) {
        Err(SubmissionError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found error, got {other:?}"),
    }
}
