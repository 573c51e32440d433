use chrono::Duration;

use super::common::*;
use crate::board::domain::{
    ApplicationDraft, ApplicationStatus, EmploymentType, ExperienceLevel, JobDraft, JobId,
    JobPatch, JobStatus, NotificationId, UserId,
};
use crate::board::store::BoardError;

#[test]
fn create_job_fills_documented_defaults() {
    let board = seeded_board();

    let job = board
        .create_job(JobDraft::default())
        .expect("empty draft is valid");

    assert_eq!(job.title, "Untitled Position");
    assert_eq!(job.location, "Remote");
    assert_eq!(job.employment_type, EmploymentType::FullTime);
    assert_eq!(job.experience_level, ExperienceLevel::Entry);
    assert_eq!(job.status, JobStatus::Active);
    assert!(!job.featured);
    assert!(job.requirements.is_empty());
    assert!(job.responsibilities.is_empty());
    assert!(job.skills.is_empty());
    assert!(job.applicants.is_empty());
    assert_eq!(job.expires_at, job.posted_at + Duration::days(30));
}

#[test]
fn create_job_mints_fresh_unique_ids() {
    let board = seeded_board();

    let first = board
        .create_job(JobDraft {
            title: Some("X".to_string()),
            ..JobDraft::default()
        })
        .expect("valid draft");
    let second = board
        .create_job(JobDraft::default())
        .expect("valid draft");

    assert_ne!(first.id, second.id);
    assert_eq!(board.job(&first.id).expect("stored").title, "X");
}

#[test]
fn create_job_keeps_caller_supplied_fields() {
    let board = seeded_board();
    let expires = days_ago(0) + Duration::days(60);

    let job = board
        .create_job(JobDraft {
            title: Some("Platform Engineer".to_string()),
            status: Some(JobStatus::Draft),
            expires_at: Some(expires),
            salary: Some("$140,000".to_string()),
            ..JobDraft::default()
        })
        .expect("valid draft");

    assert_eq!(job.status, JobStatus::Draft);
    assert_eq!(job.expires_at, expires);
    assert_eq!(job.salary.as_deref(), Some("$140,000"));
}

#[test]
fn create_job_rejects_blank_title() {
    let board = seeded_board();

    match board.create_job(JobDraft {
        title: Some("   ".to_string()),
        ..JobDraft::default()
    }) {
        Err(BoardError::Validation { field, .. }) => assert_eq!(field, "title"),
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn update_job_changes_only_patched_fields() {
    let board = seeded_board();
    let before = board.job(&JobId("job1".to_string())).expect("seeded job");

    let after = board
        .update_job(
            &before.id,
            JobPatch {
                status: Some(JobStatus::Closed),
                ..JobPatch::default()
            },
        )
        .expect("patch applies");

    assert_eq!(after.status, JobStatus::Closed);
    assert_eq!(after.title, before.title);
    assert_eq!(after.company, before.company);
    assert_eq!(after.location, before.location);
    assert_eq!(after.salary, before.salary);
    assert_eq!(after.employment_type, before.employment_type);
    assert_eq!(after.experience_level, before.experience_level);
    assert_eq!(after.description, before.description);
    assert_eq!(after.requirements, before.requirements);
    assert_eq!(after.responsibilities, before.responsibilities);
    assert_eq!(after.skills, before.skills);
    assert_eq!(after.employer_id, before.employer_id);
    assert_eq!(after.posted_at, before.posted_at);
    assert_eq!(after.expires_at, before.expires_at);
    assert_eq!(after.applicants, before.applicants);
    assert_eq!(after.featured, before.featured);
}

#[test]
fn update_job_reports_missing_ids() {
    let board = seeded_board();

    match board.update_job(&JobId("job-missing".to_string()), JobPatch::default()) {
        Err(BoardError::JobNotFound(id)) => assert_eq!(id.0, "job-missing"),
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn apply_defaults_resume_and_starts_pending() {
    let board = seeded_board();
    let job_id = JobId("job3".to_string());
    let jobseeker = UserId("user-priya".to_string());

    let application = board
        .apply_to_job(&job_id, &jobseeker, ApplicationDraft::default())
        .expect("first application succeeds");

    assert_eq!(application.resume, "default_resume.pdf");
    assert_eq!(application.status, ApplicationStatus::Pending);
    assert!(application.notes.is_none());

    let job = board.job(&job_id).expect("job present");
    assert_eq!(job.applicants.last(), Some(&jobseeker));
}

#[test]
fn second_application_for_same_pair_is_rejected() {
    let board = seeded_board();
    let job_id = JobId("job3".to_string());
    let jobseeker = UserId("user-alex".to_string());

    board
        .apply_to_job(&job_id, &jobseeker, ApplicationDraft::default())
        .expect("first application succeeds");
    match board.apply_to_job(&job_id, &jobseeker, ApplicationDraft::default()) {
        Err(BoardError::DuplicateApplication { job, .. }) => assert_eq!(job, job_id),
        other => panic!("expected duplicate application, got {other:?}"),
    }

    // Exactly one application and one applicant entry survive.
    assert_eq!(board.applications_for_job(&job_id).len(), 1);
    let job = board.job(&job_id).expect("job present");
    assert_eq!(
        job.applicants.iter().filter(|id| **id == jobseeker).count(),
        1
    );
}

#[test]
fn apply_to_missing_job_is_not_found() {
    let board = seeded_board();

    match board.apply_to_job(
        &JobId("job-missing".to_string()),
        &UserId("user-alex".to_string()),
        ApplicationDraft::default(),
    ) {
        Err(BoardError::JobNotFound(_)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn apply_notifies_the_owning_employer() {
    let board = seeded_board();
    let employer = UserId("user-raj".to_string());
    let unread_before = board.unread_count(&employer);

    board
        .apply_to_job(
            &JobId("job3".to_string()),
            &UserId("user-alex".to_string()),
            ApplicationDraft::default(),
        )
        .expect("application succeeds");

    let notifications = board.notifications_for(&employer);
    let newest = notifications.first().expect("notification added");
    assert_eq!(newest.title, "New Applicant");
    assert!(newest.message.contains("Alex Johnson"));
    assert!(newest.message.contains("Data Scientist Intern"));
    assert!(!newest.read);
    assert_eq!(board.unread_count(&employer), unread_before + 1);
}

#[test]
fn notifications_can_be_marked_read() {
    let board = seeded_board();
    let user = UserId("user-alex".to_string());
    assert_eq!(board.unread_count(&user), 1);

    let marked = board
        .mark_notification_read(&NotificationId("notif1".to_string()))
        .expect("seeded notification");
    assert!(marked.read);
    assert_eq!(board.unread_count(&user), 0);

    match board.mark_notification_read(&NotificationId("notif-missing".to_string())) {
        Err(BoardError::NotificationNotFound(_)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn mark_all_read_only_touches_one_user() {
    let board = seeded_board();
    let raj = UserId("user-raj".to_string());
    let alex = UserId("user-alex".to_string());

    let flipped = board.mark_all_read(&raj);
    assert_eq!(flipped, 1);
    assert_eq!(board.unread_count(&raj), 0);
    assert_eq!(board.unread_count(&alex), 1);
}

#[test]
fn featured_jobs_are_active_and_flagged() {
    let board = seeded_board();

    for job in board.featured_jobs() {
        assert!(job.featured);
        assert_eq!(job.status, JobStatus::Active);
    }

    // Closing a featured job removes it from the featured view.
    let featured = board.featured_jobs();
    let first = featured.first().expect("builtin seed has featured jobs");
    board
        .update_job(
            &first.id,
            JobPatch {
                status: Some(JobStatus::Closed),
                ..JobPatch::default()
            },
        )
        .expect("patch applies");
    assert!(board.featured_jobs().iter().all(|job| job.id != first.id));
}

#[test]
fn recent_jobs_are_newest_first_and_capped() {
    let board = seeded_board();
    for _ in 0..8 {
        board
            .create_job(JobDraft::default())
            .expect("valid draft");
    }

    let recent = board.recent_jobs();
    assert_eq!(recent.len(), 6);
    for pair in recent.windows(2) {
        assert!(pair[0].posted_at >= pair[1].posted_at);
    }
}
