use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;

use super::domain::{
    Application, ApplicationDraft, Job, JobDraft, JobId, JobPatch, Notification,
    NotificationDraft, NotificationId, UserId, UserRecord,
};
use super::query::FilterOptions;
use super::seed::{SeedData, SeedError};
use super::store::{BoardError, JobStore};

/// How many postings the recent-jobs view returns.
const RECENT_JOBS_LIMIT: usize = 6;

/// Clonable handle over the board state. Callers obtain one at startup and
/// pass it explicitly; every operation observes a consistent snapshot because
/// the store sits behind a single mutex. Wall-clock time is injected here so
/// the store itself stays clock-free.
#[derive(Clone)]
pub struct JobBoard {
    store: Arc<Mutex<JobStore>>,
}

impl JobBoard {
    pub fn new(store: JobStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    pub fn from_seed(seed: SeedData) -> Result<Self, SeedError> {
        Ok(Self::new(JobStore::from_seed(seed)?))
    }

    /// Answer a filter/sort query against the current postings.
    pub fn filter(&self, options: &FilterOptions) -> Vec<Job> {
        self.lock().filter(options, Utc::now())
    }

    pub fn job(&self, id: &JobId) -> Result<Job, BoardError> {
        self.lock()
            .job(id)
            .ok_or_else(|| BoardError::JobNotFound(id.clone()))
    }

    pub fn featured_jobs(&self) -> Vec<Job> {
        self.lock().featured_jobs()
    }

    pub fn recent_jobs(&self) -> Vec<Job> {
        self.lock().recent_jobs(RECENT_JOBS_LIMIT)
    }

    pub fn jobs_by_employer(&self, employer_id: &UserId) -> Vec<Job> {
        self.lock().jobs_by_employer(employer_id)
    }

    pub fn applications_for_job(&self, job_id: &JobId) -> Vec<Application> {
        self.lock().applications_for_job(job_id)
    }

    pub fn applications_by_jobseeker(&self, jobseeker_id: &UserId) -> Vec<Application> {
        self.lock().applications_by_jobseeker(jobseeker_id)
    }

    pub fn user(&self, id: &UserId) -> Option<UserRecord> {
        self.lock().user(id)
    }

    pub fn create_job(&self, draft: JobDraft) -> Result<Job, BoardError> {
        self.lock().create_job(draft, Utc::now())
    }

    pub fn update_job(&self, id: &JobId, patch: JobPatch) -> Result<Job, BoardError> {
        self.lock().update_job(id, patch)
    }

    /// Record an application and notify the owning employer, mirroring the
    /// "New Applicant" messages in the seed data.
    pub fn apply_to_job(
        &self,
        job_id: &JobId,
        jobseeker_id: &UserId,
        draft: ApplicationDraft,
    ) -> Result<Application, BoardError> {
        let now = Utc::now();
        let mut store = self.lock();
        let application = store.apply_to_job(job_id, jobseeker_id, draft, now)?;

        if let Some(job) = store.job(job_id) {
            let applicant = store
                .user(jobseeker_id)
                .map(|user| user.name)
                .unwrap_or_else(|| jobseeker_id.to_string());
            store.add_notification(
                &job.employer_id,
                NotificationDraft {
                    title: Some("New Applicant".to_string()),
                    message: Some(format!(
                        "{applicant} has applied for the {} position.",
                        job.title
                    )),
                    link: Some(format!("/employer/applications/{}", application.id)),
                    ..NotificationDraft::default()
                },
                now,
            );
        }

        Ok(application)
    }

    pub fn notifications_for(&self, user_id: &UserId) -> Vec<Notification> {
        self.lock().notifications_for(user_id)
    }

    pub fn unread_count(&self, user_id: &UserId) -> usize {
        self.lock().unread_count(user_id)
    }

    pub fn mark_notification_read(&self, id: &NotificationId) -> Result<Notification, BoardError> {
        self.lock().mark_notification_read(id)
    }

    pub fn mark_all_read(&self, user_id: &UserId) -> usize {
        self.lock().mark_all_read(user_id)
    }

    pub fn notify(&self, user_id: &UserId, draft: NotificationDraft) -> Notification {
        self.lock().add_notification(user_id, draft, Utc::now())
    }

    fn lock(&self) -> MutexGuard<'_, JobStore> {
        self.store.lock().expect("job store mutex poisoned")
    }
}
