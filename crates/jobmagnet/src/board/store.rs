use chrono::{DateTime, Duration, Utc};

use super::domain::{
    Application, ApplicationDraft, ApplicationId, ApplicationStatus, EmploymentType,
    ExperienceLevel, Job, JobDraft, JobId, JobPatch, JobStatus, Notification, NotificationDraft,
    NotificationId, NotificationKind, UserId, UserRecord,
};
use super::query::{filter_jobs, FilterOptions};
use super::seed::{SeedData, SeedError};

/// Error enumeration for board operations. A failed operation always leaves
/// the store exactly as it was.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("job {0} not found")]
    JobNotFound(JobId),
    #[error("application {0} not found")]
    ApplicationNotFound(ApplicationId),
    #[error("notification {0} not found")]
    NotificationNotFound(NotificationId),
    #[error("jobseeker {jobseeker} has already applied to job {job}")]
    DuplicateApplication { job: JobId, jobseeker: UserId },
    #[error("invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: &'static str,
    },
}

/// In-memory collection of board records: the single logical owner of state.
/// Obtained once from seed data and passed around as an explicit handle; read
/// views return owned clones so callers never alias the internals.
#[derive(Debug, Clone, Default)]
pub struct JobStore {
    jobs: Vec<Job>,
    applications: Vec<Application>,
    notifications: Vec<Notification>,
    users: Vec<UserRecord>,
    job_seq: u64,
    application_seq: u64,
    notification_seq: u64,
}

impl JobStore {
    /// Build a store from seed records after checking referential integrity.
    pub fn from_seed(seed: SeedData) -> Result<Self, SeedError> {
        seed.validate()?;
        Ok(Self {
            jobs: seed.jobs,
            applications: seed.applications,
            notifications: seed.notifications,
            users: seed.users,
            ..Self::default()
        })
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn job(&self, id: &JobId) -> Option<Job> {
        self.jobs.iter().find(|job| &job.id == id).cloned()
    }

    pub fn user(&self, id: &UserId) -> Option<UserRecord> {
        self.users.iter().find(|user| &user.id == id).cloned()
    }

    pub fn jobs_by_employer(&self, employer_id: &UserId) -> Vec<Job> {
        self.jobs
            .iter()
            .filter(|job| &job.employer_id == employer_id)
            .cloned()
            .collect()
    }

    pub fn applications_for_job(&self, job_id: &JobId) -> Vec<Application> {
        self.applications
            .iter()
            .filter(|application| &application.job_id == job_id)
            .cloned()
            .collect()
    }

    pub fn applications_by_jobseeker(&self, jobseeker_id: &UserId) -> Vec<Application> {
        self.applications
            .iter()
            .filter(|application| &application.jobseeker_id == jobseeker_id)
            .cloned()
            .collect()
    }

    /// Active postings flagged for prioritized display, in store order.
    pub fn featured_jobs(&self) -> Vec<Job> {
        self.jobs
            .iter()
            .filter(|job| job.featured && job.status == JobStatus::Active)
            .cloned()
            .collect()
    }

    /// Active postings, newest first, capped at `limit`.
    pub fn recent_jobs(&self, limit: usize) -> Vec<Job> {
        let mut recent: Vec<Job> = self
            .jobs
            .iter()
            .filter(|job| job.status == JobStatus::Active)
            .cloned()
            .collect();
        recent.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
        recent.truncate(limit);
        recent
    }

    /// Run the query engine over the current postings.
    pub fn filter(&self, options: &FilterOptions, now: DateTime<Utc>) -> Vec<Job> {
        filter_jobs(&self.jobs, options, now)
    }

    /// Append a new posting, filling documented defaults for omitted fields.
    /// Expiry defaults to 30 days after posting.
    pub fn create_job(&mut self, draft: JobDraft, now: DateTime<Utc>) -> Result<Job, BoardError> {
        reject_blank(&draft.title, "title")?;
        reject_blank(&draft.company, "company")?;
        reject_blank(&draft.location, "location")?;

        let id = self.next_job_id();
        let job = Job {
            id,
            title: draft
                .title
                .unwrap_or_else(|| "Untitled Position".to_string()),
            company: draft.company.unwrap_or_default(),
            company_logo: draft.company_logo,
            location: draft.location.unwrap_or_else(|| "Remote".to_string()),
            salary: draft.salary,
            employment_type: draft.employment_type.unwrap_or(EmploymentType::FullTime),
            experience_level: draft.experience_level.unwrap_or(ExperienceLevel::Entry),
            description: draft.description.unwrap_or_default(),
            requirements: draft.requirements,
            responsibilities: draft.responsibilities,
            skills: draft.skills,
            employer_id: draft.employer_id.unwrap_or_default(),
            posted_at: now,
            expires_at: draft.expires_at.unwrap_or(now + Duration::days(30)),
            applicants: Vec::new(),
            status: draft.status.unwrap_or(JobStatus::Active),
            featured: draft.featured,
        };

        self.jobs.push(job.clone());
        Ok(job)
    }

    /// Merge a patch into the matching posting in place. Only fields present
    /// in the patch change.
    pub fn update_job(&mut self, id: &JobId, patch: JobPatch) -> Result<Job, BoardError> {
        reject_blank(&patch.title, "title")?;
        reject_blank(&patch.company, "company")?;
        reject_blank(&patch.location, "location")?;

        let job = self
            .jobs
            .iter_mut()
            .find(|job| &job.id == id)
            .ok_or_else(|| BoardError::JobNotFound(id.clone()))?;

        if let Some(title) = patch.title {
            job.title = title;
        }
        if let Some(company) = patch.company {
            job.company = company;
        }
        if let Some(company_logo) = patch.company_logo {
            job.company_logo = Some(company_logo);
        }
        if let Some(location) = patch.location {
            job.location = location;
        }
        if let Some(salary) = patch.salary {
            job.salary = Some(salary);
        }
        if let Some(employment_type) = patch.employment_type {
            job.employment_type = employment_type;
        }
        if let Some(experience_level) = patch.experience_level {
            job.experience_level = experience_level;
        }
        if let Some(description) = patch.description {
            job.description = description;
        }
        if let Some(requirements) = patch.requirements {
            job.requirements = requirements;
        }
        if let Some(responsibilities) = patch.responsibilities {
            job.responsibilities = responsibilities;
        }
        if let Some(skills) = patch.skills {
            job.skills = skills;
        }
        if let Some(expires_at) = patch.expires_at {
            job.expires_at = expires_at;
        }
        if let Some(status) = patch.status {
            job.status = status;
        }
        if let Some(featured) = patch.featured {
            job.featured = featured;
        }

        Ok(job.clone())
    }

    /// Record an application for (job, jobseeker). At most one application
    /// per pair; the duplicate check runs before any mutation.
    pub fn apply_to_job(
        &mut self,
        job_id: &JobId,
        jobseeker_id: &UserId,
        draft: ApplicationDraft,
        now: DateTime<Utc>,
    ) -> Result<Application, BoardError> {
        if !self.jobs.iter().any(|job| &job.id == job_id) {
            return Err(BoardError::JobNotFound(job_id.clone()));
        }

        let already_applied = self.applications.iter().any(|application| {
            &application.job_id == job_id && &application.jobseeker_id == jobseeker_id
        });
        if already_applied {
            return Err(BoardError::DuplicateApplication {
                job: job_id.clone(),
                jobseeker: jobseeker_id.clone(),
            });
        }

        let application = Application {
            id: self.next_application_id(),
            job_id: job_id.clone(),
            jobseeker_id: jobseeker_id.clone(),
            applied_at: now,
            resume: draft
                .resume
                .unwrap_or_else(|| "default_resume.pdf".to_string()),
            cover_letter: draft.cover_letter,
            status: ApplicationStatus::Pending,
            notes: None,
        };

        self.applications.push(application.clone());
        if let Some(job) = self.jobs.iter_mut().find(|job| &job.id == job_id) {
            job.applicants.push(jobseeker_id.clone());
        }

        Ok(application)
    }

    /// Notifications addressed to one user, in store order (newest first,
    /// since inserts go to the front).
    pub fn notifications_for(&self, user_id: &UserId) -> Vec<Notification> {
        self.notifications
            .iter()
            .filter(|notification| &notification.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn unread_count(&self, user_id: &UserId) -> usize {
        self.notifications
            .iter()
            .filter(|notification| &notification.user_id == user_id && !notification.read)
            .count()
    }

    pub fn mark_notification_read(
        &mut self,
        id: &NotificationId,
    ) -> Result<Notification, BoardError> {
        let notification = self
            .notifications
            .iter_mut()
            .find(|notification| &notification.id == id)
            .ok_or_else(|| BoardError::NotificationNotFound(id.clone()))?;
        notification.read = true;
        Ok(notification.clone())
    }

    /// Mark every notification for one user as read; returns how many flipped.
    pub fn mark_all_read(&mut self, user_id: &UserId) -> usize {
        let mut flipped = 0;
        for notification in &mut self.notifications {
            if &notification.user_id == user_id && !notification.read {
                notification.read = true;
                flipped += 1;
            }
        }
        flipped
    }

    /// Prepend a notification for one user, filling defaults for omitted
    /// fields.
    pub fn add_notification(
        &mut self,
        user_id: &UserId,
        draft: NotificationDraft,
        now: DateTime<Utc>,
    ) -> Notification {
        let notification = Notification {
            id: self.next_notification_id(),
            user_id: user_id.clone(),
            title: draft.title.unwrap_or_else(|| "Notification".to_string()),
            message: draft.message.unwrap_or_default(),
            kind: draft.kind.unwrap_or(NotificationKind::Info),
            read: false,
            created_at: now,
            link: draft.link,
        };
        self.notifications.insert(0, notification.clone());
        notification
    }

    // Minted ids must never collide with seeded ones, so each candidate is
    // checked against the live collection before being handed out.
    fn next_job_id(&mut self) -> JobId {
        loop {
            self.job_seq += 1;
            let id = JobId(format!("job-{:06}", self.job_seq));
            if !self.jobs.iter().any(|job| job.id == id) {
                return id;
            }
        }
    }

    fn next_application_id(&mut self) -> ApplicationId {
        loop {
            self.application_seq += 1;
            let id = ApplicationId(format!("app-{:06}", self.application_seq));
            if !self.applications.iter().any(|application| application.id == id) {
                return id;
            }
        }
    }

    fn next_notification_id(&mut self) -> NotificationId {
        loop {
            self.notification_seq += 1;
            let id = NotificationId(format!("notif-{:06}", self.notification_seq));
            if !self
                .notifications
                .iter()
                .any(|notification| notification.id == id)
            {
                return id;
            }
        }
    }
}

fn reject_blank(value: &Option<String>, field: &'static str) -> Result<(), BoardError> {
    match value {
        Some(value) if value.trim().is_empty() => Err(BoardError::Validation {
            field,
            reason: "must not be blank when supplied",
        }),
        _ => Ok(()),
    }
}
