use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::{Duration, Utc};
use serde::Deserialize;

use super::domain::{
    Application, ApplicationId, ApplicationStatus, EmploymentType, ExperienceLevel, Job, JobId,
    JobStatus, Notification, NotificationId, NotificationKind, UserId, UserRecord, UserRole,
};

/// Fixed collection of records the store is initialized from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub users: Vec<UserRecord>,
    pub jobs: Vec<Job>,
    pub applications: Vec<Application>,
    pub notifications: Vec<Notification>,
}

/// Error raised while loading or checking seed records.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("seed data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate job id {0} in seed")]
    DuplicateJobId(JobId),
    #[error("duplicate application id {0} in seed")]
    DuplicateApplicationId(ApplicationId),
    #[error("application {application} references unknown job {job}")]
    UnknownJob {
        application: ApplicationId,
        job: JobId,
    },
}

impl SeedData {
    /// Parse seed records from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let seed = serde_json::from_str(&raw)?;
        Ok(seed)
    }

    /// Referential integrity checks run before a store accepts the seed.
    pub(crate) fn validate(&self) -> Result<(), SeedError> {
        let mut job_ids = HashSet::new();
        for job in &self.jobs {
            if !job_ids.insert(&job.id) {
                return Err(SeedError::DuplicateJobId(job.id.clone()));
            }
        }

        let mut application_ids = HashSet::new();
        for application in &self.applications {
            if !application_ids.insert(&application.id) {
                return Err(SeedError::DuplicateApplicationId(application.id.clone()));
            }
            if !job_ids.contains(&application.job_id) {
                return Err(SeedError::UnknownJob {
                    application: application.id.clone(),
                    job: application.job_id.clone(),
                });
            }
        }

        Ok(())
    }

    /// Built-in demo records, used when no seed file is configured.
    pub fn builtin() -> Self {
        let now = Utc::now();
        let days_ago = |days: i64| now - Duration::days(days);
        let days_ahead = |days: i64| now + Duration::days(days);

        let users = vec![
            UserRecord {
                id: UserId("user-alex".to_string()),
                name: "Alex Johnson".to_string(),
                email: "alex@example.com".to_string(),
                role: UserRole::Jobseeker,
            },
            UserRecord {
                id: UserId("user-priya".to_string()),
                name: "Priya Sharma".to_string(),
                email: "priya@example.com".to_string(),
                role: UserRole::Jobseeker,
            },
            UserRecord {
                id: UserId("user-sarah".to_string()),
                name: "Sarah Williams".to_string(),
                email: "sarah@techcorp.example.com".to_string(),
                role: UserRole::Employer,
            },
            UserRecord {
                id: UserId("user-raj".to_string()),
                name: "Raj Patel".to_string(),
                email: "raj@innovatech.example.com".to_string(),
                role: UserRole::Employer,
            },
        ];

        let jobs = vec![
            Job {
                id: JobId("job1".to_string()),
                title: "Senior Frontend Developer".to_string(),
                company: "TechCorp Solutions".to_string(),
                company_logo: None,
                location: "San Francisco, CA (Remote)".to_string(),
                salary: Some("$120,000 - $150,000".to_string()),
                employment_type: EmploymentType::FullTime,
                experience_level: ExperienceLevel::Senior,
                description: "Build user interfaces and experiences for our web applications."
                    .to_string(),
                requirements: vec![
                    "At least 5 years of experience with JavaScript/TypeScript".to_string(),
                    "Strong experience with React and modern front-end frameworks".to_string(),
                ],
                responsibilities: vec![
                    "Develop and maintain user interfaces for web applications".to_string(),
                    "Collaborate with designers and backend developers".to_string(),
                ],
                skills: vec![
                    "JavaScript".to_string(),
                    "TypeScript".to_string(),
                    "React".to_string(),
                ],
                employer_id: UserId("user-sarah".to_string()),
                posted_at: days_ago(10),
                expires_at: days_ahead(20),
                applicants: vec![UserId("user-alex".to_string())],
                status: JobStatus::Active,
                featured: true,
            },
            Job {
                id: JobId("job2".to_string()),
                title: "Full Stack Developer".to_string(),
                company: "TechCorp Solutions".to_string(),
                company_logo: None,
                location: "New York, NY".to_string(),
                salary: Some("$100,000 - $130,000".to_string()),
                employment_type: EmploymentType::FullTime,
                experience_level: ExperienceLevel::Intermediate,
                description: "Design and develop web applications using React and Node.js."
                    .to_string(),
                requirements: vec![
                    "At least 3 years of experience with full stack development".to_string(),
                ],
                responsibilities: vec![
                    "Develop both frontend and backend components".to_string(),
                ],
                skills: vec![
                    "JavaScript".to_string(),
                    "React".to_string(),
                    "Node.js".to_string(),
                ],
                employer_id: UserId("user-sarah".to_string()),
                posted_at: days_ago(15),
                expires_at: days_ahead(15),
                applicants: vec![
                    UserId("user-alex".to_string()),
                    UserId("user-priya".to_string()),
                ],
                status: JobStatus::Active,
                featured: false,
            },
            Job {
                id: JobId("job3".to_string()),
                title: "Data Scientist Intern".to_string(),
                company: "InnovaTech".to_string(),
                company_logo: None,
                location: "Remote".to_string(),
                salary: Some("$2,500 - $4,000 monthly".to_string()),
                employment_type: EmploymentType::Internship,
                experience_level: ExperienceLevel::Entry,
                description: "Internship opportunity for students interested in data analysis."
                    .to_string(),
                requirements: vec![
                    "Basic knowledge of Python, R, or similar languages".to_string(),
                ],
                responsibilities: vec![
                    "Assist in data collection, cleaning, and preprocessing".to_string(),
                ],
                skills: vec!["Python".to_string(), "Data Analysis".to_string()],
                employer_id: UserId("user-raj".to_string()),
                posted_at: days_ago(3),
                expires_at: days_ahead(27),
                applicants: Vec::new(),
                status: JobStatus::Active,
                featured: true,
            },
            Job {
                id: JobId("job4".to_string()),
                title: "DevOps Engineer".to_string(),
                company: "CloudNative Systems".to_string(),
                company_logo: None,
                location: "Chicago, IL (Remote)".to_string(),
                salary: Some("$110,000 - $140,000".to_string()),
                employment_type: EmploymentType::FullTime,
                experience_level: ExperienceLevel::Senior,
                description: "Build and maintain our cloud infrastructure and CI/CD pipelines."
                    .to_string(),
                requirements: vec!["5+ years of experience in DevOps or SRE roles".to_string()],
                responsibilities: vec![
                    "Design, implement, and maintain cloud infrastructure".to_string(),
                ],
                skills: vec![
                    "AWS".to_string(),
                    "Kubernetes".to_string(),
                    "Terraform".to_string(),
                ],
                employer_id: UserId("user-sarah".to_string()),
                posted_at: days_ago(12),
                expires_at: days_ahead(18),
                applicants: Vec::new(),
                status: JobStatus::Active,
                featured: false,
            },
            Job {
                id: JobId("job5".to_string()),
                title: "Backend Engineer".to_string(),
                company: "InnovaTech".to_string(),
                company_logo: None,
                location: "Bangalore, India".to_string(),
                salary: None,
                employment_type: EmploymentType::Contract,
                experience_level: ExperienceLevel::Intermediate,
                description: "Draft posting for an upcoming backend role.".to_string(),
                requirements: Vec::new(),
                responsibilities: Vec::new(),
                skills: vec!["Go".to_string(), "PostgreSQL".to_string()],
                employer_id: UserId("user-raj".to_string()),
                posted_at: days_ago(1),
                expires_at: days_ahead(29),
                applicants: Vec::new(),
                status: JobStatus::Draft,
                featured: false,
            },
        ];

        let applications = vec![
            Application {
                id: ApplicationId("app1".to_string()),
                job_id: JobId("job1".to_string()),
                jobseeker_id: UserId("user-alex".to_string()),
                applied_at: days_ago(8),
                resume: "resume_alex.pdf".to_string(),
                cover_letter: Some(
                    "I am excited to apply for the Senior Frontend Developer position."
                        .to_string(),
                ),
                status: ApplicationStatus::Shortlisted,
                notes: Some("Strong React skills, good fit for the team".to_string()),
            },
            Application {
                id: ApplicationId("app2".to_string()),
                job_id: JobId("job2".to_string()),
                jobseeker_id: UserId("user-alex".to_string()),
                applied_at: days_ago(12),
                resume: "resume_alex.pdf".to_string(),
                cover_letter: None,
                status: ApplicationStatus::Pending,
                notes: None,
            },
            Application {
                id: ApplicationId("app3".to_string()),
                job_id: JobId("job2".to_string()),
                jobseeker_id: UserId("user-priya".to_string()),
                applied_at: days_ago(4),
                resume: "resume_priya.pdf".to_string(),
                cover_letter: None,
                status: ApplicationStatus::Reviewed,
                notes: Some("Schedule an interview".to_string()),
            },
        ];

        let notifications = vec![
            Notification {
                id: NotificationId("notif1".to_string()),
                user_id: UserId("user-alex".to_string()),
                title: "Application Update".to_string(),
                message: "Your application for Senior Frontend Developer has been shortlisted."
                    .to_string(),
                kind: NotificationKind::Success,
                read: false,
                created_at: days_ago(2),
                link: Some("/applications/app1".to_string()),
            },
            Notification {
                id: NotificationId("notif2".to_string()),
                user_id: UserId("user-sarah".to_string()),
                title: "New Applicant".to_string(),
                message: "Alex Johnson has applied for the Senior Frontend Developer position."
                    .to_string(),
                kind: NotificationKind::Info,
                read: true,
                created_at: days_ago(8),
                link: Some("/employer/applications/app1".to_string()),
            },
            Notification {
                id: NotificationId("notif3".to_string()),
                user_id: UserId("user-raj".to_string()),
                title: "Job Posting Expiring".to_string(),
                message: "Your posting for Data Scientist Intern expires in 27 days.".to_string(),
                kind: NotificationKind::Warning,
                read: false,
                created_at: days_ago(1),
                link: Some("/employer/jobs/job3".to_string()),
            },
        ];

        Self {
            users,
            jobs,
            applications,
            notifications,
        }
    }
}
