use chrono::{DateTime, Duration, Utc};

use crate::board::domain::{
    EmploymentType, ExperienceLevel, Job, JobId, JobStatus, UserId,
};
use crate::board::seed::SeedData;
use crate::board::service::JobBoard;
use crate::board::store::JobStore;

pub(super) fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days)
}

/// An active full-time posting with fixed defaults; tests mutate what they
/// care about.
pub(super) fn job(id: &str, title: &str) -> Job {
    Job {
        id: JobId(id.to_string()),
        title: title.to_string(),
        company: "TechCorp Solutions".to_string(),
        company_logo: None,
        location: "San Francisco, CA".to_string(),
        salary: Some("$100,000 - $120,000".to_string()),
        employment_type: EmploymentType::FullTime,
        experience_level: ExperienceLevel::Intermediate,
        description: "Generic posting used in tests.".to_string(),
        requirements: Vec::new(),
        responsibilities: Vec::new(),
        skills: vec!["Rust".to_string()],
        employer_id: UserId("user-employer".to_string()),
        posted_at: days_ago(5),
        expires_at: days_ago(5) + Duration::days(30),
        applicants: Vec::new(),
        status: JobStatus::Active,
        featured: false,
    }
}

pub(super) fn store_with(jobs: Vec<Job>) -> JobStore {
    JobStore::from_seed(SeedData {
        jobs,
        ..SeedData::default()
    })
    .expect("test seed is consistent")
}

pub(super) fn seeded_board() -> JobBoard {
    JobBoard::from_seed(SeedData::builtin()).expect("builtin seed is consistent")
}
