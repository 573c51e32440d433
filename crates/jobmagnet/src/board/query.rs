use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};

use super::domain::{EmploymentType, ExperienceLevel, Job, JobStatus};

/// Query descriptor narrowing which jobs a search returns. All criteria are
/// optional and compose conjunctively.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Case-insensitive substring over title, company, and description.
    pub search: Option<String>,
    /// Case-insensitive substring over the advertised location.
    pub location: Option<String>,
    pub employment_types: Vec<EmploymentType>,
    pub experience_levels: Vec<ExperienceLevel>,
    /// Exact-match against the job's skill list; one hit is enough.
    pub skills: Vec<String>,
    /// Keep jobs posted within the last N days.
    pub posted_within_days: Option<i64>,
    pub sort_by: Option<SortBy>,
}

/// Supported result orderings. Unknown strings are rejected by [`SortBy::parse`]
/// at the boundary rather than being silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    /// No reordering; the store order stands in for relevance scoring.
    Relevance,
    /// Newest postings first.
    Date,
    /// Descending lexicographic comparison of the free-text salary field;
    /// jobs without a salary sort last. A known modeling simplification.
    Salary,
}

impl SortBy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "relevance" => Some(Self::Relevance),
            "date" => Some(Self::Date),
            "salary" => Some(Self::Salary),
            _ => None,
        }
    }
}

/// Pure query over a job slice: active postings matching every supplied
/// criterion, in the requested order. Never mutates its input; ties keep
/// store order because the sort is stable.
pub fn filter_jobs(jobs: &[Job], options: &FilterOptions, now: DateTime<Utc>) -> Vec<Job> {
    let mut matched: Vec<Job> = jobs
        .iter()
        .filter(|job| matches(job, options, now))
        .cloned()
        .collect();

    match options.sort_by {
        Some(SortBy::Date) => matched.sort_by(|a, b| b.posted_at.cmp(&a.posted_at)),
        Some(SortBy::Salary) => matched.sort_by(|a, b| compare_salaries(a, b)),
        Some(SortBy::Relevance) | None => {}
    }

    matched
}

fn matches(job: &Job, options: &FilterOptions, now: DateTime<Utc>) -> bool {
    if job.status != JobStatus::Active {
        return false;
    }

    if let Some(term) = &options.search {
        let term = term.to_lowercase();
        let hit = job.title.to_lowercase().contains(&term)
            || job.company.to_lowercase().contains(&term)
            || job.description.to_lowercase().contains(&term);
        if !hit {
            return false;
        }
    }

    if let Some(location) = &options.location {
        let location = location.to_lowercase();
        if !job.location.to_lowercase().contains(&location) {
            return false;
        }
    }

    if !options.employment_types.is_empty()
        && !options.employment_types.contains(&job.employment_type)
    {
        return false;
    }

    if !options.experience_levels.is_empty()
        && !options.experience_levels.contains(&job.experience_level)
    {
        return false;
    }

    if !options.skills.is_empty()
        && !options
            .skills
            .iter()
            .any(|wanted| job.skills.iter().any(|have| have == wanted))
    {
        return false;
    }

    if let Some(days) = options.posted_within_days {
        if job.posted_at < now - Duration::days(days) {
            return false;
        }
    }

    true
}

fn compare_salaries(a: &Job, b: &Job) -> Ordering {
    match (&a.salary, &b.salary) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
