use chrono::Utc;

use super::common::*;
use crate::board::domain::{EmploymentType, ExperienceLevel, JobStatus};
use crate::board::query::{filter_jobs, FilterOptions, SortBy};

#[test]
fn only_active_jobs_are_returned() {
    let mut closed = job("job2", "Closed Role");
    closed.status = JobStatus::Closed;
    let mut draft = job("job3", "Draft Role");
    draft.status = JobStatus::Draft;
    let jobs = vec![job("job1", "Open Role"), closed, draft];

    let result = filter_jobs(&jobs, &FilterOptions::default(), Utc::now());

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id.0, "job1");
}

#[test]
fn no_options_preserves_store_order() {
    let jobs = vec![job("a", "First"), job("b", "Second"), job("c", "Third")];

    let result = filter_jobs(&jobs, &FilterOptions::default(), Utc::now());

    let ids: Vec<&str> = result.iter().map(|job| job.id.0.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn search_matches_title_case_insensitively() {
    let jobs = vec![
        job("job1", "Senior Frontend Developer"),
        job("job2", "Backend Engineer"),
    ];

    let options = FilterOptions {
        search: Some("frontend".to_string()),
        ..FilterOptions::default()
    };
    let result = filter_jobs(&jobs, &options, Utc::now());

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "Senior Frontend Developer");
}

#[test]
fn search_also_covers_company_and_description() {
    let mut by_company = job("job1", "Engineer");
    by_company.company = "Frontier Labs".to_string();
    let mut by_description = job("job2", "Engineer");
    by_description.company = "Acme".to_string();
    by_description.description = "Work on our frontier data platform.".to_string();
    let mut neither = job("job3", "Engineer");
    neither.company = "Acme".to_string();
    neither.description = "Unrelated".to_string();

    let options = FilterOptions {
        search: Some("frontier".to_string()),
        ..FilterOptions::default()
    };
    let result = filter_jobs(&[by_company, by_description, neither], &options, Utc::now());

    let ids: Vec<&str> = result.iter().map(|job| job.id.0.as_str()).collect();
    assert_eq!(ids, ["job1", "job2"]);
}

#[test]
fn location_is_a_substring_match() {
    let mut remote = job("job1", "Engineer");
    remote.location = "Chicago, IL (Remote)".to_string();
    let mut onsite = job("job2", "Engineer");
    onsite.location = "New York, NY".to_string();

    let options = FilterOptions {
        location: Some("remote".to_string()),
        ..FilterOptions::default()
    };
    let result = filter_jobs(&[remote, onsite], &options, Utc::now());

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id.0, "job1");
}

#[test]
fn employment_type_filters_by_membership() {
    let mut internship = job("job1", "Intern");
    internship.employment_type = EmploymentType::Internship;
    let mut contract = job("job2", "Contractor");
    contract.employment_type = EmploymentType::Contract;
    let full_time = job("job3", "Engineer");

    let options = FilterOptions {
        employment_types: vec![EmploymentType::Internship, EmploymentType::Contract],
        ..FilterOptions::default()
    };
    let result = filter_jobs(&[internship, contract, full_time], &options, Utc::now());

    let ids: Vec<&str> = result.iter().map(|job| job.id.0.as_str()).collect();
    assert_eq!(ids, ["job1", "job2"]);
}

#[test]
fn experience_level_filters_by_membership() {
    let mut senior = job("job1", "Senior Engineer");
    senior.experience_level = ExperienceLevel::Senior;
    let entry = job("job2", "Junior Engineer");

    let options = FilterOptions {
        experience_levels: vec![ExperienceLevel::Senior],
        ..FilterOptions::default()
    };
    let result = filter_jobs(&[senior, entry], &options, Utc::now());

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id.0, "job1");
}

#[test]
fn one_matching_skill_is_enough() {
    let mut rust_job = job("job1", "Engineer");
    rust_job.skills = vec!["Rust".to_string(), "Tokio".to_string()];
    let mut python_job = job("job2", "Engineer");
    python_job.skills = vec!["Python".to_string()];

    let options = FilterOptions {
        skills: vec!["Tokio".to_string(), "Kafka".to_string()],
        ..FilterOptions::default()
    };
    let result = filter_jobs(&[rust_job, python_job], &options, Utc::now());

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id.0, "job1");
}

#[test]
fn skill_match_is_exact_not_substring() {
    let mut close_but_no = job("job1", "Engineer");
    close_but_no.skills = vec!["JavaScript".to_string()];

    let options = FilterOptions {
        skills: vec!["Java".to_string()],
        ..FilterOptions::default()
    };
    let result = filter_jobs(&[close_but_no], &options, Utc::now());

    assert!(result.is_empty());
}

#[test]
fn posted_within_keeps_recent_postings_only() {
    let mut fresh = job("job1", "Engineer");
    fresh.posted_at = days_ago(2);
    let mut stale = job("job2", "Engineer");
    stale.posted_at = days_ago(20);

    let options = FilterOptions {
        posted_within_days: Some(7),
        ..FilterOptions::default()
    };
    let result = filter_jobs(&[fresh, stale], &options, Utc::now());

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id.0, "job1");
}

#[test]
fn filters_compose_conjunctively() {
    let mut target = job("job1", "Senior Rust Engineer");
    target.location = "Berlin (Remote)".to_string();
    target.experience_level = ExperienceLevel::Senior;
    let mut wrong_level = job("job2", "Rust Engineer");
    wrong_level.location = "Berlin (Remote)".to_string();
    let mut wrong_location = job("job3", "Senior Rust Engineer");
    wrong_location.location = "Austin, TX".to_string();
    wrong_location.experience_level = ExperienceLevel::Senior;

    let options = FilterOptions {
        search: Some("rust".to_string()),
        location: Some("berlin".to_string()),
        experience_levels: vec![ExperienceLevel::Senior],
        ..FilterOptions::default()
    };
    let result = filter_jobs(&[target, wrong_level, wrong_location], &options, Utc::now());

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id.0, "job1");
}

#[test]
fn date_sort_is_non_increasing() {
    let mut oldest = job("job1", "Engineer");
    oldest.posted_at = days_ago(30);
    let mut newest = job("job2", "Engineer");
    newest.posted_at = days_ago(1);
    let mut middle = job("job3", "Engineer");
    middle.posted_at = days_ago(10);

    let options = FilterOptions {
        sort_by: Some(SortBy::Date),
        ..FilterOptions::default()
    };
    let result = filter_jobs(&[oldest, newest, middle], &options, Utc::now());

    for pair in result.windows(2) {
        assert!(pair[0].posted_at >= pair[1].posted_at);
    }
    let ids: Vec<&str> = result.iter().map(|job| job.id.0.as_str()).collect();
    assert_eq!(ids, ["job2", "job3", "job1"]);
}

#[test]
fn salary_sort_is_lexicographic_with_missing_last() {
    let mut low = job("job1", "Engineer");
    low.salary = Some("$100,000".to_string());
    let mut high = job("job2", "Engineer");
    high.salary = Some("$90,000".to_string());
    let mut none = job("job3", "Engineer");
    none.salary = None;

    let options = FilterOptions {
        sort_by: Some(SortBy::Salary),
        ..FilterOptions::default()
    };
    let result = filter_jobs(&[low, high, none], &options, Utc::now());

    // "$90,000" > "$100,000" lexicographically; the imprecision is preserved.
    let ids: Vec<&str> = result.iter().map(|job| job.id.0.as_str()).collect();
    assert_eq!(ids, ["job2", "job1", "job3"]);
}

#[test]
fn relevance_sort_preserves_store_order() {
    let jobs = vec![job("b", "Second"), job("a", "First"), job("c", "Third")];

    let options = FilterOptions {
        sort_by: Some(SortBy::Relevance),
        ..FilterOptions::default()
    };
    let result = filter_jobs(&jobs, &options, Utc::now());

    let ids: Vec<&str> = result.iter().map(|job| job.id.0.as_str()).collect();
    assert_eq!(ids, ["b", "a", "c"]);
}

#[test]
fn query_does_not_mutate_the_store() {
    let store = store_with(vec![job("job1", "Engineer"), job("job2", "Engineer")]);
    let before: Vec<_> = store.jobs().to_vec();

    let options = FilterOptions {
        sort_by: Some(SortBy::Date),
        ..FilterOptions::default()
    };
    let _ = store.filter(&options, Utc::now());

    assert_eq!(store.jobs(), &before[..]);
}
