use std::path::PathBuf;

use clap::Args;
use jobmagnet::board::{
    ApplicationDraft, FilterOptions, JobDraft, SortBy, UserId,
};
use jobmagnet::error::AppError;

use crate::infra::load_board;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed the store from a JSON file instead of the built-in demo data
    #[arg(long)]
    pub(crate) seed: Option<PathBuf>,
    /// Search term applied to the showcase query
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Location filter applied to the showcase query
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Result ordering: relevance, date, or salary
    #[arg(long, value_parser = parse_sort)]
    pub(crate) sort_by: Option<SortBy>,
    /// Skip the posting/application walkthrough and only run queries
    #[arg(long)]
    pub(crate) queries_only: bool,
}

fn parse_sort(raw: &str) -> Result<SortBy, String> {
    SortBy::parse(raw).ok_or_else(|| format!("unrecognized sort '{raw}'"))
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        seed,
        search,
        location,
        sort_by,
        queries_only,
    } = args;

    let board = load_board(seed.as_deref())?;

    println!("JobMagnet board demo");
    let active = board.filter(&FilterOptions::default());
    println!("- {} active postings", active.len());

    let featured = board.featured_jobs();
    println!("\nFeatured postings");
    for job in &featured {
        println!(
            "- {} at {} ({}, {})",
            job.title,
            job.company,
            job.employment_type.label(),
            job.location
        );
    }

    println!("\nMost recent postings");
    for job in board.recent_jobs() {
        println!("- {} (posted {})", job.title, job.posted_at.date_naive());
    }

    let options = FilterOptions {
        search,
        location,
        sort_by,
        ..FilterOptions::default()
    };
    println!("\nShowcase query results");
    let results = board.filter(&options);
    if results.is_empty() {
        println!("- no postings matched");
    }
    for job in &results {
        println!(
            "- {} | {} | {} | {}",
            job.title,
            job.company,
            job.location,
            job.salary.as_deref().unwrap_or("salary not listed")
        );
    }

    if queries_only {
        return Ok(());
    }

    println!("\nPosting and application walkthrough");
    let job = board.create_job(JobDraft {
        title: Some("Site Reliability Engineer".to_string()),
        company: Some("CloudNative Systems".to_string()),
        employer_id: Some(UserId("user-sarah".to_string())),
        skills: vec!["Kubernetes".to_string(), "Prometheus".to_string()],
        ..JobDraft::default()
    })?;
    println!("- Created posting {} ({})", job.id, job.title);

    let jobseeker = UserId("user-alex".to_string());
    let application = board.apply_to_job(&job.id, &jobseeker, ApplicationDraft::default())?;
    println!(
        "- {} applied -> application {} ({})",
        jobseeker,
        application.id,
        application.status.label()
    );

    match board.apply_to_job(&job.id, &jobseeker, ApplicationDraft::default()) {
        Err(err) => println!("- Second attempt rejected: {err}"),
        Ok(_) => println!("- Second attempt unexpectedly succeeded"),
    }

    let employer = job.employer_id;
    println!(
        "\nNotifications for {} ({} unread)",
        employer,
        board.unread_count(&employer)
    );
    for notification in board.notifications_for(&employer) {
        let read = if notification.read { "read" } else { "unread" };
        println!(
            "- [{}] {}: {} ({read})",
            notification.kind.label(),
            notification.title,
            notification.message
        );
    }

    Ok(())
}
