//! Job board engine: the in-memory posting store, the filter/sort query
//! engine, application intake, notifications, and the HTTP router over all of
//! it. State lives in a [`JobStore`] reached through the [`JobBoard`] handle.

pub mod domain;
pub mod query;
pub mod router;
pub mod seed;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{
    Application, ApplicationDraft, ApplicationId, ApplicationStatus, EmploymentType,
    ExperienceLevel, Job, JobDraft, JobId, JobPatch, JobStatus, Notification, NotificationDraft,
    NotificationId, NotificationKind, UserId, UserRecord, UserRole,
};
pub use query::{filter_jobs, FilterOptions, SortBy};
pub use router::board_router;
pub use seed::{SeedData, SeedError};
pub use service::JobBoard;
pub use store::{BoardError, JobStore};
