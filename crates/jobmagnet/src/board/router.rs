use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{
    ApplicationDraft, EmploymentType, ExperienceLevel, JobDraft, JobId, JobPatch, NotificationId,
    UserId,
};
use super::query::{FilterOptions, SortBy};
use super::service::JobBoard;
use super::store::BoardError;

/// Router builder exposing the job board over HTTP.
pub fn board_router(board: JobBoard) -> Router {
    Router::new()
        .route("/api/v1/jobs", get(jobs_index).post(create_job_handler))
        .route("/api/v1/jobs/featured", get(featured_jobs_handler))
        .route("/api/v1/jobs/recent", get(recent_jobs_handler))
        .route(
            "/api/v1/jobs/:job_id",
            get(job_handler).patch(update_job_handler),
        )
        .route(
            "/api/v1/jobs/:job_id/applications",
            get(job_applications_handler).post(apply_handler),
        )
        .route(
            "/api/v1/jobseekers/:user_id/applications",
            get(jobseeker_applications_handler),
        )
        .route(
            "/api/v1/employers/:user_id/jobs",
            get(employer_jobs_handler),
        )
        .route(
            "/api/v1/users/:user_id/notifications",
            get(notifications_handler),
        )
        .route(
            "/api/v1/users/:user_id/notifications/read-all",
            post(mark_all_read_handler),
        )
        .route(
            "/api/v1/notifications/:notification_id/read",
            post(mark_read_handler),
        )
        .with_state(board)
}

/// Raw query parameters for the jobs index; list criteria arrive as
/// comma-separated strings and are validated before reaching the engine.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct JobsQuery {
    search: Option<String>,
    location: Option<String>,
    employment_type: Option<String>,
    experience_level: Option<String>,
    skills: Option<String>,
    posted_within: Option<i64>,
    sort_by: Option<String>,
}

impl JobsQuery {
    fn into_filter_options(self) -> Result<FilterOptions, Response> {
        let employment_types = parse_list(&self.employment_type, EmploymentType::parse)
            .map_err(|raw| bad_request("employment_type", &raw))?;
        let experience_levels = parse_list(&self.experience_level, ExperienceLevel::parse)
            .map_err(|raw| bad_request("experience_level", &raw))?;
        let skills = self
            .skills
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let sort_by = match self.sort_by.as_deref() {
            Some(raw) => Some(SortBy::parse(raw).ok_or_else(|| bad_request("sort_by", raw))?),
            None => None,
        };

        Ok(FilterOptions {
            search: self.search,
            location: self.location,
            employment_types,
            experience_levels,
            skills,
            posted_within_days: self.posted_within,
            sort_by,
        })
    }
}

fn parse_list<T>(raw: &Option<String>, parse: fn(&str) -> Option<T>) -> Result<Vec<T>, String> {
    let Some(raw) = raw.as_deref() else {
        return Ok(Vec::new());
    };
    raw.split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| parse(value).ok_or_else(|| value.to_string()))
        .collect()
}

fn bad_request(field: &str, value: &str) -> Response {
    let payload = json!({ "error": format!("unrecognized {field} value '{value}'") });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}

fn board_error_response(error: BoardError) -> Response {
    let status = match &error {
        BoardError::JobNotFound(_)
        | BoardError::ApplicationNotFound(_)
        | BoardError::NotificationNotFound(_) => StatusCode::NOT_FOUND,
        BoardError::DuplicateApplication { .. } => StatusCode::CONFLICT,
        BoardError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}

pub(crate) async fn jobs_index(
    State(board): State<JobBoard>,
    Query(params): Query<JobsQuery>,
) -> Response {
    let options = match params.into_filter_options() {
        Ok(options) => options,
        Err(response) => return response,
    };
    Json(board.filter(&options)).into_response()
}

pub(crate) async fn featured_jobs_handler(State(board): State<JobBoard>) -> Response {
    Json(board.featured_jobs()).into_response()
}

pub(crate) async fn recent_jobs_handler(State(board): State<JobBoard>) -> Response {
    Json(board.recent_jobs()).into_response()
}

pub(crate) async fn job_handler(
    State(board): State<JobBoard>,
    Path(job_id): Path<String>,
) -> Response {
    match board.job(&JobId(job_id)) {
        Ok(job) => Json(job).into_response(),
        Err(error) => board_error_response(error),
    }
}

pub(crate) async fn create_job_handler(
    State(board): State<JobBoard>,
    Json(draft): Json<JobDraft>,
) -> Response {
    match board.create_job(draft) {
        Ok(job) => (StatusCode::CREATED, Json(job)).into_response(),
        Err(error) => board_error_response(error),
    }
}

pub(crate) async fn update_job_handler(
    State(board): State<JobBoard>,
    Path(job_id): Path<String>,
    Json(patch): Json<JobPatch>,
) -> Response {
    match board.update_job(&JobId(job_id), patch) {
        Ok(job) => Json(job).into_response(),
        Err(error) => board_error_response(error),
    }
}

/// Request body for submitting an application.
#[derive(Debug, Deserialize)]
pub(crate) struct ApplyRequest {
    pub(crate) jobseeker_id: UserId,
    #[serde(default)]
    pub(crate) resume: Option<String>,
    #[serde(default)]
    pub(crate) cover_letter: Option<String>,
}

pub(crate) async fn apply_handler(
    State(board): State<JobBoard>,
    Path(job_id): Path<String>,
    Json(request): Json<ApplyRequest>,
) -> Response {
    let draft = ApplicationDraft {
        resume: request.resume,
        cover_letter: request.cover_letter,
    };
    match board.apply_to_job(&JobId(job_id), &request.jobseeker_id, draft) {
        Ok(application) => (StatusCode::CREATED, Json(application)).into_response(),
        Err(error) => board_error_response(error),
    }
}

pub(crate) async fn job_applications_handler(
    State(board): State<JobBoard>,
    Path(job_id): Path<String>,
) -> Response {
    let job_id = JobId(job_id);
    if let Err(error) = board.job(&job_id) {
        return board_error_response(error);
    }
    Json(board.applications_for_job(&job_id)).into_response()
}

pub(crate) async fn jobseeker_applications_handler(
    State(board): State<JobBoard>,
    Path(user_id): Path<String>,
) -> Response {
    Json(board.applications_by_jobseeker(&UserId(user_id))).into_response()
}

pub(crate) async fn employer_jobs_handler(
    State(board): State<JobBoard>,
    Path(user_id): Path<String>,
) -> Response {
    Json(board.jobs_by_employer(&UserId(user_id))).into_response()
}

pub(crate) async fn notifications_handler(
    State(board): State<JobBoard>,
    Path(user_id): Path<String>,
) -> Response {
    let user_id = UserId(user_id);
    let payload = json!({
        "notifications": board.notifications_for(&user_id),
        "unread_count": board.unread_count(&user_id),
    });
    Json(payload).into_response()
}

pub(crate) async fn mark_all_read_handler(
    State(board): State<JobBoard>,
    Path(user_id): Path<String>,
) -> Response {
    let marked = board.mark_all_read(&UserId(user_id));
    Json(json!({ "marked_read": marked })).into_response()
}

pub(crate) async fn mark_read_handler(
    State(board): State<JobBoard>,
    Path(notification_id): Path<String>,
) -> Response {
    match board.mark_notification_read(&NotificationId(notification_id)) {
        Ok(notification) => Json(notification).into_response(),
        Err(error) => board_error_response(error),
    }
}
