use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use jobmagnet::board::{JobBoard, SeedData};
use jobmagnet::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the board handle from a seed file when one is configured, otherwise
/// from the built-in demo records.
pub(crate) fn load_board(seed_path: Option<&Path>) -> Result<JobBoard, AppError> {
    let seed = match seed_path {
        Some(path) => SeedData::from_path(path)?,
        None => SeedData::builtin(),
    };
    JobBoard::from_seed(seed).map_err(AppError::from)
}
