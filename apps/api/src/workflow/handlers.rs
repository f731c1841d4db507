use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::workflow::progress::{
    builder_steps, review_steps, StepStatus, WorkflowProgress, WorkflowStep,
};

#[derive(Debug, Deserialize)]
pub struct StepsQuery {
    #[serde(default)]
    pub flow: Option<String>,
}

/// GET /api/v1/workflow/steps
/// Canonical step sequences for the product's flows.
pub async fn handle_steps(
    Query(params): Query<StepsQuery>,
) -> Result<Json<Vec<WorkflowStep>>, AppError> {
    let steps = match params.flow.as_deref() {
        None | Some("builder") => builder_steps(),
        Some("review") => review_steps(),
        Some(other) => return Err(AppError::NotFound(format!("Unknown workflow '{other}'"))),
    };
    Ok(Json(steps))
}

fn default_can_navigate_back() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub steps: Vec<WorkflowStep>,
    pub current_step: usize,
    #[serde(default)]
    pub completed_steps: Vec<String>,
    #[serde(default = "default_can_navigate_back")]
    pub can_navigate_back: bool,
}

#[derive(Debug, Serialize)]
pub struct StepState {
    pub key: String,
    pub label: String,
    pub status: StepStatus,
    pub navigable: bool,
}

/// POST /api/v1/workflow/status
/// Evaluates a client-posted progress snapshot. Nothing is kept server side —
/// the response is display state for the step indicator.
pub async fn handle_status(Json(req): Json<StatusRequest>) -> Json<Vec<StepState>> {
    let can_navigate_back = req.can_navigate_back;
    let progress = WorkflowProgress::restore(req.steps, req.current_step, req.completed_steps);

    let states = progress
        .steps()
        .iter()
        .enumerate()
        .map(|(index, step)| StepState {
            key: step.key.clone(),
            label: step.label.clone(),
            status: progress.status_of(index, &step.key),
            navigable: progress.is_navigable(index, &step.key, can_navigate_back),
        })
        .collect();

    Json(states)
}
