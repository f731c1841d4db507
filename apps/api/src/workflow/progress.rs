#![allow(dead_code)]

//! Step progress for the product's linear multi-step flows.
//!
//! The tracker is advisory: it computes display status and navigability, and
//! never rejects a transition. Whether a transition is allowed is the
//! caller's call, made on what `is_navigable` reports. Degraded inputs
//! degrade the output instead of erroring — a completed key that matches no
//! step is ignored, and an out-of-range current step simply reports no
//! active step.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A named stage of a linear flow. Immutable, defined by the hosting view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl WorkflowStep {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The three mutually exclusive display states of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

/// Per-session progress through a step sequence.
///
/// `current_step` is 1-based — the positional convention the step indicator
/// components use. Completion is tracked by key and overrides position: a
/// completed step reports Completed even when it is the current one.
#[derive(Debug, Clone)]
pub struct WorkflowProgress {
    steps: Vec<WorkflowStep>,
    current_step: usize,
    completed: HashSet<String>,
}

impl WorkflowProgress {
    /// Fresh progress positioned on the first step, nothing completed.
    pub fn new(steps: Vec<WorkflowStep>) -> Self {
        Self {
            steps,
            current_step: 1,
            completed: HashSet::new(),
        }
    }

    /// Rebuilds progress from a snapshot (e.g. one posted by the client).
    pub fn restore(
        steps: Vec<WorkflowStep>,
        current_step: usize,
        completed: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            steps,
            current_step,
            completed: completed.into_iter().collect(),
        }
    }

    pub fn steps(&self) -> &[WorkflowStep] {
        &self.steps
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Display status for the step at `index` (0-based) with the given key.
    pub fn status_of(&self, index: usize, key: &str) -> StepStatus {
        if self.completed.contains(key) {
            StepStatus::Completed
        } else if index + 1 == self.current_step {
            StepStatus::Active
        } else {
            StepStatus::Pending
        }
    }

    /// Whether the step at `index` is a legal navigation target: backward
    /// navigation must be enabled, and the step must be completed or current.
    pub fn is_navigable(&self, index: usize, key: &str, can_navigate_back: bool) -> bool {
        can_navigate_back && (self.completed.contains(key) || index + 1 == self.current_step)
    }

    /// Moves to the given 1-based step. No legality check — callers gate on
    /// `is_navigable` before deciding to move.
    pub fn advance(&mut self, to_step: usize) {
        self.current_step = to_step;
    }

    /// Marks a step key completed. Idempotent.
    pub fn complete(&mut self, key: impl Into<String>) {
        self.completed.insert(key.into());
    }

    /// Status of every step, in sequence order.
    pub fn statuses(&self) -> Vec<StepStatus> {
        self.steps
            .iter()
            .enumerate()
            .map(|(index, step)| self.status_of(index, &step.key))
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Canonical flows
// ────────────────────────────────────────────────────────────────────────────

/// The resume-builder flow, as the step indicator presents it.
pub fn builder_steps() -> Vec<WorkflowStep> {
    vec![
        WorkflowStep::new("upload", "上传简历").description("导入已有简历或从空白开始"),
        WorkflowStep::new("edit", "编辑内容"),
        WorkflowStep::new("template", "选择模板"),
        WorkflowStep::new("export", "导出下载"),
    ]
}

/// The interview-review flow.
pub fn review_steps() -> Vec<WorkflowStep> {
    vec![
        WorkflowStep::new("select", "选择简历").description("挑选要复盘的简历版本"),
        WorkflowStep::new("questions", "面试问题"),
        WorkflowStep::new("feedback", "复盘反馈"),
    ]
}
