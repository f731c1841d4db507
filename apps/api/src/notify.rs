#![allow(dead_code)]

//! Toast notifications — an explicit, injected container instead of an
//! ambient global. One `ToastCenter` is created at startup, lives in
//! `AppState` for the life of the process, and is drained by the client
//! through the notifications endpoints. Dismissal timing is a client concern;
//! the center only holds the queue.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Oldest toasts are dropped past this point; an unpolled client must not
/// grow the queue without bound.
const MAX_TOASTS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct Toast {
    pub id: Uuid,
    pub level: ToastLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Default)]
pub struct ToastCenter {
    inner: Arc<Mutex<Vec<Toast>>>,
}

impl ToastCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a toast and returns its id.
    pub fn add_toast(&self, level: ToastLevel, message: impl Into<String>) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            created_at: Utc::now(),
        };
        let id = toast.id;
        let mut toasts = self.lock();
        toasts.push(toast);
        if toasts.len() > MAX_TOASTS {
            let excess = toasts.len() - MAX_TOASTS;
            toasts.drain(..excess);
        }
        id
    }

    /// Removes a toast by id. Returns false if it was already gone.
    pub fn remove_toast(&self, id: Uuid) -> bool {
        let mut toasts = self.lock();
        let before = toasts.len();
        toasts.retain(|t| t.id != id);
        toasts.len() != before
    }

    /// Current queue, oldest first.
    pub fn list(&self) -> Vec<Toast> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Toast>> {
        // A poisoned lock only means some writer panicked mid-push; the
        // queue itself is still usable.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}
