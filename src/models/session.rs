use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// The single stopwatch session. At most one exists per user; it lives in
/// memory inside the timer machine and is mirrored to the session cache on
/// every mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimerSession {
    /// True while the tick loop is advancing.
    #[serde(default)]
    pub is_tracking: bool,

    /// Wall-clock seconds accumulated; frozen while paused.
    #[serde(default)]
    pub elapsed_seconds: u64,

    /// Instant the current run began. None when idle; reset on every fresh
    /// start and on resume-from-entry, never on pause/resume.
    #[serde(default)]
    pub start_time: Option<DateTime<Local>>,

    /// Selection: empty string means "none". Project implies a client,
    /// task implies a project.
    #[serde(default)]
    pub selected_client_id: String,
    #[serde(default)]
    pub selected_project_id: String,
    #[serde(default)]
    pub selected_task_id: String,

    #[serde(default)]
    pub description: String,
}

/// Derived state of the session; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
}

impl TimerPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerPhase::Idle => "idle",
            TimerPhase::Running => "running",
            TimerPhase::Paused => "paused",
        }
    }
}

impl TimerSession {
    pub fn phase(&self) -> TimerPhase {
        if self.is_tracking {
            TimerPhase::Running
        } else if self.start_time.is_some() {
            TimerPhase::Paused
        } else {
            TimerPhase::Idle
        }
    }

    /// A start requires at least client + project.
    pub fn has_selection(&self) -> bool {
        !self.selected_client_id.is_empty() && !self.selected_project_id.is_empty()
    }
}
