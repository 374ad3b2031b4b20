//! Timer state machine.
//!
//! One `TimerSession` per user, owned exclusively by `TimerMachine`.
//! Phases are derived from the session (`Idle`, `Running`, `Paused`);
//! every transition re-writes the full session to the cache slot, so a
//! reload picks up exactly where the last mutation left off.
//!
//! Pause semantics follow the source system: `start_time` is never reset
//! on resume, so the eventual committed duration spans the original start
//! to the stop instant, while `elapsed_seconds` (the live display) is
//! frozen during pauses. The two can diverge after a pause/resume cycle
//! (see DESIGN.md).

use crate::cache::SessionCache;
use crate::core::commit::{self, CommitOutcome};
use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::{TimeEntry, TimerPhase, TimerSession};
use chrono::Local;

pub struct TimerMachine<C: SessionCache> {
    session: TimerSession,
    cache: C,
    /// Set when the cached session indicated tracking at rehydration, so
    /// the UI can tell the user the stopwatch survived a restart.
    rehydrated_running: bool,
}

impl<C: SessionCache> TimerMachine<C> {
    /// Rehydrate from the cache slot. Absent or corrupt content yields a
    /// fresh idle session. A session cached as tracking keeps ticking
    /// from its stored `elapsed_seconds`; the reload gap is not
    /// back-filled (recorded limitation, see DESIGN.md).
    pub fn rehydrate(cache: C) -> Self {
        let session = cache.read_session().unwrap_or_default();
        let rehydrated_running = session.is_tracking;
        Self {
            session,
            cache,
            rehydrated_running,
        }
    }

    pub fn session(&self) -> &TimerSession {
        &self.session
    }

    pub fn phase(&self) -> TimerPhase {
        self.session.phase()
    }

    pub fn rehydrated_running(&self) -> bool {
        self.rehydrated_running
    }

    /// Idle -> Running.
    pub fn start(
        &mut self,
        client_id: &str,
        project_id: &str,
        task_id: &str,
        description: &str,
    ) -> AppResult<()> {
        match self.phase() {
            TimerPhase::Running => {
                return Err(AppError::Validation(
                    "timer is already running; stop it first".to_string(),
                ));
            }
            TimerPhase::Paused => {
                return Err(AppError::Validation(
                    "timer is paused; resume it or stop it first".to_string(),
                ));
            }
            TimerPhase::Idle => {}
        }

        if client_id.is_empty() || project_id.is_empty() {
            return Err(AppError::Validation(
                "select a client and a project before starting the timer".to_string(),
            ));
        }
        if !task_id.is_empty() && project_id.is_empty() {
            return Err(AppError::Validation(
                "a task requires a project".to_string(),
            ));
        }

        self.session.selected_client_id = client_id.to_string();
        self.session.selected_project_id = project_id.to_string();
        self.session.selected_task_id = task_id.to_string();
        self.session.description = description.to_string();
        self.session.start_time = Some(Local::now());
        self.session.elapsed_seconds = 0;
        self.session.is_tracking = true;

        self.persist()
    }

    /// Running -> Paused. Elapsed seconds and start_time are retained, so
    /// the displayed total survives the pause.
    pub fn pause(&mut self) -> AppResult<()> {
        match self.phase() {
            TimerPhase::Running => {
                self.session.is_tracking = false;
                self.persist()
            }
            TimerPhase::Paused => Err(AppError::Validation(
                "timer is already paused".to_string(),
            )),
            TimerPhase::Idle => Err(AppError::Validation(
                "no running timer to pause".to_string(),
            )),
        }
    }

    /// Paused -> Running, without resetting elapsed_seconds or start_time.
    pub fn resume(&mut self) -> AppResult<()> {
        match self.phase() {
            TimerPhase::Paused => {
                self.session.is_tracking = true;
                self.persist()
            }
            TimerPhase::Running => Err(AppError::Validation(
                "timer is already running".to_string(),
            )),
            TimerPhase::Idle => Err(AppError::Validation(
                "no paused timer to resume; use start".to_string(),
            )),
        }
    }

    /// One second of wall clock while tracking. A no-op otherwise, so a
    /// tick racing a pause or stop cannot advance a frozen session.
    pub fn tick(&mut self) -> AppResult<()> {
        if !self.session.is_tracking {
            return Ok(());
        }
        self.session.elapsed_seconds += 1;
        self.persist()
    }

    /// (Running|Paused) -> Idle through the commit resolver.
    ///
    /// The session snapshot handed to the resolver is the machine's own
    /// state at the instant of the call. On store failure the session is
    /// parked as Paused (tracking off, start_time kept) so the elapsed
    /// time survives and a retried stop commits it.
    pub fn stop(&mut self, store: &mut dyn RecordStore, user_id: &str) -> AppResult<CommitOutcome> {
        if self.session.start_time.is_none() {
            return Err(AppError::Validation(
                "no active session to stop".to_string(),
            ));
        }

        let snapshot = self.session.clone();
        match commit::commit_session(store, &snapshot, user_id) {
            Ok(outcome) => {
                // Selections survive the stop for convenience.
                self.session.is_tracking = false;
                self.session.elapsed_seconds = 0;
                self.session.start_time = None;
                self.session.description.clear();
                self.persist()?;
                Ok(outcome)
            }
            Err(e) => {
                if self.session.is_tracking {
                    self.session.is_tracking = false;
                    self.persist()?;
                }
                Err(e)
            }
        }
    }

    /// any -> Running, seeded from a past entry. Refused while Running:
    /// the caller must stop (with explicit confirmation) first.
    pub fn resume_from_entry(&mut self, entry: &TimeEntry, client_id: &str) -> AppResult<()> {
        if self.phase() == TimerPhase::Running {
            return Err(AppError::Validation(
                "timer is already running; stop it before continuing another entry".to_string(),
            ));
        }
        if client_id.is_empty() {
            return Err(AppError::Validation(
                "select a client before continuing an entry".to_string(),
            ));
        }

        self.session.selected_client_id = client_id.to_string();
        self.session.selected_project_id = entry.project_id.clone();
        self.session.selected_task_id = entry.task_id.clone().unwrap_or_default();
        self.session.description = entry.description.clone();
        self.session.start_time = Some(Local::now());
        self.session.elapsed_seconds = 0;
        self.session.is_tracking = true;

        self.persist()
    }

    /// Drop the session entirely, uncommitted time included (sign-out, or
    /// an explicit discard). Selections are cleared too.
    pub fn clear(&mut self) -> AppResult<()> {
        self.session = TimerSession::default();
        self.cache.clear_session()
    }

    fn persist(&self) -> AppResult<()> {
        self.cache.write_session(&self.session)
    }
}
