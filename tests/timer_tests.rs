mod common;

use common::{local_dt, mem_pool, session_started_at};
use std::fs;
use tempfile::tempdir;
use tracklet::cache::{FileSessionCache, SessionCache};
use tracklet::core::timer::TimerMachine;
use tracklet::errors::AppError;
use tracklet::models::{TimerPhase, TimerSession};

fn machine_in(dir: &tempfile::TempDir) -> TimerMachine<FileSessionCache> {
    TimerMachine::rehydrate(FileSessionCache::new(dir.path().join("session.json")))
}

#[test]
fn start_requires_client_and_project() {
    let dir = tempdir().unwrap();
    let mut machine = machine_in(&dir);

    let err = machine.start("acme", "", "", "").unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(machine.phase(), TimerPhase::Idle);

    let err = machine.start("", "website", "", "").unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(machine.phase(), TimerPhase::Idle);

    // Nothing was persisted for the rejected starts.
    assert!(!dir.path().join("session.json").exists());
}

#[test]
fn start_sets_session_and_persists() {
    let dir = tempdir().unwrap();
    let mut machine = machine_in(&dir);

    machine.start("acme", "website", "homepage", "layout work").unwrap();
    assert_eq!(machine.phase(), TimerPhase::Running);
    assert_eq!(machine.session().elapsed_seconds, 0);
    assert!(machine.session().start_time.is_some());

    // The slot holds the full session.
    let cached = FileSessionCache::new(dir.path().join("session.json"))
        .read_session()
        .expect("cached session");
    assert!(cached.is_tracking);
    assert_eq!(cached.selected_project_id, "website");
    assert_eq!(cached.description, "layout work");
}

#[test]
fn pause_preserves_elapsed_and_resume_continues() {
    let dir = tempdir().unwrap();
    let mut machine = machine_in(&dir);
    machine.start("acme", "website", "", "").unwrap();

    for _ in 0..10 {
        machine.tick().unwrap();
    }
    assert_eq!(machine.session().elapsed_seconds, 10);

    machine.pause().unwrap();
    assert_eq!(machine.phase(), TimerPhase::Paused);
    let paused_start = machine.session().start_time;

    // Ticks while paused are no-ops.
    for _ in 0..5 {
        machine.tick().unwrap();
    }
    assert_eq!(machine.session().elapsed_seconds, 10);

    machine.resume().unwrap();
    assert_eq!(machine.phase(), TimerPhase::Running);
    // Resume does not reset the run's start time.
    assert_eq!(machine.session().start_time, paused_start);

    machine.tick().unwrap();
    assert_eq!(machine.session().elapsed_seconds, 11);
}

#[test]
fn invalid_transitions_are_rejected() {
    let dir = tempdir().unwrap();
    let mut machine = machine_in(&dir);

    assert!(matches!(machine.pause(), Err(AppError::Validation(_))));
    assert!(matches!(machine.resume(), Err(AppError::Validation(_))));

    machine.start("acme", "website", "", "").unwrap();
    assert!(matches!(machine.resume(), Err(AppError::Validation(_))));
    assert!(matches!(
        machine.start("acme", "website", "", ""),
        Err(AppError::Validation(_))
    ));

    machine.pause().unwrap();
    assert!(matches!(machine.pause(), Err(AppError::Validation(_))));
    assert!(matches!(
        machine.start("acme", "website", "", ""),
        Err(AppError::Validation(_))
    ));
}

#[test]
fn rehydrate_continues_tracked_session_from_cached_elapsed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");

    let session = TimerSession {
        elapsed_seconds: 42,
        ..session_started_at(local_dt(2024, 1, 10, 9, 0, 0))
    };
    FileSessionCache::new(&path).write_session(&session).unwrap();

    let mut machine = TimerMachine::rehydrate(FileSessionCache::new(&path));
    assert_eq!(machine.phase(), TimerPhase::Running);
    assert!(machine.rehydrated_running());
    assert_eq!(machine.session().elapsed_seconds, 42);

    // Continues from the cached counter, not from now - start_time.
    machine.tick().unwrap();
    assert_eq!(machine.session().elapsed_seconds, 43);
}

#[test]
fn corrupt_cache_is_treated_as_no_session() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, "{not valid json!").unwrap();

    let machine = TimerMachine::rehydrate(FileSessionCache::new(&path));
    assert_eq!(machine.phase(), TimerPhase::Idle);
    assert!(!machine.rehydrated_running());
}

#[test]
fn stop_clears_session_but_keeps_selection() {
    let dir = tempdir().unwrap();
    let mut machine = machine_in(&dir);
    let mut pool = mem_pool();

    machine.start("acme", "website", "homepage", "fix nav").unwrap();
    machine.tick().unwrap();
    machine.stop(&mut pool, "local").unwrap();

    let session = machine.session();
    assert_eq!(machine.phase(), TimerPhase::Idle);
    assert_eq!(session.elapsed_seconds, 0);
    assert!(session.start_time.is_none());
    assert!(session.description.is_empty());
    // Selections survive for the next start.
    assert_eq!(session.selected_client_id, "acme");
    assert_eq!(session.selected_project_id, "website");
    assert_eq!(session.selected_task_id, "homepage");
}

#[test]
fn resume_from_entry_refused_while_running() {
    let dir = tempdir().unwrap();
    let mut machine = machine_in(&dir);
    let mut pool = mem_pool();

    machine.start("acme", "website", "", "first run").unwrap();
    let outcome = machine.stop(&mut pool, "local").unwrap();

    machine.start("acme", "backend", "", "").unwrap();
    let err = machine.resume_from_entry(&outcome.entry, "acme").unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    // Still on the running session.
    assert_eq!(machine.session().selected_project_id, "backend");
}

#[test]
fn resume_from_entry_reseeds_selection_and_restarts() {
    let dir = tempdir().unwrap();
    let mut machine = machine_in(&dir);
    let mut pool = mem_pool();

    machine.start("acme", "website", "homepage", "morning block").unwrap();
    for _ in 0..3 {
        machine.tick().unwrap();
    }
    let outcome = machine.stop(&mut pool, "local").unwrap();

    machine.resume_from_entry(&outcome.entry, "acme").unwrap();
    let session = machine.session();
    assert_eq!(machine.phase(), TimerPhase::Running);
    assert_eq!(session.elapsed_seconds, 0);
    assert_eq!(session.selected_project_id, "website");
    assert_eq!(session.selected_task_id, "homepage");
    assert_eq!(session.description, "morning block");
    assert!(session.start_time.is_some());
}

#[test]
fn clear_drops_everything_including_selection() {
    let dir = tempdir().unwrap();
    let mut machine = machine_in(&dir);

    machine.start("acme", "website", "", "").unwrap();
    machine.clear().unwrap();

    assert_eq!(machine.phase(), TimerPhase::Idle);
    assert!(machine.session().selected_client_id.is_empty());
    assert!(!dir.path().join("session.json").exists());
}
