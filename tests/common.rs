#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone};
use std::env;
use std::fs;
use std::path::PathBuf;

use tracklet::db::initialize::init_db;
use tracklet::db::store::{NewTimeEntry, RecordStore, TimeEntryPatch};
use tracklet::db::DbPool;
use tracklet::errors::{AppError, AppResult};
use tracklet::models::{TimeEntry, TimerSession};

pub fn trk() -> Command {
    cargo_bin_cmd!("tracklet")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tracklet.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a unique session-cache path inside the system temp dir
pub fn setup_test_cache(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tracklet_session.json", name));
    let cache_path = path.to_string_lossy().to_string();
    fs::remove_file(&cache_path).ok();
    cache_path
}

/// In-memory record store with the schema applied
pub fn mem_pool() -> DbPool {
    let pool = DbPool::open_in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init schema");
    pool
}

/// Fixed local timestamp helper
pub fn local_dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .expect("unambiguous local time")
}

/// A session that started at `start` with a minimal valid selection
pub fn session_started_at(start: DateTime<Local>) -> TimerSession {
    TimerSession {
        is_tracking: true,
        elapsed_seconds: 0,
        start_time: Some(start),
        selected_client_id: "acme".to_string(),
        selected_project_id: "website".to_string(),
        selected_task_id: String::new(),
        description: String::new(),
    }
}

/// Record store wrapper that fails selected operations, for exercising
/// the commit-retry and reconcile log-and-continue paths.
pub struct FlakyStore {
    pub inner: DbPool,
    pub fail_creates: bool,
    pub fail_update_ids: Vec<i64>,
}

impl FlakyStore {
    pub fn wrapping(inner: DbPool) -> Self {
        Self {
            inner,
            fail_creates: false,
            fail_update_ids: Vec::new(),
        }
    }
}

impl RecordStore for FlakyStore {
    fn create_time_entry(&mut self, entry: &NewTimeEntry) -> AppResult<TimeEntry> {
        if self.fail_creates {
            return Err(AppError::Write("injected create failure".to_string()));
        }
        self.inner.create_time_entry(entry)
    }

    fn update_time_entry(&mut self, id: i64, patch: &TimeEntryPatch) -> AppResult<TimeEntry> {
        if self.fail_update_ids.contains(&id) {
            return Err(AppError::Write("injected update failure".to_string()));
        }
        self.inner.update_time_entry(id, patch)
    }

    fn find_time_entry_by_start_time(
        &mut self,
        user_id: &str,
        start: DateTime<Local>,
    ) -> AppResult<Option<TimeEntry>> {
        self.inner.find_time_entry_by_start_time(user_id, start)
    }

    fn get_time_entry(&mut self, id: i64) -> AppResult<Option<TimeEntry>> {
        self.inner.get_time_entry(id)
    }

    fn list_time_entries(&mut self, user_id: &str) -> AppResult<Vec<TimeEntry>> {
        self.inner.list_time_entries(user_id)
    }

    fn delete_time_entry(&mut self, id: i64) -> AppResult<()> {
        self.inner.delete_time_entry(id)
    }
}
