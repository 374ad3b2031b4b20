pub mod add;
pub mod config;
pub mod continue_entry;
pub mod del;
pub mod discard;
pub mod edit;
pub mod init;
pub mod list;
pub mod log;
pub mod pause;
pub mod reconcile;
pub mod resume;
pub mod start;
pub mod status;
pub mod stop;
pub mod watch;

use crate::cache::FileSessionCache;
use crate::core::timer::TimerMachine;
use crate::db::DbPool;
use crate::db::initialize::init_db;
use crate::errors::AppResult;

/// Open the record store, ensuring the schema exists.
pub fn open_pool(cfg: &crate::config::Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

/// Rehydrate the timer machine from the configured cache slot.
pub fn open_machine(cfg: &crate::config::Config) -> TimerMachine<FileSessionCache> {
    TimerMachine::rehydrate(FileSessionCache::new(&cfg.session_cache))
}
