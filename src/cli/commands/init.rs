use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::DbPool;
use crate::db::initialize::init_db;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Create the config file (unless in test mode) and the database schema.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if !cli.test {
        cfg.save()?;
        info(format!("Configuration written to {}", Config::config_file().display()));
    }

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    success(format!("Database initialized at {}", cfg.database));
    Ok(())
}
