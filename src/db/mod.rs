pub mod initialize;
pub mod plans;
pub mod pool;

use crate::config::Config;
use crate::errors::AppResult;
use pool::DbPool;

/// Open the plan store and make sure its schema exists.
pub fn open(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    initialize::init_db(&pool.conn)?;
    Ok(pool)
}
