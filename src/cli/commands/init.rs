use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::{initialize, pool::DbPool};
use crate::errors::AppResult;

pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    // Make sure the plan store schema exists right away.
    let pool = DbPool::new(&db_path.to_string_lossy())?;
    initialize::init_db(&pool.conn)?;

    Ok(())
}
