use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date::{parse_range_date, today};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { date, employee } = cmd {
        let day = match date {
            Some(d) => parse_range_date(d)?,
            None => today(),
        };

        let pool = DbPool::new(&cfg.database)?;
        ListLogic::print_day(&pool, day, employee.as_deref(), cfg.locale)?;
    }
    Ok(())
}
