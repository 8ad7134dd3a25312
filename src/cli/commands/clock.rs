use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{ClockLogic, ClockRequest};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clock {
        personnel_code,
        kind,
        site,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let req = ClockRequest::new(personnel_code, kind, site);
        let recorded = ClockLogic::record(&mut pool, &req)?;

        success(format!(
            "Record '{}' for {} saved at {} ({}).",
            recorded.event.kind.label(cfg.locale),
            recorded.employee.full_name(),
            recorded.event.timestamp_str(),
            recorded.site.name
        ));
    }

    Ok(())
}
