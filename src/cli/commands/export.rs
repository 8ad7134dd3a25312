use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::export::logic::ExportPeriod;
use crate::db::pool::DbPool;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        range,
        from,
        to,
        today,
        scope,
        force,
    } = cmd
    {
        let period = match (range, from, to, today) {
            (Some(r), _, _, _) => ExportPeriod::Range(r.clone()),
            (None, Some(f), Some(t), _) => ExportPeriod::Between {
                from: f.clone(),
                to: t.clone(),
            },
            (None, _, _, true) => ExportPeriod::Today,
            _ => {
                return Err(AppError::InvalidDateRange(
                    "specify --range, --from/--to or --today".into(),
                ));
            }
        };

        let pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(
            &pool,
            file,
            &period,
            scope.unwrap_or(cfg.report_status_scope),
            cfg.locale,
            *force,
        )?;
    }
    Ok(())
}
