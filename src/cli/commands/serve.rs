use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::http;

/// Handle the `serve` command: run the HTTP server on a multi-threaded runtime.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { host, port } = cmd {
        let mut cfg = cfg.clone();
        if let Some(h) = host {
            cfg.host = h.clone();
        }
        if let Some(p) = port {
            cfg.port = *p;
        }

        http::init_tracing();

        let pool = DbPool::new(&cfg.database)?;
        let applied = run_pending_migrations(&pool.conn)?;
        if !applied.is_empty() {
            tracing::info!(count = applied.len(), "Database migrations applied");
        }

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        runtime.block_on(http::serve(cfg, pool))?;
    }

    Ok(())
}
