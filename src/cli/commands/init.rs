use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::initialize::{init_db, seed_demo_data};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database
///  - all pending DB migrations
///  - optionally, the demo sites and employees
pub fn handle(cli: &Cli) -> AppResult<()> {
    let seed = matches!(cli.command, Commands::Init { seed: true });

    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = cfg.database.clone();

    info("Initializing rAttendance…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    let pool = DbPool::new(&db_path)?;
    let applied = init_db(&pool.conn)?;

    for version in &applied {
        println!("   ↳ migration {version}");
    }
    success(format!("Database initialized at {}", &db_path));

    if let Err(e) = ttlog(
        &pool.conn,
        "init",
        &db_path,
        &format!("Database initialized ({} migrations applied)", applied.len()),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    if seed {
        if seed_demo_data(&pool.conn)? {
            success("Demo sites and employees inserted.");
        } else {
            warning("Employees already exist, demo data not inserted.");
        }
    }

    success("rAttendance initialization completed!");
    Ok(())
}
