use crate::cli::parser::{Commands, SiteAction};
use crate::config::Config;
use crate::core::provision::ProvisionLogic;
use crate::db::pool::DbPool;
use crate::db::queries::list_sites;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Site { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match action {
            SiteAction::Add { code, name } => {
                let site = ProvisionLogic::add_site(&pool.conn, code, name)?;
                success(format!("Site {} ({}) added.", site.name, site.code));
            }
            SiteAction::List => {
                let sites = list_sites(&pool.conn)?;
                header("Sites");

                if sites.is_empty() {
                    info("No sites found.");
                    return Ok(());
                }

                let mut table = Table::new(vec![
                    Column::new("Code"),
                    Column::new("Name"),
                    Column::new("Terminal"),
                ]);
                for s in &sites {
                    table.add_row(vec![
                        s.code.clone(),
                        s.name.clone(),
                        format!("/terminal/{}", s.code),
                    ]);
                }
                print!("{}", table.render());
            }
        }
    }
    Ok(())
}
