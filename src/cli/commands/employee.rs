use crate::cli::parser::{Commands, EmployeeAction};
use crate::config::Config;
use crate::core::provision::ProvisionLogic;
use crate::db::pool::DbPool;
use crate::db::queries::list_employees;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{GREEN, GREY, RESET};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employee { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match action {
            EmployeeAction::Add {
                personnel_code,
                first_name,
                last_name,
            } => {
                let emp =
                    ProvisionLogic::add_employee(&pool.conn, personnel_code, first_name, last_name)?;
                success(format!(
                    "Employee {} ({}) added.",
                    emp.full_name(),
                    emp.personnel_code
                ));
            }
            EmployeeAction::Deactivate { personnel_code } => {
                ProvisionLogic::set_active(&pool.conn, personnel_code, false)?;
                success(format!("Employee {personnel_code} deactivated."));
            }
            EmployeeAction::Activate { personnel_code } => {
                ProvisionLogic::set_active(&pool.conn, personnel_code, true)?;
                success(format!("Employee {personnel_code} activated."));
            }
            EmployeeAction::List => {
                let employees = list_employees(&pool.conn)?;
                header("Employees");

                if employees.is_empty() {
                    info("No employees found.");
                    return Ok(());
                }

                let mut table = Table::new(vec![
                    Column::new("Code"),
                    Column::new("Name"),
                    Column::new("Active"),
                ]);
                for e in &employees {
                    let active = if e.active {
                        format!("{GREEN}yes{RESET}")
                    } else {
                        format!("{GREY}no{RESET}")
                    };
                    table.add_row(vec![e.personnel_code.clone(), e.full_name(), active]);
                }
                print!("{}", table.render());
            }
        }
    }
    Ok(())
}
