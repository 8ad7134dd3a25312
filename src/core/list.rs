use crate::core::status::{derive_statuses, status_of};
use crate::db::pool::DbPool;
use crate::db::queries::{find_employee_by_code, load_report_rows};
use crate::errors::{AppError, AppResult};
use crate::models::locale::Locale;
use crate::models::status::WorkStatus;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::date::day_bounds;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub struct ListLogic;

impl ListLogic {
    /// Print the events of one day, optionally for a single employee.
    pub fn print_day(
        pool: &DbPool,
        date: NaiveDate,
        employee: Option<&str>,
        locale: Locale,
    ) -> AppResult<()> {
        let employee_id = match employee {
            Some(code) => Some(
                find_employee_by_code(&pool.conn, code)?
                    .ok_or_else(|| AppError::UnknownEmployee(code.to_string()))?
                    .id,
            ),
            None => None,
        };

        let (lower, upper) = day_bounds(date, date);
        let rows: Vec<_> = load_report_rows(&pool.conn, lower, upper)?
            .into_iter()
            .filter(|r| employee_id.is_none_or(|id| r.event.employee_id == id))
            .collect();

        header(format!("Events on {} (UTC)", date.format("%Y-%m-%d")));

        if rows.is_empty() {
            info("No events recorded.");
            return Ok(());
        }

        let statuses = derive_statuses(rows.iter().map(|r| &r.event));

        let mut table = Table::new(vec![
            Column::new("ID"),
            Column::new("Time"),
            Column::new("Code"),
            Column::new("Name"),
            Column::new("Site"),
            Column::new("Event"),
        ]);

        for r in &rows {
            table.add_row(vec![
                r.event.id.to_string(),
                r.event.timestamp.format("%H:%M:%S").to_string(),
                r.personnel_code.clone(),
                format!("{} {}", r.first_name, r.last_name),
                r.site_name.clone(),
                r.event.kind.label(locale).to_string(),
            ]);
        }

        print!("{}", table.render());
        println!();

        // One line per employee: derived status at the end of the day.
        let mut seen = Vec::new();
        for r in &rows {
            if seen.contains(&r.event.employee_id) {
                continue;
            }
            seen.push(r.event.employee_id);

            let status = status_of(&statuses, r.event.employee_id);
            let color = color_for_status(status == WorkStatus::InWork);
            println!(
                "{} {} {}: {}{}{}",
                r.personnel_code,
                r.first_name,
                r.last_name,
                color,
                status.label(locale),
                RESET
            );
        }

        Ok(())
    }
}
