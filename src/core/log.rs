use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use unicode_width::UnicodeWidthStr;

/// Operation color in the printed log.
fn color_for_operation(op: &str) -> &'static str {
    match op {
        "init" => YELLOW,
        "seed" => GREEN,
        "migration_applied" => CYAN,
        _ => RESET,
    }
}

const MAX_OP_WIDTH: usize = 60;

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(i64, String, String, String, String)> = entries
            .into_iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(e.date);

                // Single column op+target, truncated on visible width
                let mut op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                if op_target.width() > MAX_OP_WIDTH {
                    op_target = op_target.chars().take(MAX_OP_WIDTH - 3).collect();
                    op_target.push_str("...");
                }

                (e.id, date, e.operation, op_target, e.message)
            })
            .collect();

        let id_w = rows.iter().map(|r| r.0.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(10);
        let op_w = rows.iter().map(|r| r.3.width()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, date, operation, op_target, message) in rows {
            let color = color_for_operation(&operation);
            let padding = " ".repeat(op_w.saturating_sub(op_target.width()));

            // Only the operation word is colored
            let colored = match op_target.split_once(' ') {
                Some((op, rest)) => format!("{color}{op}{RESET} {rest}"),
                None => format!("{color}{op_target}{RESET}"),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id, date, colored, padding, message
            );
        }

        Ok(())
    }
}
