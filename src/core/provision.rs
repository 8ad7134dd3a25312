//! Employee and site provisioning.

use crate::db::queries::{insert_employee, insert_site, set_employee_active};
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::site::Site;
use rusqlite::Connection;

/// Codes are typed on terminals and stored in `TEXT` columns capped at 10.
const MAX_CODE_LEN: usize = 10;

fn validate_code(code: &str, what: &str) -> AppResult<String> {
    let code = code.trim();
    if code.is_empty() || code.chars().count() > MAX_CODE_LEN || code.contains(char::is_whitespace)
    {
        return Err(AppError::Other(format!(
            "Invalid {what} '{code}': use 1 to {MAX_CODE_LEN} characters without spaces"
        )));
    }
    Ok(code.to_string())
}

fn validate_text(value: &str, what: &'static str) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::MissingField(what));
    }
    Ok(value.to_string())
}

pub struct ProvisionLogic;

impl ProvisionLogic {
    pub fn add_employee(
        conn: &Connection,
        code: &str,
        first_name: &str,
        last_name: &str,
    ) -> AppResult<Employee> {
        let code = validate_code(code, "personnel code")?;
        let first = validate_text(first_name, "first name")?;
        let last = validate_text(last_name, "last name")?;
        insert_employee(conn, &code, &first, &last)
    }

    /// Soft (de)activation; employees are never deleted.
    pub fn set_active(conn: &Connection, code: &str, active: bool) -> AppResult<()> {
        if set_employee_active(conn, code.trim(), active)? {
            Ok(())
        } else {
            Err(AppError::UnknownEmployee(code.to_string()))
        }
    }

    pub fn add_site(conn: &Connection, code: &str, name: &str) -> AppResult<Site> {
        let code = validate_code(code, "site code")?;
        let name = validate_text(name, "site name")?;
        insert_site(conn, &code, &name)
    }
}
