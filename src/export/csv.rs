use crate::core::status::{StatusMap, status_of};
use crate::errors::AppResult;
use crate::export::model::{ReportRow, get_headers};
use crate::models::locale::Locale;
use csv::Writer;
use std::io::Write;

/// Write the report rows as CSV, one line per event.
///
/// The status column shows the employee's derived status from `statuses`,
/// the same value on every row of that employee.
pub fn write_report<W: Write>(
    out: W,
    rows: &[ReportRow],
    statuses: &StatusMap,
    locale: Locale,
) -> AppResult<()> {
    let mut wtr = Writer::from_writer(out);

    wtr.write_record(get_headers(locale))?;

    for row in rows {
        let status = status_of(statuses, row.event.employee_id);
        wtr.write_record(&[
            row.event.id.to_string(),
            row.personnel_code.clone(),
            row.first_name.clone(),
            row.last_name.clone(),
            row.site_name.clone(),
            row.event.timestamp_str(),
            row.event.kind.label(locale).to_string(),
            status.label(locale).to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
