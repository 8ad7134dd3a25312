// src/export/model.rs

use crate::models::event::Event;
use crate::models::locale::Locale;

/// One event joined with the employee and site columns a report shows.
#[derive(Clone, Debug)]
pub struct ReportRow {
    pub event: Event,
    pub personnel_code: String,
    pub first_name: String,
    pub last_name: String,
    pub site_name: String,
}

/// Header for the CSV report.
pub(crate) fn get_headers(locale: Locale) -> [&'static str; 8] {
    match locale {
        Locale::En => [
            "Record ID",
            "Personnel code",
            "First name",
            "Last name",
            "Site",
            "Timestamp",
            "Event kind",
            "Current status",
        ],
        Locale::Sk => [
            "ID Záznamu",
            "Osobné číslo",
            "Meno",
            "Priezvisko",
            "Prevádzka",
            "Časová Pečiatka",
            "Typ Záznamu",
            "Aktuálny Stav",
        ],
    }
}
