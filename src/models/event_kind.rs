use super::locale::Locale;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of a clock event recorded by a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Arrival,
    Departure,
    LunchStart,
    LunchEnd,
    MedicalLeaveStart,
    MedicalLeaveEnd,
}

impl EventKind {
    pub const ALL: [EventKind; 6] = [
        EventKind::Arrival,
        EventKind::Departure,
        EventKind::LunchStart,
        EventKind::LunchEnd,
        EventKind::MedicalLeaveStart,
        EventKind::MedicalLeaveEnd,
    ];

    /// Key used by terminals (`typ_zaznamu`) and stored in `events.kind`.
    pub fn wire_key(&self) -> &'static str {
        match self {
            EventKind::Arrival => "PRICHOD",
            EventKind::Departure => "ODCHOD",
            EventKind::LunchStart => "OBED_START",
            EventKind::LunchEnd => "OBED_END",
            EventKind::MedicalLeaveStart => "LEKAR_START",
            EventKind::MedicalLeaveEnd => "LEKAR_KONIEC",
        }
    }

    /// Convert DB string → enum
    pub fn from_wire_key(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.wire_key() == s)
    }

    fn name(&self) -> &'static str {
        match self {
            EventKind::Arrival => "arrival",
            EventKind::Departure => "departure",
            EventKind::LunchStart => "lunch_start",
            EventKind::LunchEnd => "lunch_end",
            EventKind::MedicalLeaveStart => "medical_leave_start",
            EventKind::MedicalLeaveEnd => "medical_leave_end",
        }
    }

    /// Human readable label used in reports and terminal messages.
    pub fn label(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, EventKind::Arrival) => "Arrival",
            (Locale::En, EventKind::Departure) => "Departure",
            (Locale::En, EventKind::LunchStart) => "Lunch start",
            (Locale::En, EventKind::LunchEnd) => "Lunch end",
            (Locale::En, EventKind::MedicalLeaveStart) => "Medical leave start",
            (Locale::En, EventKind::MedicalLeaveEnd) => "Medical leave end",
            (Locale::Sk, EventKind::Arrival) => "Príchod",
            (Locale::Sk, EventKind::Departure) => "Odchod",
            (Locale::Sk, EventKind::LunchStart) => "Obed zaciatok",
            (Locale::Sk, EventKind::LunchEnd) => "Obed koniec",
            (Locale::Sk, EventKind::MedicalLeaveStart) => "Lekár - odchod",
            (Locale::Sk, EventKind::MedicalLeaveEnd) => "Lekár - príchod",
        }
    }

    /// Latest event of this kind means the employee is working.
    pub fn is_in_work(&self) -> bool {
        matches!(
            self,
            EventKind::Arrival | EventKind::LunchEnd | EventKind::MedicalLeaveEnd
        )
    }

    pub fn is_departure(&self) -> bool {
        matches!(self, EventKind::Departure)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Locale::En))
    }
}

/// Accepts the terminal wire keys exactly (`PRICHOD`, `OBED_END`, ...) and,
/// for the CLI, the snake-case names in any case (`arrival`, `Lunch_End`).
impl FromStr for EventKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(kind) = Self::from_wire_key(s) {
            return Ok(kind);
        }

        let lowered = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|k| k.name() == lowered)
            .ok_or_else(|| AppError::InvalidEventKind(s.to_string()))
    }
}
