use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub id: i64,
    pub personnel_code: String, // ⇔ employees.personnel_code (UNIQUE)
    pub first_name: String,
    pub last_name: String,
    pub active: bool, // soft-deactivation, rows are never deleted
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
