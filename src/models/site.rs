use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Site {
    pub id: i64,
    pub code: String, // ⇔ sites.code (UNIQUE), used in /terminal/{code}
    pub name: String,
}
