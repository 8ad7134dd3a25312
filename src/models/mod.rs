pub mod employee;
pub mod event;
pub mod event_kind;
pub mod locale;
pub mod site;
pub mod status;
