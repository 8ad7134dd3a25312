pub mod clock;
pub mod list;
pub mod log;
pub mod provision;
pub mod report;
pub mod status;
