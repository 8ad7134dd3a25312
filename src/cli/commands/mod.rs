pub mod clock;
pub mod config;
pub mod db;
pub mod employee;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod serve;
pub mod site;
