//! Route groups, each mounted at the root by the router builder.

pub mod health;
pub mod record;
pub mod report;
pub mod terminal;
