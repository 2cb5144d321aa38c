pub mod config;
pub mod debt;
pub mod entry;
pub mod ledger;

pub use config::*;
pub use debt::*;
pub use entry::*;
pub use ledger::*;
