pub mod initialize;
pub mod set_issuer;
pub mod create_escrow_entry;
pub mod fund_escrow_entry;
pub mod vest;
pub mod emit_claimable_quote;
pub mod start_merging_window;
pub mod set_merging_duration;
pub mod nominate_account_to_merge;
pub mod merge_account;
pub mod import_vesting_entries;
pub mod complete_setup;
pub mod post_debt_balance;

pub use initialize::*;
pub use set_issuer::*;
pub use create_escrow_entry::*;
pub use fund_escrow_entry::*;
pub use vest::*;
pub use emit_claimable_quote::*;
pub use start_merging_window::*;
pub use set_merging_duration::*;
pub use nominate_account_to_merge::*;
pub use merge_account::*;
pub use import_vesting_entries::*;
pub use complete_setup::*;
pub use post_debt_balance::*;
