use anchor_lang::prelude::*;

/// Per-account debt balance (seeds `["debt", account]`), pushed by the
/// configured debt oracle and consulted by the merge state machine. A
/// missing record reads as zero debt.
#[account]
pub struct DebtRecord {
    pub account: Pubkey,
    pub balance: u64,
}

impl DebtRecord {
    pub const SIZE: usize =
        32 + // account
        8;   // balance
}
