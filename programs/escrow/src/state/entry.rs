use anchor_lang::prelude::*;

/// One vesting grant. Entries live in a global arena addressed by a
/// monotonically increasing id (PDA seeds `["entry", id]`); the owning
/// account's ledger keeps the ordered id list. Entries are never closed --
/// a fully vested entry stays behind as a historical record.
#[account]
pub struct VestingEntry {
    /// Unique id, strictly increasing across the whole system from 1.
    pub id: u64,
    /// Current owner. Rewritten only by an account merge.
    pub owner: Pubkey,
    /// Original granted quantity; immutable after creation.
    pub escrow_amount: u64,
    /// Quantity not yet claimed. Non-increasing, floor 0.
    pub remaining_amount: u64,
    /// Absolute time after which the grant is fully vested.
    pub end_time: i64,
    /// Vesting period length; immutable. Creation time is `end_time - duration`.
    pub duration: i64,
    /// Time of the most recent claim; 0 until the first claim.
    pub last_vested: i64,
}

impl VestingEntry {
    pub const SIZE: usize =
        8 +  // id
        32 + // owner
        8 +  // escrow_amount
        8 +  // remaining_amount
        8 +  // end_time
        8 +  // duration
        8;   // last_vested
}

/// Instruction input for `import_vesting_entries`. Exactly one of
/// `end_time` / `duration` may be zero, in which case it is derived from the
/// other at import time; both set describes a partially elapsed historical
/// grant carried over from a predecessor ledger.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImportedEntry {
    pub escrow_amount: u64,
    pub end_time: i64,
    pub duration: i64,
}
