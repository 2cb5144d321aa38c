use anchor_lang::prelude::*;

use crate::error::EscrowError;

/// Singleton escrow config PDA: roles, global aggregates and the
/// account-merging window.
#[account]
pub struct EscrowConfig {
    /// Token mint held in custody.
    pub mint: Pubkey,
    /// Admin authority (merge window control, migration, role rotation).
    pub admin: Pubkey,
    /// Issuer authority (authorized grant issuance).
    pub issuer: Pubkey,
    /// Authority allowed to post per-account debt balances.
    pub debt_oracle: Pubkey,
    /// Next entry id to assign. Monotonic, never reused or decremented.
    pub next_entry_id: u64,
    /// Sum of `remaining_amount` over all entries in the system.
    pub total_escrowed_balance: u64,
    /// Cumulative amount ever claimed across all accounts.
    pub total_vested_balance: u64,
    /// Merge window flag; the window is open only while this is set and
    /// `merging_end_time` has not passed.
    pub merging_open: bool,
    /// Absolute end of the current merge window (valid only while open).
    pub merging_end_time: i64,
    /// Window length applied by `start_merging_window`.
    pub account_merging_duration: i64,
    /// One-way migration gate; bulk import is only legal while false.
    pub setup_complete: bool,
}

impl EscrowConfig {
    pub const SIZE: usize =
        32 + // mint
        32 + // admin
        32 + // issuer
        32 + // debt_oracle
        8 +  // next_entry_id
        8 +  // total_escrowed_balance
        8 +  // total_vested_balance
        1 +  // merging_open
        8 +  // merging_end_time
        8 +  // account_merging_duration
        1;   // setup_complete

    /// Whether account merging is currently possible. An expired window and
    /// a window that was never started are indistinguishable here.
    pub fn account_merging_is_open(&self, now: i64) -> bool {
        self.merging_open && now < self.merging_end_time
    }

    /// Hand out the next entry id and advance the counter.
    pub fn allocate_entry_id(&mut self) -> Result<u64> {
        let id = self.next_entry_id;
        self.next_entry_id = self
            .next_entry_id
            .checked_add(1)
            .ok_or(EscrowError::MathOverflow)?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIRST_ENTRY_ID;

    fn config() -> EscrowConfig {
        EscrowConfig {
            mint: Pubkey::default(),
            admin: Pubkey::default(),
            issuer: Pubkey::default(),
            debt_oracle: Pubkey::default(),
            next_entry_id: FIRST_ENTRY_ID,
            total_escrowed_balance: 0,
            total_vested_balance: 0,
            merging_open: false,
            merging_end_time: 0,
            account_merging_duration: 0,
            setup_complete: false,
        }
    }

    #[test]
    fn merging_closed_until_started() {
        let cfg = config();
        assert!(!cfg.account_merging_is_open(0));
        assert!(!cfg.account_merging_is_open(1_000_000));
    }

    #[test]
    fn merging_open_only_before_end_time() {
        let mut cfg = config();
        cfg.merging_open = true;
        cfg.merging_end_time = 500;
        assert!(cfg.account_merging_is_open(499));
        // Expired window reads exactly like one that never opened.
        assert!(!cfg.account_merging_is_open(500));
        assert!(!cfg.account_merging_is_open(501));
    }

    #[test]
    fn entry_ids_are_sequential_from_one() {
        let mut cfg = config();
        assert_eq!(cfg.allocate_entry_id().unwrap(), 1);
        assert_eq!(cfg.allocate_entry_id().unwrap(), 2);
        assert_eq!(cfg.allocate_entry_id().unwrap(), 3);
        assert_eq!(cfg.next_entry_id, 4);
    }
}
