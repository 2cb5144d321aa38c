use anchor_lang::prelude::*;

use crate::constants::MAX_ACCOUNT_ENTRIES;
use crate::error::EscrowError;

/// Per-account ledger PDA (seeds `["ledger", account]`): aggregate balances,
/// the pending merge nomination and the ordered list of owned entry ids.
///
/// The id list is append-only in creation order; a merge removes ids from
/// the source and appends them to the destination, so enumeration order
/// stays stable for both sides.
#[account]
pub struct AccountLedger {
    pub account: Pubkey,
    /// Sum of `remaining_amount` over this account's entries.
    pub total_escrowed: u64,
    /// Cumulative amount ever claimed by or for this account.
    pub total_vested: u64,
    /// Pending merge destination; cleared by a successful merge,
    /// overwritten by a re-nomination.
    pub nominated_receiver: Option<Pubkey>,
    /// Owned entry ids, creation order.
    pub entry_ids: Vec<u64>,
}

impl AccountLedger {
    pub const SIZE: usize =
        32 +                           // account
        8 +                            // total_escrowed
        8 +                            // total_vested
        1 + 32 +                       // nominated_receiver
        4 + 8 * MAX_ACCOUNT_ENTRIES;   // entry_ids

    pub fn num_entries(&self) -> usize {
        self.entry_ids.len()
    }

    pub fn entry_id_at(&self, index: usize) -> Option<u64> {
        self.entry_ids.get(index).copied()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.entry_ids.iter().any(|&e| e == id)
    }

    pub fn append_entry_id(&mut self, id: u64) -> Result<()> {
        require!(
            self.entry_ids.len() < MAX_ACCOUNT_ENTRIES,
            EscrowError::EntryListFull
        );
        self.entry_ids.push(id);
        Ok(())
    }

    pub fn remove_entry_id(&mut self, id: u64) {
        self.entry_ids.retain(|&e| e != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> AccountLedger {
        AccountLedger {
            account: Pubkey::new_unique(),
            total_escrowed: 0,
            total_vested: 0,
            nominated_receiver: None,
            entry_ids: Vec::new(),
        }
    }

    #[test]
    fn append_preserves_creation_order() {
        let mut l = ledger();
        for id in [3, 7, 9] {
            l.append_entry_id(id).unwrap();
        }
        assert_eq!(l.num_entries(), 3);
        assert_eq!(l.entry_id_at(0), Some(3));
        assert_eq!(l.entry_id_at(1), Some(7));
        assert_eq!(l.entry_id_at(2), Some(9));
        assert_eq!(l.entry_id_at(3), None);
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut l = ledger();
        for id in [1, 2, 3, 4] {
            l.append_entry_id(id).unwrap();
        }
        l.remove_entry_id(2);
        assert_eq!(l.entry_ids, vec![1, 3, 4]);
        assert!(!l.contains(2));
        assert!(l.contains(3));
        // Removing an id that is not present is a no-op.
        l.remove_entry_id(42);
        assert_eq!(l.entry_ids, vec![1, 3, 4]);
    }

    #[test]
    fn merge_bookkeeping_moves_balance_and_ids() {
        // The merge handler's ledger bookkeeping: the merged entry's id and
        // remaining amount move from source to destination, everything else
        // stays put.
        let mut source = ledger();
        let mut destination = ledger();
        let amounts = [(1u64, 100u64), (2, 250), (3, 40)];
        for (id, amount) in amounts {
            source.append_entry_id(id).unwrap();
            source.total_escrowed += amount;
        }
        let before = source.total_escrowed;

        let (merged_id, merged_amount) = amounts[1];
        source.remove_entry_id(merged_id);
        destination.append_entry_id(merged_id).unwrap();
        source.total_escrowed -= merged_amount;
        destination.total_escrowed += merged_amount;

        assert_eq!(source.total_escrowed, before - merged_amount);
        assert_eq!(destination.total_escrowed, merged_amount);
        assert!(!source.contains(merged_id));
        assert!(destination.contains(merged_id));
        assert_eq!(source.entry_ids, vec![1, 3]);
        // Conservation across the pair.
        assert_eq!(source.total_escrowed + destination.total_escrowed, before);
    }

    #[test]
    fn append_fails_when_full() {
        let mut l = ledger();
        for id in 0..MAX_ACCOUNT_ENTRIES as u64 {
            l.append_entry_id(id).unwrap();
        }
        assert!(l.append_entry_id(u64::MAX).is_err());
        assert_eq!(l.num_entries(), MAX_ACCOUNT_ENTRIES);
    }
}
