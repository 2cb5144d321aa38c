use anchor_lang::prelude::*;

use crate::state::{EscrowConfig, VestingEntry};
use crate::utils::vesting;

/// Read-only quote: what a `vest` call with the same id list would pay out
/// right now. Mutates nothing; skips the same ids `vest` would skip.
pub fn emit_claimable_quote<'info>(
    ctx: Context<'_, '_, 'info, 'info, EmitClaimableQuote<'info>>,
    account: Pubkey,
    entry_ids: Vec<u64>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let mut claimable: u64 = 0;
    let mut entries_counted: u32 = 0;
    let mut seen: Vec<u64> = Vec::new();

    for id in entry_ids {
        // A duplicate id would pay only once in `vest`; quote it the same way.
        if seen.contains(&id) {
            continue;
        }
        seen.push(id);
        let id_bytes = id.to_le_bytes();
        let (expected, _) =
            Pubkey::find_program_address(&[b"entry", id_bytes.as_ref()], &crate::ID);
        let entry_ai = match ctx.remaining_accounts.iter().find(|ai| ai.key() == expected) {
            Some(ai) => ai,
            None => continue,
        };
        if entry_ai.owner != &crate::ID {
            continue;
        }
        let data = entry_ai.try_borrow_data()?;
        let entry = match VestingEntry::try_deserialize(&mut &data[..]) {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        if entry.owner != account {
            continue;
        }
        claimable = claimable.saturating_add(vesting::claimable(&entry, now)?);
        entries_counted += 1;
    }

    emit!(ClaimableQuote {
        account,
        claimable,
        entries_counted,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitClaimableQuote<'info> {
    #[account(seeds = [b"config"], bump)]
    pub config: Account<'info, EscrowConfig>,
}

#[event]
pub struct ClaimableQuote {
    pub account: Pubkey,
    pub claimable: u64,
    pub entries_counted: u32,
}
