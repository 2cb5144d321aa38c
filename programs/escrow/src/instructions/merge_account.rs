use anchor_lang::prelude::*;

use crate::error::EscrowError;
use crate::state::{AccountLedger, DebtRecord, EscrowConfig, VestingEntry};

/// Move `source`'s unvested entries to the caller, who must be the account
/// `source` nominated. The debt balance is re-checked here: a nomination
/// does not freeze debt state. Amounts on the entries are untouched; each
/// merged entry's `remaining_amount` follows its id from the source ledger
/// to the destination ledger, and the global aggregate is unchanged.
///
/// Ids in the list that `source` does not own are skipped, like in `vest`.
pub fn merge_account<'info>(
    ctx: Context<'_, '_, 'info, 'info, MergeAccount<'info>>,
    source: Pubkey,
    entry_ids: Vec<u64>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let config = &ctx.accounts.config;
    require!(config.account_merging_is_open(now), EscrowError::MergingNotOpen);

    let destination = ctx.accounts.destination.key();
    let source_ledger = &mut ctx.accounts.source_ledger;
    require!(
        source_ledger.nominated_receiver == Some(destination),
        EscrowError::NominatedReceiverMismatch
    );

    let debt = ctx.accounts.debt_record.as_ref().map_or(0, |d| d.balance);
    require!(debt == 0, EscrowError::NonZeroDebt);

    let destination_ledger = &mut ctx.accounts.destination_ledger;
    if destination_ledger.account == Pubkey::default() {
        destination_ledger.account = destination;
    }

    let mut merged_amount: u64 = 0;
    let mut entries_merged: u32 = 0;

    for id in entry_ids {
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
        let mut data = entry_ai.try_borrow_mut_data()?;
        let mut entry = match VestingEntry::try_deserialize(&mut &data[..]) {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        if entry.owner != source {
            continue;
        }

        entry.owner = destination;
        entry.try_serialize(&mut &mut data[..])?;

        source_ledger.remove_entry_id(id);
        destination_ledger.append_entry_id(id)?;

        source_ledger.total_escrowed = source_ledger
            .total_escrowed
            .checked_sub(entry.remaining_amount)
            .ok_or(EscrowError::MathOverflow)?;
        destination_ledger.total_escrowed = destination_ledger
            .total_escrowed
            .checked_add(entry.remaining_amount)
            .ok_or(EscrowError::MathOverflow)?;

        merged_amount = merged_amount
            .checked_add(entry.remaining_amount)
            .ok_or(EscrowError::MathOverflow)?;
        entries_merged += 1;
    }

    source_ledger.nominated_receiver = None;

    emit!(AccountMerged {
        source,
        destination,
        entries_merged,
        amount: merged_amount,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(source: Pubkey)]
pub struct MergeAccount<'info> {
    #[account(seeds = [b"config"], bump)]
    pub config: Account<'info, EscrowConfig>,

    #[account(mut, seeds = [b"ledger", source.as_ref()], bump)]
    pub source_ledger: Box<Account<'info, AccountLedger>>,

    #[account(mut)]
    pub destination: Signer<'info>,

    #[account(
        init_if_needed,
        payer = destination,
        space = 8 + AccountLedger::SIZE,
        seeds = [b"ledger", destination.key().as_ref()],
        bump
    )]
    pub destination_ledger: Box<Account<'info, AccountLedger>>,

    #[account(seeds = [b"debt", source.as_ref()], bump)]
    pub debt_record: Option<Account<'info, DebtRecord>>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct AccountMerged {
    pub source: Pubkey,
    pub destination: Pubkey,
    pub entries_merged: u32,
    pub amount: u64,
}
