use anchor_lang::prelude::*;

use crate::error::EscrowError;
use crate::state::{AccountLedger, DebtRecord, EscrowConfig};

/// Nominate `destination` to receive this account's unvested entries. Only
/// while the window is open, and only with a zero debt balance; a later
/// nomination overwrites an earlier one.
pub fn nominate_account_to_merge(
    ctx: Context<NominateAccountToMerge>,
    destination: Pubkey,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let config = &ctx.accounts.config;
    require!(config.account_merging_is_open(now), EscrowError::MergingNotOpen);

    let caller = ctx.accounts.caller.key();
    require!(destination != Pubkey::default(), EscrowError::InvalidPubkey);
    require!(destination != caller, EscrowError::CannotNominateSelf);

    let ledger = &mut ctx.accounts.ledger;
    require!(ledger.total_escrowed > 0, EscrowError::NoEscrowEntries);

    let debt = ctx.accounts.debt_record.as_ref().map_or(0, |d| d.balance);
    require!(debt == 0, EscrowError::NonZeroDebt);

    ledger.nominated_receiver = Some(destination);

    emit!(AccountNominated {
        account: caller,
        destination,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct NominateAccountToMerge<'info> {
    #[account(seeds = [b"config"], bump)]
    pub config: Account<'info, EscrowConfig>,

    pub caller: Signer<'info>,

    #[account(mut, seeds = [b"ledger", caller.key().as_ref()], bump)]
    pub ledger: Box<Account<'info, AccountLedger>>,

    #[account(seeds = [b"debt", caller.key().as_ref()], bump)]
    pub debt_record: Option<Account<'info, DebtRecord>>,
}

#[event]
pub struct AccountNominated {
    pub account: Pubkey,
    pub destination: Pubkey,
}
