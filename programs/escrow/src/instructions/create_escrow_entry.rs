use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::error::EscrowError;
use crate::state::{AccountLedger, EscrowConfig, VestingEntry};
use crate::utils::vesting;

/// Authorized issuance: the issuer grants `amount` to `beneficiary` out of
/// custody already held in the vault. No value moves here; the un-escrowed
/// balance check guarantees the system never promises more than it holds.
pub fn create_escrow_entry(
    ctx: Context<CreateEscrowEntry>,
    beneficiary: Pubkey,
    amount: u64,
    duration: i64,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    require_keys_eq!(
        ctx.accounts.issuer.key(),
        config.issuer,
        EscrowError::UnauthorizedIssuer
    );
    require!(beneficiary != Pubkey::default(), EscrowError::InvalidPubkey);
    vesting::validate_grant(amount, duration)?;

    let unescrowed = ctx
        .accounts
        .vault
        .amount
        .checked_sub(config.total_escrowed_balance)
        .ok_or(EscrowError::InsufficientUnescrowedBalance)?;
    require!(unescrowed >= amount, EscrowError::InsufficientUnescrowedBalance);

    let now = Clock::get()?.unix_timestamp;
    let id = config.allocate_entry_id()?;
    let end_time = now.checked_add(duration).ok_or(EscrowError::MathOverflow)?;

    let entry = &mut ctx.accounts.entry;
    entry.id = id;
    entry.owner = beneficiary;
    entry.escrow_amount = amount;
    entry.remaining_amount = amount;
    entry.end_time = end_time;
    entry.duration = duration;
    entry.last_vested = 0;

    let ledger = &mut ctx.accounts.ledger;
    if ledger.account == Pubkey::default() {
        ledger.account = beneficiary;
    }
    ledger.append_entry_id(id)?;
    ledger.total_escrowed = ledger
        .total_escrowed
        .checked_add(amount)
        .ok_or(EscrowError::MathOverflow)?;
    config.total_escrowed_balance = config
        .total_escrowed_balance
        .checked_add(amount)
        .ok_or(EscrowError::MathOverflow)?;

    emit!(EscrowEntryCreated {
        id,
        beneficiary,
        amount,
        duration,
        end_time,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct CreateEscrowEntry<'info> {
    #[account(mut, seeds = [b"config"], bump)]
    pub config: Account<'info, EscrowConfig>,

    #[account(
        init,
        payer = issuer,
        space = 8 + VestingEntry::SIZE,
        seeds = [b"entry", config.next_entry_id.to_le_bytes().as_ref()],
        bump
    )]
    pub entry: Account<'info, VestingEntry>,

    #[account(
        init_if_needed,
        payer = issuer,
        space = 8 + AccountLedger::SIZE,
        seeds = [b"ledger", beneficiary.as_ref()],
        bump
    )]
    pub ledger: Box<Account<'info, AccountLedger>>,

    #[account(
        seeds = [b"vault", config.key().as_ref()],
        bump,
        constraint = vault.mint == config.mint @ EscrowError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub issuer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct EscrowEntryCreated {
    pub id: u64,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub duration: i64,
    pub end_time: i64,
}
