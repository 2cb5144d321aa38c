use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::EscrowError;
use crate::state::{AccountLedger, EscrowConfig, VestingEntry};
use crate::utils::vesting;

/// Self-funded issuance: any caller pulls `amount` from their own token
/// account into custody and grants it to `beneficiary`. Grants with
/// `amount <= duration` are rejected: the per-second rate would truncate to
/// zero and nothing would be claimable before `end_time`.
pub fn fund_escrow_entry(
    ctx: Context<FundEscrowEntry>,
    beneficiary: Pubkey,
    amount: u64,
    duration: i64,
) -> Result<()> {
    require!(beneficiary != Pubkey::default(), EscrowError::InvalidPubkey);
    vesting::validate_grant(amount, duration)?;
    require!(amount > duration as u64, EscrowError::GrantTooSmall);

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funder_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.funder.to_account_info(),
            },
        ),
        amount,
    )?;

    let now = Clock::get()?.unix_timestamp;
    let config = &mut ctx.accounts.config;
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

    emit!(EscrowEntryFunded {
        id,
        funder: ctx.accounts.funder.key(),
        beneficiary,
        amount,
        duration,
        end_time,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct FundEscrowEntry<'info> {
    #[account(mut, seeds = [b"config"], bump)]
    pub config: Account<'info, EscrowConfig>,

    #[account(
        init,
        payer = funder,
        space = 8 + VestingEntry::SIZE,
        seeds = [b"entry", config.next_entry_id.to_le_bytes().as_ref()],
        bump
    )]
    pub entry: Account<'info, VestingEntry>,

    #[account(
        init_if_needed,
        payer = funder,
        space = 8 + AccountLedger::SIZE,
        seeds = [b"ledger", beneficiary.as_ref()],
        bump
    )]
    pub ledger: Box<Account<'info, AccountLedger>>,

    #[account(
        mut,
        seeds = [b"vault", config.key().as_ref()],
        bump,
        constraint = vault.mint == config.mint @ EscrowError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = funder_token_account.mint == config.mint @ EscrowError::InvalidTokenMint,
        constraint = funder_token_account.owner == funder.key() @ EscrowError::InvalidTokenAccount,
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub funder: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct EscrowEntryFunded {
    pub id: u64,
    pub funder: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub duration: i64,
    pub end_time: i64,
}
