use anchor_lang::prelude::*;

use crate::error::EscrowError;
use crate::state::{DebtRecord, EscrowConfig};

/// Debt oracle push feed: upsert the debt balance the merge state machine
/// consults for `account`.
pub fn post_debt_balance(
    ctx: Context<PostDebtBalance>,
    account: Pubkey,
    balance: u64,
) -> Result<()> {
    let config = &ctx.accounts.config;
    require_keys_eq!(
        ctx.accounts.oracle.key(),
        config.debt_oracle,
        EscrowError::UnauthorizedOracle
    );
    require!(account != Pubkey::default(), EscrowError::InvalidPubkey);

    let record = &mut ctx.accounts.debt_record;
    record.account = account;
    record.balance = balance;
    Ok(())
}

#[derive(Accounts)]
#[instruction(account: Pubkey)]
pub struct PostDebtBalance<'info> {
    #[account(seeds = [b"config"], bump)]
    pub config: Account<'info, EscrowConfig>,

    #[account(
        init_if_needed,
        payer = oracle,
        space = 8 + DebtRecord::SIZE,
        seeds = [b"debt", account.as_ref()],
        bump
    )]
    pub debt_record: Account<'info, DebtRecord>,

    #[account(mut)]
    pub oracle: Signer<'info>,

    pub system_program: Program<'info, System>,
}
