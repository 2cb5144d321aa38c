use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{DEFAULT_ACCOUNT_MERGING_DURATION, FIRST_ENTRY_ID};
use crate::error::EscrowError;
use crate::state::EscrowConfig;

pub fn initialize(ctx: Context<Initialize>, issuer: Pubkey, debt_oracle: Pubkey) -> Result<()> {
    let config_key = ctx.accounts.config.key();
    let admin_key = ctx.accounts.admin.key();

    validate_role(&issuer, &admin_key, &config_key)?;
    validate_role(&debt_oracle, &admin_key, &config_key)?;

    let config = &mut ctx.accounts.config;
    config.mint = ctx.accounts.mint.key();
    config.admin = admin_key;
    config.issuer = issuer;
    config.debt_oracle = debt_oracle;
    config.next_entry_id = FIRST_ENTRY_ID;
    config.total_escrowed_balance = 0;
    config.total_vested_balance = 0;
    config.merging_open = false;
    config.merging_end_time = 0;
    config.account_merging_duration = DEFAULT_ACCOUNT_MERGING_DURATION;
    config.setup_complete = false;

    emit!(EscrowInitialized {
        mint: config.mint,
        admin: config.admin,
        issuer: config.issuer,
        debt_oracle: config.debt_oracle,
    });

    Ok(())
}

/// Roles must be real external signers: not the default pubkey, not the
/// admin, not this program or its known PDAs (which cannot sign).
fn validate_role(role: &Pubkey, admin: &Pubkey, config_key: &Pubkey) -> Result<()> {
    require!(*role != Pubkey::default(), EscrowError::InvalidPubkey);
    require!(role != admin, EscrowError::InvalidConfig);
    require!(role != config_key, EscrowError::InvalidConfig);
    require!(*role != crate::ID, EscrowError::InvalidConfig);
    let (vault_pda, _) =
        Pubkey::find_program_address(&[b"vault", config_key.as_ref()], &crate::ID);
    require!(role != &vault_pda, EscrowError::InvalidConfig);
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + EscrowConfig::SIZE,
        seeds = [b"config"],
        bump
    )]
    pub config: Account<'info, EscrowConfig>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = config,
        seeds = [b"vault", config.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct EscrowInitialized {
    pub mint: Pubkey,
    pub admin: Pubkey,
    pub issuer: Pubkey,
    pub debt_oracle: Pubkey,
}
