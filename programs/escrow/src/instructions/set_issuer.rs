use anchor_lang::prelude::*;

use crate::error::EscrowError;
use crate::state::EscrowConfig;

pub fn set_issuer(ctx: Context<SetIssuer>, new_issuer: Pubkey) -> Result<()> {
    require!(new_issuer != Pubkey::default(), EscrowError::InvalidPubkey);

    let config_key = ctx.accounts.config.key();
    let config = &mut ctx.accounts.config;
    require_keys_eq!(ctx.accounts.admin.key(), config.admin, EscrowError::UnauthorizedAdmin);

    require!(new_issuer != config.admin, EscrowError::InvalidConfig);
    require!(new_issuer != config_key, EscrowError::InvalidConfig);
    require!(new_issuer != crate::ID, EscrowError::InvalidConfig);
    let (vault_pda, _) =
        Pubkey::find_program_address(&[b"vault", config_key.as_ref()], &crate::ID);
    require!(new_issuer != vault_pda, EscrowError::InvalidConfig);

    let old = config.issuer;
    config.issuer = new_issuer;

    emit!(IssuerSet {
        admin: config.admin,
        old_issuer: old,
        new_issuer,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetIssuer<'info> {
    #[account(mut, seeds = [b"config"], bump)]
    pub config: Account<'info, EscrowConfig>,

    pub admin: Signer<'info>,
}

#[event]
pub struct IssuerSet {
    pub admin: Pubkey,
    pub old_issuer: Pubkey,
    pub new_issuer: Pubkey,
}
