use anchor_lang::prelude::*;

use crate::error::EscrowError;
use crate::state::EscrowConfig;

/// One-way gate: closes the migration import path for good.
pub fn complete_setup(ctx: Context<CompleteSetup>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    require_keys_eq!(ctx.accounts.admin.key(), config.admin, EscrowError::UnauthorizedAdmin);
    require!(!config.setup_complete, EscrowError::SetupAlreadyComplete);

    config.setup_complete = true;

    emit!(SetupCompleted {
        admin: config.admin,
        total_escrowed_balance: config.total_escrowed_balance,
        next_entry_id: config.next_entry_id,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct CompleteSetup<'info> {
    #[account(mut, seeds = [b"config"], bump)]
    pub config: Account<'info, EscrowConfig>,

    pub admin: Signer<'info>,
}

#[event]
pub struct SetupCompleted {
    pub admin: Pubkey,
    pub total_escrowed_balance: u64,
    pub next_entry_id: u64,
}
