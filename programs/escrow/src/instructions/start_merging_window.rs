use anchor_lang::prelude::*;

use crate::error::EscrowError;
use crate::state::EscrowConfig;

/// Open the account-merging window for the configured duration. Only legal
/// while the window is closed; an expired window counts as closed and may
/// be re-opened.
pub fn start_merging_window(ctx: Context<StartMergingWindow>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    require_keys_eq!(ctx.accounts.admin.key(), config.admin, EscrowError::UnauthorizedAdmin);

    let now = Clock::get()?.unix_timestamp;
    require!(!config.account_merging_is_open(now), EscrowError::MergingWindowOpen);

    config.merging_open = true;
    config.merging_end_time = now
        .checked_add(config.account_merging_duration)
        .ok_or(EscrowError::MathOverflow)?;

    emit!(MergingWindowStarted {
        end_time: config.merging_end_time,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct StartMergingWindow<'info> {
    #[account(mut, seeds = [b"config"], bump)]
    pub config: Account<'info, EscrowConfig>,

    pub admin: Signer<'info>,
}

#[event]
pub struct MergingWindowStarted {
    pub end_time: i64,
}
