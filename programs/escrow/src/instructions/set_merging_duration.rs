use anchor_lang::prelude::*;

use crate::constants::MAX_ACCOUNT_MERGING_DURATION;
use crate::error::EscrowError;
use crate::state::EscrowConfig;

/// Configure the length of future merge windows. Only while closed: the
/// duration of an already-running window cannot be changed under it.
pub fn set_merging_duration(ctx: Context<SetMergingDuration>, duration: i64) -> Result<()> {
    let config = &mut ctx.accounts.config;
    require_keys_eq!(ctx.accounts.admin.key(), config.admin, EscrowError::UnauthorizedAdmin);

    let now = Clock::get()?.unix_timestamp;
    require!(!config.account_merging_is_open(now), EscrowError::MergingWindowOpen);
    require!(duration > 0, EscrowError::InvalidDuration);
    require!(
        duration <= MAX_ACCOUNT_MERGING_DURATION,
        EscrowError::MergingDurationTooLong
    );

    config.account_merging_duration = duration;

    emit!(MergingDurationSet { duration });
    Ok(())
}

#[derive(Accounts)]
pub struct SetMergingDuration<'info> {
    #[account(mut, seeds = [b"config"], bump)]
    pub config: Account<'info, EscrowConfig>,

    pub admin: Signer<'info>,
}

#[event]
pub struct MergingDurationSet {
    pub duration: i64,
}
