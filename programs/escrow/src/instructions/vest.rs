use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::EscrowError;
use crate::state::{AccountLedger, EscrowConfig, VestingEntry};
use crate::utils::vesting;

/// Claim everything currently vested across the supplied entries and pay it
/// out to `account`. Callable by anyone (third-party sweeps): the transfer
/// beneficiary is always the account whose entries are claimed, never the
/// caller.
///
/// The id list is permissive: unknown ids, ids not owned by `account`,
/// duplicates and already-empty entries contribute zero and are skipped, so
/// repeated or stale claim lists are always safe. A zero total is a silent
/// no-op with no transfer and no event.
pub fn vest<'info>(
    ctx: Context<'_, '_, 'info, 'info, Vest<'info>>,
    account: Pubkey,
    entry_ids: Vec<u64>,
) -> Result<()> {
    // Capture AccountInfos/bumps before taking mutable borrows.
    let config_ai = ctx.accounts.config.to_account_info();
    let config_bump = ctx.bumps.config;

    let now = Clock::get()?.unix_timestamp;
    let mut total_vested: u64 = 0;

    for id in entry_ids {
        let id_bytes = id.to_le_bytes();
        let (expected, _) =
            Pubkey::find_program_address(&[b"entry", id_bytes.as_ref()], &crate::ID);
        let entry_ai = match ctx.remaining_accounts.iter().find(|ai| ai.key() == expected) {
            Some(ai) => ai,
            None => continue,
        };
        // An id that was never issued resolves to an account this program
        // does not own; treat it like any other soft miss.
        if entry_ai.owner != &crate::ID {
            continue;
        }
        let mut data = entry_ai.try_borrow_mut_data()?;
        let mut entry = match VestingEntry::try_deserialize(&mut &data[..]) {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        if entry.owner != account {
            continue;
        }

        let claimable = vesting::claimable(&entry, now)?;
        if claimable == 0 {
            continue;
        }

        entry.remaining_amount = entry
            .remaining_amount
            .checked_sub(claimable)
            .ok_or(EscrowError::MathOverflow)?;
        entry.last_vested = now;
        // Written back immediately so a duplicate id later in the list
        // sees the already-claimed state.
        entry.try_serialize(&mut &mut data[..])?;

        total_vested = total_vested
            .checked_add(claimable)
            .ok_or(EscrowError::MathOverflow)?;
    }

    if total_vested == 0 {
        return Ok(());
    }

    // Aggregates are settled before the outbound transfer is requested.
    let ledger = &mut ctx.accounts.ledger;
    ledger.total_escrowed = ledger
        .total_escrowed
        .checked_sub(total_vested)
        .ok_or(EscrowError::MathOverflow)?;
    ledger.total_vested = ledger
        .total_vested
        .checked_add(total_vested)
        .ok_or(EscrowError::MathOverflow)?;

    let config = &mut ctx.accounts.config;
    config.total_escrowed_balance = config
        .total_escrowed_balance
        .checked_sub(total_vested)
        .ok_or(EscrowError::MathOverflow)?;
    config.total_vested_balance = config
        .total_vested_balance
        .checked_add(total_vested)
        .ok_or(EscrowError::MathOverflow)?;

    require!(
        ctx.accounts.vault.amount >= total_vested,
        EscrowError::InsufficientVaultBalance
    );

    let signer_seeds: &[&[&[u8]]] = &[&[b"config", &[config_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: config_ai,
            },
            signer_seeds,
        ),
        total_vested,
    )?;

    emit!(Vested {
        beneficiary: account,
        amount: total_vested,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(account: Pubkey)]
pub struct Vest<'info> {
    #[account(mut, seeds = [b"config"], bump)]
    pub config: Account<'info, EscrowConfig>,

    #[account(mut, seeds = [b"ledger", account.as_ref()], bump)]
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
        constraint = beneficiary_token_account.mint == config.mint @ EscrowError::InvalidTokenMint,
        constraint = beneficiary_token_account.owner == account @ EscrowError::InvalidTokenAccount,
    )]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub caller: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct Vested {
    pub beneficiary: Pubkey,
    pub amount: u64,
}
