use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, CreateAccount};

use crate::constants::MAX_IMPORT_BATCH;
use crate::error::EscrowError;
use crate::state::{AccountLedger, EscrowConfig, ImportedEntry, VestingEntry};
use crate::utils::vesting;

/// Bulk migration from a predecessor ledger: insert a batch of historical
/// grants for one account, bypassing the issuance preconditions (no custody
/// check, no minimum-amount guard). Legal only before setup is complete.
///
/// Entry PDAs for the ids this batch will consume must be passed as
/// remaining accounts, in batch order; they are created here so the whole
/// batch lands atomically.
pub fn import_vesting_entries<'info>(
    ctx: Context<'_, '_, 'info, 'info, ImportVestingEntries<'info>>,
    account: Pubkey,
    items: Vec<ImportedEntry>,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    require_keys_eq!(ctx.accounts.admin.key(), config.admin, EscrowError::UnauthorizedAdmin);
    require!(!config.setup_complete, EscrowError::ImportAfterSetup);
    require!(account != Pubkey::default(), EscrowError::InvalidPubkey);
    require!(!items.is_empty(), EscrowError::EmptyBatch);
    require!(items.len() <= MAX_IMPORT_BATCH, EscrowError::BatchTooLarge);
    require!(
        ctx.remaining_accounts.len() == items.len(),
        EscrowError::EntryAccountMismatch
    );

    let now = Clock::get()?.unix_timestamp;
    let rent = Rent::get()?;

    let ledger = &mut ctx.accounts.ledger;
    if ledger.account == Pubkey::default() {
        ledger.account = account;
    }

    let mut imported_amount: u64 = 0;

    for (item, entry_ai) in items.iter().zip(ctx.remaining_accounts.iter()) {
        // One of end_time/duration may be zero; derive it from the other.
        // Both set describes a grant already part-way through its schedule.
        let (end_time, duration) = match (item.end_time, item.duration) {
            (0, 0) => return Err(EscrowError::InvalidConfig.into()),
            (0, d) => (now.checked_add(d).ok_or(EscrowError::MathOverflow)?, d),
            (e, 0) => {
                require!(e > now, EscrowError::InvalidEndTime);
                (e, e - now)
            }
            (e, d) => (e, d),
        };
        vesting::validate_grant(item.escrow_amount, duration)?;

        let id = config.allocate_entry_id()?;
        let id_bytes = id.to_le_bytes();
        let (expected, bump) =
            Pubkey::find_program_address(&[b"entry", id_bytes.as_ref()], &crate::ID);
        require_keys_eq!(entry_ai.key(), expected, EscrowError::EntryAccountMismatch);

        let space = 8 + VestingEntry::SIZE;
        let signer_seeds: &[&[&[u8]]] = &[&[b"entry", id_bytes.as_ref(), &[bump]]];
        system_program::create_account(
            CpiContext::new_with_signer(
                ctx.accounts.system_program.to_account_info(),
                CreateAccount {
                    from: ctx.accounts.admin.to_account_info(),
                    to: entry_ai.clone(),
                },
                signer_seeds,
            ),
            rent.minimum_balance(space),
            space as u64,
            &crate::ID,
        )?;

        let entry = VestingEntry {
            id,
            owner: account,
            escrow_amount: item.escrow_amount,
            remaining_amount: item.escrow_amount,
            end_time,
            duration,
            last_vested: 0,
        };
        let mut data = entry_ai.try_borrow_mut_data()?;
        entry.try_serialize(&mut &mut data[..])?;
        drop(data);

        ledger.append_entry_id(id)?;
        ledger.total_escrowed = ledger
            .total_escrowed
            .checked_add(item.escrow_amount)
            .ok_or(EscrowError::MathOverflow)?;
        config.total_escrowed_balance = config
            .total_escrowed_balance
            .checked_add(item.escrow_amount)
            .ok_or(EscrowError::MathOverflow)?;
        imported_amount = imported_amount
            .checked_add(item.escrow_amount)
            .ok_or(EscrowError::MathOverflow)?;
    }

    emit!(EntriesImported {
        account,
        entries: items.len() as u32,
        amount: imported_amount,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(account: Pubkey)]
pub struct ImportVestingEntries<'info> {
    #[account(mut, seeds = [b"config"], bump)]
    pub config: Account<'info, EscrowConfig>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + AccountLedger::SIZE,
        seeds = [b"ledger", account.as_ref()],
        bump
    )]
    pub ledger: Box<Account<'info, AccountLedger>>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct EntriesImported {
    pub account: Pubkey,
    pub entries: u32,
    pub amount: u64,
}
