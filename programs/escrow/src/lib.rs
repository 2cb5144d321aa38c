use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("2Bx3BDCUtKZKNN1xGY8XiQqFSHhrt9uTRVzkGSJpgFSa");

#[program]
pub mod escrow {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        issuer: Pubkey,
        debt_oracle: Pubkey,
    ) -> Result<()> {
        instructions::initialize::initialize(ctx, issuer, debt_oracle)
    }

    pub fn set_issuer(ctx: Context<SetIssuer>, new_issuer: Pubkey) -> Result<()> {
        instructions::set_issuer::set_issuer(ctx, new_issuer)
    }

    pub fn create_escrow_entry(
        ctx: Context<CreateEscrowEntry>,
        beneficiary: Pubkey,
        amount: u64,
        duration: i64,
    ) -> Result<()> {
        instructions::create_escrow_entry::create_escrow_entry(ctx, beneficiary, amount, duration)
    }

    pub fn fund_escrow_entry(
        ctx: Context<FundEscrowEntry>,
        beneficiary: Pubkey,
        amount: u64,
        duration: i64,
    ) -> Result<()> {
        instructions::fund_escrow_entry::fund_escrow_entry(ctx, beneficiary, amount, duration)
    }

    pub fn vest<'info>(
        ctx: Context<'_, '_, 'info, 'info, Vest<'info>>,
        account: Pubkey,
        entry_ids: Vec<u64>,
    ) -> Result<()> {
        instructions::vest::vest(ctx, account, entry_ids)
    }

    pub fn emit_claimable_quote<'info>(
        ctx: Context<'_, '_, 'info, 'info, EmitClaimableQuote<'info>>,
        account: Pubkey,
        entry_ids: Vec<u64>,
    ) -> Result<()> {
        instructions::emit_claimable_quote::emit_claimable_quote(ctx, account, entry_ids)
    }

    pub fn start_merging_window(ctx: Context<StartMergingWindow>) -> Result<()> {
        instructions::start_merging_window::start_merging_window(ctx)
    }

    pub fn set_merging_duration(ctx: Context<SetMergingDuration>, duration: i64) -> Result<()> {
        instructions::set_merging_duration::set_merging_duration(ctx, duration)
    }

    pub fn nominate_account_to_merge(
        ctx: Context<NominateAccountToMerge>,
        destination: Pubkey,
    ) -> Result<()> {
        instructions::nominate_account_to_merge::nominate_account_to_merge(ctx, destination)
    }

    pub fn merge_account<'info>(
        ctx: Context<'_, '_, 'info, 'info, MergeAccount<'info>>,
        source: Pubkey,
        entry_ids: Vec<u64>,
    ) -> Result<()> {
        instructions::merge_account::merge_account(ctx, source, entry_ids)
    }

    pub fn import_vesting_entries<'info>(
        ctx: Context<'_, '_, 'info, 'info, ImportVestingEntries<'info>>,
        account: Pubkey,
        items: Vec<state::ImportedEntry>,
    ) -> Result<()> {
        instructions::import_vesting_entries::import_vesting_entries(ctx, account, items)
    }

    pub fn complete_setup(ctx: Context<CompleteSetup>) -> Result<()> {
        instructions::complete_setup::complete_setup(ctx)
    }

    pub fn post_debt_balance(
        ctx: Context<PostDebtBalance>,
        account: Pubkey,
        balance: u64,
    ) -> Result<()> {
        instructions::post_debt_balance::post_debt_balance(ctx, account, balance)
    }
}
