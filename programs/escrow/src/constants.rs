//! Program-wide constants.

/// Seconds per week (UTC).
pub const SECONDS_PER_WEEK: i64 = 7 * 86_400;

/// System-wide cap on a grant's vesting duration (5 years in weeks).
pub const MAX_ESCROW_DURATION: i64 = 5 * 52 * SECONDS_PER_WEEK;

/// Account-merging window length applied when none has been configured.
pub const DEFAULT_ACCOUNT_MERGING_DURATION: i64 = SECONDS_PER_WEEK;

/// Cap on the configurable account-merging window length.
pub const MAX_ACCOUNT_MERGING_DURATION: i64 = 4 * SECONDS_PER_WEEK;

/// Max entry ids held in one account's ledger PDA.
pub const MAX_ACCOUNT_ENTRIES: usize = 64;

/// Max entries inserted per `import_vesting_entries` call.
pub const MAX_IMPORT_BATCH: usize = 8;

/// Entry ids start here; 0 is never a valid id.
pub const FIRST_ENTRY_ID: u64 = 1;
