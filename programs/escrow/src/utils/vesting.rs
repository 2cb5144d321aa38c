//! Linear-rate vesting arithmetic.
//!
//! - rate_per_second = floor(escrow_amount / duration), computed from the
//!   immutable originals so it is stable across partial claims
//! - elapsed time is clamped to [creation_time, end_time] and never counts
//!   time already claimed
//! - at or past end_time the whole remainder is claimable, so rounding loss
//!   accumulated by the floor cannot strand dust

use anchor_lang::prelude::*;

use crate::constants::MAX_ESCROW_DURATION;
use crate::error::EscrowError;
use crate::state::VestingEntry;

/// Tokens released per second, rounded down. Stable for the lifetime of an
/// entry: recomputing from `remaining_amount` would make sequential partial
/// claims drift from the schedule.
pub fn rate_per_second(escrow_amount: u64, duration: i64) -> Result<u64> {
    let d = u64::try_from(duration).map_err(|_| EscrowError::InvalidDuration)?;
    escrow_amount
        .checked_div(d)
        .ok_or_else(|| EscrowError::InvalidDuration.into())
}

/// Seconds of still-unclaimed schedule elapsed at `now`: from the later of
/// the last claim and the creation time, to the earlier of `now` and the
/// end time. Clamped to >= 0.
pub fn time_since_last_vested(entry: &VestingEntry, now: i64) -> i64 {
    let created = entry.end_time.saturating_sub(entry.duration);
    let from = entry.last_vested.max(created);
    let until = now.min(entry.end_time);
    until.saturating_sub(from).max(0)
}

/// Amount claimable from `entry` at `now`.
pub fn claimable(entry: &VestingEntry, now: i64) -> Result<u64> {
    if entry.remaining_amount == 0 {
        return Ok(0);
    }
    // Full flush at the end of the schedule, regardless of rounding.
    if now >= entry.end_time {
        return Ok(entry.remaining_amount);
    }
    let rate = rate_per_second(entry.escrow_amount, entry.duration)?;
    let elapsed = time_since_last_vested(entry, now);
    let accrued = (rate as u128)
        .checked_mul(elapsed as u128)
        .ok_or(EscrowError::MathOverflow)?;
    Ok(accrued.min(entry.remaining_amount as u128) as u64)
}

/// Common grant preconditions shared by both issuance paths and migration.
pub fn validate_grant(amount: u64, duration: i64) -> Result<()> {
    require!(amount > 0, EscrowError::ZeroAmount);
    require!(
        duration > 0 && duration <= MAX_ESCROW_DURATION,
        EscrowError::InvalidDuration
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i64 = 365 * 86_400;

    fn entry(escrow: u64, duration: i64, end_time: i64) -> VestingEntry {
        VestingEntry {
            id: 1,
            owner: Pubkey::default(),
            escrow_amount: escrow,
            remaining_amount: escrow,
            end_time,
            duration,
            last_vested: 0,
        }
    }

    /// Apply a claim the way `vest` does: debit and stamp the claim time.
    fn claim(e: &mut VestingEntry, now: i64) -> u64 {
        let c = claimable(e, now).unwrap();
        e.remaining_amount -= c;
        e.last_vested = now;
        c
    }

    #[test]
    fn rate_rounds_down() {
        assert_eq!(rate_per_second(31_556_927, 31_556_926).unwrap(), 1);
        assert_eq!(rate_per_second(10, YEAR).unwrap(), 0);
        assert_eq!(rate_per_second(2 * YEAR as u64 + 1, YEAR).unwrap(), 2);
        assert!(rate_per_second(1, 0).is_err());
    }

    #[test]
    fn linear_partial_claim_then_remainder() {
        // rate = 2/sec; half the duration releases half the amount, the
        // claim at end_time releases the rest, totalling the full grant.
        let escrow = 2 * YEAR as u64;
        let mut e = entry(escrow, YEAR, YEAR);
        let first = claim(&mut e, YEAR / 2);
        assert_eq!(first, escrow / 2);
        assert_eq!(e.remaining_amount, escrow / 2);
        let second = claim(&mut e, YEAR);
        assert_eq!(first + second, escrow);
        assert_eq!(e.remaining_amount, 0);
    }

    #[test]
    fn full_duration_flush_is_exact() {
        // Rate floors to 1, so rate * duration underestimates by one unit;
        // the end-time flush still returns the amount exactly.
        let mut e = entry(31_556_927, 31_556_926, 31_556_926);
        assert_eq!(claimable(&e, e.end_time).unwrap(), 31_556_927);
        let end = e.end_time;
        let got = claim(&mut e, end);
        assert_eq!(got, 31_556_927);
        assert_eq!(e.remaining_amount, 0);
    }

    #[test]
    fn tiny_grant_recovers_everything_at_end() {
        // amount <= duration: the rate truncates to zero, nothing vests
        // piecewise, and the whole grant arrives at end_time.
        let mut e = entry(10, YEAR, YEAR);
        assert_eq!(claimable(&e, YEAR / 2).unwrap(), 0);
        assert_eq!(claim(&mut e, YEAR), 10);
    }

    #[test]
    fn repeated_claim_is_idempotent() {
        let escrow = 7 * YEAR as u64;
        let mut e = entry(escrow, YEAR, YEAR);
        let now = YEAR / 3;
        let first = claim(&mut e, now);
        assert!(first > 0);
        // Same instant again: no unclaimed time has elapsed.
        assert_eq!(claimable(&e, now).unwrap(), 0);
        // And after the end flush the entry stays empty forever.
        claim(&mut e, YEAR + 1);
        assert_eq!(claimable(&e, YEAR + 2).unwrap(), 0);
    }

    #[test]
    fn nothing_claimable_before_creation() {
        // Imported historical entry created at t=500 (end 500 + duration).
        let e = entry(1_000_000, 1_000, 1_500);
        assert_eq!(time_since_last_vested(&e, 400), 0);
        assert_eq!(claimable(&e, 400).unwrap(), 0);
    }

    #[test]
    fn elapsed_never_counts_past_end_time() {
        let e = entry(1_000_000, 1_000, 1_000);
        assert_eq!(time_since_last_vested(&e, 5_000), 1_000);
        let mut e2 = e;
        e2.last_vested = 600;
        assert_eq!(time_since_last_vested(&e2, 5_000), 400);
    }

    #[test]
    fn sequential_claims_conserve_escrow() {
        // Claims at scattered points sum exactly to the original amount
        // once the schedule ends, with remaining monotonically decreasing.
        let escrow = 31_556_927;
        let d = 31_556_926;
        let mut e = entry(escrow, d, d);
        let mut total = 0u64;
        let mut prev_remaining = e.remaining_amount;
        for now in [d / 7, d / 3, d / 2, 2 * d / 3, d] {
            let c = claim(&mut e, now);
            total += c;
            assert!(e.remaining_amount <= prev_remaining);
            prev_remaining = e.remaining_amount;
        }
        assert_eq!(total, escrow);
        assert_eq!(e.remaining_amount, 0);
    }

    #[test]
    fn grant_bounds() {
        assert!(validate_grant(1, 1).is_ok());
        assert!(validate_grant(0, 100).is_err());
        assert!(validate_grant(100, 0).is_err());
        assert!(validate_grant(100, -5).is_err());
        assert!(validate_grant(100, MAX_ESCROW_DURATION).is_ok());
        assert!(validate_grant(100, MAX_ESCROW_DURATION + 1).is_err());
    }
}
