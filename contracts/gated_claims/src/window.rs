//! # Distribution window
//!
//! New claims may only be initiated while `now < end`; the leftover
//! balance may only be swept once `now >= end`. Fulfillment of requests
//! that are already pending never consults the window.
//!
//! `end` only ever grows: the owner may prolong it by a relative amount,
//! there is no way to set an absolute (possibly lower) value.

use soroban_sdk::{log, Env};

use crate::events;
use crate::storage::{bump_instance, DataKey};
use crate::Error;

/// Open the window at the current ledger time for `duration` seconds.
pub fn init_window(env: &Env, duration: u64) -> Result<u64, Error> {
    if duration == 0 {
        return Err(Error::InvalidParameters);
    }
    let end = env
        .ledger()
        .timestamp()
        .checked_add(duration)
        .ok_or(Error::Overflow)?;
    env.storage().instance().set(&DataKey::DistEnd, &end);
    bump_instance(env);
    Ok(end)
}

pub fn distribution_end(env: &Env) -> Result<u64, Error> {
    env.storage()
        .instance()
        .get(&DataKey::DistEnd)
        .ok_or(Error::NotInitialized)
}

/// Guard for claim initiation.
pub fn require_open(env: &Env) -> Result<(), Error> {
    let now = env.ledger().timestamp();
    let end = distribution_end(env)?;
    if now >= end {
        log!(env, "distribution ended", now, end);
        return Err(Error::DistributionEnded);
    }
    Ok(())
}

/// Guard for the post-distribution sweep.
pub fn require_closed(env: &Env) -> Result<(), Error> {
    let now = env.ledger().timestamp();
    let end = distribution_end(env)?;
    if now < end {
        log!(env, "distribution ongoing", now, end);
        return Err(Error::DistributionOngoing);
    }
    Ok(())
}

/// Push the end back by `additional_seconds`. Returns the new end.
///
/// The caller must already have passed the owner check.
pub fn prolong(env: &Env, additional_seconds: u64) -> Result<u64, Error> {
    let end = distribution_end(env)?;
    let new_end = end
        .checked_add(additional_seconds)
        .ok_or(Error::Overflow)?;
    env.storage().instance().set(&DataKey::DistEnd, &new_end);
    bump_instance(env);
    events::emit_distribution_prolonged(env, new_end);
    Ok(new_end)
}
