//! # Claim ledger
//!
//! Records which `(claimant, claim_index)` slots have been paid out.
//! An entry flips to `true` once and is never reset.
//!
//! The double-claim guard has two halves and both are required:
//! [`require_unclaimed`] rejects new requests for a settled slot, and
//! [`mark_claimed`] rejects settlement of a slot that another pending
//! request already settled. Without the second half a claimant could open
//! many requests before the first one is answered.

use soroban_sdk::{Address, Env};

use crate::storage;
use crate::Error;

pub fn has_claimed(env: &Env, claimant: &Address, claim_index: u32) -> bool {
    storage::is_claimed(env, claimant, claim_index)
}

pub fn require_unclaimed(env: &Env, claimant: &Address, claim_index: u32) -> Result<(), Error> {
    if has_claimed(env, claimant, claim_index) {
        return Err(Error::AlreadyClaimed);
    }
    Ok(())
}

/// Settle a slot. A second call for the same key is a protocol violation
/// (replay or a misbehaving oracle) and fails instead of being a no-op.
pub fn mark_claimed(env: &Env, claimant: &Address, claim_index: u32) -> Result<(), Error> {
    require_unclaimed(env, claimant, claim_index)?;
    storage::set_claimed(env, claimant, claim_index);
    Ok(())
}
