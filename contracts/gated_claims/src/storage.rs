//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by the claim
//! protocol.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key             | Type            | Description                          |
//! |-----------------|-----------------|--------------------------------------|
//! | `Owner`         | `Address`       | Privileged operator                  |
//! | `AccessCfg`     | `AccessConfig`  | Guild, role and oracle configuration |
//! | `DistEnd`       | `u64`           | Distribution window end (timestamp)  |
//! | `RequestNonce`  | `u64`           | Seed for the next request id         |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                    | Type           | Description               |
//! |------------------------|----------------|---------------------------|
//! | `Pending(request_id)`  | `PendingClaim` | Unanswered oracle request |
//! | `Claimed(addr, index)` | `bool`         | Claim ledger entry        |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! Contracts built on this crate keep their own key enums; variant names
//! must not collide with [`DataKey`] since both serialize to the same
//! `(Symbol, ..)` shape.

use soroban_sdk::{contracttype, Address, BytesN, Env, IntoVal, Val};

use crate::types::{AccessConfig, PendingClaim};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    AccessCfg,
    DistEnd,
    RequestNonce,
    Pending(BytesN<32>),
    Claimed(Address, u32),
}

// ── TTL Helpers ──────────────────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Extend the TTL of a persistent entry. Accepts any key type so the
/// contracts can reuse the same policy for their own entries.
pub fn bump_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ── Configuration ────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::AccessCfg)
}

pub fn save_access_config(env: &Env, config: &AccessConfig) {
    env.storage().instance().set(&DataKey::AccessCfg, config);
    bump_instance(env);
}

pub fn load_access_config(env: &Env) -> Result<AccessConfig, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::AccessCfg)
        .ok_or(Error::NotInitialized)
}

// ── Request nonce ────────────────────────────────────────────────────

/// Read and increment the request nonce. Returns the value to use now.
pub fn next_request_nonce(env: &Env) -> u64 {
    bump_instance(env);
    let current: u64 = env
        .storage()
        .instance()
        .get(&DataKey::RequestNonce)
        .unwrap_or(0);
    env.storage()
        .instance()
        .set(&DataKey::RequestNonce, &(current + 1));
    current
}

// ── Pending requests ─────────────────────────────────────────────────

pub fn save_pending(env: &Env, request_id: &BytesN<32>, pending: &PendingClaim) {
    let key = DataKey::Pending(request_id.clone());
    env.storage().persistent().set(&key, pending);
    bump_persistent(env, &key);
}

pub fn load_pending(env: &Env, request_id: &BytesN<32>) -> Option<PendingClaim> {
    let key = DataKey::Pending(request_id.clone());
    let pending: Option<PendingClaim> = env.storage().persistent().get(&key);
    if pending.is_some() {
        bump_persistent(env, &key);
    }
    pending
}

pub fn remove_pending(env: &Env, request_id: &BytesN<32>) {
    env.storage()
        .persistent()
        .remove(&DataKey::Pending(request_id.clone()));
}

// ── Claim ledger ─────────────────────────────────────────────────────

pub fn is_claimed(env: &Env, claimant: &Address, claim_index: u32) -> bool {
    let key = DataKey::Claimed(claimant.clone(), claim_index);
    let claimed = env.storage().persistent().get(&key).unwrap_or(false);
    if claimed {
        bump_persistent(env, &key);
    }
    claimed
}

pub fn set_claimed(env: &Env, claimant: &Address, claim_index: u32) {
    let key = DataKey::Claimed(claimant.clone(), claim_index);
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}
