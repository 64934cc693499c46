//! # Storage
//!
//! NFT-specific entries. The claim protocol state (owner, oracle
//! configuration, ledger, pending requests) lives under
//! `gated_claims::storage::DataKey`, so variant names here must stay
//! distinct from it.
//!
//! ## Instance storage
//!
//! | Key           | Type          | Description                         |
//! |---------------|---------------|-------------------------------------|
//! | `Metadata`    | `NftMetadata` | Name, symbol and content id         |
//! | `MaxSupply`   | `u32`         | Hard cap on minted tokens           |
//! | `TotalSupply` | `u32`         | Tokens minted so far, next id       |
//!
//! ## Persistent storage
//!
//! | Key                  | Type      | Description           |
//! |----------------------|-----------|-----------------------|
//! | `TokenOwner(id)`     | `Address` | Current holder        |
//! | `TokenBalance(addr)` | `u32`     | Tokens held by `addr` |

use gated_claims::storage::{bump_instance, bump_persistent};
use gated_claims::Error;
use soroban_sdk::{contracttype, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NftKey {
    Metadata,
    MaxSupply,
    TotalSupply,
    TokenOwner(u32),
    TokenBalance(Address),
}

/// Immutable after `init`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NftMetadata {
    pub name: String,
    pub symbol: String,
    /// IPFS content id of the metadata folder.
    pub cid: String,
}

// ── Collection ───────────────────────────────────────────────────────

pub fn save_metadata(env: &Env, metadata: &NftMetadata) {
    env.storage().instance().set(&NftKey::Metadata, metadata);
    bump_instance(env);
}

pub fn load_metadata(env: &Env) -> Result<NftMetadata, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&NftKey::Metadata)
        .ok_or(Error::NotInitialized)
}

pub fn save_max_supply(env: &Env, max_supply: u32) {
    env.storage().instance().set(&NftKey::MaxSupply, &max_supply);
    bump_instance(env);
}

pub fn load_max_supply(env: &Env) -> Result<u32, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&NftKey::MaxSupply)
        .ok_or(Error::NotInitialized)
}

pub fn total_supply(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&NftKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, total: u32) {
    env.storage().instance().set(&NftKey::TotalSupply, &total);
    bump_instance(env);
}

// ── Tokens ───────────────────────────────────────────────────────────

pub fn token_owner(env: &Env, token_id: u32) -> Option<Address> {
    let key = NftKey::TokenOwner(token_id);
    let owner: Option<Address> = env.storage().persistent().get(&key);
    if owner.is_some() {
        bump_persistent(env, &key);
    }
    owner
}

pub fn set_token_owner(env: &Env, token_id: u32, owner: &Address) {
    let key = NftKey::TokenOwner(token_id);
    env.storage().persistent().set(&key, owner);
    bump_persistent(env, &key);
}

pub fn balance(env: &Env, holder: &Address) -> u32 {
    let key = NftKey::TokenBalance(holder.clone());
    let balance: Option<u32> = env.storage().persistent().get(&key);
    match balance {
        Some(b) => {
            bump_persistent(env, &key);
            b
        }
        None => 0,
    }
}

pub fn set_balance(env: &Env, holder: &Address, balance: u32) {
    let key = NftKey::TokenBalance(holder.clone());
    env.storage().persistent().set(&key, &balance);
    bump_persistent(env, &key);
}
