//! # Storage
//!
//! Distributor-specific entries. Everything else (owner, window, oracle
//! configuration, ledger, pending requests) lives under
//! `gated_claims::storage::DataKey`.
//!
//! | Key      | Tier     | Type           | Description                     |
//! |----------|----------|----------------|---------------------------------|
//! | `Reward` | Instance | `RewardConfig` | Reward token and per-claim amount |

use gated_claims::storage::bump_instance;
use gated_claims::Error;
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DistributorKey {
    Reward,
}

/// Immutable after `init`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardConfig {
    pub token: Address,
    pub amount: i128,
}

pub fn save_reward(env: &Env, reward: &RewardConfig) {
    env.storage().instance().set(&DistributorKey::Reward, reward);
    bump_instance(env);
}

pub fn load_reward(env: &Env) -> Result<RewardConfig, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DistributorKey::Reward)
        .ok_or(Error::NotInitialized)
}
