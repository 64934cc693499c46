//! # Gated Distributor Contract
//!
//! Hands out a fixed amount of a token to every member of a guild role,
//! once per `(claimant, claim_index)`, during a distribution window.
//! Membership is checked off-chain by an oracle operator.
//!
//! | Phase        | Entry Point(s)                                        |
//! |--------------|-------------------------------------------------------|
//! | Bootstrap    | [`GatedDistributor::init`]                            |
//! | Claiming     | [`GatedDistributor::claim`]                           |
//! | Oracle answer| [`GatedDistributor::fulfill_claim`]                   |
//! | Owner        | `prolong_distribution_period`, `withdraw`, `transfer_ownership` |
//! | Queries      | `has_claimed`, `distribution_end`, `reward_token`, `reward_amount`, ... |
//!
//! ## Architecture
//!
//! The claim protocol (window, ledger, oracle requests, response decoding)
//! comes from [`gated_claims`]. This file wires it to the reward token:
//! balance checks, the payout on a granted answer, and the sweep of the
//! leftover balance once the window is closed.

#![no_std]

use gated_claims::{events, ledger, oracle, ownership, response, window};
use soroban_sdk::{contract, contractimpl, log, token, Address, BytesN, Env, String};

mod storage;

#[cfg(test)]
mod fuzz_test;
#[cfg(test)]
mod test_events;

pub use gated_claims::{AccessConfig, Error, OracleConfig, PendingClaim};
pub use storage::RewardConfig;

#[contract]
pub struct GatedDistributor;

#[contractimpl]
impl GatedDistributor {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Configure the distributor and open the distribution window.
    ///
    /// Must be called exactly once after deployment. The window ends
    /// `distribution_duration` seconds after this call.
    pub fn init(
        env: Env,
        owner: Address,
        reward_token: Address,
        reward_amount: i128,
        distribution_duration: u64,
        guild_id: String,
        rewarded_role: String,
        oracle: OracleConfig,
    ) -> Result<(), Error> {
        owner.require_auth();
        if gated_claims::storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        if reward_amount <= 0 || oracle.fee < 0 || guild_id.len() == 0 || rewarded_role.len() == 0
        {
            return Err(Error::InvalidParameters);
        }

        ownership::init_owner(&env, &owner)?;
        window::init_window(&env, distribution_duration)?;
        gated_claims::storage::save_access_config(
            &env,
            &AccessConfig {
                guild_id,
                rewarded_role,
                oracle,
            },
        );
        storage::save_reward(
            &env,
            &RewardConfig {
                token: reward_token,
                amount: reward_amount,
            },
        );
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Claim protocol
    // ─────────────────────────────────────────────────────────

    /// Ask the oracle whether `claimant` holds the rewarded role.
    ///
    /// `claimant` must authorize. Fails fast when the window is over, the
    /// slot is already settled or the contract cannot cover one reward.
    /// Returns the oracle request id.
    pub fn claim(env: Env, claimant: Address, claim_index: u32) -> Result<BytesN<32>, Error> {
        claimant.require_auth();
        window::require_open(&env)?;
        ledger::require_unclaimed(&env, &claimant, claim_index)?;
        let reward = storage::load_reward(&env)?;
        Self::require_funded(&env, &reward)?;

        let request_id = oracle::request_access_check(&env, &claimant, claim_index)?;
        events::emit_claim_requested(&env, claimant, claim_index);
        Ok(request_id)
    }

    /// Oracle callback. Pays the reward when access is granted.
    ///
    /// Only a pending request can be fulfilled, and only by the operator it
    /// was sent to. Any rejection aborts without touching the ledger.
    pub fn fulfill_claim(
        env: Env,
        request_id: BytesN<32>,
        answer: BytesN<32>,
    ) -> Result<(), Error> {
        let pending = oracle::consume_request(&env, &request_id)?;
        response::verify_access(&env, &pending.claimant, &answer)?;

        let reward = storage::load_reward(&env)?;
        Self::require_funded(&env, &reward)?;

        ledger::mark_claimed(&env, &pending.claimant, pending.claim_index)?;
        events::emit_claimed(&env, pending.claimant.clone(), pending.claim_index, None);
        Self::send(&env, &reward.token, &pending.claimant, reward.amount)
    }

    pub fn has_claimed(env: Env, claimant: Address, claim_index: u32) -> bool {
        ledger::has_claimed(&env, &claimant, claim_index)
    }

    pub fn pending_claim(env: Env, request_id: BytesN<32>) -> Option<PendingClaim> {
        oracle::pending_claim(&env, &request_id)
    }

    // ─────────────────────────────────────────────────────────
    // Owner operations
    // ─────────────────────────────────────────────────────────

    /// Push the distribution end back by `additional_seconds`.
    /// Returns the new end.
    pub fn prolong_distribution_period(
        env: Env,
        caller: Address,
        additional_seconds: u64,
    ) -> Result<u64, Error> {
        caller.require_auth();
        ownership::require_owner(&env, &caller)?;
        window::prolong(&env, additional_seconds)
    }

    /// Sweep the whole remaining balance to `recipient` once the window is
    /// closed.
    pub fn withdraw(env: Env, caller: Address, recipient: Address) -> Result<(), Error> {
        caller.require_auth();
        ownership::require_owner(&env, &caller)?;
        window::require_closed(&env)?;

        let reward = storage::load_reward(&env)?;
        let balance = Self::balance(&env, &reward.token);
        if balance <= 0 {
            return Err(Error::AlreadyWithdrawn);
        }

        Self::send(&env, &reward.token, &recipient, balance)?;
        events::emit_withdrawn(&env, recipient, balance);
        Ok(())
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        caller.require_auth();
        ownership::transfer_ownership(&env, &caller, &new_owner)
    }

    // ─────────────────────────────────────────────────────────
    // Configuration queries
    // ─────────────────────────────────────────────────────────

    pub fn owner(env: Env) -> Option<Address> {
        ownership::get_owner(&env)
    }

    pub fn distribution_end(env: Env) -> Result<u64, Error> {
        window::distribution_end(&env)
    }

    pub fn reward_token(env: Env) -> Result<Address, Error> {
        Ok(storage::load_reward(&env)?.token)
    }

    pub fn reward_amount(env: Env) -> Result<i128, Error> {
        Ok(storage::load_reward(&env)?.amount)
    }

    pub fn guild_id(env: Env) -> Result<String, Error> {
        Ok(gated_claims::storage::load_access_config(&env)?.guild_id)
    }

    pub fn rewarded_role(env: Env) -> Result<String, Error> {
        Ok(gated_claims::storage::load_access_config(&env)?.rewarded_role)
    }

    pub fn oracle_config(env: Env) -> Result<OracleConfig, Error> {
        Ok(gated_claims::storage::load_access_config(&env)?.oracle)
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    fn balance(env: &Env, token: &Address) -> i128 {
        token::Client::new(env, token).balance(&env.current_contract_address())
    }

    fn require_funded(env: &Env, reward: &RewardConfig) -> Result<(), Error> {
        if Self::balance(env, &reward.token) < reward.amount {
            return Err(Error::OutOfTokens);
        }
        Ok(())
    }

    /// Transfer out of the contract. Token failures are caught and
    /// reported as `TransferFailed` instead of trusting the token to abort.
    fn send(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), Error> {
        let from = env.current_contract_address();
        match token::Client::new(env, token).try_transfer(&from, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(env, "transfer failed", token.clone(), from, to.clone());
                Err(Error::TransferFailed)
            }
        }
    }
}
