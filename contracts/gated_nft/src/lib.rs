//! # Gated NFT Contract
//!
//! Mints one token per granted `(claimant, claim_index)` to members of a
//! guild role, up to a fixed max supply. Token ids are sequential from 0
//! and independent of the claim index.
//!
//! | Phase        | Entry Point(s)                                  |
//! |--------------|-------------------------------------------------|
//! | Bootstrap    | [`GatedNft::init`]                              |
//! | Claiming     | [`GatedNft::claim`]                             |
//! | Oracle answer| [`GatedNft::fulfill_claim`] (mints)             |
//! | Token        | `transfer`, `owner_of`, `balance_of`, `token_uri` |
//! | Owner        | `transfer_ownership`                            |
//!
//! Unlike the fungible distributor there is no distribution window: the
//! max supply is the only bound on claiming.

#![no_std]

use gated_claims::{events, ledger, oracle, ownership, response};
use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, String};

mod nft_events;
mod storage;
mod uri;

#[cfg(test)]
mod test_events;

pub use gated_claims::{AccessConfig, Error, OracleConfig, PendingClaim};
pub use nft_events::NftTransferred;
pub use storage::NftMetadata;

#[contract]
pub struct GatedNft;

#[contractimpl]
impl GatedNft {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Configure the collection. Must be called exactly once.
    ///
    /// `cid` is the IPFS folder holding `{token_id}.json` metadata files.
    pub fn init(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
        cid: String,
        max_supply: u32,
        guild_id: String,
        rewarded_role: String,
        oracle: OracleConfig,
    ) -> Result<(), Error> {
        owner.require_auth();
        if gated_claims::storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        if max_supply == 0 {
            return Err(Error::MaxSupplyZero);
        }
        if !uri::is_valid_cid(&cid)
            || oracle.fee < 0
            || guild_id.len() == 0
            || rewarded_role.len() == 0
        {
            return Err(Error::InvalidParameters);
        }

        ownership::init_owner(&env, &owner)?;
        gated_claims::storage::save_access_config(
            &env,
            &AccessConfig {
                guild_id,
                rewarded_role,
                oracle,
            },
        );
        storage::save_metadata(&env, &NftMetadata { name, symbol, cid });
        storage::save_max_supply(&env, max_supply);
        storage::set_total_supply(&env, 0);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Claim protocol
    // ─────────────────────────────────────────────────────────

    /// Ask the oracle whether `claimant` holds the rewarded role.
    ///
    /// Fails fast when the slot is settled or the collection is sold out.
    pub fn claim(env: Env, claimant: Address, claim_index: u32) -> Result<BytesN<32>, Error> {
        claimant.require_auth();
        ledger::require_unclaimed(&env, &claimant, claim_index)?;
        Self::require_mintable(&env)?;

        let request_id = oracle::request_access_check(&env, &claimant, claim_index)?;
        events::emit_claim_requested(&env, claimant, claim_index);
        Ok(request_id)
    }

    /// Oracle callback. Mints the next token id when access is granted.
    ///
    /// Supply is checked again here: several requests may have been opened
    /// while one token was left.
    pub fn fulfill_claim(
        env: Env,
        request_id: BytesN<32>,
        answer: BytesN<32>,
    ) -> Result<(), Error> {
        let pending = oracle::consume_request(&env, &request_id)?;
        response::verify_access(&env, &pending.claimant, &answer)?;
        let token_id = Self::require_mintable(&env)?;

        ledger::mark_claimed(&env, &pending.claimant, pending.claim_index)?;
        Self::mint(&env, &pending.claimant, token_id)?;
        events::emit_claimed(&env, pending.claimant, pending.claim_index, Some(token_id));
        Ok(())
    }

    pub fn has_claimed(env: Env, claimant: Address, claim_index: u32) -> bool {
        ledger::has_claimed(&env, &claimant, claim_index)
    }

    pub fn pending_claim(env: Env, request_id: BytesN<32>) -> Option<PendingClaim> {
        oracle::pending_claim(&env, &request_id)
    }

    // ─────────────────────────────────────────────────────────
    // Token surface
    // ─────────────────────────────────────────────────────────

    pub fn name(env: Env) -> Result<String, Error> {
        Ok(storage::load_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        Ok(storage::load_metadata(&env)?.symbol)
    }

    pub fn max_supply(env: Env) -> Result<u32, Error> {
        storage::load_max_supply(&env)
    }

    pub fn total_supply(env: Env) -> u32 {
        storage::total_supply(&env)
    }

    pub fn balance_of(env: Env, holder: Address) -> u32 {
        storage::balance(&env, &holder)
    }

    pub fn owner_of(env: Env, token_id: u32) -> Result<Address, Error> {
        Self::require_minted(&env, token_id)
    }

    /// Metadata location of a minted token.
    pub fn token_uri(env: Env, token_id: u32) -> Result<String, Error> {
        Self::require_minted(&env, token_id)?;
        let metadata = storage::load_metadata(&env)?;
        Ok(uri::token_uri(&env, &metadata.cid, token_id))
    }

    /// Move `token_id` from `from` to `to`. `from` must authorize and hold it.
    pub fn transfer(env: Env, from: Address, to: Address, token_id: u32) -> Result<(), Error> {
        from.require_auth();
        let holder = Self::require_minted(&env, token_id)?;
        if holder != from {
            log!(&env, "not token owner", token_id, from);
            return Err(Error::NotTokenOwner);
        }
        if from == to {
            return Ok(());
        }

        let from_balance = storage::balance(&env, &from)
            .checked_sub(1)
            .ok_or(Error::Overflow)?;
        let to_balance = storage::balance(&env, &to)
            .checked_add(1)
            .ok_or(Error::Overflow)?;
        storage::set_balance(&env, &from, from_balance);
        storage::set_balance(&env, &to, to_balance);
        storage::set_token_owner(&env, token_id, &to);

        nft_events::emit_transfer(&env, Some(from), to, token_id);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Owner operations and configuration queries
    // ─────────────────────────────────────────────────────────

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        caller.require_auth();
        ownership::transfer_ownership(&env, &caller, &new_owner)
    }

    pub fn owner(env: Env) -> Option<Address> {
        ownership::get_owner(&env)
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

    /// Returns the id the next mint would use.
    fn require_mintable(env: &Env) -> Result<u32, Error> {
        let max_supply = storage::load_max_supply(env)?;
        let next_id = storage::total_supply(env);
        if next_id >= max_supply {
            log!(env, "token id out of bounds", next_id, max_supply);
            return Err(Error::TokenIdOutOfBounds);
        }
        Ok(next_id)
    }

    fn require_minted(env: &Env, token_id: u32) -> Result<Address, Error> {
        storage::token_owner(env, token_id).ok_or_else(|| {
            log!(env, "nonexistent token", token_id);
            Error::NonExistentToken
        })
    }

    fn mint(env: &Env, to: &Address, token_id: u32) -> Result<(), Error> {
        let total = token_id.checked_add(1).ok_or(Error::Overflow)?;
        let balance = storage::balance(env, to)
            .checked_add(1)
            .ok_or(Error::Overflow)?;
        storage::set_token_owner(env, token_id, to);
        storage::set_balance(env, to, balance);
        storage::set_total_supply(env, total);

        nft_events::emit_transfer(env, None, to.clone(), token_id);
        Ok(())
    }
}
