//! # Access-check oracle client
//!
//! Outbound half of the claim protocol. A request carries the claimant,
//! the configured guild id and role id, and is paid for with the
//! configured fee. The operator answers later by invoking
//! [`FULFILL_FN`] on the requesting contract.
//!
//! Requests are tracked by an opaque 32-byte id derived from the contract
//! address and a per-contract nonce, so ids never repeat. Each pending
//! entry is consumed exactly once by [`consume_request`]; the operator's
//! own single-fulfillment guarantee is trusted but not relied upon.

use soroban_sdk::{
    contractclient, token, xdr::ToXdr, Address, Bytes, BytesN, Env, Symbol,
};

use crate::events;
use crate::storage;
use crate::types::{AccessCheckParams, PendingClaim};
use crate::Error;

/// Entry point the operator calls back with `(request_id, response)`.
pub const FULFILL_FN: &str = "fulfill_claim";

/// Interface of the oracle operator contract.
#[contractclient(name = "OracleOperatorClient")]
pub trait OracleOperator {
    /// Accept a request. `payment` has already been transferred to the
    /// operator in the configured fee token.
    fn oracle_request(
        env: Env,
        sender: Address,
        payment: i128,
        request_id: BytesN<32>,
        callback: Address,
        callback_fn: Symbol,
        job_id: BytesN<32>,
        params: AccessCheckParams,
    );
}

fn derive_request_id(env: &Env, nonce: u64) -> BytesN<32> {
    let mut preimage = Bytes::new(env);
    preimage.append(&env.current_contract_address().to_xdr(env));
    preimage.append(&nonce.to_xdr(env));
    env.crypto().sha256(&preimage).into()
}

/// Submit a role-membership check for `claimant` and record it as pending.
///
/// Returns the request id. Any failure (fee transfer, operator call)
/// aborts the whole invocation; there is no retry at this layer.
pub fn request_access_check(
    env: &Env,
    claimant: &Address,
    claim_index: u32,
) -> Result<BytesN<32>, Error> {
    let config = storage::load_access_config(env)?;
    let oracle = config.oracle;
    let this = env.current_contract_address();
    let request_id = derive_request_id(env, storage::next_request_nonce(env));

    // Written in the same invocation as the operator request; if either
    // fails, neither persists.
    let pending = PendingClaim {
        claimant: claimant.clone(),
        claim_index,
        oracle: oracle.operator.clone(),
        requested_at: env.ledger().timestamp(),
    };
    storage::save_pending(env, &request_id, &pending);

    if oracle.fee > 0 {
        token::Client::new(env, &oracle.fee_token).transfer(&this, &oracle.operator, &oracle.fee);
    }

    let params = AccessCheckParams {
        claimant: claimant.clone(),
        guild_id: config.guild_id,
        role_id: config.rewarded_role,
    };
    OracleOperatorClient::new(env, &oracle.operator).oracle_request(
        &this,
        &oracle.fee,
        &request_id,
        &this,
        &Symbol::new(env, FULFILL_FN),
        &oracle.job_id,
        &params,
    );

    events::emit_oracle_requested(env, request_id.clone(), oracle.operator, oracle.fee);
    Ok(request_id)
}

/// Take a pending request out of the table.
///
/// Fails with `Error::RequestNotPending` for ids that were never issued or
/// were already fulfilled. Requires the authorization of the operator the
/// request was sent to.
pub fn consume_request(env: &Env, request_id: &BytesN<32>) -> Result<PendingClaim, Error> {
    let pending = storage::load_pending(env, request_id).ok_or(Error::RequestNotPending)?;
    pending.oracle.require_auth();
    storage::remove_pending(env, request_id);
    Ok(pending)
}

pub fn pending_claim(env: &Env, request_id: &BytesN<32>) -> Option<PendingClaim> {
    storage::load_pending(env, request_id)
}
