//! Test doubles for the contracts built on this crate.
//!
//! - [`MockOperator`] plays the oracle operator: it records requests and
//!   lets a test deliver an answer, which it forwards to the requesting
//!   contract's callback. Like a real operator it refuses to answer an
//!   unknown or already answered request.
//! - [`MockBadToken`] is a non-compliant token whose transfers always fail.
//! - [`assert_logged`] checks the values a rejection wrote with `log!`.

extern crate std;

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, testutils::Logs, vec, Address, BytesN,
    Env, IntoVal, Symbol, Val,
};

use crate::types::AccessCheckParams;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockError {
    InvalidRequestId = 1,
    TransferRejected = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Commitment {
    pub callback: Address,
    pub callback_fn: Symbol,
    pub job_id: BytesN<32>,
    pub payment: i128,
    pub params: AccessCheckParams,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum OperatorKey {
    Commitment(BytesN<32>),
    LastRequest,
    RequestCount,
}

#[contract]
pub struct MockOperator;

#[contractimpl]
impl MockOperator {
    #[allow(clippy::too_many_arguments)]
    pub fn oracle_request(
        env: Env,
        sender: Address,
        payment: i128,
        request_id: BytesN<32>,
        callback: Address,
        callback_fn: Symbol,
        job_id: BytesN<32>,
        params: AccessCheckParams,
    ) {
        sender.require_auth();
        let commitment = Commitment {
            callback,
            callback_fn,
            job_id,
            payment,
            params,
        };
        let store = env.storage().instance();
        store.set(&OperatorKey::Commitment(request_id.clone()), &commitment);
        store.set(&OperatorKey::LastRequest, &request_id);
        let count: u32 = store.get(&OperatorKey::RequestCount).unwrap_or(0);
        store.set(&OperatorKey::RequestCount, &(count + 1));
    }

    /// Deliver `data` for `request_id` to the requester's callback.
    pub fn fulfill_oracle_request(
        env: Env,
        request_id: BytesN<32>,
        data: BytesN<32>,
    ) -> Result<(), MockError> {
        let key = OperatorKey::Commitment(request_id.clone());
        let commitment: Commitment = env
            .storage()
            .instance()
            .get(&key)
            .ok_or(MockError::InvalidRequestId)?;
        env.storage().instance().remove(&key);

        let args = vec![&env, request_id.into_val(&env), data.into_val(&env)];
        env.invoke_contract::<Val>(&commitment.callback, &commitment.callback_fn, args);
        Ok(())
    }

    pub fn commitment(env: Env, request_id: BytesN<32>) -> Option<Commitment> {
        env.storage()
            .instance()
            .get(&OperatorKey::Commitment(request_id))
    }

    pub fn last_request(env: Env) -> Option<BytesN<32>> {
        env.storage().instance().get(&OperatorKey::LastRequest)
    }

    pub fn request_count(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&OperatorKey::RequestCount)
            .unwrap_or(0)
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum BadTokenKey {
    Balance(Address),
}

#[contract]
pub struct MockBadToken;

#[contractimpl]
impl MockBadToken {
    pub fn mint(env: Env, to: Address, amount: i128) {
        let key = BadTokenKey::Balance(to);
        let balance: i128 = env.storage().instance().get(&key).unwrap_or(0);
        env.storage().instance().set(&key, &(balance + amount));
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .instance()
            .get(&BadTokenKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn transfer(_env: Env, _from: Address, _to: Address, _amount: i128) -> Result<(), MockError> {
        Err(MockError::TransferRejected)
    }
}

// ── Diagnostic logs ─────────────────────────────────────────────────

/// Strkey form of `address`, as it appears in diagnostic logs.
pub fn strkey(address: &Address) -> std::string::String {
    let s = address.to_string();
    let mut buf = std::vec![0u8; s.len() as usize];
    s.copy_into_slice(&mut buf);
    std::string::String::from_utf8_lossy(&buf).into_owned()
}

/// Assert some log line contains every fragment of `parts`, in order.
///
/// Fragments are matched left to right, so swapped arguments with
/// different values fail.
pub fn assert_logged(env: &Env, parts: &[&str]) {
    let logs = env.logs().all();
    let found = logs.iter().any(|line| {
        let mut rest = line.as_str();
        parts.iter().all(|part| match rest.find(part) {
            Some(at) => {
                rest = &rest[at + part.len()..];
                true
            }
            None => false,
        })
    });
    assert!(found, "no log line matching {:?} in {:#?}", parts, logs);
}
