//! # Response validator
//!
//! Decodes the operator's answer. The answer is a single 32-byte
//! big-endian word:
//!
//! | Word          | Meaning                      | Outcome                    |
//! |---------------|------------------------------|----------------------------|
//! | `0`           | claimant lacks the role      | `Error::NoAccess`          |
//! | `1`           | claimant holds the role      | `HasAccess` event, proceed |
//! | anything else | check failed / malformed     | `Error::AccessCheckFailed` |
//!
//! Rejections leave no trace: the invocation aborts, the request stays
//! pending and the ledger is untouched.

use soroban_sdk::{log, Address, BytesN, Env};

use crate::events;
use crate::Error;

pub const NO_ACCESS: u8 = 0;
pub const ACCESS: u8 = 1;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AccessResponse {
    Denied,
    Granted,
    Invalid,
}

impl AccessResponse {
    pub fn decode(word: &BytesN<32>) -> Self {
        let bytes = word.to_array();
        let (high, low) = bytes.split_at(31);
        if high.iter().any(|b| *b != 0) {
            return AccessResponse::Invalid;
        }
        match low[0] {
            NO_ACCESS => AccessResponse::Denied,
            ACCESS => AccessResponse::Granted,
            _ => AccessResponse::Invalid,
        }
    }
}

/// Encode a small code into the response word. Used by operators and tests.
pub fn encode(env: &Env, code: u8) -> BytesN<32> {
    let mut word = [0u8; 32];
    word[31] = code;
    BytesN::from_array(env, &word)
}

/// Accept the answer for `claimant` or fail with the matching error.
pub fn verify_access(env: &Env, claimant: &Address, response: &BytesN<32>) -> Result<(), Error> {
    match AccessResponse::decode(response) {
        AccessResponse::Granted => {
            events::emit_has_access(env, claimant.clone());
            Ok(())
        }
        AccessResponse::Denied => {
            log!(env, "no access", claimant.clone());
            Err(Error::NoAccess)
        }
        AccessResponse::Invalid => {
            log!(env, "access check failed", claimant.clone());
            Err(Error::AccessCheckFailed)
        }
    }
}
