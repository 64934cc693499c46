//! # Types
//!
//! Data shared between the claim protocol modules and both contracts.
//!
//! Configuration ([`OracleConfig`], [`AccessConfig`]) is written once by
//! `init` and never mutated. [`PendingClaim`] is the only per-request
//! record; it lives from `claim` until the oracle's answer is accepted.

use soroban_sdk::{contracttype, Address, BytesN, String};

/// How to reach the oracle operator and what to pay it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OracleConfig {
    /// Operator contract receiving requests and delivering answers.
    pub operator: Address,
    /// Token the request fee is paid in.
    pub fee_token: Address,
    /// Operator-side job that runs the guild role check.
    pub job_id: BytesN<32>,
    /// Fee paid per request, in `fee_token` units. Zero disables payment.
    pub fee: i128,
}

/// The access predicate every claim is checked against.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessConfig {
    pub guild_id: String,
    pub rewarded_role: String,
    pub oracle: OracleConfig,
}

/// Parameters of a single role-membership check, sent to the operator.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessCheckParams {
    pub claimant: Address,
    pub guild_id: String,
    pub role_id: String,
}

/// Context of an oracle request that has not been answered yet.
///
/// Keyed by request id. There is no expiry: an unanswered request stays
/// here until the operator delivers a response.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingClaim {
    pub claimant: Address,
    pub claim_index: u32,
    /// Operator expected to deliver the answer.
    pub oracle: Address,
    pub requested_at: u64,
}
