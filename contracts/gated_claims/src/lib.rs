//! # Gated Claims
//!
//! The claim protocol shared by the guild-gated reward contracts
//! (`gated_distributor` and `gated_nft`). A claim is a two-step exchange
//! with an off-chain oracle operator:
//!
//! | Step        | Contract side                                   | Module        |
//! |-------------|-------------------------------------------------|---------------|
//! | Initiation  | window + ledger guards, oracle request          | [`window`], [`ledger`], [`oracle`] |
//! | Fulfillment | consume the pending request, decode the answer  | [`oracle`], [`response`] |
//! | Settlement  | mark the ledger, issue the reward               | [`ledger`] + the contract |
//!
//! ```text
//! claim ──► Pending ──► fulfill_claim(ACCESS)    ──► Fulfilled (ledger set)
//!              └───────► fulfill_claim(NO_ACCESS) ──► aborted, still Pending
//! ```
//!
//! This crate holds no `#[contract]` of its own (apart from the mocks
//! behind the `testutils` feature). Every helper must run inside the
//! calling contract's frame, it reads and writes that contract's storage.

#![no_std]

use soroban_sdk::contracterror;

pub mod events;
pub mod ledger;
pub mod oracle;
pub mod ownership;
pub mod response;
pub mod storage;
pub mod types;
pub mod window;

#[cfg(any(test, feature = "testutils"))]
pub mod invariants;
#[cfg(any(test, feature = "testutils"))]
pub mod testutils;


pub use response::AccessResponse;
pub use types::{AccessCheckParams, AccessConfig, OracleConfig, PendingClaim};

/// Errors surfaced by both gated reward contracts.
///
/// Codes are part of the public interface; never renumber.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidParameters = 3,
    Unauthorized = 4,
    DistributionEnded = 5,
    AlreadyClaimed = 6,
    NoAccess = 7,
    AccessCheckFailed = 8,
    RequestNotPending = 9,
    OutOfTokens = 10,
    TokenIdOutOfBounds = 11,
    TransferFailed = 12,
    AlreadyWithdrawn = 13,
    DistributionOngoing = 14,
    MaxSupplyZero = 15,
    NonExistentToken = 16,
    Overflow = 17,
    NotTokenOwner = 18,
}
