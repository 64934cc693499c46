use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimRequested {
    pub claimant: Address,
    pub claim_index: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OracleRequested {
    pub request_id: BytesN<32>,
    pub operator: Address,
    pub fee: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HasAccess {
    pub claimant: Address,
}

/// `token_id` is only set by the NFT variant.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Claimed {
    pub claimant: Address,
    pub claim_index: u32,
    pub token_id: Option<u32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DistributionProlonged {
    pub new_end: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    pub recipient: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    pub previous: Option<Address>,
    pub owner: Address,
}

pub fn emit_claim_requested(env: &Env, claimant: Address, claim_index: u32) {
    let topics = (symbol_short!("claim_req"), claimant.clone());
    let data = ClaimRequested {
        claimant,
        claim_index,
    };
    env.events().publish(topics, data);
}

pub fn emit_oracle_requested(env: &Env, request_id: BytesN<32>, operator: Address, fee: i128) {
    let topics = (symbol_short!("oracle_rq"), request_id.clone());
    let data = OracleRequested {
        request_id,
        operator,
        fee,
    };
    env.events().publish(topics, data);
}

pub fn emit_has_access(env: &Env, claimant: Address) {
    let topics = (symbol_short!("access"), claimant.clone());
    env.events().publish(topics, HasAccess { claimant });
}

pub fn emit_claimed(env: &Env, claimant: Address, claim_index: u32, token_id: Option<u32>) {
    let topics = (symbol_short!("claimed"), claimant.clone());
    let data = Claimed {
        claimant,
        claim_index,
        token_id,
    };
    env.events().publish(topics, data);
}

pub fn emit_distribution_prolonged(env: &Env, new_end: u64) {
    let topics = (symbol_short!("prolonged"),);
    env.events().publish(topics, DistributionProlonged { new_end });
}

pub fn emit_withdrawn(env: &Env, recipient: Address, amount: i128) {
    let topics = (symbol_short!("withdrawn"), recipient.clone());
    env.events().publish(topics, Withdrawn { recipient, amount });
}

pub fn emit_ownership_transferred(env: &Env, previous: Option<Address>, owner: Address) {
    let topics = (symbol_short!("owner_set"), owner.clone());
    env.events().publish(topics, OwnershipTransferred { previous, owner });
}
