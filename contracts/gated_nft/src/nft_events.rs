use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// `from` is `None` on mint.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NftTransferred {
    pub from: Option<Address>,
    pub to: Address,
    pub token_id: u32,
}

pub fn emit_transfer(env: &Env, from: Option<Address>, to: Address, token_id: u32) {
    let topics = (symbol_short!("transfer"), to.clone());
    let data = NftTransferred { from, to, token_id };
    env.events().publish(topics, data);
}
