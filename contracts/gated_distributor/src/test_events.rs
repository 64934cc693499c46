extern crate std;

use gated_claims::events::{ClaimRequested, Claimed, DistributionProlonged, HasAccess, OracleRequested, Withdrawn};
use gated_claims::response::{encode, ACCESS};
use gated_claims::testutils::{MockOperator, MockOperatorClient};
use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, BytesN, Env, IntoVal, String, Symbol, TryFromVal, TryIntoVal, Val,
    Vec as SorobanVec,
};

use crate::{GatedDistributor, GatedDistributorClient, OracleConfig};

const REWARD: i128 = 1_000;
const DURATION: u64 = 86_400;

fn setup() -> (Env, GatedDistributorClient<'static>, MockOperatorClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let owner = Address::generate(&env);
    let token_addr = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let operator = env.register(MockOperator, ());
    let client = GatedDistributorClient::new(&env, &env.register(GatedDistributor, ()));
    client.init(
        &owner,
        &token_addr,
        &REWARD,
        &DURATION,
        &String::from_str(&env, "1985"),
        &String::from_str(&env, "1904"),
        &OracleConfig {
            operator: operator.clone(),
            fee_token: token_addr.clone(),
            job_id: BytesN::from_array(&env, &[0xf7u8; 32]),
            fee: 0,
        },
    );
    token::StellarAssetClient::new(&env, &token_addr).mint(&client.address, &(REWARD * 2));
    let operator = MockOperatorClient::new(&env, &operator);
    (env, client, operator, owner)
}

/// Last event published by `contract` whose first topic is `name`.
fn find_event(env: &Env, contract: &Address, name: Symbol) -> Option<(SorobanVec<Val>, Val)> {
    let mut found = None;
    for (addr, topics, data) in env.events().all().iter() {
        if addr != *contract {
            continue;
        }
        let Some(first) = topics.get(0) else { continue };
        if let Ok(sym) = Symbol::try_from_val(env, &first) {
            if sym == name {
                found = Some((topics, data));
            }
        }
    }
    found
}

#[test]
fn test_claim_requested_event() {
    let (env, client, operator, _) = setup();
    let claimant = Address::generate(&env);
    let request_id = client.claim(&claimant, &0);

    let (topics, data) = find_event(&env, &client.address, symbol_short!("claim_req")).expect("no claim_req event");
    let expected_topics = vec![&env, symbol_short!("claim_req").into_val(&env), claimant.into_val(&env)];
    assert_eq!(topics, expected_topics);
    let event_data: ClaimRequested = data.try_into_val(&env).unwrap();
    assert_eq!(event_data, ClaimRequested { claimant: claimant.clone(), claim_index: 0 });

    let (_, data) = find_event(&env, &client.address, symbol_short!("oracle_rq")).expect("no oracle_rq event");
    let event_data: OracleRequested = data.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        OracleRequested { request_id, operator: operator.address.clone(), fee: 0 }
    );
}

#[test]
fn test_has_access_and_claimed_events() {
    let (env, client, operator, _) = setup();
    let claimant = Address::generate(&env);
    let request_id = client.claim(&claimant, &3);
    operator.fulfill_oracle_request(&request_id, &encode(&env, ACCESS));

    let (_, data) = find_event(&env, &client.address, symbol_short!("access")).expect("no access event");
    let event_data: HasAccess = data.try_into_val(&env).unwrap();
    assert_eq!(event_data, HasAccess { claimant: claimant.clone() });

    let (topics, data) = find_event(&env, &client.address, symbol_short!("claimed")).expect("no claimed event");
    let expected_topics = vec![&env, symbol_short!("claimed").into_val(&env), claimant.into_val(&env)];
    assert_eq!(topics, expected_topics);
    let event_data: Claimed = data.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Claimed { claimant: claimant.clone(), claim_index: 3, token_id: None }
    );
}

#[test]
fn test_distribution_prolonged_event() {
    let (env, client, _, owner) = setup();
    let new_end = client.prolong_distribution_period(&owner, &99);

    let (_, data) = find_event(&env, &client.address, symbol_short!("prolonged")).expect("no prolonged event");
    let event_data: DistributionProlonged = data.try_into_val(&env).unwrap();
    assert_eq!(event_data, DistributionProlonged { new_end });
    assert_eq!(new_end, client.distribution_end());
}

#[test]
fn test_withdrawn_event() {
    let (env, client, _, owner) = setup();
    env.ledger().with_mut(|li| li.timestamp += DURATION + 1);
    let recipient = Address::generate(&env);
    client.withdraw(&owner, &recipient);

    let (_, data) = find_event(&env, &client.address, symbol_short!("withdrawn")).expect("no withdrawn event");
    let event_data: Withdrawn = data.try_into_val(&env).unwrap();
    assert_eq!(event_data, Withdrawn { recipient, amount: REWARD * 2 });
}
