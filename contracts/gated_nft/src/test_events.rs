extern crate std;

use gated_claims::events::{ClaimRequested, Claimed, HasAccess};
use gated_claims::response::{encode, ACCESS};
use gated_claims::testutils::{MockOperator, MockOperatorClient};
use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, BytesN, Env, IntoVal, String, Symbol, TryFromVal, TryIntoVal, Val,
    Vec as SorobanVec,
};

use crate::{GatedNft, GatedNftClient, NftTransferred, OracleConfig};

fn setup() -> (Env, GatedNftClient<'static>, MockOperatorClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    let operator = env.register(MockOperator, ());
    let client = GatedNftClient::new(&env, &env.register(GatedNft, ()));
    client.init(
        &Address::generate(&env),
        &String::from_str(&env, "Guild Pin"),
        &String::from_str(&env, "GPIN"),
        &String::from_str(&env, "QmCid"),
        &3,
        &String::from_str(&env, "1985"),
        &String::from_str(&env, "1904"),
        &OracleConfig {
            operator: operator.clone(),
            fee_token: Address::generate(&env),
            job_id: BytesN::from_array(&env, &[0xf7u8; 32]),
            fee: 0,
        },
    );
    let operator = MockOperatorClient::new(&env, &operator);
    (env, client, operator)
}

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
    let (env, client, _) = setup();
    let claimant = Address::generate(&env);
    client.claim(&claimant, &2);

    let (_, data) = find_event(&env, &client.address, symbol_short!("claim_req")).expect("no claim_req event");
    let event_data: ClaimRequested = data.try_into_val(&env).unwrap();
    assert_eq!(event_data, ClaimRequested { claimant, claim_index: 2 });
}

#[test]
fn test_mint_emits_transfer_and_claimed() {
    let (env, client, operator) = setup();
    let claimant = Address::generate(&env);
    let request_id = client.claim(&claimant, &5);
    operator.fulfill_oracle_request(&request_id, &encode(&env, ACCESS));

    let (topics, data) = find_event(&env, &client.address, symbol_short!("access")).expect("no access event");
    let expected_topics = vec![&env, symbol_short!("access").into_val(&env), claimant.into_val(&env)];
    assert_eq!(topics, expected_topics);
    let event_data: HasAccess = data.try_into_val(&env).unwrap();
    assert_eq!(event_data, HasAccess { claimant: claimant.clone() });

    let (topics, data) = find_event(&env, &client.address, symbol_short!("transfer")).expect("no transfer event");
    let expected_topics = vec![&env, symbol_short!("transfer").into_val(&env), claimant.into_val(&env)];
    assert_eq!(topics, expected_topics);
    let event_data: NftTransferred = data.try_into_val(&env).unwrap();
    assert_eq!(event_data, NftTransferred { from: None, to: claimant.clone(), token_id: 0 });

    let (_, data) = find_event(&env, &client.address, symbol_short!("claimed")).expect("no claimed event");
    let event_data: Claimed = data.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Claimed { claimant, claim_index: 5, token_id: Some(0) }
    );
}

#[test]
fn test_transfer_event() {
    let (env, client, operator) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let request_id = client.claim(&alice, &0);
    operator.fulfill_oracle_request(&request_id, &encode(&env, ACCESS));

    client.transfer(&alice, &bob, &0);
    let (_, data) = find_event(&env, &client.address, symbol_short!("transfer")).expect("no transfer event");
    let event_data: NftTransferred = data.try_into_val(&env).unwrap();
    assert_eq!(event_data, NftTransferred { from: Some(alice), to: bob, token_id: 0 });
}
