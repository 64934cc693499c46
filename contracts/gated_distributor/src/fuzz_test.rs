extern crate std;
use std::vec::Vec;

use gated_claims::invariants::*;
use gated_claims::response::{encode, ACCESS, NO_ACCESS};
use gated_claims::testutils::{MockOperator, MockOperatorClient};
use proptest::prelude::*;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, BytesN, Env, String,
};

use crate::{Error, GatedDistributor, GatedDistributorClient, OracleConfig};

// ── Helpers ─────────────────────────────────────────────────────────

const REWARD: i128 = 100;
const DURATION: u64 = 86_400;

fn setup_env(
    deposit: i128,
) -> (
    Env,
    GatedDistributorClient<'static>,
    MockOperatorClient<'static>,
    token::Client<'static>,
    Address,
) {
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
            job_id: BytesN::from_array(&env, &[1u8; 32]),
            fee: 0,
        },
    );
    if deposit > 0 {
        token::StellarAssetClient::new(&env, &token_addr).mint(&client.address, &deposit);
    }
    let operator = MockOperatorClient::new(&env, &operator);
    let token = token::Client::new(&env, &token_addr);
    (env, client, operator, token, owner)
}

// ── 1. Window ───────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fuzz_prolong_is_monotonic(
        additions in prop::collection::vec(0u64..=10_000_000u64, 1..=6)
    ) {
        let (_env, client, _, _, owner) = setup_env(0);
        for addition in &additions {
            let before = client.distribution_end();
            let after = client.prolong_distribution_period(&owner, addition);
            assert_window_monotonic(before, after, *addition);
            assert_eq!(client.distribution_end(), after);
        }
    }

    #[test]
    fn fuzz_claim_after_end_always_fails(
        late_by in 0u64..=10_000_000u64,
        callers in 1usize..=5,
    ) {
        let (env, client, _, _, _) = setup_env(REWARD * 10);
        let end = client.distribution_end();
        env.ledger().with_mut(|li| li.timestamp = end + late_by);

        for index in 0..callers {
            let claimant = Address::generate(&env);
            let result = client.try_claim(&claimant, &(index as u32));
            prop_assert_eq!(result, Err(Ok(Error::DistributionEnded)));
        }
    }
}

// ── 2. Response validation ──────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fuzz_malformed_answer_always_rejected(word in prop::array::uniform32(any::<u8>())) {
        let is_valid = word[..31].iter().all(|b| *b == 0) && word[31] <= ACCESS;
        prop_assume!(!is_valid);

        let (env, client, _, token, _) = setup_env(REWARD);
        let claimant = Address::generate(&env);
        let request_id = client.claim(&claimant, &0);

        let result = client.try_fulfill_claim(&request_id, &BytesN::from_array(&env, &word));
        prop_assert_eq!(result, Err(Ok(Error::AccessCheckFailed)));
        prop_assert!(!client.has_claimed(&claimant, &0));
        prop_assert_eq!(token.balance(&claimant), 0);
    }

    #[test]
    fn fuzz_second_fulfillment_always_fails(code in any::<u8>()) {
        let (env, client, operator, _, _) = setup_env(REWARD * 2);
        let claimant = Address::generate(&env);
        let request_id = client.claim(&claimant, &0);
        operator.fulfill_oracle_request(&request_id, &encode(&env, ACCESS));

        let result = client.try_fulfill_claim(&request_id, &encode(&env, code));
        prop_assert_eq!(result, Err(Ok(Error::RequestNotPending)));
    }
}

// ── 3. Ledger ───────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn fuzz_claim_status_never_resets(
        indices in prop::collection::vec(0u32..=4u32, 1..=8),
    ) {
        let (env, client, operator, _, _) = setup_env(REWARD * 10);
        let claimant = Address::generate(&env);
        let mut settled: Vec<u32> = Vec::new();

        for index in &indices {
            let before = client.has_claimed(&claimant, index);
            match client.try_claim(&claimant, index) {
                Ok(Ok(request_id)) => {
                    prop_assert!(!before);
                    operator.fulfill_oracle_request(&request_id, &encode(&env, ACCESS));
                    settled.push(*index);
                }
                other => {
                    prop_assert!(before);
                    prop_assert_eq!(other, Err(Ok(Error::AlreadyClaimed)));
                }
            }
            let after = client.has_claimed(&claimant, index);
            assert_claim_status_stable(before, after);
            prop_assert!(after);
        }

        for index in 0u32..=4 {
            prop_assert_eq!(client.has_claimed(&claimant, &index), settled.contains(&index));
        }
    }
}

// ── 4. Value conservation ───────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn fuzz_value_is_conserved(
        deposit in REWARD..=REWARD * 12,
        answers in prop::collection::vec(any::<bool>(), 1..=10),
    ) {
        let (env, client, _, token, owner) = setup_env(deposit);
        let mut claimed: i128 = 0;

        for granted in &answers {
            let claimant = Address::generate(&env);
            let request_id = match client.try_claim(&claimant, &0) {
                Ok(Ok(id)) => id,
                other => {
                    prop_assert_eq!(other, Err(Ok(Error::OutOfTokens)));
                    continue;
                }
            };
            let code = if *granted { ACCESS } else { NO_ACCESS };
            if client.try_fulfill_claim(&request_id, &encode(&env, code)).is_ok() {
                claimed += REWARD;
                prop_assert_eq!(token.balance(&claimant), REWARD);
            }
        }

        env.ledger().with_mut(|li| li.timestamp += DURATION);
        let remaining_before_sweep = token.balance(&client.address);
        let withdrawn = if remaining_before_sweep > 0 {
            client.withdraw(&owner, &owner);
            remaining_before_sweep
        } else {
            0
        };

        let remaining = token.balance(&client.address);
        assert_value_conserved(deposit, claimed, withdrawn, remaining);
        prop_assert_eq!(remaining, 0);
        prop_assert_eq!(token.balance(&owner), withdrawn);
    }
}
