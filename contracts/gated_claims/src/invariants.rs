#![allow(dead_code)]

extern crate std;

/// INV-1: A ledger entry never flips back once set.
pub fn assert_claim_status_stable(before: bool, after: bool) {
    assert!(
        !before || after,
        "INV-1 violated: claim status reset from true to false"
    );
}

/// INV-2: Prolonging the window moves the end by exactly the addition and
/// never backwards.
pub fn assert_window_monotonic(end_before: u64, end_after: u64, addition: u64) {
    assert!(
        end_after >= end_before,
        "INV-2 violated: window end moved backwards: {} -> {}",
        end_before,
        end_after
    );
    assert_eq!(
        end_after,
        end_before + addition,
        "INV-2 violated: {} + {} != {}",
        end_before,
        addition,
        end_after
    );
}

/// INV-3: Minted token ids are 0, 1, 2, ... in mint order.
pub fn assert_sequential_token_ids(ids: &[u32]) {
    for (i, id) in ids.iter().enumerate() {
        assert_eq!(
            *id, i as u32,
            "INV-3 violated: expected token id {}, got {}",
            i, id
        );
    }
}

/// INV-4: Supply never exceeds the configured maximum.
pub fn assert_supply_bounded(total_supply: u32, max_supply: u32) {
    assert!(
        total_supply <= max_supply,
        "INV-4 violated: total supply {} above max supply {}",
        total_supply,
        max_supply
    );
}

/// INV-5: No value is created: everything paid out (claims + sweep) plus
/// what is still held equals what was deposited.
pub fn assert_value_conserved(deposited: i128, claimed: i128, withdrawn: i128, remaining: i128) {
    assert!(
        claimed + withdrawn <= deposited,
        "INV-5 violated: paid out {} + {} exceeds deposits {}",
        claimed,
        withdrawn,
        deposited
    );
    assert_eq!(
        claimed + withdrawn + remaining,
        deposited,
        "INV-5 violated: {} + {} + {} != {}",
        claimed,
        withdrawn,
        remaining,
        deposited
    );
}
