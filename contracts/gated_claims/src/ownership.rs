//! # Ownership
//!
//! A single privileged principal, the owner, guards the operator-only
//! entry points (`prolong_distribution_period`, `withdraw`,
//! `transfer_ownership`). There is no role hierarchy: a call is privileged
//! iff the authorizing `caller` equals the stored owner.
//!
//! ## Storage layout
//!
//! - `DataKey::Owner` → `Address` (instance tier).
//!
//! ## Event emissions
//!
//! | Event topic prefix | Trigger                         |
//! |--------------------|---------------------------------|
//! | `owner_set`        | Owner set at init or transferred |

use soroban_sdk::{Address, Env};

use crate::events;
use crate::storage::{bump_instance, DataKey};
use crate::Error;

/// Read the owner, returning `None` before init.
pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

fn store_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);
}

/// Set the initial owner. Fails with `Error::AlreadyInitialized` if an
/// owner is already stored.
pub fn init_owner(env: &Env, owner: &Address) -> Result<(), Error> {
    if env.storage().instance().has(&DataKey::Owner) {
        return Err(Error::AlreadyInitialized);
    }
    store_owner(env, owner);
    events::emit_ownership_transferred(env, None, owner.clone());
    Ok(())
}

/// Assert that `caller` is the owner.
///
/// Authorization of `caller` is the entry point's job; this is the
/// capability check only.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    match get_owner(env) {
        Some(ref owner) if owner == caller => Ok(()),
        Some(_) => Err(Error::Unauthorized),
        None => Err(Error::NotInitialized),
    }
}

/// Hand the owner capability to `new_owner`. The previous owner loses it
/// immediately.
pub fn transfer_ownership(env: &Env, caller: &Address, new_owner: &Address) -> Result<(), Error> {
    require_owner(env, caller)?;
    store_owner(env, new_owner);
    events::emit_ownership_transferred(env, Some(caller.clone()), new_owner.clone());
    Ok(())
}
