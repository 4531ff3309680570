//! Owner-gated admission of doctors and patients.
//!
//! Both tables share one layout keyed by [`Role`]: a registration flag per
//! address, a per-role counter in instance storage, and the record list kept
//! by [`crate::records`].

use registry_common::ttl;
use soroban_sdk::{Address, Env};

use crate::errors::ContractError;
use crate::storage::{DataKey, Role};

pub fn is_registered(env: &Env, role: Role, who: &Address) -> bool {
    let key = DataKey::Registered(role, who.clone());
    let registered = env.storage().persistent().get(&key).unwrap_or(false);
    if registered {
        ttl::bump_persistent(env, &key);
    }
    registered
}

pub fn count(env: &Env, role: Role) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::PartyCount(role))
        .unwrap_or(0)
}

/// Admits `who` under `role`. A second admission is rejected so the counter
/// only ever moves on first registration.
#[allow(clippy::arithmetic_side_effects)]
pub fn register(env: &Env, role: Role, who: &Address) -> Result<u32, ContractError> {
    if is_registered(env, role, who) {
        return Err(ContractError::AlreadyRegistered);
    }

    let key = DataKey::Registered(role, who.clone());
    env.storage().persistent().set(&key, &true);
    ttl::bump_persistent(env, &key);

    let total = count(env, role) + 1;
    env.storage()
        .instance()
        .set(&DataKey::PartyCount(role), &total);
    ttl::bump_instance(env);

    Ok(total)
}

/// Maps an unknown party to the role-specific error.
pub fn require_registered(env: &Env, role: Role, who: &Address) -> Result<(), ContractError> {
    if is_registered(env, role, who) {
        return Ok(());
    }
    Err(match role {
        Role::Doctor => ContractError::InvalidDoctor,
        Role::Patient => ContractError::InvalidPatient,
    })
}
