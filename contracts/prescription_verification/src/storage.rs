use registry_common::ttl;
use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, Symbol};

use crate::errors::ContractError;

// ── Instance keys ────────────────────────────────────────────────────────────

const OWNER: Symbol = symbol_short!("OWNER");
const INITIALIZED: Symbol = symbol_short!("INIT");
const RX_COUNTER: Symbol = symbol_short!("RX_CTR");

/// The two kinds of party the owner can admit.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Doctor,
    Patient,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Number of parties ever registered under a role.
    PartyCount(Role),
    Registered(Role, Address),
    /// Ordered nonces authored by a doctor or addressed to a patient.
    Records(Role, Address),
    Prescription(u64),
    HashIndex(BytesN<32>),
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

pub fn require_initialized(env: &Env) -> Result<(), ContractError> {
    if !is_initialized(env) {
        return Err(ContractError::NotInitialized);
    }
    Ok(())
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
    env.storage().instance().set(&INITIALIZED, &true);
    ttl::bump_instance(env);
}

pub fn get_owner(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&OWNER)
        .ok_or(ContractError::NotInitialized)
}

/// Fails with `Unauthorized` unless `caller` is the stored owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
    if get_owner(env)? != *caller {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Last issued nonce; `0` until the first prescription lands.
pub fn last_nonce(env: &Env) -> u64 {
    env.storage().instance().get(&RX_COUNTER).unwrap_or(0)
}

#[allow(clippy::arithmetic_side_effects)]
pub fn next_nonce(env: &Env) -> u64 {
    let nonce = last_nonce(env) + 1;
    env.storage().instance().set(&RX_COUNTER, &nonce);
    ttl::bump_instance(env);
    nonce
}
