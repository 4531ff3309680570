use registry_common::ttl;
use soroban_sdk::{Address, Env, Vec};

use crate::errors::ContractError;
use crate::registry;
use crate::storage::{DataKey, Role};

/// Full record list for a party, in submission order. Empty for unknown parties.
pub fn list(env: &Env, role: Role, who: &Address) -> Vec<u64> {
    let key = DataKey::Records(role, who.clone());
    match env.storage().persistent().get(&key) {
        Some(records) => {
            ttl::bump_persistent(env, &key);
            records
        }
        None => Vec::new(env),
    }
}

pub fn count(env: &Env, role: Role, who: &Address) -> u32 {
    list(env, role, who).len()
}

/// Nonce at `index` in a registered party's list.
pub fn at(env: &Env, role: Role, who: &Address, index: u32) -> Result<u64, ContractError> {
    registry::require_registered(env, role, who)?;
    list(env, role, who)
        .get(index)
        .ok_or(ContractError::OutOfRange)
}

pub fn append(env: &Env, role: Role, who: &Address, nonce: u64) {
    let key = DataKey::Records(role, who.clone());
    let mut records = list(env, role, who);
    records.push_back(nonce);
    env.storage().persistent().set(&key, &records);
    ttl::bump_persistent(env, &key);
}
