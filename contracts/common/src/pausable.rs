#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::{ttl, CommonError};

const PAUSED: Symbol = symbol_short!("PAUSED");

/// Emitted whenever the pause flag flips.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseChangedEvent {
    pub by: Address,
    pub paused: bool,
    pub timestamp: u64,
}

/// Returns `true` when the contract is paused.
pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&PAUSED).unwrap_or(false)
}

/// Guard for state-mutating entry points.
///
/// Read-only entry points should not call this; a paused registry must
/// remain queryable.
pub fn require_not_paused(env: &Env) -> Result<(), CommonError> {
    if is_paused(env) {
        return Err(CommonError::Paused);
    }
    Ok(())
}

/// Stores the pause flag on behalf of `by`.
///
/// Authorization is the caller's job: each contract decides who may pause.
/// A `PAUSED` / `UNPAUSED` event is published only on an actual transition,
/// so repeated calls are silent no-ops.
pub fn set_paused(env: &Env, by: &Address, paused: bool) {
    if is_paused(env) == paused {
        return;
    }

    env.storage().instance().set(&PAUSED, &paused);
    ttl::bump_instance(env);

    let topic = if paused {
        symbol_short!("PAUSED")
    } else {
        symbol_short!("UNPAUSED")
    };
    env.events().publish(
        (topic, by.clone()),
        PauseChangedEvent {
            by: by.clone(),
            paused,
            timestamp: env.ledger().timestamp(),
        },
    );
}
