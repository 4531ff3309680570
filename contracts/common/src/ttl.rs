use soroban_sdk::{Env, IntoVal, Val};

/// Remaining ledgers below which an entry gets extended (~30 days @ ~5s/ledger).
pub const TTL_THRESHOLD: u32 = 518_400;
/// Ledgers an extended entry stays live for (~60 days @ ~5s/ledger).
pub const TTL_EXTEND_TO: u32 = 1_036_800;

/// Extends the contract instance (owner, counters, flags).
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Extends a single persistent entry. The key must exist.
pub fn bump_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
