use registry_common::ttl;
use soroban_sdk::{contracttype, Address, BytesN, Env};

use crate::errors::ContractError;
use crate::records;
use crate::storage::{self, DataKey, Role};

/// Approval lifecycle. `Approved` is terminal.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PrescriptionStatus {
    Pending,
    Approved,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Prescription {
    pub nonce: u64,
    pub content_hash: BytesN<32>,
    pub doctor: Address,
    pub patient: Address,
    pub status: PrescriptionStatus,
    pub created_at: u64,
    /// Ledger timestamp of approval, `0` while pending.
    pub approved_at: u64,
}

impl Prescription {
    pub fn is_approved(&self) -> bool {
        self.status == PrescriptionStatus::Approved
    }
}

pub fn get(env: &Env, nonce: u64) -> Result<Prescription, ContractError> {
    let key = DataKey::Prescription(nonce);
    let rx: Prescription = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::NotFound)?;
    ttl::bump_persistent(env, &key);
    Ok(rx)
}

fn save(env: &Env, rx: &Prescription) {
    let key = DataKey::Prescription(rx.nonce);
    env.storage().persistent().set(&key, rx);
    ttl::bump_persistent(env, &key);
}

pub fn nonce_by_hash(env: &Env, hash: &BytesN<32>) -> Result<u64, ContractError> {
    let key = DataKey::HashIndex(hash.clone());
    let nonce: u64 = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::NotFound)?;
    ttl::bump_persistent(env, &key);
    Ok(nonce)
}

/// Issues the next nonce for `content_hash` and indexes it everywhere.
///
/// Callers must have validated the doctor, the patient and the hash; this
/// only refuses a hash that is already indexed, so the index is never
/// overwritten.
pub fn submit(
    env: &Env,
    doctor: &Address,
    patient: &Address,
    content_hash: &BytesN<32>,
) -> Result<Prescription, ContractError> {
    let index_key = DataKey::HashIndex(content_hash.clone());
    if env.storage().persistent().has(&index_key) {
        return Err(ContractError::DuplicateHash);
    }

    let nonce = storage::next_nonce(env);
    let rx = Prescription {
        nonce,
        content_hash: content_hash.clone(),
        doctor: doctor.clone(),
        patient: patient.clone(),
        status: PrescriptionStatus::Pending,
        created_at: env.ledger().timestamp(),
        approved_at: 0,
    };
    save(env, &rx);

    env.storage().persistent().set(&index_key, &nonce);
    ttl::bump_persistent(env, &index_key);

    records::append(env, Role::Doctor, doctor, nonce);
    records::append(env, Role::Patient, patient, nonce);

    Ok(rx)
}

/// Moves `nonce` from `Pending` to `Approved` on behalf of `patient`.
///
/// Returns `Ok(None)` when it was already approved; nothing is written in
/// that case.
pub fn approve(
    env: &Env,
    patient: &Address,
    nonce: u64,
) -> Result<Option<Prescription>, ContractError> {
    let mut rx = get(env, nonce)?;
    if rx.patient != *patient {
        return Err(ContractError::Unauthorized);
    }
    if rx.is_approved() {
        return Ok(None);
    }

    rx.status = PrescriptionStatus::Approved;
    rx.approved_at = env.ledger().timestamp();
    save(env, &rx);
    Ok(Some(rx))
}
