//! Structured events emitted by the registry.
//!
//! Every successful mutation publishes one payload under a short topic so
//! that indexers can follow registrations and approvals without reading
//! contract storage.

#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env};

use crate::storage::Role;

// ── Event payloads ───────────────────────────────────────────────────────────

/// Event published when the contract is initialized.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub timestamp: u64,
}

/// Event published when the owner admits a doctor or a patient.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PartyRegisteredEvent {
    pub party: Address,
    pub role: Role,
    /// Number of parties registered under `role`, this one included.
    pub total: u32,
    pub timestamp: u64,
}

/// Event published when a doctor submits a prescription hash.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrescriptionAddedEvent {
    pub nonce: u64,
    pub content_hash: BytesN<32>,
    pub doctor: Address,
    pub patient: Address,
    pub timestamp: u64,
}

/// Event published when a patient approves their prescription.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrescriptionApprovedEvent {
    pub nonce: u64,
    pub patient: Address,
    pub timestamp: u64,
}

// ── Publishers ───────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, owner: Address) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        owner,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Doctors go out under `DR_ADD`, patients under `PT_ADD`.
pub fn publish_party_registered(env: &Env, party: Address, role: Role, total: u32) {
    let topic = match role {
        Role::Doctor => symbol_short!("DR_ADD"),
        Role::Patient => symbol_short!("PT_ADD"),
    };
    let data = PartyRegisteredEvent {
        party: party.clone(),
        role,
        total,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((topic, party), data);
}

pub fn publish_prescription_added(
    env: &Env,
    nonce: u64,
    content_hash: BytesN<32>,
    doctor: Address,
    patient: Address,
) {
    let topics = (symbol_short!("RX_ADD"), doctor.clone(), patient.clone());
    let data = PrescriptionAddedEvent {
        nonce,
        content_hash,
        doctor,
        patient,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_prescription_approved(env: &Env, nonce: u64, patient: Address) {
    let topics = (symbol_short!("RX_APPR"), patient.clone());
    let data = PrescriptionApprovedEvent {
        nonce,
        patient,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
