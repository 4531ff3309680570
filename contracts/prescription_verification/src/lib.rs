//! # Prescription Verification Contract
//!
//! An owner-administered registry of doctors, patients and prescriptions.
//!
//! ## Roles
//! | Role    | May                                                   |
//! |---------|-------------------------------------------------------|
//! | Owner   | register doctors and patients, pause / unpause        |
//! | Doctor  | submit a prescription hash for a registered patient   |
//! | Patient | approve prescriptions addressed to themselves         |
//!
//! ## Prescription lifecycle
//! ```text
//! add_prescription ──► Pending ──approve_prescription──► Approved
//! ```
//! Each prescription is content-addressed: its hash maps to exactly one
//! nonce, nonces start at 1 and are issued densely, and every nonce is
//! appended to both the prescribing doctor's and the patient's record list.
#![no_std]

pub mod errors;
pub mod events;
pub mod prescription;
pub mod records;
pub mod registry;
pub mod storage;
pub mod validation;

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Vec};

pub use errors::ContractError;
pub use prescription::{Prescription, PrescriptionStatus};
pub use storage::Role;

#[contract]
pub struct PrescriptionVerificationContract;

#[contractimpl]
impl PrescriptionVerificationContract {
    /// Initialize the registry; `owner` becomes the fixed administrator.
    pub fn initialize(env: Env, owner: Address) -> Result<(), ContractError> {
        if storage::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        owner.require_auth();

        storage::set_owner(&env, &owner);
        events::publish_initialized(&env, owner);

        Ok(())
    }

    /// Check if the contract is initialized
    pub fn is_initialized(env: Env) -> bool {
        storage::is_initialized(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        storage::get_owner(&env)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }

    // ======================== Admission Control ========================

    /// Register a doctor. Owner only.
    pub fn add_doctor(env: Env, caller: Address, doctor: Address) -> Result<(), ContractError> {
        Self::admit(&env, &caller, &doctor, Role::Doctor)
    }

    /// Register a patient. Owner only.
    pub fn add_patient(env: Env, caller: Address, patient: Address) -> Result<(), ContractError> {
        Self::admit(&env, &caller, &patient, Role::Patient)
    }

    pub fn is_doctor_registered(env: Env, doctor: Address) -> bool {
        registry::is_registered(&env, Role::Doctor, &doctor)
    }

    pub fn is_patient_registered(env: Env, patient: Address) -> bool {
        registry::is_registered(&env, Role::Patient, &patient)
    }

    pub fn get_number_of_doctors(env: Env) -> u32 {
        registry::count(&env, Role::Doctor)
    }

    pub fn get_number_of_patients(env: Env) -> u32 {
        registry::count(&env, Role::Patient)
    }

    // ======================== Prescriptions ========================

    /// Submit a prescription hash for `patient`; returns the issued nonce.
    ///
    /// The caller must be a registered doctor and the hash must not have
    /// been submitted before.
    pub fn add_prescription(
        env: Env,
        caller: Address,
        patient: Address,
        content_hash: BytesN<32>,
    ) -> Result<u64, ContractError> {
        caller.require_auth();
        Self::require_active(&env)?;

        if !registry::is_registered(&env, Role::Doctor, &caller) {
            return Err(ContractError::Unauthorized);
        }
        registry::require_registered(&env, Role::Patient, &patient)?;
        validation::validate_content_hash(&content_hash)?;

        let rx = prescription::submit(&env, &caller, &patient, &content_hash)?;
        events::publish_prescription_added(&env, rx.nonce, content_hash, caller, patient);

        Ok(rx.nonce)
    }

    pub fn get_nonce_by_hash(env: Env, content_hash: BytesN<32>) -> Result<u64, ContractError> {
        prescription::nonce_by_hash(&env, &content_hash)
    }

    /// Returns `(content_hash, approved)` for a nonce.
    pub fn get_prescription(env: Env, nonce: u64) -> Result<(BytesN<32>, bool), ContractError> {
        let rx = prescription::get(&env, nonce)?;
        let approved = rx.is_approved();
        Ok((rx.content_hash, approved))
    }

    pub fn get_prescription_details(env: Env, nonce: u64) -> Result<Prescription, ContractError> {
        prescription::get(&env, nonce)
    }

    /// Total number of prescriptions ever submitted.
    pub fn get_prescription_count(env: Env) -> u64 {
        storage::last_nonce(&env)
    }

    /// Approve a pending prescription.
    ///
    /// Only the prescription's own patient may approve, and only for
    /// themselves. Approving an already approved prescription succeeds
    /// without side effects.
    pub fn approve_prescription(
        env: Env,
        caller: Address,
        patient: Address,
        nonce: u64,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_active(&env)?;

        if caller != patient {
            return Err(ContractError::Unauthorized);
        }

        if let Some(rx) = prescription::approve(&env, &patient, nonce)? {
            events::publish_prescription_approved(&env, rx.nonce, patient);
        }

        Ok(())
    }

    // ======================== Record Indexing ========================

    pub fn get_doctor_record_count(env: Env, doctor: Address) -> u32 {
        records::count(&env, Role::Doctor, &doctor)
    }

    pub fn get_patient_record_count(env: Env, patient: Address) -> u32 {
        records::count(&env, Role::Patient, &patient)
    }

    pub fn get_doctor_record(env: Env, doctor: Address, index: u32) -> Result<u64, ContractError> {
        records::at(&env, Role::Doctor, &doctor, index)
    }

    pub fn get_patient_record(
        env: Env,
        patient: Address,
        index: u32,
    ) -> Result<u64, ContractError> {
        records::at(&env, Role::Patient, &patient, index)
    }

    pub fn get_doctor_records(env: Env, doctor: Address) -> Vec<u64> {
        records::list(&env, Role::Doctor, &doctor)
    }

    pub fn get_patient_records(env: Env, patient: Address) -> Vec<u64> {
        records::list(&env, Role::Patient, &patient)
    }

    // ======================== Emergency Pause ========================

    pub fn pause(env: Env, caller: Address) -> Result<(), ContractError> {
        caller.require_auth();
        storage::require_owner(&env, &caller)?;
        registry_common::set_paused(&env, &caller, true);
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), ContractError> {
        caller.require_auth();
        storage::require_owner(&env, &caller)?;
        registry_common::set_paused(&env, &caller, false);
        Ok(())
    }

    pub fn is_paused(env: Env) -> bool {
        registry_common::is_paused(&env)
    }

    // ======================== Internal ========================

    fn require_active(env: &Env) -> Result<(), ContractError> {
        storage::require_initialized(env)?;
        registry_common::require_not_paused(env)?;
        Ok(())
    }

    fn admit(env: &Env, caller: &Address, who: &Address, role: Role) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_active(env)?;
        storage::require_owner(env, caller)?;

        let total = registry::register(env, role, who)?;
        events::publish_party_registered(env, who.clone(), role, total);

        Ok(())
    }
}
