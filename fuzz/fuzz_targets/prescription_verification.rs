#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use prescription_verification::{
    PrescriptionStatus, PrescriptionVerificationContract, PrescriptionVerificationContractClient,
};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    Address, BytesN, Env,
};

/// Actions covering every mutating registry entry point.
///
/// Parties are picked by index into a small pool (slot 0 is the owner) and
/// hashes come from a one-byte seed, so re-registrations, duplicate hashes
/// and cross-party approvals show up often.
#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    AddDoctor { caller: u8, party: u8 },
    AddPatient { caller: u8, party: u8 },
    AddPrescription { caller: u8, patient: u8, seed: u8 },
    Approve { caller: u8, patient: u8, nonce: u8 },
    Pause { caller: u8 },
    Unpause { caller: u8 },
    AdvanceTime { delta: u16 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let contract_id = env.register(PrescriptionVerificationContract, ());
    let client = PrescriptionVerificationContractClient::new(&env, &contract_id);

    if client.try_initialize(&owner).is_err() {
        return;
    }

    let mut parties = vec![owner.clone()];
    for _ in 0..5 {
        parties.push(Address::generate(&env));
    }
    let pick = |i: u8| &parties[i as usize % parties.len()];
    let hash = |seed: u8| BytesN::from_array(&env, &[seed % 16; 32]);

    for action in actions.into_iter().take(64) {
        let before = client.get_prescription_count();

        match action {
            FuzzAction::AddDoctor { caller, party } => {
                let _ = client.try_add_doctor(pick(caller), pick(party));
            }
            FuzzAction::AddPatient { caller, party } => {
                let _ = client.try_add_patient(pick(caller), pick(party));
            }
            FuzzAction::AddPrescription {
                caller,
                patient,
                seed,
            } => {
                let _ = client.try_add_prescription(pick(caller), pick(patient), &hash(seed));
            }
            FuzzAction::Approve {
                caller,
                patient,
                nonce,
            } => {
                let _ = client.try_approve_prescription(pick(caller), pick(patient), &(nonce as u64));
            }
            FuzzAction::Pause { caller } => {
                let _ = client.try_pause(pick(caller));
            }
            FuzzAction::Unpause { caller } => {
                let _ = client.try_unpause(pick(caller));
            }
            FuzzAction::AdvanceTime { delta } => {
                let ts = env.ledger().timestamp().saturating_add(delta as u64);
                env.ledger().set_timestamp(ts);
            }
        }

        // ── Post-action invariant checks ──
        let count = client.get_prescription_count();
        assert!(
            count == before || count == before + 1,
            "INVARIANT VIOLATION: prescription count jumped from {} to {}",
            before,
            count
        );

        for nonce in 1..=count {
            let rx = client.get_prescription_details(&nonce);
            assert_eq!(rx.nonce, nonce, "INVARIANT VIOLATION: nonce mismatch");
            assert_eq!(
                client.get_nonce_by_hash(&rx.content_hash),
                nonce,
                "INVARIANT VIOLATION: hash index points elsewhere"
            );
            if rx.status == PrescriptionStatus::Approved {
                assert!(
                    rx.approved_at >= rx.created_at,
                    "INVARIANT VIOLATION: approved before it was created"
                );
            }
        }

        let mut doctor_total = 0u64;
        let mut patient_total = 0u64;
        for who in &parties {
            let doctor_records = client.get_doctor_records(who);
            let patient_records = client.get_patient_records(who);
            for nonce in doctor_records.iter() {
                assert_eq!(&client.get_prescription_details(&nonce).doctor, who);
            }
            for nonce in patient_records.iter() {
                assert_eq!(&client.get_prescription_details(&nonce).patient, who);
            }
            doctor_total += doctor_records.len() as u64;
            patient_total += patient_records.len() as u64;
        }
        assert_eq!(doctor_total, count, "INVARIANT VIOLATION: doctor records lost");
        assert_eq!(patient_total, count, "INVARIANT VIOLATION: patient records lost");
    }
});
