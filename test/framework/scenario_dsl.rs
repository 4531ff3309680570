//! # Scenario DSL
//!
//! A declarative, builder-pattern API for defining readable test scenarios
//! in a Given-When-Then style.
//!
//! ## Example
//!
//! ```rust,ignore
//! Scenario::new("Patient approves own prescription")
//!     .given(|ctx| {
//!         let doctor = ctx.harness.create_doctor();
//!         let patient = ctx.harness.create_patient();
//!         ctx.doctors.push(doctor);
//!         ctx.patients.push(patient);
//!     })
//!     .when("the doctor prescribes and the patient approves", |ctx| {
//!         let nonce = ctx.harness.submit(&ctx.doctors[0], &ctx.patients[0], &[1u8; 32]);
//!         ctx.harness.approve(&ctx.patients[0], nonce);
//!         ctx.store("nonce", nonce);
//!     })
//!     .then("the prescription is approved", |ctx| {
//!         assert!(ctx.harness.is_approved(ctx.load("nonce")));
//!     })
//!     .run();
//! ```

extern crate std;

use soroban_sdk::Address;
use std::boxed::Box;
use std::string::String;
use std::vec::Vec;

use super::invariants::InvariantSet;
use super::{RegistryTestHarness, TestEnv};

// ── Scenario Context ─────────────────────────────────────────────────────────

/// Mutable context passed to scenario steps.
///
/// Holds a reference to the harness plus the doctors and patients the
/// scenario registered, so invariants can be checked over them.
pub struct ScenarioContext<'a, 'b> {
    pub harness: &'a RegistryTestHarness<'b>,
    pub doctors: Vec<Address>,
    pub patients: Vec<Address>,
    /// Storage for arbitrary test data between steps.
    pub data: std::collections::HashMap<String, u64>,
}

impl<'a, 'b> ScenarioContext<'a, 'b> {
    fn new(harness: &'a RegistryTestHarness<'b>) -> Self {
        Self {
            harness,
            doctors: Vec::new(),
            patients: Vec::new(),
            data: std::collections::HashMap::new(),
        }
    }

    /// Store a named value for use in later steps.
    pub fn store(&mut self, key: &str, value: u64) {
        self.data.insert(key.into(), value);
    }

    /// Retrieve a named value stored by a previous step.
    pub fn load(&self, key: &str) -> u64 {
        *self
            .data
            .get(key)
            .unwrap_or_else(|| panic!("Scenario variable '{}' not found", key))
    }

    /// Every address the scenario touched, owner first.
    pub fn tracked(&self) -> Vec<Address> {
        let mut all = std::vec![self.harness.owner.clone()];
        for who in self.doctors.iter().chain(self.patients.iter()) {
            if !all.contains(who) {
                all.push(who.clone());
            }
        }
        all
    }
}

// ── Step Types ───────────────────────────────────────────────────────────────

type StepFn = Box<dyn FnOnce(&mut ScenarioContext<'_, '_>)>;

struct GivenStep {
    action: StepFn,
}

struct WhenStep {
    #[allow(dead_code)]
    description: String,
    action: StepFn,
}

struct ThenStep {
    #[allow(dead_code)]
    description: String,
    assertion: StepFn,
}

// ── Scenario Builder ─────────────────────────────────────────────────────────

/// A declarative test scenario with Given-When-Then structure.
///
/// Steps are collected via the builder and executed in order during `run()`.
/// Invariants can optionally be checked between When and Then phases.
pub struct Scenario {
    name: String,
    start_time: u64,
    given_steps: Vec<GivenStep>,
    when_steps: Vec<WhenStep>,
    then_steps: Vec<ThenStep>,
    invariants: Option<InvariantSet>,
}

impl Scenario {
    /// Create a new scenario with a descriptive name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            start_time: 0,
            given_steps: Vec::new(),
            when_steps: Vec::new(),
            then_steps: Vec::new(),
            invariants: None,
        }
    }

    /// Ledger timestamp the scenario starts at.
    pub fn starting_at(mut self, timestamp: u64) -> Self {
        self.start_time = timestamp;
        self
    }

    /// Add a precondition/setup step.
    pub fn given<F>(mut self, action: F) -> Self
    where
        F: FnOnce(&mut ScenarioContext<'_, '_>) + 'static,
    {
        self.given_steps.push(GivenStep {
            action: Box::new(action),
        });
        self
    }

    /// Add an action step with a description.
    pub fn when<F>(mut self, description: &str, action: F) -> Self
    where
        F: FnOnce(&mut ScenarioContext<'_, '_>) + 'static,
    {
        self.when_steps.push(WhenStep {
            description: description.into(),
            action: Box::new(action),
        });
        self
    }

    /// Add an assertion step with a description.
    pub fn then<F>(mut self, description: &str, assertion: F) -> Self
    where
        F: FnOnce(&mut ScenarioContext<'_, '_>) + 'static,
    {
        self.then_steps.push(ThenStep {
            description: description.into(),
            assertion: Box::new(assertion),
        });
        self
    }

    /// Attach invariants to check between when and then phases.
    pub fn with_invariants(mut self, invariants: InvariantSet) -> Self {
        self.invariants = Some(invariants);
        self
    }

    /// Execute the scenario.
    ///
    /// Deploys a fresh registry, runs all steps in order, and panics on
    /// assertion failure with a descriptive message.
    pub fn run(self) {
        let mut env = TestEnv::new();
        env.set_timestamp(self.start_time);
        let harness = RegistryTestHarness::new(&mut env);
        let mut ctx = ScenarioContext::new(&harness);

        for step in self.given_steps {
            (step.action)(&mut ctx);
        }

        for step in self.when_steps {
            (step.action)(&mut ctx);
        }

        if let Some(ref invariants) = self.invariants {
            let snapshot = harness.snapshot(&ctx.tracked());
            let violations = invariants.check_all(&snapshot);
            if !violations.is_empty() {
                let mut report = std::format!(
                    "Scenario '{}' — invariant violations after actions:\n",
                    self.name
                );
                for (name, msg) in &violations {
                    report.push_str(&std::format!("  ✗ [{}]: {}\n", name, msg));
                }
                panic!("{}", report);
            }
        }

        for step in self.then_steps {
            (step.assertion)(&mut ctx);
        }
    }
}

// ── Assertion Helpers ────────────────────────────────────────────────────────

/// Assert that an action fails with the expected contract error.
///
/// Uses `try_*` client methods that return `Result`.
#[macro_export]
macro_rules! assert_contract_error {
    ($result:expr, $expected:expr) => {
        match $result {
            Err(Ok(e)) => assert_eq!(
                e, $expected,
                "Expected error {:?}, got {:?}",
                $expected, e
            ),
            Err(Err(e)) => panic!("Unexpected SDK error: {:?}", e),
            Ok(_) => panic!("Expected error {:?}, but operation succeeded", $expected),
        }
    };
}

// ── Batch Scenario Runner ────────────────────────────────────────────────────

/// Run multiple scenarios and collect results.
///
/// Returns the number of passed and failed scenarios.
pub fn run_scenarios(scenarios: Vec<Scenario>) -> (usize, usize) {
    let total = scenarios.len();
    let mut failures = 0;

    for scenario in scenarios {
        let name = scenario.name.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            scenario.run();
        }));

        match result {
            Ok(()) => {
                std::eprintln!("  ✓ {}", name);
            }
            Err(_) => {
                std::eprintln!("  ✗ {}", name);
                failures += 1;
            }
        }
    }

    (total - failures, failures)
}
