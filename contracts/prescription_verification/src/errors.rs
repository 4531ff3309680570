use registry_common::CommonError;
use soroban_sdk::contracterror;

/// Contract errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Caller lacks the role or identity the operation requires.
    Unauthorized = 3,
    InvalidDoctor = 4,
    InvalidPatient = 5,
    /// Unknown nonce or content hash.
    NotFound = 6,
    /// Record index beyond the end of a party's record list.
    OutOfRange = 7,
    AlreadyRegistered = 8,
    DuplicateHash = 9,
    InvalidInput = 10,
    Paused = 11,
}

impl From<CommonError> for ContractError {
    fn from(err: CommonError) -> Self {
        match err {
            CommonError::NotInitialized => ContractError::NotInitialized,
            CommonError::AlreadyInitialized => ContractError::AlreadyInitialized,
            CommonError::Paused => ContractError::Paused,
        }
    }
}
