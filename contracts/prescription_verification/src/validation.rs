use soroban_sdk::BytesN;

use crate::errors::ContractError;

/// Rejects the all-zero digest, which no real hash function produces and
/// which callers tend to send when they forgot to hash at all.
pub fn validate_content_hash(hash: &BytesN<32>) -> Result<(), ContractError> {
    if hash.to_array().iter().all(|&b| b == 0) {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}
