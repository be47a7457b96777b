use thiserror::Error;

/// Errors raised while reading campaign account data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Account data too short: need at least {required} bytes, found {actual}")]
    TooShort { required: usize, actual: usize },

    #[error("Malformed campaign account data: {0}")]
    Malformed(String),

    #[error("Duplicated admin fields disagree")]
    AdminMismatch,
}

/// Borsh writer failure while encoding a campaign record
#[derive(Error, Debug)]
#[error("Failed to encode campaign record: {0}")]
pub struct EncodeError(#[from] pub std::io::Error);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Seed is {len} bytes long (max: {max})")]
    SeedTooLong { len: usize, max: usize },

    #[error("Address derivation failed: {0}")]
    Derivation(String),
}
