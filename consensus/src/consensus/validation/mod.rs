//! Header and proof-of-work validation

pub mod header_validator;
pub mod proof;

pub use header_validator::HeaderValidator;
pub use proof::{check_proof_of_work, POW_HASH_EXCEPTIONS};
