//! Consensus rules
//!
//! Difficulty retargeting and header/proof validation.

pub mod difficulty;
pub mod validation;

pub use difficulty::next_work_required;
pub use validation::{check_proof_of_work, HeaderValidator};
