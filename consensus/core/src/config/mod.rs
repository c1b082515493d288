pub mod constants;
pub mod params;

pub use params::{Params, RetargetRegime};
