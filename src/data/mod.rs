//! Plain records produced by the collectors

pub mod facts;
pub mod usage;

pub use facts::{SystemFacts, UNKNOWN};
pub use usage::Usage;
