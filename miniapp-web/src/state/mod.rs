//! Widget state

pub mod payment;
pub mod wallet;
