//! State Management
//!
//! Session store, toggle-selection logic, and referral code generation.

pub mod referral;
pub mod session;
pub mod toggle;
