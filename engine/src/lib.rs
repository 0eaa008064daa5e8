//! Calorie Calculator Engine
//!
//! This crate contains the calculation core shared by every transport:
//! input validation, Mifflin-St Jeor BMR, activity scaling to TDEE, and
//! the seven-goal calorie table.
//!
//! The engine is pure and synchronous. Every function is total over
//! validated input; validation is the only operation that can fail.

pub mod energy;
pub mod errors;
pub mod validation;

// Re-export commonly used items
pub use energy::*;
pub use errors::EngineError;
pub use validation::{validate, CalculationRequest};
