//! Validation, client construction and telemetry wiring.

pub mod factory;
pub mod telemetry;
pub mod validator;

pub use factory::*;
pub use telemetry::*;
pub use validator::*;
