//! Forgot-password and reset-password flows.

mod controller;

pub use controller::ResetFlowController;
