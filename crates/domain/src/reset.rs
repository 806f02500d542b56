//! Password-reset form state.
//!
//! The reset form has two phases: first the user enters their email and the
//! OTP from the recovery mail, then - once the OTP passes the local length
//! gate - the new password pair. Modelling the phases as a tagged enum keeps
//! illegal field combinations unrepresentable: there is no password field to
//! read while the flow is still awaiting the OTP.

use serde::{Deserialize, Serialize};

/// Minimum OTP length accepted by the local gate.
///
/// The recovery mail carries a 6-digit code; anything shorter cannot be a
/// complete code, so the form refuses to advance. This is a UI affordance,
/// not a cryptographic check - the service validates the OTP during the
/// final reset call.
pub const MIN_OTP_LEN: usize = 6;

/// Which half of the reset form is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetPhase {
    /// Email and OTP fields are live.
    AwaitingOtp,
    /// OTP passed the length gate; password fields are live.
    OtpVerified,
}

/// Transient state of one password-reset session.
///
/// Created when the reset screen mounts and discarded when it unmounts or
/// the flow completes; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum ResetFlow {
    /// Collecting the email address and the mailed OTP.
    AwaitingOtp {
        /// Account email the OTP was sent to.
        email: String,
        /// Code entered so far.
        otp: String,
    },
    /// OTP accepted locally; collecting the replacement password.
    OtpVerified {
        /// Frozen from the first phase.
        email: String,
        /// Frozen from the first phase.
        otp: String,
        /// Replacement password.
        new_password: String,
        /// Must equal `new_password` before submission.
        confirm_password: String,
    },
}

impl Default for ResetFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ResetFlow {
    /// Starts a fresh flow with empty email and OTP fields.
    #[must_use]
    pub const fn new() -> Self {
        Self::AwaitingOtp {
            email: String::new(),
            otp: String::new(),
        }
    }

    /// Returns the current phase tag.
    #[must_use]
    pub const fn phase(&self) -> ResetPhase {
        match self {
            Self::AwaitingOtp { .. } => ResetPhase::AwaitingOtp,
            Self::OtpVerified { .. } => ResetPhase::OtpVerified,
        }
    }

    /// Account email entered in the first phase.
    #[must_use]
    pub fn email(&self) -> &str {
        match self {
            Self::AwaitingOtp { email, .. } | Self::OtpVerified { email, .. } => email,
        }
    }

    /// OTP entered in the first phase.
    #[must_use]
    pub fn otp(&self) -> &str {
        match self {
            Self::AwaitingOtp { otp, .. } | Self::OtpVerified { otp, .. } => otp,
        }
    }

    /// Overwrites the email field. Frozen once the OTP is verified.
    pub fn set_email(&mut self, value: impl Into<String>) {
        if let Self::AwaitingOtp { email, .. } = self {
            *email = value.into();
        }
    }

    /// Overwrites the OTP field. Frozen once verified.
    pub fn set_otp(&mut self, value: impl Into<String>) {
        if let Self::AwaitingOtp { otp, .. } = self {
            *otp = value.into();
        }
    }

    /// Overwrites the password pair. Meaningless before verification.
    pub fn set_passwords(&mut self, new: impl Into<String>, confirm: impl Into<String>) {
        if let Self::OtpVerified {
            new_password,
            confirm_password,
            ..
        } = self
        {
            *new_password = new.into();
            *confirm_password = confirm.into();
        }
    }

    /// Applies the local OTP gate.
    ///
    /// Advances to [`ResetFlow::OtpVerified`] iff the stored OTP is at least
    /// [`MIN_OTP_LEN`] characters long; otherwise the state is returned
    /// unchanged. Never contacts the service and never fails. Calling on an
    /// already-verified flow is a no-op.
    #[must_use]
    pub fn verify_otp(self) -> Self {
        match self {
            Self::AwaitingOtp { email, otp } if otp.chars().count() >= MIN_OTP_LEN => {
                Self::OtpVerified {
                    email,
                    otp,
                    new_password: String::new(),
                    confirm_password: String::new(),
                }
            }
            other => other,
        }
    }

    /// True iff both password fields are present and equal.
    #[must_use]
    pub fn passwords_match(&self) -> bool {
        match self {
            Self::AwaitingOtp { .. } => false,
            Self::OtpVerified {
                new_password,
                confirm_password,
                ..
            } => new_password == confirm_password,
        }
    }
}
