//! Named routes the recovery flows can ask the host router to visit.

use serde::{Deserialize, Serialize};

/// Navigation targets of the account-recovery screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    /// Sign-in screen; destination after a successful request or reset.
    SignIn,
    /// Forgot-password screen (email entry).
    ForgotPassword,
    /// Combined OTP / new-password screen.
    ResetPassword,
}

impl Route {
    /// Path form understood by the host router.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::SignIn => "/signin",
            Self::ForgotPassword => "/forgot-password",
            Self::ResetPassword => "/reset-password",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
