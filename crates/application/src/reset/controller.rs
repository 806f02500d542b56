//! Password-reset flow controller.
//!
//! One controller instance backs one active recovery session. It owns the
//! transient form state and the in-flight flag, talks to the credential
//! service, and reports every outcome through the notifier; a successful
//! submission additionally asks the navigator for the sign-in screen.
//!
//! Outcomes are user-facing, so the action methods return nothing: the
//! notifier is the error channel, and no failure is ever swallowed without
//! a notification.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use rekey_domain::{ResetFlow, ResetPhase, Route, Severity};

use crate::ports::{CredentialService, Navigator, Notifier};

/// Shown after `forgot_password` succeeds.
const MSG_EMAIL_SENT: &str = "Password reset email sent.";
/// Shown when the password pair disagrees; no remote call is made.
const MSG_PASSWORDS_MISMATCH: &str = "Passwords do not match!";
/// Shown after `reset_password` succeeds.
const MSG_RESET_DONE: &str = "Password reset successfully! Please sign in now.";
/// Shown when a recovery request is attempted without an email.
const MSG_EMAIL_REQUIRED: &str = "Email is required.";

/// Clears the in-flight flag on every exit path, panic unwind included.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// State machine driving the recovery flows.
///
/// Created when a recovery screen mounts and discarded when it unmounts or
/// the flow completes; the session store is not involved until the user
/// signs back in.
#[derive(Debug)]
pub struct ResetFlowController<C, N, R> {
    service: C,
    notifier: N,
    navigator: R,
    form: RwLock<ResetFlow>,
    submitting: AtomicBool,
}

impl<C, N, R> ResetFlowController<C, N, R>
where
    C: CredentialService,
    N: Notifier,
    R: Navigator,
{
    /// Creates a controller in the initial `AwaitingOtp` phase.
    pub fn new(service: C, notifier: N, navigator: R) -> Self {
        Self {
            service,
            notifier,
            navigator,
            form: RwLock::new(ResetFlow::new()),
            submitting: AtomicBool::new(false),
        }
    }

    /// Current phase of the reset form.
    pub async fn phase(&self) -> ResetPhase {
        self.form.read().await.phase()
    }

    /// Snapshot of the form fields, for UI binding.
    pub async fn form(&self) -> ResetFlow {
        self.form.read().await.clone()
    }

    /// True while a remote call is outstanding.
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    /// Marks the controller in-flight, or reports that it already is.
    ///
    /// Re-entry defence: the UI disables its buttons while submitting, but
    /// a second dispatch that slips through must still find the flag taken
    /// and back off without a remote call.
    fn enter_submit(&self) -> Option<InFlight<'_>> {
        if self
            .submitting
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            Some(InFlight(&self.submitting))
        } else {
            tracing::debug!("submit ignored; a call is already in flight");
            None
        }
    }

    /// Asks the service to mail a one-time code (forgot-password screen).
    ///
    /// Exactly one `forgot_password` call per invocation, never retried.
    /// Success notifies and moves to the sign-in screen; failure delivers
    /// the service's description and stays put so the entered email is not
    /// lost.
    pub async fn request_reset(&self, email: &str) {
        if email.trim().is_empty() {
            self.notifier.notify(MSG_EMAIL_REQUIRED, Severity::Error);
            return;
        }

        let Some(_in_flight) = self.enter_submit() else {
            return;
        };

        self.form.write().await.set_email(email);

        match self.service.forgot_password(email).await {
            Ok(()) => {
                self.notifier.notify(MSG_EMAIL_SENT, Severity::Success);
                self.navigator.navigate_to(Route::SignIn);
            }
            Err(e) => {
                self.notifier.notify(&e.to_string(), Severity::Error);
            }
        }
    }

    /// Applies the local OTP gate and returns the resulting phase.
    ///
    /// Pure local guard: too-short codes leave the phase unchanged with no
    /// side effect, and no remote call happens either way. The code is only
    /// truly checked by the service during [`Self::submit_reset`].
    pub async fn verify_otp(&self, otp: &str) -> ResetPhase {
        let mut form = self.form.write().await;
        form.set_otp(otp);
        *form = std::mem::take(&mut *form).verify_otp();
        form.phase()
    }

    /// Submits the replacement password together with the OTP.
    ///
    /// The mismatch check runs first and short-circuits without a remote
    /// call or phase change. Otherwise exactly one `reset_password` call is
    /// made with the given values; on success the user is sent to sign-in,
    /// on failure the phase stays `OtpVerified` so the password fields can
    /// be corrected and resubmitted.
    pub async fn submit_reset(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
        confirm_password: &str,
    ) {
        if new_password != confirm_password {
            self.notifier.notify(MSG_PASSWORDS_MISMATCH, Severity::Error);
            return;
        }

        let Some(_in_flight) = self.enter_submit() else {
            return;
        };

        self.form
            .write()
            .await
            .set_passwords(new_password, confirm_password);

        match self.service.reset_password(email, otp, new_password).await {
            Ok(()) => {
                self.notifier.notify(MSG_RESET_DONE, Severity::Success);
                self.navigator.navigate_to(Route::SignIn);
            }
            Err(e) => {
                self.notifier.notify(&e.to_string(), Severity::Error);
            }
        }
    }
}
