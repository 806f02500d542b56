//! Minimal terminal front-end.
//!
//! Stands in for the desktop UI: it renders notifications as console lines,
//! records navigation requests, and walks the user through the same screens
//! the GUI would show - the forgot-password form and the two-phase
//! reset-password form.

use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex};

use rekey_application::ports::{CredentialService, Navigator, Notifier, TokenStorage};
use rekey_application::{ResetFlowController, SessionStore};
use rekey_domain::{MIN_OTP_LEN, ResetPhase, Route, Severity};

/// Toast presenter writing to the console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        eprintln!("[{severity}] {message}");
    }
}

/// Navigator that records the requested route so a flow loop can observe
/// the redirect that ends it.
#[derive(Debug, Clone, Default)]
pub struct RecordedNavigator {
    last: Arc<Mutex<Option<Route>>>,
}

impl RecordedNavigator {
    /// Takes the most recent navigation request, if any.
    pub fn take(&self) -> Option<Route> {
        self.last.lock().ok().and_then(|mut last| last.take())
    }
}

impl Navigator for RecordedNavigator {
    fn navigate_to(&self, route: Route) {
        eprintln!("-> {route}");
        if let Ok(mut last) = self.last.lock() {
            *last = Some(route);
        }
    }
}

/// Runs the interactive menu until the user quits.
///
/// # Errors
///
/// Returns an error if stdin or stdout is closed.
pub async fn run<S, C>(sessions: &SessionStore<S>, service: C) -> io::Result<()>
where
    S: TokenStorage,
    C: CredentialService + Clone,
{
    loop {
        let signed_in = sessions.current_session().await.is_authenticated();
        println!();
        println!("rekey - account recovery");
        println!("  signed in: {}", if signed_in { "yes" } else { "no" });
        println!("  1) send password reset email");
        println!("  2) reset password with OTP");
        println!("  3) sign out");
        println!("  q) quit");

        match prompt("> ")?.as_str() {
            "1" => forgot_password_screen(service.clone()).await?,
            "2" => reset_password_screen(service.clone()).await?,
            "3" => {
                sessions.logout().await;
                ConsoleNotifier.notify("Signed out.", Severity::Info);
            }
            "q" | "quit" | "exit" => return Ok(()),
            other => println!("unknown choice: {other}"),
        }
    }
}

/// Forgot-password screen: one email field, one submit button.
async fn forgot_password_screen<C: CredentialService>(service: C) -> io::Result<()> {
    let navigator = RecordedNavigator::default();
    let controller = ResetFlowController::new(service, ConsoleNotifier, navigator.clone());

    loop {
        let email = prompt("Email: ")?;
        controller.request_reset(&email).await;
        if navigator.take() == Some(Route::SignIn) {
            return Ok(());
        }
        if !confirm("Try again? [y/N] ")? {
            return Ok(());
        }
    }
}

/// Reset-password screen: email + OTP first, then the password pair.
async fn reset_password_screen<C: CredentialService>(service: C) -> io::Result<()> {
    let navigator = RecordedNavigator::default();
    let controller = ResetFlowController::new(service, ConsoleNotifier, navigator.clone());

    let email = prompt("Email: ")?;
    let mut otp;
    loop {
        otp = prompt("OTP: ")?;
        if controller.verify_otp(&otp).await == ResetPhase::OtpVerified {
            break;
        }
        println!("The code from the email has at least {MIN_OTP_LEN} characters.");
    }

    loop {
        let new_password = rpassword::prompt_password("New password: ")?;
        let confirm_password = rpassword::prompt_password("Confirm password: ")?;
        controller
            .submit_reset(&email, &otp, &new_password, &confirm_password)
            .await;
        if navigator.take() == Some(Route::SignIn) {
            return Ok(());
        }
        if !confirm("Try again? [y/N] ")? {
            return Ok(());
        }
    }
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn confirm(label: &str) -> io::Result<bool> {
    Ok(matches!(prompt(label)?.as_str(), "y" | "Y" | "yes"))
}
