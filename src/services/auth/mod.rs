// Session boundary
// The identity provider itself lives outside this crate; only its failure codes
// and the signed-in/out state cross into the calendar.

use std::fmt;
use std::str::FromStr;

pub const DEFAULT_AUTH_ERROR_MESSAGE: &str = "An error occurred during authentication.";
pub const SIGN_OUT_FAILED_MESSAGE: &str = "Failed to sign out. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthErrorCode {
    UserNotFound,
    WrongPassword,
    EmailAlreadyInUse,
    WeakPassword,
    InvalidEmail,
    PopupClosedByUser,
    CancelledPopupRequest,
}

impl AuthErrorCode {
    pub const ALL: [AuthErrorCode; 7] = [
        Self::UserNotFound,
        Self::WrongPassword,
        Self::EmailAlreadyInUse,
        Self::WeakPassword,
        Self::InvalidEmail,
        Self::PopupClosedByUser,
        Self::CancelledPopupRequest,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound => "auth/user-not-found",
            Self::WrongPassword => "auth/wrong-password",
            Self::EmailAlreadyInUse => "auth/email-already-in-use",
            Self::WeakPassword => "auth/weak-password",
            Self::InvalidEmail => "auth/invalid-email",
            Self::PopupClosedByUser => "auth/popup-closed-by-user",
            Self::CancelledPopupRequest => "auth/cancelled-popup-request",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|known| known.code() == code)
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::UserNotFound => "No account found with this email address.",
            Self::WrongPassword => "Incorrect password.",
            Self::EmailAlreadyInUse => "An account with this email already exists.",
            Self::WeakPassword => "Password should be at least 6 characters.",
            Self::InvalidEmail => "Invalid email address.",
            Self::PopupClosedByUser => "Sign-in popup was closed before completing.",
            Self::CancelledPopupRequest => "Sign-in was cancelled.",
        }
    }
}

impl fmt::Display for AuthErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for AuthErrorCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("Unknown auth error code: {}", s))
    }
}

/// User-facing message for a provider failure.
///
/// Known codes map to a fixed message. Anything else shows the provider's own
/// message when it has one.
pub fn auth_error_message(code: &str, provider_message: Option<&str>) -> String {
    if let Some(known) = AuthErrorCode::from_code(code) {
        return known.message().to_string();
    }

    match provider_message.map(str::trim).filter(|m| !m.is_empty()) {
        Some(message) => message.to_string(),
        None => DEFAULT_AUTH_ERROR_MESSAGE.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub display_name: String,
    pub email: Option<String>,
}

impl Session {
    pub fn new(user_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Local session for the account running the desktop app.
    pub fn from_os_user() -> Self {
        let name = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .ok()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "local".to_string());
        Self::new(format!("local:{}", name), name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Loading,
    SignedOut,
    SignedIn(Session),
}

impl SessionState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::SignedIn(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.session().is_some()
    }

    pub fn sign_in(&mut self, session: Session) {
        log::info!("Signed in as {}", session.display_name);
        *self = Self::SignedIn(session);
    }

    pub fn sign_out(&mut self) {
        if let Self::SignedIn(session) = self {
            log::info!("Signed out {}", session.display_name);
        }
        *self = Self::SignedOut;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("auth/user-not-found", "No account found with this email address.")]
    #[test_case("auth/wrong-password", "Incorrect password.")]
    #[test_case("auth/email-already-in-use", "An account with this email already exists.")]
    #[test_case("auth/weak-password", "Password should be at least 6 characters.")]
    #[test_case("auth/invalid-email", "Invalid email address.")]
    #[test_case("auth/popup-closed-by-user", "Sign-in popup was closed before completing.")]
    #[test_case("auth/cancelled-popup-request", "Sign-in was cancelled.")]
    fn test_known_codes(code: &str, expected: &str) {
        assert_eq!(auth_error_message(code, Some("provider text")), expected);
        assert_eq!(code.parse::<AuthErrorCode>().unwrap().code(), code);
    }

    #[test]
    fn test_unknown_code_uses_provider_message() {
        assert_eq!(
            auth_error_message("auth/network-request-failed", Some("Network down")),
            "Network down"
        );
    }

    #[test]
    fn test_unknown_code_without_message() {
        assert_eq!(auth_error_message("auth/other", None), DEFAULT_AUTH_ERROR_MESSAGE);
        assert_eq!(auth_error_message("auth/other", Some("  ")), DEFAULT_AUTH_ERROR_MESSAGE);
    }

    #[test]
    fn test_session_state_transitions() {
        let mut state = SessionState::default();
        assert_eq!(state, SessionState::Loading);
        assert!(!state.is_signed_in());

        state.sign_in(Session::new("u1", "Ada").with_email("ada@example.com"));
        assert_eq!(state.session().unwrap().email.as_deref(), Some("ada@example.com"));

        state.sign_out();
        assert_eq!(state, SessionState::SignedOut);
    }

    #[test]
    fn test_os_user_session_has_name() {
        let session = Session::from_os_user();
        assert!(!session.display_name.is_empty());
        assert!(session.user_id.starts_with("local:"));
    }
}
