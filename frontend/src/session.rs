//! Client-side session lifecycle.
//!
//! The state machine is `Initializing → {Authenticated, Unauthenticated}`,
//! with `Authenticated → Unauthenticated` on logout or a failed
//! re-verification. The in-memory flags never survive a reload; only the
//! stored token does, and it has to pass verification again on the next
//! mount.
//!
//! `Session` is a plain value owned by the root component and handed to
//! children through their properties — there is no ambient global to reach
//! for, which is also what keeps these transitions unit-testable.

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Mount-time: a stored token (if any) is being verified.
    Initializing,
    Unauthenticated,
    Authenticated { email: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub state: SessionState,
    /// Present exactly while `state` is `Authenticated`.
    pub token: Option<String>,
    /// A login round-trip is in flight.
    pub loading: bool,
    /// Message of the last failed login, cleared when a new one starts.
    pub error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Session {
            state: SessionState::Initializing,
            token: None,
            loading: false,
            error: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated { .. })
    }

    pub fn email(&self) -> Option<&str> {
        match &self.state {
            SessionState::Authenticated { email } => Some(email),
            _ => None,
        }
    }

    /// Outcome of mount-time hydration: `Some` when the stored token
    /// verified, `None` when there was no token or it failed.
    pub fn hydrated(&mut self, outcome: Option<(String, String)>) {
        match outcome {
            Some((token, email)) => {
                self.state = SessionState::Authenticated { email };
                self.token = Some(token);
            }
            None => {
                self.state = SessionState::Unauthenticated;
                self.token = None;
            }
        }
    }

    pub fn begin_login(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn login_succeeded(&mut self, token: String, email: String) {
        self.loading = false;
        self.error = None;
        self.token = Some(token);
        self.state = SessionState::Authenticated { email };
    }

    pub fn login_failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
        self.token = None;
        self.state = SessionState::Unauthenticated;
    }

    pub fn logged_out(&mut self) {
        self.loading = false;
        self.error = None;
        self.token = None;
        self.state = SessionState::Unauthenticated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_initializing() {
        let session = Session::new();
        assert_eq!(session.state, SessionState::Initializing);
        assert!(!session.is_authenticated());
        assert!(session.token.is_none());
    }

    #[test]
    fn hydration_with_verified_token_authenticates() {
        let mut session = Session::new();
        session.hydrated(Some(("tok".to_string(), "admin@example.com".to_string())));
        assert!(session.is_authenticated());
        assert_eq!(session.email(), Some("admin@example.com"));
        assert_eq!(session.token.as_deref(), Some("tok"));
    }

    #[test]
    fn hydration_without_token_goes_unauthenticated() {
        let mut session = Session::new();
        session.hydrated(None);
        assert_eq!(session.state, SessionState::Unauthenticated);
        assert!(session.token.is_none());
    }

    #[test]
    fn login_clears_previous_error_and_sets_loading() {
        let mut session = Session::new();
        session.hydrated(None);
        session.login_failed("Incorrect email or password".to_string());
        assert_eq!(
            session.error.as_deref(),
            Some("Incorrect email or password")
        );

        session.begin_login();
        assert!(session.loading);
        assert!(session.error.is_none());

        session.login_succeeded("tok".to_string(), "admin@example.com".to_string());
        assert!(!session.loading);
        assert!(session.is_authenticated());
    }

    #[test]
    fn failed_login_stays_unauthenticated_and_stops_loading() {
        let mut session = Session::new();
        session.hydrated(None);
        session.begin_login();
        session.login_failed("boom".to_string());
        assert!(!session.loading);
        assert!(!session.is_authenticated());
        assert_eq!(session.error.as_deref(), Some("boom"));
    }

    #[test]
    fn logout_resets_everything() {
        let mut session = Session::new();
        session.hydrated(Some(("tok".to_string(), "a@b.c".to_string())));
        session.logged_out();
        assert_eq!(session.state, SessionState::Unauthenticated);
        assert!(session.token.is_none());
        assert!(session.error.is_none());
    }
}
