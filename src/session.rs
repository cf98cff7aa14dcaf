// Guard session
//------------------------------------------------------------------------------

/// Session context for the layer performing remote lookups.
///
/// Holds the authenticated guard's name and bearer token as an explicit
/// value the hosting application threads where needed. The interpretation
/// pipeline itself is stateless and never sees this object. `clear` is the
/// logout teardown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuardSession {
    guard_name: Option<String>,
    token: Option<String>,
}

impl GuardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authorize(&mut self, guard_name: impl Into<String>, token: impl Into<String>) {
        self.guard_name = Some(guard_name.into());
        self.token = Some(token.into());
    }

    pub fn clear(&mut self) {
        self.guard_name = None;
        self.token = None;
    }

    pub fn is_authorized(&self) -> bool {
        self.token.is_some()
    }

    pub fn guard_name(&self) -> Option<&str> {
        self.guard_name.as_deref()
    }

    /// `Authorization` header value, when a token is held.
    pub fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {token}"))
    }
}

#[cfg(test)]
mod session_tests {
    use super::GuardSession;

    #[test]
    fn test_authorize_and_clear() {
        let mut session = GuardSession::new();
        assert!(!session.is_authorized());
        assert_eq!(session.auth_header(), None);

        session.authorize("Amadou Diallo", "tok-123");
        assert!(session.is_authorized());
        assert_eq!(session.guard_name(), Some("Amadou Diallo"));
        assert_eq!(session.auth_header().as_deref(), Some("Bearer tok-123"));

        session.clear();
        assert!(!session.is_authorized());
        assert_eq!(session.guard_name(), None);
    }
}
