#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state shared through context by the root `App`.
///
/// `destination` is the single routing decision: it is set exactly once per
/// authentication result (role-based on login, `/dashboard` on session
/// restore) and the account page navigates wherever it points. No other
/// code path issues a post-login redirect.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub destination: Option<&'static str>,
}

impl AuthState {
    /// Whether a token is present, stored or freshly issued.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Record a successful login and decide the post-login route.
    ///
    /// An unknown role leaves `destination` unset: the token is kept but
    /// the user stays on the account page.
    pub fn apply_login(&mut self, token: String, user: User) {
        self.destination = role_route(&user.rol);
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Adopt a token restored from durable storage.
    ///
    /// No user record is available at this point, so the destination is
    /// the generic dashboard landing rather than a role route.
    pub fn restore(&mut self, token: String) {
        self.token = Some(token);
        self.destination = Some("/dashboard");
    }
}

/// Map a server-assigned role onto its landing route.
///
/// Exact string match; any unrecognized role yields `None`.
pub fn role_route(rol: &str) -> Option<&'static str> {
    match rol {
        "Admin" => Some("/admin"),
        "Cliente" => Some("/user"),
        _ => None,
    }
}
