//! Durable token storage.
//!
//! The authentication token lives under the `"token"` key in
//! `localStorage`. It is written on successful login and read back on
//! startup to restore the session. Nothing here clears it — the account
//! page has no logout path. Requires a browser environment; outside one
//! the helpers are no-ops.

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "token";

/// Read the stored authentication token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the authentication token.
///
/// Storage failures (quota, private browsing) are swallowed: the session
/// still works in memory, it just will not survive a reload.
pub fn write_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}
