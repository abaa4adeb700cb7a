//! Blocking user notifications.
//!
//! The account flows report three outcomes through `window.alert`:
//! registration success, a login response without a token, and the generic
//! incorrect-credentials failure. Requires a browser environment.

/// Show a blocking alert dialog with the given message.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
