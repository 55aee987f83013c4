//! Blocking browser alerts and confirmations for action outcomes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submission and training results are reported with `window.alert`, matching
//! the one-shot, user-acknowledged feedback the intake flow expects. On the
//! server the message is dropped.

/// Show `message` in a blocking alert dialog.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        log::debug!("alert: {message}");
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Ask the user to confirm `message`; always declines outside the browser.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
