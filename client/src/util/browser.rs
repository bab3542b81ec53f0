//! Blocking browser dialogs. No-ops outside the browser.

/// Show a modal `alert()` with `message`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_err() {
                log::warn!("alert suppressed: {message}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
