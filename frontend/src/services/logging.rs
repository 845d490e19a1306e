use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Component-tagged logging to the browser console
pub struct Logger;

impl Logger {
    /// Turn debug output on or off for the whole app
    pub fn set_debug(enabled: bool) {
        DEBUG_ENABLED.store(enabled, Ordering::Relaxed);
    }

    pub fn debug_enabled() -> bool {
        DEBUG_ENABLED.load(Ordering::Relaxed)
    }

    pub fn debug_with_component(component: &str, message: &str) {
        if Self::debug_enabled() {
            gloo::console::debug!(format_line(component, message));
        }
    }

    pub fn info_with_component(component: &str, message: &str) {
        gloo::console::info!(format_line(component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        gloo::console::warn!(format_line(component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(format_line(component, message));
    }
}

fn format_line(component: &str, message: &str) -> String {
    format!("[{}] {}", component, message)
}
