//! Terminal output helpers.
//!
//! Status lines go to stderr so that `kiln show` output on stdout stays
//! machine-readable.

mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use messages::{error, info, success, warning};

static COLORS: AtomicBool = AtomicBool::new(true);
static QUIET: AtomicBool = AtomicBool::new(false);

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr() && console::Term::stderr().features().colors_supported()
}

/// Configure status output once at startup.
///
/// # Arguments
///
/// * `quiet` - Hide everything but errors
/// * `no_color` - Disable colors regardless of terminal detection
///
/// # Examples
///
/// ```no_run
/// use kiln_cli::ui;
///
/// ui::init(false, true);
/// ui::info("plain text, no colors");
/// ```
pub fn init(quiet: bool, no_color: bool) {
    COLORS.store(!no_color && should_use_color(), Ordering::Relaxed);
    QUIET.store(quiet, Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

pub(crate) fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_applies_flags() {
        init(true, true);
        assert!(!colors_enabled());
        assert!(quiet());
        init(false, true);
        assert!(!quiet());
    }
}
