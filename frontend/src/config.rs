use log::Level;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

/// Fraction of a target's area that must be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.2;

// Markers the page markup and stylesheet agree on.
pub const SECTION_TITLE: &str = ".section-title";
pub const REVEAL_TARGET: &str = ".reveal-up";
pub const FEATURE_TITLE: &str = ".feature-title";
pub const REVEAL_CLASS: &str = "reveal-up";
pub const IN_VIEW_CLASS: &str = "in-view";

pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";

pub const CONTACT_FORM_ID: &str = "contactForm";
pub const FORM_ALERT_ID: &str = "formAlert";
pub const HIDDEN_CLASS: &str = "d-none";

pub const FOOTER_MOUNT_ID: &str = "app-footer";
pub const YEAR_ID: &str = "y";

pub const PRODUCT_CARD: &str = ".product-card";
pub const PRODUCT_EXTRA: &str = ".product-extra";
pub const OPEN_CLASS: &str = "is-open";
pub const PRODUCT_TOGGLE: &str = "[data-toggle=\"product-more\"]";
pub const ALT_LABEL_ATTR: &str = "data-alt";
pub const CACHED_LABEL_ATTR: &str = "data-tmp";
