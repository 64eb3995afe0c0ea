//! Environment variable keys and aliases.
//!
//! Primary keys use the `VIZ360_*` prefix; aliases are checked in order.

/// Public asset tree
pub mod paths {
    pub const VIZ360_PUBLIC_DIR: &str = "VIZ360_PUBLIC_DIR";
    pub const PUBLIC_DIR_ALIASES: &[&str] = &["PUBLIC_DIR"];
}

/// Light classification policy
pub mod classification {
    /// Comma-separated substrings that mark a light as daylight-linked.
    pub const VIZ360_DAYLIGHT_KEYWORDS: &str = "VIZ360_DAYLIGHT_KEYWORDS";
}

/// Logging and audit trail
pub mod observability {
    pub const VIZ360_QUIET: &str = "VIZ360_QUIET";

    pub const VIZ360_LOG_LEVEL: &str = "VIZ360_LOG_LEVEL";

    pub const VIZ360_LOG_JSON: &str = "VIZ360_LOG_JSON";

    pub const VIZ360_AUDIT_LOG: &str = "VIZ360_AUDIT_LOG";
}
