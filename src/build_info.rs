//! Compile-time build information.

pub const BUILD_COMMIT: &str = env!("SHRINKFIT_COMMIT");
pub const BUILD_DATE: &str = env!("SHRINKFIT_DATE");

/// One-line version string for `--version`.
pub fn version_line() -> String {
    format!(
        "shrinkfit {} ({}, built {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_COMMIT,
        BUILD_DATE
    )
}
