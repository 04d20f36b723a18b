//! Stamps the binary with the git commit and build date shown by `--version`.

use std::env;
use std::process::Command;

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_string())
}

fn main() {
    // CI pins both values; local builds fall back to git and the clock
    let commit = env::var("SHRINKFIT_BUILD_COMMIT")
        .ok()
        .or_else(git_short_hash)
        .unwrap_or_else(|| "unknown".to_string());
    let date = env::var("SHRINKFIT_BUILD_DATE")
        .unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string());

    println!("cargo:rustc-env=SHRINKFIT_COMMIT={commit}");
    println!("cargo:rustc-env=SHRINKFIT_DATE={date}");

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=SHRINKFIT_BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=SHRINKFIT_BUILD_DATE");
}
