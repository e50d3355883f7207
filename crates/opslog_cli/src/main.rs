//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `opslog_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("opslog_core ping={}", opslog_core::ping());
    println!("opslog_core version={}", opslog_core::core_version());
    println!(
        "opslog_core default_categories={}",
        opslog_core::DEFAULT_CATEGORIES.len()
    );
}
