//! Opt-in corruption of generated fields.
//!
//! Demo datasets are more useful for testing cleaning pipelines when a known
//! fraction of fields is broken: out-of-domain prices and quantities,
//! "Invalid ..." labels, dangling reference ids, future birth dates. Each
//! corruptible field rolls independently at the configured rate. The default
//! rate is 0.0, which leaves every invariant of the clean generator intact.

use crate::provider::RandomProvider;

/// Corruption settings for a generation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirtyConfig {
    /// Per-field probability of replacing the clean value, in `[0, 1]`.
    pub rate: f64,
}

impl DirtyConfig {
    /// No corruption at all.
    pub const OFF: DirtyConfig = DirtyConfig { rate: 0.0 };

    /// Create a config with the given per-field rate.
    pub fn new(rate: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&rate),
            "dirty rate must be in [0, 1], got {rate}"
        );
        Self { rate }
    }

    pub fn enabled(&self) -> bool {
        self.rate > 0.0
    }
}

impl Default for DirtyConfig {
    fn default() -> Self {
        Self::OFF
    }
}

/// Return the clean value, or the field's invalid form at the configured rate.
pub fn corrupt<T>(
    rng: &mut RandomProvider,
    dirty: &DirtyConfig,
    clean: T,
    invalid: impl FnOnce(&mut RandomProvider) -> T,
) -> T {
    if dirty.enabled() && rng.chance(dirty.rate) {
        invalid(rng)
    } else {
        clean
    }
}

/// Dangling reference id: `"invalid-<kind>-<n>"`.
pub fn invalid_ref(rng: &mut RandomProvider, kind: &str) -> String {
    format!("invalid-{kind}-{}", rng.int_range(1, 1000))
}

/// Broken label: `"Invalid <what> <n>"`.
pub fn invalid_label(rng: &mut RandomProvider, what: &str) -> String {
    format!("Invalid {what} {}", rng.int_range(1, 1000))
}
