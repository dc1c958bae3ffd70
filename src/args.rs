//! Common CLI argument definitions.

use anyhow::Context;
use clap::Args;
use mart_generator::Profile;
use std::path::PathBuf;

/// Generation arguments shared by `generate`, `print` and `export`.
///
/// Every flag is optional; omitted flags fall back to the `--profile` file
/// (if given) and then to built-in defaults, so flags always win over the
/// profile.
#[derive(Args, Clone, Debug, Default)]
pub struct GenArgs {
    /// Number of record sets to generate, clamped to [1, 999999] (default 1)
    #[arg(long)]
    pub count: Option<u64>,

    /// Random seed for deterministic generation (same seed = same data,
    /// default 42); 0 draws a seed from OS entropy
    #[arg(long)]
    pub seed: Option<u64>,

    /// Record sets per chunk file (default 1000)
    #[arg(long)]
    pub batch_size: Option<u64>,

    /// Per-field corruption probability in [0, 1] (default 0, disabled)
    #[arg(long)]
    pub dirty_rate: Option<f64>,

    /// Root directory for job folders (default ./data)
    #[arg(long, env = "FAKEMART_OUT_DIR")]
    pub out_dir: Option<PathBuf>,

    /// YAML profile supplying defaults for the flags above
    #[arg(long, short = 'p')]
    pub profile: Option<PathBuf>,
}

/// Fully resolved generation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct GenSettings {
    pub count: u64,
    pub seed: u64,
    pub batch_size: u64,
    pub dirty_rate: f64,
    pub out_dir: PathBuf,
}

impl GenArgs {
    /// Merge flags over the profile (if any) over defaults.
    pub fn resolve(&self) -> anyhow::Result<GenSettings> {
        let profile = match &self.profile {
            Some(path) => Profile::from_file(path)
                .with_context(|| format!("Failed to load profile from {path:?}"))?,
            None => Profile::default(),
        };

        Ok(GenSettings {
            count: self.count.unwrap_or(profile.count),
            seed: self.seed.unwrap_or(profile.seed),
            batch_size: self.batch_size.unwrap_or(profile.batch_size),
            dirty_rate: self.dirty_rate.unwrap_or(profile.dirty_rate),
            out_dir: self
                .out_dir
                .clone()
                .or(profile.out_dir)
                .unwrap_or_else(|| PathBuf::from("./data")),
        })
    }
}

/// Store location for the browse/cleanup commands.
#[derive(Args, Clone, Debug)]
pub struct StoreArgs {
    /// Root directory of the job folders
    #[arg(long, default_value = "./data", env = "FAKEMART_OUT_DIR")]
    pub out_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_args_use_defaults() {
        let settings = GenArgs::default().resolve().unwrap();

        assert_eq!(settings.count, 1);
        assert_eq!(settings.seed, 42);
        assert_eq!(settings.batch_size, 1000);
        assert_eq!(settings.dirty_rate, 0.0);
        assert_eq!(settings.out_dir, PathBuf::from("./data"));
    }

    #[test]
    fn test_flags_override_profile() {
        let dir = tempfile::tempdir().unwrap();
        let profile_path = dir.path().join("profile.yaml");
        std::fs::write(&profile_path, "count: 500\nseed: 7\nbatch_size: 250\n").unwrap();

        let args = GenArgs {
            count: Some(10),
            profile: Some(profile_path),
            ..GenArgs::default()
        };
        let settings = args.resolve().unwrap();

        // Flag wins, profile fills the rest
        assert_eq!(settings.count, 10);
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.batch_size, 250);
    }

    #[test]
    fn test_missing_profile_is_an_error() {
        let args = GenArgs {
            profile: Some(PathBuf::from("/nonexistent/profile.yaml")),
            ..GenArgs::default()
        };
        assert!(args.resolve().is_err());
    }
}
