//! Assemble the distribution folder from a manifest. Exits non-zero on any copy failure.

use clap::Parser;
use led_configurator::dist::{package, Manifest};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Copy release artifacts into the distribution folder")]
struct Args {
    /// Packaging manifest (TOML with [[artifact]] entries).
    #[arg(long, default_value = "dist.toml")]
    manifest: PathBuf,

    /// Output folder; overrides `out` from the manifest.
    #[arg(long, env = "DIST_OUT")]
    out: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let manifest = match Manifest::load(&args.manifest) {
        Ok(m) => m,
        Err(e) => {
            tracing::error!(error = %e, "failed to load manifest");
            return ExitCode::FAILURE;
        }
    };
    let base_dir = args.manifest.parent().unwrap_or_else(|| Path::new("."));
    let out = args.out.unwrap_or_else(|| manifest.out.clone());

    match package(&manifest, base_dir, &out) {
        Ok(copied) => {
            tracing::info!(artifacts = copied.len(), out = %out.display(), "distribution ready");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "packaging failed");
            ExitCode::FAILURE
        }
    }
}
