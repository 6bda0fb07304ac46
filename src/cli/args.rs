//! CLI argument definitions.

use clap::Parser;

/// Guide for packaging a React Native app as an Android APK.
///
/// Checks the local toolchain, looks for package.json one directory above
/// this executable and explains the chosen build route.
#[derive(Debug, Parser)]
#[command(name = "app-packager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
