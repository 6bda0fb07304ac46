//! app-packager - Interactive guide for packaging a React Native app as an APK.
//!
//! The packager reports the runtime and npm versions, checks that
//! `package.json` sits one directory above the executable, and prints
//! step-by-step instructions for the build route the user picks.
//!
//! # Modules
//!
//! - [`advisor`] - The check-and-guide session and its build options
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Shell command execution for version probes
//! - [`ui`] - Terminal output and prompts
//!
//! # Example
//!
//! ```
//! use app_packager::advisor::BuildOption;
//!
//! let option = BuildOption::from_choice("1").unwrap();
//! assert_eq!(option.heading(), "To use Expo EAS Build:");
//! assert_eq!(option.steps().len(), 6);
//! ```

pub mod advisor;
pub mod cli;
pub mod error;
pub mod shell;
pub mod ui;

pub use error::{PackagerError, Result};
