//! The environment advisor.
//!
//! One [`Advisor::run`] is one session: print the banner, report the
//! runtime and npm versions, look for `package.json` next to the
//! executable's directory, then ask which packaging route to explain.
//!
//! # Example
//!
//! ```
//! use app_packager::advisor::{Advisor, BuildOption, ProjectLayout, SessionOutcome};
//! use app_packager::ui::MockUI;
//!
//! let project = tempfile::TempDir::new().unwrap();
//! std::fs::write(project.path().join("package.json"), "{}").unwrap();
//! let layout = ProjectLayout::from_executable(&project.path().join("bin/app-packager")).unwrap();
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("choice", "2");
//!
//! let session = Advisor::new(layout)
//!     .with_tool_command("echo 10.2.4")
//!     .run(&mut ui)
//!     .unwrap();
//!
//! assert_eq!(session.tool_version.as_deref(), Some("10.2.4"));
//! assert_eq!(session.outcome, SessionOutcome::Guided(BuildOption::LocalSdk));
//! ```

pub mod guides;
pub mod project;

pub use guides::BuildOption;
pub use project::{ProjectLayout, MANIFEST_FILE};

use std::path::PathBuf;

use crate::error::Result;
use crate::shell::query_version;
use crate::ui::{Prompt, UserInterface};

/// Tool whose version is reported.
pub const TOOL_NAME: &str = "npm";

/// Command used to query the tool version.
pub const DEFAULT_TOOL_COMMAND: &str = "npm --version";

/// Prompt key for the menu answer.
pub const CHOICE_PROMPT_KEY: &str = "choice";

const BANNER_TITLE: &str = "NNRG Connect App Packager";
const BANNER_RULE: &str = "==========================";
const INVALID_CHOICE: &str =
    "Invalid choice. Please run the script again and select a valid option.";

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// No manifest at the computed path; the menu was never shown.
    ManifestMissing,
    /// A valid choice was made and its instructions printed.
    Guided(BuildOption),
    /// The answer matched no option.
    InvalidChoice(String),
}

/// What one session observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Identifier of the running program and platform.
    pub runtime_version: String,
    /// Trimmed tool output, or `None` when the probe failed.
    pub tool_version: Option<String>,
    /// Path checked for the manifest.
    pub manifest_path: PathBuf,
    /// How the session ended.
    pub outcome: SessionOutcome,
}

/// Walks the user through the packaging checks and options.
#[derive(Debug, Clone)]
pub struct Advisor {
    layout: ProjectLayout,
    tool_command: String,
}

impl Advisor {
    /// Create an advisor for a project layout.
    pub fn new(layout: ProjectLayout) -> Self {
        Self {
            layout,
            tool_command: DEFAULT_TOOL_COMMAND.to_string(),
        }
    }

    /// Replace the tool version command.
    pub fn with_tool_command(mut self, command: &str) -> Self {
        self.tool_command = command.to_string();
        self
    }

    /// Run one session.
    ///
    /// Tool probe failures and a missing manifest are reported to the user
    /// and never returned as errors. Only console I/O errors from the
    /// prompt propagate.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<Session> {
        ui.show_header(BANNER_TITLE);
        ui.message(BANNER_RULE);
        ui.message("This script will help you package your React Native app as an APK.");

        ui.message("Checking runtime installation...");
        let runtime_version = runtime_version();
        ui.message(&format!("Runtime version: {}", runtime_version));

        let tool_version = self.check_tool(ui);

        ui.message("Checking React Native project...");
        let manifest_path = self.layout.manifest_path().to_path_buf();
        tracing::debug!("Project root resolved to {}", self.layout.root().display());

        if !self.layout.manifest_exists() {
            ui.message(&format!(
                "{} not found at {}",
                MANIFEST_FILE,
                manifest_path.display()
            ));
            return Ok(Session {
                runtime_version,
                tool_version,
                manifest_path,
                outcome: SessionOutcome::ManifestMissing,
            });
        }
        ui.message(&format!(
            "Found {} at {}",
            MANIFEST_FILE,
            manifest_path.display()
        ));

        show_menu(ui);
        ui.message("");
        let choice = ui.prompt(&Prompt::new(CHOICE_PROMPT_KEY, "Enter your choice (1-3)"))?;

        let outcome = match BuildOption::from_choice(&choice) {
            Some(option) => {
                tracing::debug!("Showing instructions for {}", option);
                show_instructions(ui, option);
                SessionOutcome::Guided(option)
            }
            None => {
                tracing::debug!("Unrecognized choice {:?}", choice);
                ui.message(INVALID_CHOICE);
                SessionOutcome::InvalidChoice(choice)
            }
        };

        Ok(Session {
            runtime_version,
            tool_version,
            manifest_path,
            outcome,
        })
    }

    fn check_tool(&self, ui: &mut dyn UserInterface) -> Option<String> {
        ui.message(&format!("Checking {} installation...", TOOL_NAME));
        match query_version(&self.tool_command) {
            Ok(version) => {
                ui.message(&format!("{} version: {}", TOOL_NAME, version));
                Some(version)
            }
            Err(e) => {
                tracing::debug!("Tool probe failed: {:?}", e);
                ui.error(&format!("Error checking {}: {}", TOOL_NAME, e));
                ui.warning(&format!(
                    "{} detection failed, but we'll continue anyway.",
                    TOOL_NAME
                ));
                None
            }
        }
    }
}

/// Name, version and platform of the running program.
pub fn runtime_version() -> String {
    format!(
        "{} {} ({} {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

fn show_menu(ui: &mut dyn UserInterface) {
    ui.message("");
    ui.message("To build an APK for your React Native app, you have several options:");
    ui.message("");
    for option in BuildOption::ALL {
        ui.message(&format!("{}. {}", option.key(), option.menu_label()));
    }
}

fn show_instructions(ui: &mut dyn UserInterface, option: BuildOption) {
    ui.message("");
    ui.message(option.heading());
    for step in option.numbered_steps() {
        ui.message(&step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const WORKING_TOOL: &str = "echo 10.2.4";
    const BROKEN_TOOL: &str = "app-packager-missing-tool --version";

    fn project(with_manifest: bool) -> (TempDir, ProjectLayout) {
        let temp = TempDir::new().unwrap();
        if with_manifest {
            fs::write(temp.path().join("package.json"), "{}").unwrap();
        }
        let layout =
            ProjectLayout::from_executable(&temp.path().join("bin").join("app-packager")).unwrap();
        (temp, layout)
    }

    fn run_with(choice: Option<&str>, with_manifest: bool, tool: &str) -> (MockUI, Session) {
        let (_temp, layout) = project(with_manifest);
        let mut ui = MockUI::new();
        if let Some(choice) = choice {
            ui.set_prompt_response(CHOICE_PROMPT_KEY, choice);
        }
        let session = Advisor::new(layout)
            .with_tool_command(tool)
            .run(&mut ui)
            .unwrap();
        (ui, session)
    }

    fn tail(ui: &MockUI, n: usize) -> Vec<String> {
        let lines = ui.transcript();
        lines[lines.len() - n..].to_vec()
    }

    fn block_headings_shown(ui: &MockUI) -> usize {
        let mut count = BuildOption::ALL
            .iter()
            .filter(|o| ui.transcript().iter().any(|l| l == o.heading()))
            .count();
        if ui.has_message(INVALID_CHOICE) {
            count += 1;
        }
        count
    }

    #[test]
    fn banner_comes_first() {
        let (ui, _) = run_with(Some("1"), true, WORKING_TOOL);
        assert_eq!(ui.headers(), [BANNER_TITLE]);
        assert_eq!(ui.transcript()[0], BANNER_TITLE);
        assert_eq!(ui.transcript()[1], BANNER_RULE);
    }

    #[test]
    fn runtime_version_is_reported() {
        let (ui, session) = run_with(Some("1"), true, WORKING_TOOL);
        assert!(session.runtime_version.contains(env!("CARGO_PKG_VERSION")));
        assert!(ui.has_message(&format!("Runtime version: {}", session.runtime_version)));
    }

    #[test]
    fn choice_one_ends_with_eas_block() {
        let (ui, session) = run_with(Some("1"), true, WORKING_TOOL);

        assert_eq!(session.outcome, SessionOutcome::Guided(BuildOption::EasBuild));
        let block = tail(&ui, 7);
        assert_eq!(block[0], "To use Expo EAS Build:");
        assert_eq!(block[1], "1. Make sure you have an Expo account (create one at https://expo.dev/signup)");
        assert!(block[6].starts_with("6. Once the build is complete"));
        assert_eq!(block_headings_shown(&ui), 1);
    }

    #[test]
    fn choice_two_ends_with_local_sdk_block() {
        let (ui, session) = run_with(Some("2"), true, WORKING_TOOL);

        assert_eq!(session.outcome, SessionOutcome::Guided(BuildOption::LocalSdk));
        let block = tail(&ui, 7);
        assert_eq!(block[0], "To use a local Android development environment:");
        assert_eq!(block[5], "5. Build the APK using Gradle: ./gradlew assembleRelease");
        assert_eq!(block_headings_shown(&ui), 1);
    }

    #[test]
    fn choice_three_ends_with_preview_block() {
        let (ui, session) = run_with(Some("3"), true, WORKING_TOOL);

        assert_eq!(
            session.outcome,
            SessionOutcome::Guided(BuildOption::CloudPreview)
        );
        let block = tail(&ui, 5);
        assert_eq!(block[0], "To use a cloud build service like Appetize.io:");
        assert_eq!(block[4], "4. Share the provided URL with others to test your app");
        assert_eq!(block_headings_shown(&ui), 1);
    }

    #[test]
    fn unknown_choice_prints_only_invalid_notice() {
        let (ui, session) = run_with(Some("9"), true, WORKING_TOOL);

        assert_eq!(session.outcome, SessionOutcome::InvalidChoice("9".into()));
        assert_eq!(ui.transcript().last().unwrap(), INVALID_CHOICE);
        assert_eq!(block_headings_shown(&ui), 1);
    }

    #[test]
    fn empty_choice_is_invalid() {
        let (ui, session) = run_with(None, true, WORKING_TOOL);

        assert_eq!(session.outcome, SessionOutcome::InvalidChoice(String::new()));
        assert_eq!(ui.transcript().last().unwrap(), INVALID_CHOICE);
    }

    #[test]
    fn padded_choice_is_invalid() {
        let (_, session) = run_with(Some(" 2"), true, WORKING_TOOL);
        assert_eq!(session.outcome, SessionOutcome::InvalidChoice(" 2".into()));
    }

    #[test]
    fn missing_manifest_stops_before_menu() {
        let (temp, layout) = project(false);
        let mut ui = MockUI::new();
        ui.set_prompt_response(CHOICE_PROMPT_KEY, "1");

        let session = Advisor::new(layout)
            .with_tool_command(WORKING_TOOL)
            .run(&mut ui)
            .unwrap();

        assert_eq!(session.outcome, SessionOutcome::ManifestMissing);
        assert!(ui.prompts_shown().is_empty());
        let expected = format!(
            "package.json not found at {}",
            temp.path().join("package.json").display()
        );
        assert_eq!(ui.transcript().last().unwrap(), &expected);
        assert!(!ui.has_message("several options"));
        assert_eq!(block_headings_shown(&ui), 0);
    }

    #[test]
    fn present_manifest_is_reported_and_prompt_reached() {
        let (temp, layout) = project(true);
        let mut ui = MockUI::new();

        let session = Advisor::new(layout)
            .with_tool_command(WORKING_TOOL)
            .run(&mut ui)
            .unwrap();

        assert_eq!(session.manifest_path, temp.path().join("package.json"));
        assert!(ui.has_message(&format!(
            "Found package.json at {}",
            temp.path().join("package.json").display()
        )));
        assert_eq!(ui.prompts_shown(), [CHOICE_PROMPT_KEY]);
    }

    #[test]
    fn tool_version_is_printed() {
        let (ui, session) = run_with(Some("1"), true, WORKING_TOOL);

        assert_eq!(session.tool_version.as_deref(), Some("10.2.4"));
        assert!(ui.has_message("npm version: 10.2.4"));
        assert!(ui.errors().is_empty());
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn tool_failure_adds_diagnostics_and_continues() {
        let (ui, session) = run_with(Some("3"), true, BROKEN_TOOL);

        assert_eq!(session.tool_version, None);
        assert_eq!(ui.errors().len(), 1);
        assert!(ui.errors()[0].starts_with("Error checking npm: "));
        assert!(ui.has_warning("npm detection failed, but we'll continue anyway."));
        assert_eq!(
            session.outcome,
            SessionOutcome::Guided(BuildOption::CloudPreview)
        );
        assert_eq!(ui.prompts_shown(), [CHOICE_PROMPT_KEY]);
    }

    #[test]
    fn tool_failure_only_adds_diagnostic_lines() {
        let (ok_ui, _) = run_with(Some("2"), true, WORKING_TOOL);
        let (failed_ui, _) = run_with(Some("2"), true, BROKEN_TOOL);

        let strip = |ui: &MockUI| -> Vec<String> {
            ui.transcript()
                .iter()
                .filter(|l| !l.starts_with("npm version:"))
                .filter(|l| !l.starts_with("Error checking npm:"))
                .filter(|l| !l.starts_with("npm detection failed"))
                .filter(|l| !l.starts_with("Found package.json"))
                .cloned()
                .collect()
        };
        assert_eq!(strip(&ok_ui), strip(&failed_ui));
        assert_eq!(failed_ui.transcript().len(), ok_ui.transcript().len() + 1);
    }

    #[test]
    fn nonzero_tool_exit_is_a_failure() {
        let (ui, session) = run_with(Some("1"), true, "exit 2");
        assert_eq!(session.tool_version, None);
        assert!(ui.has_error("exit code Some(2)"));
    }

    #[test]
    fn menu_lists_three_options() {
        let (ui, _) = run_with(Some("1"), true, WORKING_TOOL);
        assert!(ui.has_message("1. Use Expo EAS Build (requires an Expo account)"));
        assert!(ui.has_message(
            "2. Use a local Android development environment (requires Android SDK)"
        ));
        assert!(ui.has_message("3. Use a cloud build service like Appetize.io"));
    }
}
