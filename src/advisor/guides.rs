//! The three packaging routes offered by the menu.

use std::fmt;

/// A packaging route the user can choose from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOption {
    /// Expo's hosted EAS Build service.
    EasBuild,
    /// A local Android SDK and Gradle toolchain.
    LocalSdk,
    /// A hosted preview service such as Appetize.io.
    CloudPreview,
}

impl BuildOption {
    /// All options in menu order.
    pub const ALL: [BuildOption; 3] = [Self::EasBuild, Self::LocalSdk, Self::CloudPreview];

    /// Match a menu answer exactly. `" 1"` or `"1 "` are not matches.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Self::EasBuild),
            "2" => Some(Self::LocalSdk),
            "3" => Some(Self::CloudPreview),
            _ => None,
        }
    }

    /// The menu key that selects this option.
    pub fn key(&self) -> &'static str {
        match self {
            Self::EasBuild => "1",
            Self::LocalSdk => "2",
            Self::CloudPreview => "3",
        }
    }

    /// Menu line describing this option.
    pub fn menu_label(&self) -> &'static str {
        match self {
            Self::EasBuild => "Use Expo EAS Build (requires an Expo account)",
            Self::LocalSdk => {
                "Use a local Android development environment (requires Android SDK)"
            }
            Self::CloudPreview => "Use a cloud build service like Appetize.io",
        }
    }

    /// First line of the instruction block.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::EasBuild => "To use Expo EAS Build:",
            Self::LocalSdk => "To use a local Android development environment:",
            Self::CloudPreview => "To use a cloud build service like Appetize.io:",
        }
    }

    /// Numbered steps, without their numbers.
    pub fn steps(&self) -> &'static [&'static str] {
        match self {
            Self::EasBuild => &[
                "Make sure you have an Expo account (create one at https://expo.dev/signup)",
                "Install the EAS CLI: npm install -g eas-cli",
                "Log in to your Expo account: eas login",
                "Configure your build: eas build:configure",
                "Build the APK: eas build -p android --profile preview",
                "Once the build is complete, you can download the APK from the provided URL.",
            ],
            Self::LocalSdk => &[
                "Install Android Studio from https://developer.android.com/studio",
                "Set up the Android SDK and environment variables",
                "Generate native Android project files: npx expo prebuild -p android",
                "Navigate to the Android directory: cd android",
                "Build the APK using Gradle: ./gradlew assembleRelease",
                "The APK will be available at: android/app/build/outputs/apk/release/app-release.apk",
            ],
            Self::CloudPreview => &[
                "Create an account on Appetize.io",
                "Build a development version of your app: npx expo start --dev-client",
                "Upload your app to Appetize.io",
                "Share the provided URL with others to test your app",
            ],
        }
    }

    /// Steps formatted as `"<n>. <step>"` lines.
    pub fn numbered_steps(&self) -> Vec<String> {
        self.steps()
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, step))
            .collect()
    }
}

impl fmt::Display for BuildOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EasBuild => "eas-build",
            Self::LocalSdk => "local-sdk",
            Self::CloudPreview => "cloud-preview",
        };
        write!(f, "{}", name)
    }
}
