//! Authored setup guide content.
//!
//! The outline is static data: platform → sections → steps. Step ids are
//! unique within a platform and the declared order is the walking order.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SetupPlatform {
    #[default]
    Mac,
    Windows,
}

impl SetupPlatform {
    pub const ALL: [SetupPlatform; 2] = [SetupPlatform::Mac, SetupPlatform::Windows];

    pub fn display_name(&self) -> &'static str {
        match self {
            SetupPlatform::Mac => "Mac",
            SetupPlatform::Windows => "Windows",
        }
    }

    pub fn outline(&self) -> &'static [SetupSection] {
        match self {
            SetupPlatform::Mac => MAC_SETUP,
            SetupPlatform::Windows => WINDOWS_SETUP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepImage {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SetupStep {
    pub id: &'static str,
    pub label: &'static str,
    /// May contain inline HTML; render through [`crate::sanitize::sanitize`].
    pub description: &'static str,
    pub images: &'static [StepImage],
    pub estimated_time: Option<&'static str>,
    pub command: Option<&'static str>,
    pub troubleshooting: Option<&'static str>,
    pub tips: &'static [&'static str],
}

impl SetupStep {
    /// Case-insensitive substring match on label or description.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.label.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SetupSection {
    pub title: &'static str,
    pub steps: &'static [SetupStep],
}

const UNSIGNED_MAC: &str = "macOS shows an error if you double click the app. Right click it and \
press 'Open' instead. Samwise is open source and free; a developer signature is expensive, which \
is why the warning appears.";

const STEP: SetupStep = SetupStep {
    id: "",
    label: "",
    description: "",
    images: &[],
    estimated_time: None,
    command: None,
    troubleshooting: None,
    tips: &[],
};

pub static MAC_SETUP: &[SetupSection] = &[
    SetupSection {
        title: "Installation",
        steps: &[
            SetupStep {
                id: "mac-download",
                label: "Downloading the Installer",
                description: "After you enter your email, the download starts automatically.",
                images: &[
                    StepImage { src: "/setup/mac/step1.png", alt: "Download page" },
                    StepImage { src: "/setup/mac/step1b.png", alt: "Download progress" },
                ],
                tips: &["macOS 10.15 or later is required"],
                ..STEP
            },
            SetupStep {
                id: "mac-install",
                label: "Install from the binary",
                description: "Once the download completes, install the package. Right click it and \
press Open. macOS may warn about the developer signature. We are open source; have a look at our \
<a href=\"https://github.com/chandeldivyam/samwise\">codebase</a> if you have security concerns.",
                images: &[
                    StepImage { src: "/setup/mac/step2a.png", alt: "Unsigned Error in installation" },
                    StepImage { src: "/setup/mac/step2b.png", alt: "Right click to open to bypass the setting" },
                    StepImage { src: "/setup/mac/step2c.png", alt: "Unverified Open" },
                    StepImage { src: "/setup/mac/step2d.png", alt: "Drag and drop to Application folder to install" },
                ],
                troubleshooting: Some(UNSIGNED_MAC),
                ..STEP
            },
            SetupStep {
                id: "mac-open",
                label: "Run the application",
                description: "The first time, start the application with Right Click and 'Open' \
in the Applications folder.",
                images: &[
                    StepImage { src: "/setup/mac/step3a.png", alt: "Unsigned Error in installation" },
                    StepImage { src: "/setup/mac/step3b.png", alt: "Right click to open" },
                    StepImage { src: "/setup/mac/step3c.png", alt: "Default home page for samwise" },
                ],
                troubleshooting: Some(UNSIGNED_MAC),
                ..STEP
            },
        ],
    },
    SetupSection {
        title: "Setup For Transcription",
        steps: &[
            SetupStep {
                id: "download-whisper-model",
                label: "Opensource Models",
                description: "Congratulations! You are set for the next steps: preparing the \
application for high quality transcription. Once the application starts, it downloads the open \
source 'whisper' model.",
                images: &[StepImage { src: "/setup/mac/step4a.png", alt: "Download transcription model" }],
                ..STEP
            },
            SetupStep {
                id: "samwise-access",
                label: "Permission Management",
                description: "When transcription starts, grant the application microphone and \
screen capture access. Your data never leaves your machine. Quit and reopen the app afterwards; \
this is a one time setup.",
                images: &[
                    StepImage { src: "/setup/mac/step5a.png", alt: "Microphone access" },
                    StepImage { src: "/setup/mac/step5b.png", alt: "Speaker Access" },
                    StepImage { src: "/setup/mac/step5c.png", alt: "Speaker Access" },
                    StepImage { src: "/setup/mac/step5d.png", alt: "Speaker Access" },
                    StepImage { src: "/setup/mac/step5e.png", alt: "Speaker Access" },
                ],
                ..STEP
            },
        ],
    },
    SetupSection {
        title: "Summarization and Chat",
        steps: &[SetupStep {
            id: "setup-llm",
            label: "Setup LLM",
            description: "Transcription works out of the box. For richer summaries and chat, pick \
an LLM in Settings: a local model through Ollama or a hosted service such as OpenAI or Gemini.",
            images: &[
                StepImage { src: "/setup/mac/step6a.png", alt: "Select Settings" },
                StepImage { src: "/setup/mac/step6b.png", alt: "Settings Page" },
                StepImage { src: "/setup/mac/step6c.png", alt: "Select LLM" },
                StepImage { src: "/setup/mac/step6d.png", alt: "Chat Section" },
            ],
            command: Some("ollama pull llama3.2"),
            ..STEP
        }],
    },
];

pub static WINDOWS_SETUP: &[SetupSection] = &[SetupSection {
    title: "Installation",
    steps: &[SetupStep {
        id: "windows-install",
        label: "Install from the binary",
        description: "Once the download completes, run the installer. Windows shows a security \
prompt. Samwise is open source and free for everyone; a developer signature is expensive, so it is \
not signed yet. Feel free to check the \
<a href=\"https://github.com/chandeldivyam/samwise\">source code</a>.",
        images: &[
            StepImage { src: "/setup/windows/step1a.png", alt: "Unsigned Error in installation" },
            StepImage { src: "/setup/windows/step1c.png", alt: "Unsigned Error in installation" },
            StepImage { src: "/setup/windows/step1b.png", alt: "Unsigned Error in installation" },
        ],
        troubleshooting: Some("Windows might show some security concerns. Please feel free to check our codebase."),
        ..STEP
    }],
}];

/// All steps of a platform in walking order.
pub fn flatten(outline: &'static [SetupSection]) -> impl Iterator<Item = &'static SetupStep> {
    outline.iter().flat_map(|section| section.steps.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn step_ids_are_unique_per_platform() {
        for platform in SetupPlatform::ALL {
            let mut seen = HashSet::new();
            for step in flatten(platform.outline()) {
                assert!(seen.insert(step.id), "duplicate id {}", step.id);
                assert!(!step.id.is_empty());
            }
        }
    }

    #[test]
    fn every_section_has_steps() {
        for platform in SetupPlatform::ALL {
            assert!(!platform.outline().is_empty());
            assert!(platform.outline().iter().all(|s| !s.steps.is_empty()));
        }
    }

    #[test]
    fn matching_is_case_insensitive_over_label_and_description() {
        let step = flatten(MAC_SETUP).find(|s| s.id == "samwise-access").unwrap();
        assert!(step.matches("permission"));
        assert!(step.matches("microphone"));
        assert!(!step.matches("ollama"));
    }
}
