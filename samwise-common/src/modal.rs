//! Download modal state machine.
//!
//! The modal is one [`ModalState`] record driven by [`ModalAction`]s. The
//! reducer never performs I/O; it returns [`ModalEffect`]s that the view layer
//! executes in order. Effect order is part of the contract: for a valid
//! submission `Navigate` always precedes `PostLead`, so the download starts
//! regardless of what happens to the lead.

use crate::APPLICATION_NAME;
use crate::analytics::CaptureEvent;
use crate::lead::{LeadRequest, is_valid_email};
use crate::release::{Platform, PlatformAssets, ReleaseDescriptor, classify};

pub const SUCCESS_MESSAGE: &str = "Thanks! Your download has started.";
pub const FAILURE_MESSAGE: &str = "Something went wrong saving your email. Please try again.";

/// Where the release lookup stands for the current opening.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ReleaseLoad {
    #[default]
    Loading,
    Ready { tag: String, assets: PlatformAssets },
    Unavailable,
}

/// The platform button the user picked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedAsset {
    pub platform: Platform,
    pub url: String,
    pub display_name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient notification (toast).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug)]
pub enum ModalAction {
    Open,
    Close,
    /// Outcome of the fetch started by `FetchRelease { generation }`.
    ReleaseFetched {
        generation: u64,
        result: Result<ReleaseDescriptor, String>,
    },
    Select(Platform),
    EmailChanged(String),
    Submit,
    /// Outcome of the `PostLead { generation, .. }` effect.
    LeadSettled {
        generation: u64,
        result: Result<(), String>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum ModalEffect {
    FetchRelease { generation: u64 },
    Navigate(String),
    PostLead { generation: u64, lead: LeadRequest },
    Notify(Notice),
    Celebrate,
    Track(CaptureEvent),
}

/// Render model for one platform button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadButton {
    pub platform: Platform,
    pub label: &'static str,
    pub detail: String,
    pub enabled: bool,
    pub selected: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub open: bool,
    pub release: ReleaseLoad,
    pub selected: Option<SelectedAsset>,
    pub email: String,
    pub email_error: bool,
    pub submitting: bool,
    generation: u64,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifies the current opening; stale fetch results carry an older one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.release, ReleaseLoad::Loading)
    }

    pub fn release_tag(&self) -> Option<&str> {
        match &self.release {
            ReleaseLoad::Ready { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn buttons(&self) -> Vec<DownloadButton> {
        let assets = match &self.release {
            ReleaseLoad::Ready { assets, .. } => Some(assets),
            _ => None,
        };
        Platform::ALL
            .into_iter()
            .map(|platform| {
                let asset = assets.and_then(|a| a.get(platform));
                DownloadButton {
                    platform,
                    label: platform.display_name(),
                    detail: asset
                        .map(|a| a.size_label())
                        .unwrap_or_else(|| "Coming soon!".to_string()),
                    enabled: asset.is_some(),
                    selected: self
                        .selected
                        .as_ref()
                        .is_some_and(|s| s.platform == platform),
                }
            })
            .collect()
    }

    pub fn reduce(&mut self, action: ModalAction) -> Vec<ModalEffect> {
        match action {
            ModalAction::Open => {
                if self.open {
                    return Vec::new();
                }
                self.open = true;
                self.generation += 1;
                self.release = ReleaseLoad::Loading;
                self.selected = None;
                self.email_error = false;
                vec![ModalEffect::FetchRelease {
                    generation: self.generation,
                }]
            }
            ModalAction::Close => {
                self.close();
                Vec::new()
            }
            ModalAction::ReleaseFetched { generation, result } => {
                if !self.open || generation != self.generation {
                    tracing::debug!(generation, current = self.generation, "dropping stale release");
                    return Vec::new();
                }
                self.release = match result {
                    Ok(release) => ReleaseLoad::Ready {
                        assets: classify(&release.assets),
                        tag: release.tag,
                    },
                    Err(reason) => {
                        tracing::warn!(%reason, "release lookup failed");
                        ReleaseLoad::Unavailable
                    }
                };
                Vec::new()
            }
            ModalAction::Select(platform) => {
                let ReleaseLoad::Ready { assets, .. } = &self.release else {
                    return Vec::new();
                };
                let Some(asset) = assets.get(platform) else {
                    return Vec::new();
                };
                self.selected = Some(SelectedAsset {
                    platform,
                    url: asset.download_url.clone(),
                    display_name: platform.display_name().to_string(),
                });
                vec![ModalEffect::Track(CaptureEvent::button_clicked(
                    format!("Download {}", platform.display_name()),
                    "download_modal",
                ))]
            }
            ModalAction::EmailChanged(email) => {
                self.email = email;
                self.email_error = false;
                Vec::new()
            }
            ModalAction::Submit => {
                let Some(selected) = &self.selected else {
                    return Vec::new();
                };
                if self.submitting {
                    return Vec::new();
                }
                if !is_valid_email(&self.email) {
                    self.email_error = true;
                    return Vec::new();
                }
                self.email_error = false;
                self.submitting = true;
                let lead = LeadRequest::new(
                    self.email.trim(),
                    selected.url.clone(),
                    APPLICATION_NAME,
                );
                vec![
                    ModalEffect::Navigate(selected.url.clone()),
                    ModalEffect::PostLead {
                        generation: self.generation,
                        lead,
                    },
                ]
            }
            ModalAction::LeadSettled { generation, result }
                if !self.open || generation != self.generation =>
            {
                // The opening that posted this lead is gone; report, leave the current one alone.
                tracing::debug!(generation, current = self.generation, "lead settled after close");
                match result {
                    Ok(()) => vec![ModalEffect::Notify(Notice::success(SUCCESS_MESSAGE))],
                    Err(reason) => {
                        tracing::warn!(%reason, "lead submission failed");
                        vec![ModalEffect::Notify(Notice::error(FAILURE_MESSAGE))]
                    }
                }
            }
            ModalAction::LeadSettled { result: Ok(()), .. } => {
                self.submitting = false;
                self.close();
                vec![
                    ModalEffect::Notify(Notice::success(SUCCESS_MESSAGE)),
                    ModalEffect::Celebrate,
                ]
            }
            ModalAction::LeadSettled { result: Err(reason), .. } => {
                tracing::warn!(%reason, "lead submission failed");
                self.submitting = false;
                vec![ModalEffect::Notify(Notice::error(FAILURE_MESSAGE))]
            }
        }
    }

    fn close(&mut self) {
        self.open = false;
        self.submitting = false;
        self.selected = None;
        self.email_error = false;
    }
}
