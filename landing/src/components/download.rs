// Download modal: release lookup, platform choice, email lead.

use leptos::prelude::*;
use leptos::task::spawn_local;
use samwise_common::modal::{ModalEffect, ReleaseLoad};
use samwise_common::{CaptureEvent, ModalAction, ModalState, REPO_URL};

use super::confetti::Celebration;
use super::toast::ToastQueue;
use crate::services::{Services, track};

/// Owns the modal state and runs the effects its reducer asks for.
#[derive(Clone, Copy)]
pub struct DownloadController {
    state: RwSignal<ModalState>,
    services: Services,
    toasts: ToastQueue,
    celebration: Celebration,
}

impl DownloadController {
    pub fn provide(services: Services, toasts: ToastQueue, celebration: Celebration) -> Self {
        let controller = Self {
            state: RwSignal::new(ModalState::new()),
            services,
            toasts,
            celebration,
        };
        provide_context(controller);
        controller
    }

    pub fn state(self) -> RwSignal<ModalState> {
        self.state
    }

    pub fn dispatch(self, action: ModalAction) {
        let effects = self
            .state
            .try_update(|state| state.reduce(action))
            .unwrap_or_default();
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(self, effect: ModalEffect) {
        match effect {
            ModalEffect::FetchRelease { generation } => {
                let Some(github) = self.services.try_with_value(|s| s.github.clone()) else {
                    return;
                };
                spawn_local(async move {
                    let result = github
                        .fetch_latest_release()
                        .await
                        .map_err(|err| err.to_string());
                    if let Err(reason) = &result {
                        web_sys::console::error_1(&format!("Error fetching release: {reason}").into());
                    }
                    self.dispatch(ModalAction::ReleaseFetched { generation, result });
                });
            }
            ModalEffect::Navigate(url) => {
                let Some(window) = web_sys::window() else {
                    return;
                };
                if let Err(err) = window.location().set_href(&url) {
                    web_sys::console::error_2(&"Could not start download".into(), &err);
                }
            }
            ModalEffect::PostLead { generation, lead } => {
                let Some(leads) = self.services.try_with_value(|s| s.leads.clone()) else {
                    return;
                };
                spawn_local(async move {
                    let result = leads.submit(&lead).await.map_err(|err| err.to_string());
                    if let Err(reason) = &result {
                        web_sys::console::error_1(&format!("Error submitting email: {reason}").into());
                    }
                    self.dispatch(ModalAction::LeadSettled { generation, result });
                });
            }
            ModalEffect::Notify(notice) => self.toasts.push(notice),
            ModalEffect::Celebrate => self.celebration.fire(),
            ModalEffect::Track(event) => track(self.services, event),
        }
    }
}

/// Opens the modal. `location` tags the analytics event.
#[component]
pub fn DownloadButton(
    #[prop(into)] label: String,
    #[prop(optional)] class: Option<&'static str>,
    location: &'static str,
) -> impl IntoView {
    let controller = expect_context::<DownloadController>();
    let services = controller.services;
    let button_name = label.clone();

    let open = move |_| {
        track(services, CaptureEvent::button_clicked(button_name.clone(), location));
        controller.dispatch(ModalAction::Open);
    };

    view! {
        <button class=class.unwrap_or("btn btn-primary") on:click=open>
            {label}
        </button>
    }
}

#[component]
pub fn DownloadModal() -> impl IntoView {
    let controller = expect_context::<DownloadController>();
    let state = controller.state();

    let is_open = move || state.with(|s| s.open);
    let close = move |_| controller.dispatch(ModalAction::Close);
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        controller.dispatch(ModalAction::Submit);
    };
    let on_key = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            controller.dispatch(ModalAction::Close);
        }
    };

    let buttons = move || {
        state
            .with(|s| s.buttons())
            .into_iter()
            .map(|button| {
                let platform = button.platform;
                view! {
                    <button
                        class="platform-btn"
                        class:selected=button.selected
                        disabled=!button.enabled
                        on:click=move |_| controller.dispatch(ModalAction::Select(platform))
                    >
                        <span class="platform-name">{button.label}</span>
                        <span class="platform-detail">{button.detail}</span>
                    </button>
                }
            })
            .collect_view()
    };

    let body = move || match state.with(|s| s.release.clone()) {
        ReleaseLoad::Loading => view! {
            <div class="modal-loading">
                <span class="spinner"></span>
                <span>"Fetching the latest release..."</span>
            </div>
        }
        .into_any(),
        ReleaseLoad::Unavailable => view! {
            <p class="modal-unavailable">
                "Release information is unavailable right now. You can grab a build from "
                <a href=format!("{REPO_URL}/releases") target="_blank" rel="noopener noreferrer">"GitHub releases"</a>
                "."
            </p>
        }
        .into_any(),
        ReleaseLoad::Ready { tag, .. } => view! {
            <p class="modal-tag">{format!("Latest release: {tag}")}</p>
            <div class="platform-grid">{buttons}</div>
        }
        .into_any(),
    };

    let email_form = move || {
        state.with(|s| s.selected.clone()).map(|selected| {
            view! {
                <form class="lead-form" on:submit=submit>
                    <label for="lead-email">
                        {format!("Enter your email to download Samwise for {}", selected.display_name)}
                    </label>
                    <input
                        id="lead-email"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        class:invalid=move || state.with(|s| s.email_error)
                        prop:value=move || state.with(|s| s.email.clone())
                        on:input=move |ev| controller.dispatch(ModalAction::EmailChanged(event_target_value(&ev)))
                    />
                    <Show when=move || state.with(|s| s.email_error)>
                        <p class="field-error">"Please enter a valid email address"</p>
                    </Show>
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || state.with(|s| s.submitting)
                    >
                        {move || if state.with(|s| s.submitting) { "Starting..." } else { "Download" }}
                    </button>
                </form>
            }
        })
    };

    view! {
        <Show when=is_open>
            <div class="modal-backdrop" on:click=close></div>
            <div class="modal" role="dialog" aria-modal="true" aria-labelledby="download-title" tabindex="-1" on:keydown=on_key>
                <div class="modal-header">
                    <h2 id="download-title">"Download Samwise"</h2>
                    <button class="modal-close" aria-label="Close" on:click=close>"×"</button>
                </div>
                <div class="modal-body">
                    {body}
                    {email_form}
                </div>
            </div>
        </Show>
    }
}
