// Setup guide: sidebar outline + step content.

use std::time::Duration;

use leptos::prelude::*;
use samwise_common::navigator::FilteredSection;
use samwise_common::setup::SetupPlatform;
use samwise_common::{CaptureEvent, NavAction, NavigatorState, sanitize};

use crate::components::Gallery;
use crate::services::track_event;

#[component]
pub fn SetupPage() -> impl IntoView {
    track_event(CaptureEvent::section_viewed("setup"));
    let nav = RwSignal::new(NavigatorState::new());

    view! {
        <section class="setup container">
            <div class="setup-header">
                <h1>"Set Up Samwise"</h1>
                <div class="platform-switch">
                    {SetupPlatform::ALL
                        .into_iter()
                        .map(|platform| view! {
                            <button
                                class="btn"
                                class:btn-primary=move || nav.with(|n| n.platform == platform)
                                class:btn-secondary=move || nav.with(|n| n.platform != platform)
                                on:click=move |_| nav.update(|n| n.reduce(NavAction::SetPlatform(platform)))
                            >
                                {platform.display_name()}
                            </button>
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="setup-body">
                <button
                    class="mobile-nav-toggle"
                    aria-label="open drawer"
                    on:click=move |_| nav.update(|n| n.reduce(NavAction::OpenMobileNav))
                >
                    "☰ Steps"
                </button>
                <Show when=move || nav.with(|n| n.mobile_nav_open)>
                    <div class="mobile-nav-backdrop" on:click=move |_| nav.update(|n| n.reduce(NavAction::CloseMobileNav))></div>
                </Show>
                <aside class="setup-sidebar" class:open=move || nav.with(|n| n.mobile_nav_open)>
                    <Sidebar nav=nav />
                </aside>
                <StepContent nav=nav />
            </div>
        </section>
    }
}

#[component]
fn Sidebar(nav: RwSignal<NavigatorState>) -> impl IntoView {
    view! {
        <input
            class="setup-search"
            type="search"
            placeholder="Search steps..."
            prop:value=move || nav.with(|n| n.search_term.clone())
            on:input=move |ev| nav.update(|n| n.reduce(NavAction::Search(event_target_value(&ev))))
        />
        <Show
            when=move || nav.with(|n| !n.filtered_outline().is_empty())
            fallback=|| view! { <p class="setup-no-results">"No steps match your search."</p> }
        >
            {move || {
                nav.with(|n| n.filtered_outline())
                    .into_iter()
                    .map(|section| view! { <SidebarSection nav=nav section=section /> })
                    .collect_view()
            }}
        </Show>
    }
}

#[component]
fn SidebarSection(nav: RwSignal<NavigatorState>, section: FilteredSection) -> impl IntoView {
    let title = section.title;
    let is_open = move || nav.with(|n| n.is_section_open(title));

    view! {
        <div class="sidebar-section">
            <button
                class="sidebar-section-title"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| nav.update(|n| n.reduce(NavAction::ToggleSection(title)))
            >
                <span>{title}</span>
                <span class="chevron" class:collapsed=move || !is_open()>"▾"</span>
            </button>
            <Show when=is_open>
                <ul class="sidebar-steps">
                    {section
                        .steps
                        .iter()
                        .map(|step| {
                            let id = step.id;
                            view! {
                                <li>
                                    <button
                                        class="sidebar-step"
                                        class:active=move || nav.with(|n| n.is_active(id))
                                        on:click=move |_| nav.update(|n| n.reduce(NavAction::SelectStep(id)))
                                    >
                                        {step.label}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}

#[component]
fn StepContent(nav: RwSignal<NavigatorState>) -> impl IntoView {
    let step = Memo::new(move |_| nav.with(|n| n.current_step()));
    let position = Memo::new(move |_| nav.with(|n| n.position()));
    // Sanitized once per step change.
    let description = Memo::new(move |_| sanitize(step.get().description).into_string());
    let (copied, set_copied) = signal(false);

    let copy_command = move |_| {
        let Some(command) = step.get_untracked().command else {
            return;
        };
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = clipboard.write_text(command);
            set_copied.set(true);
            set_timeout(move || set_copied.set(false), Duration::from_millis(2000));
        }
    };

    view! {
        <article class="step-content" class:dark=move || nav.with(|n| n.dark_mode)>
            <div class="step-toolbar">
                <span class="step-position">
                    {move || {
                        let p = position.get();
                        format!("Step {} of {}", p.number, p.total)
                    }}
                </span>
                <button class="dark-toggle" on:click=move |_| nav.update(|n| n.reduce(NavAction::ToggleDarkMode))>
                    {move || if nav.with(|n| n.dark_mode) { "☀ Light" } else { "☾ Dark" }}
                </button>
            </div>
            <h2 class="step-title">{move || step.get().label}</h2>
            <div class="step-description" inner_html=move || description.get()></div>
            {move || step.get().estimated_time.map(|time| view! {
                <p class="step-estimate">{format!("Estimated time: {time}")}</p>
            })}

            {move || {
                let step = step.get();
                let number = position.get_untracked().number;
                view! { <Gallery images=step.images step_number=number /> }
            }}

            {move || step.get().command.map(|command| view! {
                <div class="step-command">
                    <code>{command}</code>
                    <button class="copy-btn" title="Copy to clipboard" on:click=copy_command>
                        {move || if copied.get() { "Copied!" } else { "Copy" }}
                    </button>
                </div>
            })}

            {move || {
                let tips = step.get().tips;
                (!tips.is_empty()).then(|| view! {
                    <div class="step-tips">
                        <h3>"Tips:"</h3>
                        <ul>{tips.iter().map(|tip| view! { <li>{*tip}</li> }).collect_view()}</ul>
                    </div>
                })
            }}

            {move || step.get().troubleshooting.map(|text| view! {
                <div class="step-troubleshooting">
                    <h3>"⚠ Troubleshooting"</h3>
                    <p>{text}</p>
                </div>
            })}

            <div class="step-pager">
                <button
                    class="btn btn-secondary"
                    disabled=move || nav.with(|n| !n.can_go_previous())
                    on:click=move |_| nav.update(|n| n.reduce(NavAction::Previous))
                >
                    "← Previous"
                </button>
                <button
                    class="btn btn-primary"
                    disabled=move || nav.with(|n| !n.can_go_next())
                    on:click=move |_| nav.update(|n| n.reduce(NavAction::Next))
                >
                    "Next →"
                </button>
            </div>
        </article>
    }
}
