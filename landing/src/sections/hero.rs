use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use samwise_common::release::format_count;
use samwise_common::typewriter::{TYPE_DELAY, Typewriter};
use samwise_common::{CaptureEvent, REPO_URL};

use crate::services::{Services, track, use_services};

const DISCORD_URL: &str = "https://discord.gg/hU87q8ME";
const DEMO_VIDEO_URL: &str = "https://www.youtube.com/embed/iuOJwIRKb50";

#[component]
pub fn Hero() -> impl IntoView {
    let services = use_services();
    let typed = RwSignal::new(String::new());
    let machine = StoredValue::new(Typewriter::default());
    schedule_typing(machine, typed, TYPE_DELAY);

    let stars = RwSignal::new(None::<String>);
    if let Some(github) = services.try_with_value(|s| s.github.clone()) {
        spawn_local(async move {
            match github.fetch_repo_info().await {
                Ok(info) => {
                    stars.try_set(Some(format_count(info.stargazers_count)));
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Error fetching star count: {err}").into());
                }
            }
        });
    }

    view! {
        <section class="hero">
            <div class="container hero-inner">
                <h1 class="hero-title">
                    "Think clearly. "
                    <span class="hero-typed">
                        {move || typed.get()}
                        <span class="hero-caret">"|"</span>
                    </span>
                </h1>
                <p class="hero-subtitle">
                    "Samwise illuminates your thoughts, transforming every conversation into an opportunity for growth."
                </p>
                <div class="hero-actions">
                    <a
                        href=REPO_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-github"
                        on:click=link_tracker(services, "GitHub", REPO_URL)
                    >
                        "GitHub"
                        {move || stars.get().map(|count| view! {
                            <span class="star-count">"★ "{count}</span>
                        })}
                    </a>
                    <a
                        href=DISCORD_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-discord"
                        on:click=link_tracker(services, "Discord", DISCORD_URL)
                    >
                        "Discord"
                    </a>
                </div>
                <div class="hero-video">
                    <iframe
                        src=DEMO_VIDEO_URL
                        title="Samwise demo"
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                        allowfullscreen=true
                    ></iframe>
                </div>
            </div>
        </section>
    }
}

fn link_tracker(
    services: Services,
    name: &'static str,
    url: &'static str,
) -> impl FnMut(leptos::ev::MouseEvent) + 'static {
    move |_| track(services, CaptureEvent::link_clicked(name, url, "hero"))
}

/// Drive the headline; stops once the hero is unmounted.
fn schedule_typing(machine: StoredValue<Typewriter>, typed: RwSignal<String>, delay: Duration) {
    set_timeout(
        move || {
            let next = machine.try_update_value(|m| {
                let delay = m.tick();
                (m.text(), delay)
            });
            if let Some((text, delay)) = next {
                typed.try_set(text.to_string());
                schedule_typing(machine, typed, delay);
            }
        },
        delay,
    );
}
