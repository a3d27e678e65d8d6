// Long-lived clients shared by the component tree.
//
// reqwest clients are not Send on wasm32, so they live in local storage and
// components receive a copyable handle through context.

use leptos::prelude::*;
use leptos::task::spawn_local;
use samwise_common::analytics::Dispatch;
use samwise_common::config::resolve_endpoint;
use samwise_common::{
    Analytics, CaptureEvent, GithubClient, LeadClient, REPO_NAME, REPO_OWNER, SiteConfig,
};

pub struct SiteServices {
    pub analytics: Analytics,
    pub github: GithubClient,
    pub leads: LeadClient,
}

pub type Services = StoredValue<SiteServices, LocalStorage>;

pub fn provide_services(config: &SiteConfig) -> Services {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    let services = StoredValue::new_local(SiteServices {
        analytics: Analytics::new(config, visitor_id()),
        github: GithubClient::with_base(&config.github_api_base, REPO_OWNER, REPO_NAME),
        leads: LeadClient::new(resolve_endpoint(&origin, &config.leads_endpoint)),
    });
    provide_context(services);
    services
}

pub fn use_services() -> Services {
    expect_context::<Services>()
}

/// Anonymous per-page-load id for analytics.
fn visitor_id() -> String {
    let high = (js_sys::Math::random() * u32::MAX as f64) as u32;
    let low = (js_sys::Math::random() * u32::MAX as f64) as u32;
    format!("anon-{high:08x}{low:08x}")
}

/// Fire-and-forget capture. Failures only reach the console.
pub fn track(services: Services, event: CaptureEvent) {
    let Some(analytics) = services.try_with_value(|s| s.analytics.clone()) else {
        return;
    };
    spawn_local(async move {
        match analytics.capture(&event).await {
            Ok(Dispatch::Sent) => {}
            Ok(Dispatch::Logged) => {
                web_sys::console::log_1(
                    &format!("[analytics] {} {:?}", event.event, event.properties).into(),
                );
            }
            Err(err) => {
                web_sys::console::warn_1(&format!("[analytics] {}: {}", event.event, err).into());
            }
        }
    });
}

/// Track from inside a component.
pub fn track_event(event: CaptureEvent) {
    track(use_services(), event);
}
