use leptos::prelude::*;
use samwise_common::CaptureEvent;

use crate::sections::{Features, Hero, Roadmap, WhySamwise};
use crate::services::track_event;

#[component]
pub fn HomePage() -> impl IntoView {
    track_event(CaptureEvent::section_viewed("home"));

    view! {
        <Hero />
        <Features />
        <WhySamwise />
        <Roadmap />
    }
}
