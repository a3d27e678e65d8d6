use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::DownloadButton;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-inner container">
                <A href="/" attr:class="header-brand">
                    <img src="/logo.png" alt="Samwise Logo" class="header-logo" />
                    <span class="header-title">"Samwise"</span>
                </A>
                <nav class="header-links">
                    <A href="/setup" attr:class="header-link">"Setup Guide"</A>
                    <DownloadButton label="Download" location="header" />
                </nav>
            </div>
        </header>
    }
}
