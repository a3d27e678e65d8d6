// Samwise site - Leptos 0.8 CSR

mod components;
mod pages;
mod sections;
mod services;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use samwise_common::SiteConfig;

use components::{Confetti, DownloadController, DownloadModal, Toasts};
use pages::{HomePage, SetupPage};
use sections::{Footer, Header};

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let config = SiteConfig::from_build_env();
    let services = services::provide_services(&config);
    let toasts = components::provide_toasts();
    let celebration = components::provide_celebration();
    DownloadController::provide(services, toasts, celebration);

    view! {
        <Router>
            <Header />
            <main>
                <Routes fallback=|| view! { <HomePage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/setup") view=SetupPage />
                </Routes>
            </main>
            <Footer />
            <DownloadModal />
            <Toasts />
            <Confetti />
        </Router>
    }
}
