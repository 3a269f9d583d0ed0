use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router_macro::path;
use superswap_components::Toaster;
use superswap_core::{SwapConfig, Toasts, BASE_URL};
use superswap_swap::Swap;
use tracing::{debug, info, warn};

#[component]
pub fn App() -> impl IntoView {
    info!("rendering <App/>");

    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Global Contexts

    let config = SwapConfig::default();
    provide_context(config);
    provide_context(Toasts::new(config.toast_duration));

    debug!("{config:#?}");

    if !eip1193::Ethereum::is_available() {
        warn!("No injected Ethereum provider found. Swaps will fail until one is installed.");
    }

    on_cleanup(move || {
        info!("cleaning up <App/>");
    });

    view! {
        <Title text="SuperSwap" />
        <Router>
            <main class="min-h-screen bg-black">
                <Routes fallback=|| "This page could not be found.">
                    <Route path=path!("") view=|| view! { <Redirect path=BASE_URL /> } />
                    <Route path=path!("superswap") view=Swap />
                </Routes>
            </main>
        </Router>
        <Toaster />
    }
}
