use leptos::*;
use shared::SiteConfig;

use crate::api::ApiClient;
use crate::i18n::provide_i18n;
use crate::pages::landing::Landing;
use crate::utils::install_anchor_scrolling;

#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::from_env();
    provide_i18n(config.language.clone());
    provide_context(config.clone());

    install_anchor_scrolling();

    // Connectivity check, logged only
    wasm_bindgen_futures::spawn_local(ApiClient::log_health(config));

    view! {
        <main>
            <Landing />
        </main>
    }
}
