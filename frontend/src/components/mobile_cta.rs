use gloo_timers::callback::Timeout;
use leptos::*;
use shared::SiteConfig;

use crate::i18n::use_i18n;

fn cta_class(revealed: bool) -> &'static str {
    if revealed {
        "mobile-cta show fade-in"
    } else {
        "mobile-cta"
    }
}

/// Bottom call-to-action bar for phones, faded in shortly after load.
#[component]
pub fn MobileCta(#[prop(into)] phone: String) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let i18n = use_i18n();
    let i18n_stored = store_value(i18n);
    let revealed = create_rw_signal(false);

    Timeout::new(config.cta_reveal_delay_ms, move || revealed.set(true)).forget();

    let tel = format!("tel:{}", phone);

    view! {
        <div class=move || cta_class(revealed.get())>
            <a href=tel class="mobile-cta-call">
                {move || i18n_stored.with_value(|i| i.t("cta.call"))}
            </a>
            <a href="#reservation-section" class="mobile-cta-reserve">
                {move || i18n_stored.with_value(|i| i.t("cta.reserve"))}
            </a>
        </div>
    }
}
