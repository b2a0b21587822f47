use leptos::*;
use shared::SiteConfig;

use crate::components::language_switch::LanguageSwitch;
use crate::components::mobile_cta::MobileCta;
use crate::components::parallax_image::ParallaxImage;
use crate::components::reservation_form::ReservationForm;
use crate::components::tabs::{TabItem, Tabs};
use crate::i18n::use_i18n;

const FLOOR_PLANS: [&str; 2] = ["84", "101"];

#[component]
pub fn Landing() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let i18n = use_i18n();
    let i18n_stored = store_value(i18n);

    let t = move |key: &'static str| Signal::derive(move || i18n_stored.with_value(|i| i.t(key)));
    let t_owned = move |key: String| Signal::derive(move || i18n_stored.with_value(|i| i.t(&key)));

    let floor_tabs: Vec<TabItem> = FLOOR_PLANS
        .iter()
        .map(|plan| {
            let description = t_owned(format!("floor_plans.{}.description", plan));
            TabItem {
                id: format!("plan-{}", plan),
                label: t_owned(format!("floor_plans.{}", plan)),
                content: view! {
                    <img src=format!("/assets/plan-{}.jpg", plan) alt=move || description.get() />
                    <p>{move || description.get()}</p>
                }
                .into_view(),
            }
        })
        .collect();

    view! {
        <header class="site-header">
            <div class="container header-content">
                <a href="#top" class="site-brand">{t("site.title")}</a>
                <nav class="site-nav">
                    <a href="#overview">{t("nav.overview")}</a>
                    <a href="#floor-plans">{t("nav.floor_plans")}</a>
                    <a href="#location">{t("nav.location")}</a>
                    <a href="#reservation-section">{t("nav.reservation")}</a>
                </nav>
                <LanguageSwitch />
            </div>
        </header>

        <section id="top" class="hero">
            <ParallaxImage src="/assets/hero.jpg" alt=t("hero.image_alt") />
            <div class="hero-copy">
                <h1>{t("hero.headline")}</h1>
                <p>{t("hero.subline")}</p>
            </div>
        </section>

        <section id="overview" class="section">
            <h2 class="section-title">{t("overview.title")}</h2>
            <p>{t("overview.body")}</p>
        </section>

        <section id="floor-plans" class="section">
            <h2 class="section-title">{t("floor_plans.title")}</h2>
            <Tabs items=floor_tabs />
        </section>

        <section id="location" class="section">
            <h2 class="section-title">{t("location.title")}</h2>
            <p>{t("location.body")}</p>
        </section>

        <section id="reservation-section" class="section reservation">
            <h2 class="section-title">{t("reservation.title")}</h2>
            <ReservationForm />
        </section>

        <MobileCta phone=config.admin_phone.clone() />
    }
}
