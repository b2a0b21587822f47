use leptos::*;

use crate::i18n::{supported_languages, use_i18n};

/// Header language picker.
#[component]
pub fn LanguageSwitch() -> impl IntoView {
    let i18n = use_i18n();
    let current = i18n.language;

    view! {
        <select
            class="form-select language-switch"
            aria-label="Language"
            on:change=move |ev| {
                i18n.set_language(&event_target_value(&ev));
            }
        >
            {supported_languages().into_iter().map(|(code, name)| {
                let code_selected = code.to_string();
                view! {
                    <option
                        value=code
                        selected=move || current.get() == code_selected
                    >
                        {name}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
