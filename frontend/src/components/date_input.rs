use chrono::{Local, NaiveDate};
use leptos::*;
use shared::validation::VISIT_DATE_FORMAT;

/// Today in the visitor's local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Visit date picker. Any date can be picked.
#[component]
pub fn DateInput(
    #[prop(into)] value: RwSignal<Option<NaiveDate>>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="form-input"
            id=id
            name=name
            prop:value=move || shared::visit_date_value(value.get())
            on:input=move |ev| {
                let input_value = event_target_value(&ev);
                if input_value.is_empty() {
                    value.set(None);
                } else if let Ok(date) = NaiveDate::parse_from_str(&input_value, VISIT_DATE_FORMAT) {
                    value.set(Some(date));
                }
            }
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{find, mount_fixture, tick};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Event, EventInit, HtmlInputElement};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_today_formats_as_visit_date() {
        let formatted = shared::visit_date_value(Some(today()));
        assert_eq!(formatted.len(), 10);
        assert!(NaiveDate::parse_from_str(&formatted, VISIT_DATE_FORMAT).is_ok());
    }

    #[wasm_bindgen_test]
    async fn test_past_dates_stay_selectable() {
        let root = mount_fixture(|| {
            let value = create_rw_signal(Some(today()));
            view! { <DateInput value=value id="visit-date" /> }
        });
        tick().await;

        let input: HtmlInputElement = find(&root, "#visit-date").unchecked_into();
        assert_eq!(input.get_attribute("min"), None);
        assert_eq!(input.value(), shared::visit_date_value(Some(today())));

        input.set_value("2020-01-15");
        let init = EventInit::new();
        init.set_bubbles(true);
        input
            .dispatch_event(&Event::new_with_event_init_dict("input", &init).unwrap())
            .unwrap();
        tick().await;

        assert_eq!(input.value(), "2020-01-15");
        root.remove();
    }
}
