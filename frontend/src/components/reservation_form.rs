use chrono::NaiveDate;
use leptos::*;
use shared::{
    hourly_slots, submit_reservation, visit_date_value, InFlightGuard, Notice, ReservationFields,
    ReservationSurface, SiteConfig, SubmitUiState, TimeSelectorState,
};

use crate::api::HttpGateway;
use crate::components::checkbox::ConsentCheckbox;
use crate::components::date_input::{today, DateInput};
use crate::components::time_select::TimeSelect;
use crate::i18n::{use_i18n, I18nContext};

#[derive(Clone, Copy)]
struct FormSignals {
    name: RwSignal<String>,
    phone: RwSignal<String>,
    visit_date: RwSignal<Option<NaiveDate>>,
    time: RwSignal<TimeSelectorState>,
    consent: RwSignal<bool>,
    submit_ui: RwSignal<SubmitUiState>,
}

/// The reservation form as the submit flow sees it.
struct SignalSurface {
    signals: FormSignals,
    i18n: I18nContext,
}

impl ReservationSurface for SignalSurface {
    fn consent_given(&self) -> bool {
        self.signals.consent.get_untracked()
    }

    fn fields(&self) -> ReservationFields {
        let s = self.signals;
        let (visit_time, visit_time_label) = s.time.with_untracked(|t| {
            (t.selected_value().to_string(), t.selected_label().to_string())
        });
        ReservationFields {
            name: s.name.get_untracked(),
            phone: s.phone.get_untracked(),
            visit_date: visit_date_value(s.visit_date.get_untracked()),
            visit_time,
            visit_time_label,
        }
    }

    fn submit_ui(&self) -> SubmitUiState {
        self.signals.submit_ui.get_untracked()
    }

    fn set_submit_ui(&self, state: SubmitUiState) {
        self.signals.submit_ui.set(state);
    }

    fn pending_label(&self) -> String {
        self.i18n.t("reservation.sending")
    }

    fn idle_label(&self) -> String {
        self.i18n.t("reservation.submit")
    }

    fn notify(&self, notice: Notice) {
        let message = match &notice {
            Notice::Sent { name } => self.i18n.t_with(notice.translation_key(), &[("name", name.as_str())]),
            _ => self.i18n.t(notice.translation_key()),
        };
        let _ = window().alert_with_message(&message);
    }

    fn reset(&self) {
        let s = self.signals;
        s.name.set(String::new());
        s.phone.set(String::new());
        s.visit_date.set(None);
        s.time.update(|t| {
            t.clear();
            t.close();
        });
    }
}

#[component]
pub fn ReservationForm() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let i18n = use_i18n();
    let i18n_stored = store_value(i18n.clone());

    let signals = FormSignals {
        name: create_rw_signal(String::new()),
        phone: create_rw_signal(String::new()),
        visit_date: create_rw_signal(Some(today())),
        time: create_rw_signal(TimeSelectorState::new()),
        consent: create_rw_signal(false),
        submit_ui: create_rw_signal(SubmitUiState::idle(i18n.t("reservation.submit"), false)),
    };
    let guard = store_value(InFlightGuard::new());
    let slots = hourly_slots(config.first_slot_hour, config.last_slot_hour);
    let config = store_value(config);

    let on_consent_change = Callback::new(move |checked: bool| {
        let in_flight = guard.with_value(|g| g.is_active());
        signals
            .submit_ui
            .update(|ui| ui.on_consent_change(checked, in_flight));
    });

    // Relabel the idle button when the language changes
    create_effect(move |_| {
        let label = i18n_stored.with_value(|i| i.t("reservation.submit"));
        if !guard.with_value(|g| g.is_active()) {
            signals.submit_ui.update(|ui| ui.label = label);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let config = config.get_value();
        let guard = guard.get_value();
        let surface = SignalSurface {
            signals,
            i18n: i18n_stored.get_value(),
        };

        wasm_bindgen_futures::spawn_local(async move {
            let gateway = HttpGateway::new(&config);
            if let Ok(payload) = submit_reservation(&config, &guard, &surface, &gateway).await {
                log::info!("Reservation sent for {}", payload.visit_date());
            }
        });
    };

    let t = move |key: &'static str| Signal::derive(move || i18n_stored.with_value(|i| i.t(key)));

    view! {
        <form id="reservation" class="reservation-form" on:submit=on_submit novalidate>
            <div class="form-group">
                <label class="form-label" for="reservation-name">{t("reservation.name")}</label>
                <input
                    type="text"
                    id="reservation-name"
                    name="name"
                    class="form-input"
                    autocomplete="name"
                    placeholder=t("reservation.name_placeholder")
                    prop:value=move || signals.name.get()
                    on:input=move |ev| signals.name.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label class="form-label" for="reservation-phone">{t("reservation.phone")}</label>
                <input
                    type="tel"
                    id="reservation-phone"
                    name="phone"
                    class="form-input"
                    inputmode="numeric"
                    autocomplete="tel"
                    placeholder=t("reservation.phone_placeholder")
                    prop:value=move || signals.phone.get()
                    on:input=move |ev| signals.phone.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label class="form-label" for="visit-date">{t("reservation.date")}</label>
                <DateInput value=signals.visit_date id="visit-date" name="visit-date" />
            </div>

            <div class="form-group">
                <label class="form-label" for="visit-time-display">{t("reservation.time")}</label>
                <TimeSelect
                    state=signals.time
                    slots=slots
                    placeholder=t("reservation.time_placeholder")
                    name="visit-time"
                />
            </div>

            <ConsentCheckbox
                checked=signals.consent
                label=t("reservation.consent")
                on_change=on_consent_change
            />

            <button
                type="submit"
                id="submitBtn"
                class="btn btn-primary"
                disabled=move || !signals.submit_ui.with(|ui| ui.enabled)
            >
                {move || signals.submit_ui.with(|ui| ui.label.clone())}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_surface_reads_and_resets_signals() {
        let runtime = create_runtime();

        let mut time = TimeSelectorState::new();
        time.select("14:00", "오후 2시");
        let signals = FormSignals {
            name: create_rw_signal("홍길동".to_string()),
            phone: create_rw_signal("010 4359 7772".to_string()),
            visit_date: create_rw_signal(NaiveDate::from_ymd_opt(2024, 5, 1)),
            time: create_rw_signal(time),
            consent: create_rw_signal(true),
            submit_ui: create_rw_signal(SubmitUiState::idle("방문예약 신청", true)),
        };
        let surface = SignalSurface {
            signals,
            i18n: I18nContext::new("ko".to_string()),
        };

        assert!(surface.consent_given());
        assert_eq!(
            surface.fields(),
            ReservationFields {
                name: "홍길동".to_string(),
                phone: "010 4359 7772".to_string(),
                visit_date: "2024-05-01".to_string(),
                visit_time: "14:00".to_string(),
                visit_time_label: "오후 2시".to_string(),
            }
        );
        assert_eq!(surface.pending_label(), "전송 중…");
        assert_eq!(surface.idle_label(), "방문예약 신청");

        surface.i18n.set_language("en");
        assert_eq!(surface.idle_label(), "Request a visit");

        surface.reset();
        assert_eq!(surface.fields(), ReservationFields::default());
        assert!(surface.consent_given());

        runtime.dispose();
    }
}
