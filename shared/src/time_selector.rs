//! State behind the visit-time dropdown.
//!
//! The dropdown is a display input, a hidden value field and a list of slots.
//! This type owns the open flag and the picked slot so the rules can be
//! exercised without a page.

use crate::types::TimeSlot;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeSelectorState {
    is_open: bool,
    selected: Option<TimeSlot>,
}

impl TimeSelectorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Pick a slot. Value and label change together, then the dropdown closes.
    pub fn select(&mut self, value: impl Into<String>, label: impl Into<String>) {
        let label: String = label.into();
        self.selected = Some(TimeSlot::new(value, label.trim()));
        self.close();
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Document click handler: anything outside the selector closes it.
    pub fn handle_document_click(&mut self, inside_selector: bool) {
        if !inside_selector {
            self.close();
        }
    }

    pub fn selected(&self) -> Option<&TimeSlot> {
        self.selected.as_ref()
    }

    /// Machine value for the hidden field, empty when nothing is picked.
    pub fn selected_value(&self) -> &str {
        self.selected.as_ref().map_or("", |slot| slot.value.as_str())
    }

    /// Text for the display input, empty when nothing is picked.
    pub fn selected_label(&self) -> &str {
        self.selected.as_ref().map_or("", |slot| slot.label.as_str())
    }

    /// Whether `slot` carries the selection marker.
    pub fn is_selected(&self, slot: &TimeSlot) -> bool {
        self.selected
            .as_ref()
            .map_or(false, |selected| selected.value == slot.value)
    }
}
