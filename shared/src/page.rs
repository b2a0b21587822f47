//! Small rules behind the page glue: tabs, parallax and in-page anchors.

/// Which tab of a tab group is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    ids: Vec<String>,
    active: Option<String>,
}

impl TabSet {
    /// The first id starts active.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        let active = ids.first().cloned();
        Self { ids, active }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Activate `id`. Unknown ids leave the current tab in place.
    pub fn activate(&mut self, id: &str) -> bool {
        if self.ids.iter().any(|known| known == id) {
            self.active = Some(id.to_string());
            true
        } else {
            false
        }
    }

    /// True for the button and the pane carrying this id.
    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }
}

/// Vertical shift of the hero image for a scroll position.
pub fn parallax_offset(scroll_y: f64, factor: f64) -> f64 {
    scroll_y * factor
}

pub fn parallax_transform(scroll_y: f64, factor: f64) -> String {
    format!("translateY({}px)", parallax_offset(scroll_y, factor))
}

/// CSS selector for an in-page link, or `None` for a bare `#` or an
/// external href.
pub fn anchor_selector(href: &str) -> Option<&str> {
    if href.starts_with('#') && href.len() > 1 {
        Some(href)
    } else {
        None
    }
}
