use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

use crate::config;

/// Section id an in-page link points at, e.g. `"#contact"` -> `"contact"`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smoothly scrolls the element with `id` into view. Returns false when the
/// page has no such element.
pub fn smooth_scroll_to(id: &str) -> bool {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub fn is_scrolled_past_nav(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLLED_OFFSET as f64
}

/// The last section whose top edge has passed the activation line, given
/// `(id, top)` pairs in page order with tops relative to the viewport.
pub fn active_section<'a>(tops: &[(&'a str, f64)], viewport_height: f64) -> Option<&'a str> {
    let line = viewport_height * config::ACTIVE_SECTION_RATIO;
    tops.iter()
        .rev()
        .find(|(_, top)| *top <= line)
        .map(|(id, _)| *id)
}

/// Reads the current viewport-relative tops of `ids` and picks the active one.
pub fn current_section(ids: &[&'static str]) -> Option<&'static str> {
    let window = window()?;
    let document = window.document()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let tops: Vec<(&'static str, f64)> = ids
        .iter()
        .filter_map(|id| {
            document
                .get_element_by_id(id)
                .map(|el| (*id, el.get_bounding_client_rect().top()))
        })
        .collect();
    active_section(&tops, viewport_height)
}
