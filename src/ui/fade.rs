/// Scroll-triggered fade-in reveals
use crate::ui::dom;

/// Elements participating in the fade-in effect, across every page.
const FADE_SELECTORS: &str = ".fade-in, .fade-up, .product-card, .about, .cart, .hero h2, .hero p";

const VISIBLE_CLASS: &str = "visible";

/// Top edge must be within this many pixels of the viewport bottom.
const REVEAL_MARGIN_PX: f64 = 100.0;

/// Mark every fade element that has entered the viewport as visible.
/// Idempotent, and the class is never taken back off.
pub fn reveal_entered() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);

    for el in dom::query_all(FADE_SELECTORS) {
        let rect = el.get_bounding_client_rect();
        if rect.top() < viewport_height - REVEAL_MARGIN_PX {
            dom::add_class(&el, VISIBLE_CLASS);
        }
    }
}

/// Run one reveal pass now and re-run on load and on every scroll
/// (synchronous, no debouncing).
pub fn init() {
    reveal_entered();
    dom::on_window_event("scroll", |_| reveal_entered());
    dom::on_window_event("load", |_| reveal_entered());
}
