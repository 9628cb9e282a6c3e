/// Product category filtering
use gloo_timers::callback::Timeout;

use crate::ui::dom;

const ACTIVE_CLASS: &str = "active";
const HIDDEN_CLASS: &str = "hidden";
const VISIBLE_CLASS: &str = "visible";

/// Category matching every card.
const ALL_CATEGORY: &str = "all";

/// Delay before re-adding `visible` to a shown card, so the CSS
/// transition gets a frame to play from the hidden state.
const REVEAL_DELAY_MS: u32 = 30;

/// Wire the filter buttons. Does nothing unless both filter buttons
/// and product cards are present on the page.
pub fn init() {
    let buttons = dom::query_all(".filter-btn");
    let cards = dom::query_all(".product-card");
    if buttons.is_empty() || cards.is_empty() {
        return;
    }

    for button in &buttons {
        let clicked = button.clone();
        let buttons = buttons.clone();
        let cards = cards.clone();
        dom::on_click(button, move |_| {
            let category = clicked.get_attribute("data-state").unwrap_or_default();
            log::debug!("filtering products by category {category:?}");

            // exclusive active marker
            for b in &buttons {
                dom::remove_class(b, ACTIVE_CLASS);
            }
            dom::add_class(&clicked, ACTIVE_CLASS);

            for card in &cards {
                apply_filter(card, &category);
            }
        });
    }
}

fn apply_filter(card: &web_sys::Element, category: &str) {
    let matches =
        category == ALL_CATEGORY || card.get_attribute("data-state").as_deref() == Some(category);

    if matches {
        dom::remove_class(card, HIDDEN_CLASS);
        let card = card.clone();
        Timeout::new(REVEAL_DELAY_MS, move || {
            dom::add_class(&card, VISIBLE_CLASS);
        })
        .forget();
    } else {
        dom::add_class(card, HIDDEN_CLASS);
        dom::remove_class(card, VISIBLE_CLASS);
    }
}
