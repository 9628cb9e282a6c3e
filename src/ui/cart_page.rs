/// Add-to-cart buttons and the cart page view
use gloo_timers::callback::Timeout;
use web_sys::Element;

use crate::cart::CartItem;
use crate::price::parse_price;
use crate::render;
use crate::storage::{LocalStore, load_cart, save_cart};
use crate::ui::dom;

const FEEDBACK_CLASS: &str = "clicked";
const FEEDBACK_MS: u32 = 250;

/// Name used when a card has no data attribute and no heading text.
const FALLBACK_NAME: &str = "Product";

const CHECKOUT_STUB_MESSAGE: &str =
    "This demo does not process payments. Implement checkout backend to complete purchase.";

pub fn init() {
    init_add_buttons();
    render_cart_page();
}

/// Wire every add-to-cart button present on the page.
fn init_add_buttons() {
    for button in dom::query_all(".add-cart-btn") {
        let clicked = button.clone();
        dom::on_click(&button, move |_| add_to_cart(&clicked));
    }
}

fn add_to_cart(button: &Element) {
    let card = button.closest(".product-card").ok().flatten();
    let name = card
        .as_ref()
        .and_then(product_name)
        .unwrap_or_else(|| FALLBACK_NAME.to_string());
    let price_text = card.as_ref().and_then(product_price_text).unwrap_or_default();
    let price = parse_price(&price_text);

    let store = LocalStore;
    let mut cart = load_cart(&store);
    cart.push(CartItem::new(name.clone(), price));
    save_cart(&store, &cart);
    log::debug!("added {name:?} at {price} to cart ({} items)", cart.len());

    // transient button feedback
    dom::add_class(button, FEEDBACK_CLASS);
    let button = button.clone();
    Timeout::new(FEEDBACK_MS, move || {
        dom::remove_class(&button, FEEDBACK_CLASS);
    })
    .forget();

    dom::alert(&format!("🧺 \"{name}\" added to cart"));
}

/// Product name: data attribute first, then visible heading text.
fn product_name(card: &Element) -> Option<String> {
    if let Some(name) = card.get_attribute("data-name") {
        return Some(name);
    }
    for selector in ["h4", "h3"] {
        if let Some(text) = card
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|heading| heading.text_content())
        {
            let text = text.trim().to_string();
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

/// Raw price text: data attribute first, then the card's price element.
fn product_price_text(card: &Element) -> Option<String> {
    if let Some(price) = card.get_attribute("data-price") {
        return Some(price);
    }
    card.query_selector(".price").ok().flatten()?.text_content()
}

/// Render the cart view from the store and wire its controls.
/// No-op when `#cartContainer` is absent (not on the cart page).
/// Removal re-reads, persists, and re-renders the whole view.
pub fn render_cart_page() {
    let Some(container) = dom::query("#cartContainer") else {
        return;
    };

    let store = LocalStore;
    let cart = load_cart(&store);
    let (container_html, summary_html) = render::cart_page_html(&cart);

    container.set_inner_html(&container_html);
    if let Some(summary) = dom::query("#cartSummary") {
        summary.set_inner_html(&summary_html);
    }

    if cart.is_empty() {
        return;
    }

    for button in dom::query_all_in(&container, ".remove-item-btn") {
        let clicked = button.clone();
        dom::on_click(&button, move |_| {
            let Some(index) = clicked
                .get_attribute("data-index")
                .and_then(|v| v.parse::<usize>().ok())
            else {
                return;
            };
            let store = LocalStore;
            let mut cart = load_cart(&store);
            cart.remove(index);
            save_cart(&store, &cart);
            render_cart_page();
        });
    }

    if let Some(checkout) = dom::query("#checkoutBtn") {
        dom::on_click(&checkout, move |_| dom::alert(CHECKOUT_STUB_MESSAGE));
    }
}
