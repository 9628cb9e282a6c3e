//! Full cart lifecycle against an in-memory store, from price text
//! scraped off a product card through rendering and removal.

use storefront::cart::{Cart, CartItem};
use storefront::price::parse_price;
use storefront::render::{self, CartView};
use storefront::storage::{CART_KEY, CartStore, MemoryStore, load_cart, save_cart};

#[test]
fn add_render_remove_lifecycle() {
    let store = MemoryStore::new();

    // first visit: nothing persisted yet
    let mut cart = load_cart(&store);
    assert!(cart.is_empty());

    // add two products the way the page handler does
    cart.push(CartItem::new("Banarasi Silk Scarf", parse_price("₹1,234.50")));
    cart.push(CartItem::new("Terracotta Vase", parse_price("no price shown")));
    save_cart(&store, &cart);

    // cart page render
    let cart = load_cart(&store);
    assert_eq!(CartView::of(&cart), CartView::Populated);
    let (container, summary) = render::cart_page_html(&cart);
    assert!(container.contains("₹1234.50"));
    assert!(container.contains("₹0.00"));
    assert!(summary.contains("Total: ₹1234.50"));

    // remove the first row by its rendered index, persist, re-render
    let mut cart = load_cart(&store);
    assert!(cart.remove(0));
    save_cart(&store, &cart);

    let cart = load_cart(&store);
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items[0].name, "Terracotta Vase");

    // remove the last row: view transitions back to Empty
    let mut cart = load_cart(&store);
    cart.remove(0);
    save_cart(&store, &cart);

    let cart = load_cart(&store);
    assert_eq!(CartView::of(&cart), CartView::Empty);
    let (container, summary) = render::cart_page_html(&cart);
    assert_eq!(container, render::EMPTY_CART_HTML);
    assert!(summary.is_empty());
}

#[test]
fn corrupt_storage_recovers_to_empty_cart() {
    let store = MemoryStore::new();
    store.set(CART_KEY, "not a cart at all");

    let cart = load_cart(&store);
    assert!(cart.is_empty());

    // the next save repairs the key
    save_cart(&store, &cart);
    assert_eq!(store.get(CART_KEY).as_deref(), Some("[]"));
}

#[test]
fn duplicate_items_keep_independent_rows() {
    let store = MemoryStore::new();
    let mut cart = Cart::new();
    cart.push(CartItem::new("Brass Diya", 199.0));
    cart.push(CartItem::new("Brass Diya", 199.0));
    save_cart(&store, &cart);

    let mut cart = load_cart(&store);
    assert_eq!(cart.len(), 2);

    cart.remove(1);
    save_cart(&store, &cart);
    let cart = load_cart(&store);
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.total(), 199.0);
}
