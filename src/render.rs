/// Cart page markup generation
///
/// Rendering is split from the DOM so the markup can be unit-tested
/// natively; the wasm layer only assigns these strings to innerHTML
/// and wires the click handlers.
use crate::cart::Cart;
use crate::price::format_price;

/// The cart view at render time, derived solely from store contents.
#[derive(Debug, Clone, PartialEq)]
pub enum CartView {
    Empty,
    Populated,
}

impl CartView {
    pub fn of(cart: &Cart) -> CartView {
        if cart.is_empty() {
            CartView::Empty
        } else {
            CartView::Populated
        }
    }
}

pub const EMPTY_CART_HTML: &str = "<p>Your cart is empty.</p>";

/// Markup for the cart item list. Each row carries a remove button
/// whose `data-index` is the item's position at render time.
pub fn items_html(cart: &Cart) -> String {
    let mut html = String::new();
    for (idx, item) in cart.items.iter().enumerate() {
        html.push_str(&format!(
            r#"<div class="cart-item">
  <div style="display:flex;justify-content:space-between;align-items:center;gap:1rem;">
    <div>
      <strong>{name}</strong><br>
      <small style="color:#6d5648">{price}</small>
    </div>
    <div>
      <button class="remove-item-btn" data-index="{idx}" style="background:#c64b2e;color:#fff;border-radius:8px;padding:6px 10px;border:none;cursor:pointer">Remove</button>
    </div>
  </div>
</div>"#,
            name = item.name,
            price = format_price(item.price),
        ));
    }
    html
}

/// Markup for the summary block: running total plus the checkout control.
pub fn summary_html(cart: &Cart) -> String {
    format!(
        r#"<p style="margin-top:1rem;font-weight:600">Total: {total}</p>
<div style="margin-top:0.6rem;">
  <button id="checkoutBtn" style="background:#8b5e3c;color:#fff;padding:8px 14px;border-radius:12px;border:none;cursor:pointer">Checkout</button>
</div>"#,
        total = format_price(cart.total()),
    )
}

/// Container and summary innerHTML for the current cart state.
pub fn cart_page_html(cart: &Cart) -> (String, String) {
    match CartView::of(cart) {
        CartView::Empty => (EMPTY_CART_HTML.to_string(), String::new()),
        CartView::Populated => (items_html(cart), summary_html(cart)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartItem;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.push(CartItem::new("A", 10.0));
        cart.push(CartItem::new("B", 5.5));
        cart
    }

    #[test]
    fn test_view_state_follows_contents() {
        assert_eq!(CartView::of(&Cart::new()), CartView::Empty);
        assert_eq!(CartView::of(&sample_cart()), CartView::Populated);
    }

    #[test]
    fn test_empty_cart_renders_message_and_no_total() {
        let (container, summary) = cart_page_html(&Cart::new());

        assert_eq!(container, EMPTY_CART_HTML);
        assert!(summary.is_empty());
    }

    #[test]
    fn test_populated_cart_renders_rows_and_total() {
        let (container, summary) = cart_page_html(&sample_cart());

        assert!(container.contains("<strong>A</strong>"));
        assert!(container.contains("₹10.00"));
        assert!(container.contains("<strong>B</strong>"));
        assert!(container.contains("₹5.50"));
        assert!(summary.contains("Total: ₹15.50"));
        assert!(summary.contains("id=\"checkoutBtn\""));
    }

    #[test]
    fn test_rows_carry_positional_indices_in_order() {
        let html = items_html(&sample_cart());

        let first = html.find(r#"data-index="0""#);
        let second = html.find(r#"data-index="1""#);
        assert!(first.is_some());
        assert!(second.is_some());
        assert!(first < second);
    }

    #[test]
    fn test_one_row_per_item() {
        let html = items_html(&sample_cart());

        assert_eq!(html.matches("remove-item-btn").count(), 2);
        assert_eq!(html.matches("cart-item").count(), 2);
    }

    #[test]
    fn test_zero_price_item_renders_as_zero() {
        let mut cart = Cart::new();
        cart.push(CartItem::new("Freebie", 0.0));

        let html = items_html(&cart);

        assert!(html.contains("₹0.00"));
    }
}
