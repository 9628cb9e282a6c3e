/// DOM controllers: fade-ins, filters, and the cart page
pub mod cart_page;
pub mod dom;
pub mod fade;
pub mod filter;

/// Wire every controller against the live document. Each one exits
/// silently when its elements are missing from the current page.
pub fn boot() {
    fade::init();
    filter::init();
    cart_page::init();
}
