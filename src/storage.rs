/// Cart persistence over browser localStorage
///
/// The store is a trait so cart logic can be exercised against an
/// in-memory fake in native tests; the wasm build plugs in the real
/// `window.localStorage`.
use crate::cart::Cart;

/// localStorage key holding the serialized cart
pub const CART_KEY: &str = "cart";

/// Minimal key-value contract: get/set of raw strings.
pub trait CartStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Load the cart from the store. An absent key or malformed value
/// reads as the empty cart; the user never sees a storage error.
pub fn load_cart(store: &impl CartStore) -> Cart {
    match store.get(CART_KEY) {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
            log::warn!("discarding malformed cart data: {err}");
            Cart::new()
        }),
        None => Cart::new(),
    }
}

/// Serialize and persist the cart, overwriting the previous value.
/// Last writer wins; there is no cross-tab coordination.
pub fn save_cart(store: &impl CartStore, cart: &Cart) {
    match serde_json::to_string(cart) {
        Ok(raw) => store.set(CART_KEY, &raw),
        Err(err) => log::warn!("failed to serialize cart: {err}"),
    }
}

/// HashMap-backed store for native tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// The browser's localStorage. Every web-sys failure (no window, storage
/// disabled, quota) collapses to `None` / a silent no-op.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl CartStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }
}
