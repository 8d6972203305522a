use super::error::CartError;
use super::storage::{CartStorage, CART_KEY};
use crate::model::{CartItem, Product, ProductId};
use tracing::{debug, info, warn};

/// Handle returned by [`CartManager::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&[CartItem]) + Send>;

/// Holds the cart snapshot, persists it and broadcasts it.
///
/// Every mutation builds the next snapshot, writes it to storage, and only then replaces
/// the current one and notifies listeners in registration order. A failed write leaves
/// the cart as it was and notifies nobody.
pub struct CartManager<S: CartStorage> {
    storage: S,
    items: Vec<CartItem>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S: CartStorage> CartManager<S> {
    /// Rehydrates the cart from `storage`.
    ///
    /// Nothing stored means an empty cart. So does a stored value that cannot be read or
    /// parsed; that case is logged.
    pub fn load(storage: S) -> Self {
        let items = match storage.get(CART_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(key = CART_KEY, error = %e, "Discarding unreadable cart");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key = CART_KEY, error = %e, "Cart storage unavailable, starting empty");
                Vec::new()
            }
        };
        info!(items = items.len(), "Cart loaded");

        Self {
            storage,
            items,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The current snapshot.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Registers a listener and immediately calls it with the current snapshot.
    pub fn subscribe(
        &mut self,
        mut listener: impl FnMut(&[CartItem]) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        listener(&self.items);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    /// Adds one unit of `product`: a new line at quantity 1, or +1 on the existing line.
    pub fn add_to_cart(&mut self, product: &Product) -> Result<(), CartError> {
        let mut next = self.items.clone();
        match next.iter_mut().find(|item| item.product.id == product.id) {
            Some(item) => item.quantity += 1,
            None => next.push(CartItem::new(product.clone())),
        }
        debug!(product_id = %product.id, "Add to cart");
        self.commit(next)
    }

    /// Drops the line for `id`. Absent ids still persist and broadcast.
    pub fn remove_from_cart(&mut self, id: ProductId) -> Result<(), CartError> {
        let next = self
            .items
            .iter()
            .filter(|item| item.product.id != id)
            .cloned()
            .collect();
        debug!(product_id = %id, "Remove from cart");
        self.commit(next)
    }

    /// Sets the quantity of the line for `id`. A quantity of 0 keeps the line.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> Result<(), CartError> {
        let mut next = self.items.clone();
        if let Some(item) = next.iter_mut().find(|item| item.product.id == id) {
            item.quantity = quantity;
        }
        debug!(product_id = %id, quantity, "Update quantity");
        self.commit(next)
    }

    /// What the cart view does with a quantity edit: positive values update, anything else removes.
    pub fn apply_quantity_change(&mut self, id: ProductId, quantity: i64) -> Result<(), CartError> {
        if quantity > 0 {
            self.update_quantity(id, quantity)
        } else {
            self.remove_from_cart(id)
        }
    }

    pub fn clear_cart(&mut self) -> Result<(), CartError> {
        debug!("Clear cart");
        self.commit(Vec::new())
    }

    /// Sum of `price * quantity` over the current snapshot.
    pub fn get_total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Sum of line quantities.
    pub fn get_item_count(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    fn commit(&mut self, next: Vec<CartItem>) -> Result<(), CartError> {
        let raw = serde_json::to_string(&next)?;
        if let Err(e) = self.storage.set(CART_KEY, &raw) {
            warn!(key = CART_KEY, error = %e, "Cart not persisted, keeping previous snapshot");
            return Err(e);
        }

        self.items = next;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.items);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::MemoryStorage;
    use std::sync::{Arc, Mutex};

    fn product(id: u32, price: f64) -> Product {
        Product::new(ProductId(id), format!("product-{id}"), price)
    }

    /// Records every snapshot a listener receives.
    fn recorder() -> (Arc<Mutex<Vec<Vec<CartItem>>>>, impl FnMut(&[CartItem]) + Send + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |items: &[CartItem]| sink.lock().unwrap().push(items.to_vec()))
    }

    struct BrokenStorage;

    fn quota_exceeded() -> CartError {
        CartError::Storage {
            path: "broken".into(),
            source: std::io::Error::other("quota exceeded"),
        }
    }

    impl CartStorage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, CartError> {
            Err(quota_exceeded())
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), CartError> {
            Err(quota_exceeded())
        }
    }

    #[test]
    fn test_adding_twice_accumulates_one_line() {
        let mut cart = CartManager::load(MemoryStorage::default());
        let p = product(1, 10.0);

        cart.add_to_cart(&p).unwrap();
        cart.add_to_cart(&p).unwrap();

        assert_eq!(cart.items(), &[CartItem { product: p, quantity: 2 }]);
    }

    #[test]
    fn test_total_and_count() {
        let mut cart = CartManager::load(MemoryStorage::default());
        cart.add_to_cart(&product(1, 10.0)).unwrap();
        cart.add_to_cart(&product(2, 5.0)).unwrap();
        cart.update_quantity(ProductId(1), 2).unwrap();
        cart.update_quantity(ProductId(2), 3).unwrap();

        assert_eq!(cart.get_total(), 35.0);
        assert_eq!(cart.get_item_count(), 5);
    }

    #[test]
    fn test_update_to_zero_keeps_line_until_removed() {
        let mut cart = CartManager::load(MemoryStorage::default());
        cart.add_to_cart(&product(1, 10.0)).unwrap();
        let (seen, listener) = recorder();
        cart.subscribe(listener);

        cart.update_quantity(ProductId(1), 0).unwrap();
        assert_eq!(cart.items()[0].quantity, 0);

        cart.remove_from_cart(ProductId(1)).unwrap();
        let seen = seen.lock().unwrap();
        assert!(seen.last().unwrap().is_empty());
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_quantity_change_removes_at_or_below_zero() {
        let mut cart = CartManager::load(MemoryStorage::default());
        cart.add_to_cart(&product(1, 10.0)).unwrap();
        cart.add_to_cart(&product(2, 5.0)).unwrap();

        cart.apply_quantity_change(ProductId(1), 4).unwrap();
        cart.apply_quantity_change(ProductId(2), -1).unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 4);
        cart.apply_quantity_change(ProductId(1), 0).unwrap();
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_removing_absent_id_still_broadcasts() {
        let mut cart = CartManager::load(MemoryStorage::default());
        let (seen, listener) = recorder();
        cart.subscribe(listener);

        cart.remove_from_cart(ProductId(42)).unwrap();

        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_listeners_run_in_registration_order_until_unsubscribed() {
        let mut cart = CartManager::load(MemoryStorage::default());
        let order = Arc::new(Mutex::new(Vec::new()));
        let (first, second) = (order.clone(), order.clone());
        let a = cart.subscribe(move |_| first.lock().unwrap().push("a"));
        cart.subscribe(move |_| second.lock().unwrap().push("b"));

        cart.add_to_cart(&product(1, 1.0)).unwrap();
        assert!(cart.unsubscribe(a));
        assert!(!cart.unsubscribe(a));
        cart.clear_cart().unwrap();

        assert_eq!(*order.lock().unwrap(), vec!["a", "b", "a", "b", "b"]);
    }

    #[test]
    fn test_mutations_persist_and_reload() {
        let storage = MemoryStorage::default();
        let mut cart = CartManager::load(storage.clone());
        cart.add_to_cart(&product(3, 2.5)).unwrap();
        cart.add_to_cart(&product(3, 2.5)).unwrap();

        let reloaded = CartManager::load(storage.clone());
        assert_eq!(reloaded.items(), cart.items());

        let raw = storage.get(CART_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json[0]["quantity"], 2);
        assert_eq!(json[0]["product"]["id"], 3);
    }

    #[test]
    fn test_unreadable_snapshot_loads_empty() {
        let storage = MemoryStorage::default();
        storage.set(CART_KEY, "{ not json").unwrap();

        assert!(CartManager::load(storage).items().is_empty());
        assert!(CartManager::load(BrokenStorage).items().is_empty());
    }

    #[test]
    fn test_failed_persist_keeps_snapshot_and_skips_broadcast() {
        let mut cart = CartManager::load(BrokenStorage);
        let (seen, listener) = recorder();
        cart.subscribe(listener);

        let result = cart.add_to_cart(&product(1, 10.0));

        assert!(matches!(result, Err(CartError::Storage { .. })));
        assert!(cart.items().is_empty());
        assert_eq!(seen.lock().unwrap().len(), 1);
    }
}
