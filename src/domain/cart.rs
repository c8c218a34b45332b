use std::collections::BTreeMap;

use super::ProductId;

/// Interactions that change the cart, one per +/- button on the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    /// Adds one unit of the product.
    Increment(ProductId),
    /// Removes one unit of the product. A no-op when the quantity is already zero.
    Decrement(ProductId),
}

/// Session-scoped mapping from product id to selected quantity.
///
/// Entries iterate in ascending product id order. A product that was added
/// and then removed again keeps an entry with quantity zero; every reader
/// treats that the same as an absent entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    quantities: BTreeMap<ProductId, u32>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `action` and returns the resulting cart.
    pub fn apply(mut self, action: CartAction) -> Self {
        self.apply_in_place(action);
        self
    }

    pub fn apply_in_place(&mut self, action: CartAction) {
        match action {
            CartAction::Increment(id) => self.increment(id),
            CartAction::Decrement(id) => self.decrement(id),
        }
    }

    pub fn increment(&mut self, id: ProductId) {
        let qty = self.quantities.entry(id).or_insert(0);
        *qty = qty.saturating_add(1);
    }

    pub fn decrement(&mut self, id: ProductId) {
        if let Some(qty) = self.quantities.get_mut(&id) {
            if *qty > 0 {
                *qty -= 1;
            }
        }
    }

    pub fn quantity(&self, id: ProductId) -> u32 {
        self.quantities.get(&id).copied().unwrap_or(0)
    }

    /// All `(id, quantity)` pairs, zero quantities included.
    pub fn entries(&self) -> impl Iterator<Item = (ProductId, u32)> + '_ {
        self.quantities.iter().map(|(id, qty)| (*id, *qty))
    }

    /// Total number of units across all products.
    pub fn item_count(&self) -> u64 {
        self.quantities.values().map(|qty| u64::from(*qty)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.values().all(|qty| *qty == 0)
    }
}
