//! Checkout arithmetic: per-line subtotals and the grand total.

use crate::catalog::Catalog;
use crate::domain::{CartState, Price, Product};

/// One checkout row.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem<'a> {
    pub product: &'a Product,
    pub quantity: u32,
    pub subtotal: Price,
}

/// Rows for every cart entry with a positive quantity and a matching catalog
/// product, in ascending product id order.
pub fn line_items<'a>(cart: &CartState, catalog: &'a Catalog) -> Vec<LineItem<'a>> {
    cart.entries()
        .filter(|(_, qty)| *qty > 0)
        .filter_map(|(id, quantity)| {
            let product = catalog.find(id)?;
            Some(LineItem {
                product,
                quantity,
                subtotal: product.price * quantity,
            })
        })
        .collect()
}

/// Sum of `price * qty` over the cart. Ids missing from the catalog count as zero.
pub fn compute_total(cart: &CartState, catalog: &Catalog) -> Price {
    cart.entries()
        .filter(|(_, qty)| *qty > 0)
        .map(|(id, qty)| catalog.find(id).map_or(Price::ZERO, |p| p.price * qty))
        .sum()
}
