//! The fixed list of plants on sale.

use crate::domain::{Price, Product, ProductId};

/// Immutable product list, loaded once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The Paradise Nursery plant range.
    pub fn nursery() -> Self {
        Self::new(vec![
            Product::new(
                1,
                "red ross",
                Price::from_cents(1299),
                "public/Screenshot 2025-04-02 202010.png",
                "A healing plant that thrives in sunlight.",
            ),
            Product::new(
                2,
                "Peace Lily",
                Price::from_cents(1850),
                "public/Screenshot 2025-04-02 202123.png",
                "Beautiful white flowers and easy care.",
            ),
            Product::new(
                3,
                "Snake Plant",
                Price::from_cents(2200),
                "public/image.png",
                "Low maintenance and great air purifier.",
            ),
        ])
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.find(id).is_some()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}
