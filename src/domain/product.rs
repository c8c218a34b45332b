use std::fmt;
use std::ops::{Add, Mul};

/// Stable identifier of a catalog product.
pub type ProductId = u32;

/// Money amount held in whole cents so that `price * qty` sums exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl Mul<u32> for Price {
    type Output = Price;

    fn mul(self, qty: u32) -> Price {
        Price(self.0.saturating_mul(u64::from(qty)))
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.cents();
        write!(f, "${}.{:02}", cents / 100, cents % 100)
    }
}

/// A plant offered in the shop. Defined once at startup and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image_ref: String,
    pub description: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        image_ref: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image_ref: image_ref.into(),
            description: description.into(),
        }
    }
}
