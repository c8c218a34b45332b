//! Text rendering of the navbar and the three screens.

use std::fmt;

use crate::app_system::Screen;
use crate::catalog::Catalog;
use crate::domain::CartState;
use crate::pricing::{compute_total, line_items};

pub const SHOP_TITLE: &str = "Paradise Nursery";
pub const THANK_YOU: &str = "Thank you for your purchase! 🪴";

/// A full page: navbar followed by the body of `screen`.
pub struct Page<'a> {
    pub screen: Screen,
    pub catalog: &'a Catalog,
    pub cart: &'a CartState,
}

impl<'a> Page<'a> {
    pub fn new(screen: Screen, catalog: &'a Catalog, cart: &'a CartState) -> Self {
        Self { screen, catalog, cart }
    }
}

impl fmt::Display for Page<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_navbar(f, self.screen)?;
        writeln!(f)?;
        match self.screen {
            Screen::Listing => write_listing(f, self.catalog, self.cart),
            Screen::Checkout => write_checkout(f, self.catalog, self.cart),
            Screen::Payment => write_payment(f),
        }
    }
}

fn write_navbar(f: &mut fmt::Formatter<'_>, current: Screen) -> fmt::Result {
    write!(f, "== {SHOP_TITLE} ==")?;
    for screen in Screen::ALL {
        let marker = if screen == current { "*" } else { " " };
        write!(f, "  {marker}{} ({})", screen.nav_label(), screen.route())?;
    }
    writeln!(f)
}

fn write_listing(f: &mut fmt::Formatter<'_>, catalog: &Catalog, cart: &CartState) -> fmt::Result {
    writeln!(f, "Plant Shop")?;
    writeln!(f)?;
    for product in catalog.products() {
        writeln!(f, "[{}] {}  {}", product.id, product.name, product.price)?;
        writeln!(f, "    image: {}", product.image_ref)?;
        writeln!(f, "    {}", product.description)?;
        writeln!(f, "    [-]  {}  [+]", cart.quantity(product.id))?;
        writeln!(f)?;
    }
    writeln!(f, "[Done - Go to Checkout]")
}

fn write_checkout(f: &mut fmt::Formatter<'_>, catalog: &Catalog, cart: &CartState) -> fmt::Result {
    writeln!(f, "Checkout Summary")?;
    writeln!(f)?;
    for item in line_items(cart, catalog) {
        writeln!(f, "  {} × {} = {}", item.product.name, item.quantity, item.subtotal)?;
    }
    writeln!(f)?;
    writeln!(f, "Total: {}", compute_total(cart, catalog))?;
    writeln!(f, "[Proceed to Payment]")
}

fn write_payment(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{THANK_YOU}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CartAction;

    fn sample_cart() -> CartState {
        CartState::new()
            .apply(CartAction::Increment(1))
            .apply(CartAction::Increment(1))
            .apply(CartAction::Increment(3))
    }

    #[test]
    fn test_navbar_marks_current_screen() {
        let catalog = Catalog::nursery();
        let cart = CartState::new();
        let page = Page::new(Screen::Checkout, &catalog, &cart).to_string();
        let navbar = page.lines().next().unwrap();
        assert!(navbar.starts_with("== Paradise Nursery =="));
        assert!(navbar.contains(" Home (/)"));
        assert!(navbar.contains("*Checkout (/checkout)"));
        assert!(navbar.contains(" Payment (/payment)"));
    }

    #[test]
    fn test_listing_shows_every_product_with_quantity() {
        let catalog = Catalog::nursery();
        let cart = sample_cart();
        let page = Page::new(Screen::Listing, &catalog, &cart).to_string();
        assert!(page.contains("Plant Shop"));
        assert!(page.contains("[1] red ross  $12.99"));
        assert!(page.contains("[2] Peace Lily  $18.50"));
        assert!(page.contains("Low maintenance and great air purifier."));
        assert!(page.contains("image: public/image.png"));
        assert!(page.contains("[-]  2  [+]"));
        assert!(page.contains("[-]  0  [+]"));
        assert!(page.contains("[Done - Go to Checkout]"));
    }

    #[test]
    fn test_checkout_lists_lines_and_total() {
        let catalog = Catalog::nursery();
        let cart = sample_cart().apply(CartAction::Increment(2)).apply(CartAction::Decrement(2));
        let page = Page::new(Screen::Checkout, &catalog, &cart).to_string();
        assert!(page.contains("Checkout Summary"));
        assert!(page.contains("red ross × 2 = $25.98"));
        assert!(page.contains("Snake Plant × 1 = $22.00"));
        assert!(!page.contains("Peace Lily"));
        assert!(page.contains("Total: $47.98"));
        assert!(page.contains("[Proceed to Payment]"));
    }

    #[test]
    fn test_empty_checkout() {
        let catalog = Catalog::nursery();
        let cart = CartState::new();
        let page = Page::new(Screen::Checkout, &catalog, &cart).to_string();
        assert!(page.contains("Total: $0.00"));
        assert!(!page.contains(" × "));
    }

    #[test]
    fn test_payment_is_static() {
        let catalog = Catalog::nursery();
        let empty = CartState::new();
        let full = sample_cart();
        let body = |cart: &CartState| {
            Page::new(Screen::Payment, &catalog, cart)
                .to_string()
                .lines()
                .skip(1)
                .collect::<Vec<_>>()
                .join("\n")
        };
        assert_eq!(body(&empty), body(&full));
        assert!(body(&empty).contains(THANK_YOU));
    }
}
