//! Which screen is on display and how the user moves between screens.

use std::fmt;
use std::str::FromStr;

use crate::error::CommandError;

/// The three screens of the storefront, named after their routes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    /// `/`: the plant listing with the +/- cart controls.
    #[default]
    Listing,
    /// `/checkout`: line items and the grand total.
    Checkout,
    /// `/payment`: the static thank-you page.
    Payment,
}

/// Buttons that move the user forward through the purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// "Done - Go to Checkout" on the listing.
    Done,
    /// "Proceed to Payment" on the checkout summary.
    ProceedToPayment,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Listing, Screen::Checkout, Screen::Payment];

    pub fn route(self) -> &'static str {
        match self {
            Screen::Listing => "/",
            Screen::Checkout => "/checkout",
            Screen::Payment => "/payment",
        }
    }

    /// Label of the navbar link pointing at this screen.
    pub fn nav_label(self) -> &'static str {
        match self {
            Screen::Listing => "Home",
            Screen::Checkout => "Checkout",
            Screen::Payment => "Payment",
        }
    }

    /// Whether the +/- cart controls are on this screen.
    pub fn edits_cart(self) -> bool {
        matches!(self, Screen::Listing)
    }

    /// The screen reached by pressing the button for `transition`.
    ///
    /// Only the forward edges exist; the payment page offers no buttons.
    pub fn next(self, transition: Transition) -> Result<Screen, CommandError> {
        match (self, transition) {
            (Screen::Listing, Transition::Done) => Ok(Screen::Checkout),
            (Screen::Checkout, Transition::ProceedToPayment) => Ok(Screen::Payment),
            (screen, transition) => Err(CommandError::NotAvailable {
                action: transition.to_string(),
                route: screen.route(),
            }),
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

impl FromStr for Screen {
    type Err = CommandError;

    fn from_str(route: &str) -> Result<Self, Self::Err> {
        let trimmed = route.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" if trimmed.starts_with('/') => "/",
            other => other,
        };
        Screen::ALL
            .into_iter()
            .find(|screen| screen.route() == normalized)
            .ok_or_else(|| CommandError::UnknownRoute(trimmed.to_string()))
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Done => f.write_str("done"),
            Transition::ProceedToPayment => f.write_str("pay"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_path() {
        let screen = Screen::default();
        assert_eq!(screen, Screen::Listing);
        let screen = screen.next(Transition::Done).unwrap();
        assert_eq!(screen, Screen::Checkout);
        let screen = screen.next(Transition::ProceedToPayment).unwrap();
        assert_eq!(screen, Screen::Payment);
    }

    #[test]
    fn test_payment_is_terminal() {
        for transition in [Transition::Done, Transition::ProceedToPayment] {
            assert_eq!(
                Screen::Payment.next(transition),
                Err(CommandError::NotAvailable {
                    action: transition.to_string(),
                    route: "/payment",
                })
            );
        }
    }

    #[test]
    fn test_buttons_only_on_their_screen() {
        assert!(Screen::Listing.next(Transition::ProceedToPayment).is_err());
        assert!(Screen::Checkout.next(Transition::Done).is_err());
    }

    #[test]
    fn test_route_parsing() {
        assert_eq!("/".parse::<Screen>().unwrap(), Screen::Listing);
        assert_eq!("/checkout".parse::<Screen>().unwrap(), Screen::Checkout);
        assert_eq!(" /payment/ ".parse::<Screen>().unwrap(), Screen::Payment);
        assert_eq!(
            "/cart".parse::<Screen>(),
            Err(CommandError::UnknownRoute("/cart".to_string()))
        );
        assert!("checkout".parse::<Screen>().is_err());
    }

    #[test]
    fn test_route_round_trip() {
        for screen in Screen::ALL {
            assert_eq!(screen.to_string().parse::<Screen>().unwrap(), screen);
        }
    }
}
