use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, instrument, warn};

use crate::catalog::Catalog;
use crate::commands::{Command, HELP};
use crate::domain::{CartAction, CartState};
use crate::error::{CommandError, StorefrontError};
use crate::views::Page;

use super::Screen;

const PROMPT: &str = "> ";

/// What the session should do after a command was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw the current page.
    Render,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

/// One shopper's session: the catalog, their cart, and the page on display.
///
/// All state lives here and is only touched by the task running [`Storefront::run`].
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Catalog,
    cart: CartState,
    screen: Screen,
}

impl Storefront {
    pub fn new(catalog: Catalog, start: Screen) -> Self {
        Self {
            catalog,
            cart: CartState::new(),
            screen: start,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    #[allow(dead_code)]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn page(&self) -> Page<'_> {
        Page::new(self.screen, &self.catalog, &self.cart)
    }

    /// Applies one command. A rejected command leaves cart and screen untouched.
    #[instrument(fields(route = %self.screen), skip(self))]
    pub fn handle(&mut self, command: Command) -> Result<Outcome, CommandError> {
        match command {
            Command::Cart(action) => self.handle_cart_action(action),
            Command::Advance(transition) => {
                self.screen = self.screen.next(transition)?;
                info!(to = %self.screen, "Moved forward");
                Ok(Outcome::Render)
            }
            Command::Goto(screen) => {
                self.screen = screen;
                debug!(to = %screen, "Followed navbar link");
                Ok(Outcome::Render)
            }
            Command::Show => Ok(Outcome::Render),
            Command::Help => Ok(Outcome::Help),
            Command::Quit => Ok(Outcome::Quit),
        }
    }

    fn handle_cart_action(&mut self, action: CartAction) -> Result<Outcome, CommandError> {
        let (label, id) = match action {
            CartAction::Increment(id) => ("add", id),
            CartAction::Decrement(id) => ("remove", id),
        };
        if !self.screen.edits_cart() {
            return Err(CommandError::NotAvailable {
                action: label.to_string(),
                route: self.screen.route(),
            });
        }
        if !self.catalog.contains(id) {
            return Err(CommandError::UnknownProduct(id));
        }

        self.cart = std::mem::take(&mut self.cart).apply(action);
        debug!(product_id = id, quantity = self.cart.quantity(id), "Cart updated");
        Ok(Outcome::Render)
    }

    /// Renders the current page, then handles input lines until `quit` or end of input.
    ///
    /// Invalid commands are reported on `output` and the session carries on.
    #[instrument(name = "storefront", skip_all, fields(start = %self.screen))]
    pub async fn run<R, W>(&mut self, mut input: R, output: &mut W) -> Result<(), StorefrontError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Storefront open");
        emit(output, &self.page().to_string()).await?;

        let mut line = Vec::new();
        loop {
            emit(output, PROMPT).await?;
            line.clear();
            let read = input
                .read_until(b'\n', &mut line)
                .await
                .map_err(StorefrontError::Input)?;
            if read == 0 {
                debug!("End of input");
                break;
            }

            let parsed = std::str::from_utf8(&line)
                .map_err(|_| CommandError::InvalidEncoding)
                .and_then(Command::parse);
            let outcome = match parsed {
                Ok(None) => continue,
                Ok(Some(command)) => self.handle(command),
                Err(e) => Err(e),
            };

            match outcome {
                Ok(Outcome::Render) => emit(output, &self.page().to_string()).await?,
                Ok(Outcome::Help) => emit(output, &format!("{HELP}\n")).await?,
                Ok(Outcome::Quit) => break,
                Err(e) => {
                    let input = String::from_utf8_lossy(&line);
                    warn!(error = %e, input = %input.trim(), "Command rejected");
                    emit(output, &format!("error: {e}\n")).await?;
                }
            }
        }

        info!(
            route = %self.screen,
            items = self.cart.item_count(),
            empty = self.cart.is_empty(),
            "Storefront closed"
        );
        Ok(())
    }
}

/// Opens a command script for [`Storefront::run`].
pub async fn open_script(path: &Path) -> Result<BufReader<File>, StorefrontError> {
    let file = File::open(path).await.map_err(|source| StorefrontError::Script {
        path: path.display().to_string(),
        source,
    })?;
    Ok(BufReader::new(file))
}

async fn emit<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<(), StorefrontError> {
    output
        .write_all(text.as_bytes())
        .await
        .map_err(StorefrontError::Output)?;
    output.flush().await.map_err(StorefrontError::Output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_system::Transition;
    use crate::domain::Price;
    use crate::pricing::compute_total;

    fn storefront() -> Storefront {
        Storefront::new(Catalog::nursery(), Screen::Listing)
    }

    #[test]
    fn test_cart_edits_on_listing() {
        let mut shop = storefront();
        for _ in 0..3 {
            assert_eq!(
                shop.handle(Command::Cart(CartAction::Increment(1))),
                Ok(Outcome::Render)
            );
        }
        assert_eq!(shop.cart().quantity(1), 3);
        assert_eq!(
            compute_total(shop.cart(), shop.catalog()),
            Price::from_cents(3897)
        );
    }

    #[test]
    fn test_unknown_product_rejected() {
        let mut shop = storefront();
        assert_eq!(
            shop.handle(Command::Cart(CartAction::Increment(9))),
            Err(CommandError::UnknownProduct(9))
        );
        assert!(shop.cart().is_empty());
        assert_eq!(shop.cart().entries().count(), 0);
    }

    #[test]
    fn test_cart_locked_outside_listing() {
        let mut shop = storefront();
        shop.handle(Command::Cart(CartAction::Increment(2))).unwrap();
        shop.handle(Command::Advance(Transition::Done)).unwrap();
        assert_eq!(
            shop.handle(Command::Cart(CartAction::Decrement(2))),
            Err(CommandError::NotAvailable {
                action: "remove".to_string(),
                route: "/checkout",
            })
        );
        assert_eq!(shop.cart().quantity(2), 1);
    }

    #[test]
    fn test_rejected_transition_keeps_screen() {
        let mut shop = storefront();
        assert!(shop
            .handle(Command::Advance(Transition::ProceedToPayment))
            .is_err());
        assert_eq!(shop.screen(), Screen::Listing);
    }

    #[test]
    fn test_navbar_keeps_cart() {
        let mut shop = storefront();
        shop.handle(Command::Cart(CartAction::Increment(3))).unwrap();
        shop.handle(Command::Goto(Screen::Payment)).unwrap();
        assert_eq!(shop.screen(), Screen::Payment);
        shop.handle(Command::Goto(Screen::Listing)).unwrap();
        assert_eq!(shop.cart().quantity(3), 1);
    }

    #[test]
    fn test_help_and_quit_outcomes() {
        let mut shop = storefront();
        assert_eq!(shop.handle(Command::Help), Ok(Outcome::Help));
        assert_eq!(shop.handle(Command::Show), Ok(Outcome::Render));
        assert_eq!(shop.handle(Command::Quit), Ok(Outcome::Quit));
    }
}
