//! Line-oriented command language used to drive the storefront.

use crate::app_system::{Screen, Transition};
use crate::domain::{CartAction, ProductId};
use crate::error::CommandError;

/// One user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A +/- button press on the listing.
    Cart(CartAction),
    /// A forward button ("Done", "Proceed to Payment").
    Advance(Transition),
    /// A navbar link.
    Goto(Screen),
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  add <id>      (+ <id>)   add one plant to the cart
  remove <id>   (- <id>)   remove one plant from the cart
  done                     go to checkout
  pay                      proceed to payment
  goto <route>             follow a navbar link: /, /checkout, /payment
  show                     redraw the current page
  help                     show this list
  quit                     leave the shop";

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let name = canonical(verb).ok_or_else(|| CommandError::UnknownCommand(verb.to_string()))?;
        let argument = words.next();
        if let Some(extra) = words.next() {
            return Err(CommandError::UnexpectedArgument {
                command: name,
                argument: extra.to_string(),
            });
        }

        let command = match name {
            "add" => Command::Cart(CartAction::Increment(product_id(name, argument)?)),
            "remove" => Command::Cart(CartAction::Decrement(product_id(name, argument)?)),
            "goto" => {
                let route = argument.ok_or(CommandError::MissingArgument(name))?;
                Command::Goto(route.parse()?)
            }
            "done" => no_argument(name, argument, Command::Advance(Transition::Done))?,
            "pay" => no_argument(name, argument, Command::Advance(Transition::ProceedToPayment))?,
            "show" => no_argument(name, argument, Command::Show)?,
            "help" => no_argument(name, argument, Command::Help)?,
            "quit" => no_argument(name, argument, Command::Quit)?,
            _ => return Err(CommandError::UnknownCommand(verb.to_string())),
        };
        Ok(Some(command))
    }
}

fn canonical(verb: &str) -> Option<&'static str> {
    let name = match verb.to_ascii_lowercase().as_str() {
        "add" | "+" => "add",
        "remove" | "-" => "remove",
        "done" => "done",
        "pay" => "pay",
        "goto" => "goto",
        "show" => "show",
        "help" => "help",
        "quit" | "exit" => "quit",
        _ => return None,
    };
    Some(name)
}

fn product_id(command: &'static str, argument: Option<&str>) -> Result<ProductId, CommandError> {
    let raw = argument.ok_or(CommandError::MissingArgument(command))?;
    raw.parse()
        .map_err(|_| CommandError::InvalidProductId(raw.to_string()))
}

fn no_argument(
    command: &'static str,
    argument: Option<&str>,
    parsed: Command,
) -> Result<Command, CommandError> {
    match argument {
        None => Ok(parsed),
        Some(extra) => Err(CommandError::UnexpectedArgument {
            command,
            argument: extra.to_string(),
        }),
    }
}
