//! Interactive command loop.
//!
//! Each input line is split like a shell command line (so `login "Al B" 30`
//! and `login "" 30` work) and parsed with clap. Bad lines print the parse
//! error and the loop carries on.

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};
use tracing::debug;

use shopfront_core::{Item, LoginForm, Session};

use crate::error::Result;
use crate::screen::{Region, Screen};

#[derive(Parser, Debug)]
#[command(name = "shopfront", no_binary_name = true, disable_version_flag = true)]
struct CommandLine {
    #[command(subcommand)]
    command: Command,
}

/// A single storefront command.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Log in with a name and an age
    Login {
        #[arg(default_value = "")]
        name: String,
        #[arg(default_value = "")]
        age: String,
    },
    /// Switch the visible region
    Nav {
        #[arg(value_enum)]
        region: Region,
    },
    /// Redraw the visible region
    Show,
    /// Add a catalog item (by its number in the shop) to the cart
    Add { number: usize },
    /// Remove one unit of a cart line (by its number in the cart)
    RemoveOne { line: usize },
    /// Remove every unit of a cart line (by its number in the cart)
    RemoveAll { line: usize },
    /// Leave the shop
    #[command(alias = "exit")]
    Quit,
}

impl Command {
    /// Parse one input line.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments.
    ///
    /// # Errors
    ///
    /// Returns a printable message if the line is not a valid command,
    /// including the help text for `help`.
    pub fn parse_line(line: &str) -> std::result::Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let words = shell_words::split(line).map_err(|e| format!("error: {e}"))?;
        CommandLine::try_parse_from(words)
            .map(|parsed| Some(parsed.command))
            .map_err(|e| e.render().to_string())
    }
}

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Drives a [`Session`] from text commands and renders to a [`Screen`].
pub struct Repl<W: Write> {
    session: Session<Screen<W>>,
}

impl<W: Write> Repl<W> {
    pub fn new(items: impl IntoIterator<Item = Item>, screen: Screen<W>) -> Self {
        Self {
            session: Session::new(items, screen),
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session<Screen<W>> {
        &self.session
    }

    /// Consume the loop and return its screen.
    pub fn into_screen(self) -> Screen<W> {
        self.session.into_observer()
    }

    /// Read and execute commands until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails, including
    /// output drawn in response to a session update.
    pub fn run(&mut self, input: impl BufRead) -> Result<()> {
        self.screen().render()?;
        for line in input.lines() {
            let line = line?;
            match Command::parse_line(&line) {
                Ok(None) => {}
                Ok(Some(command)) => {
                    let flow = self.execute(command)?;
                    self.screen().take_error()?;
                    if flow == Flow::Quit {
                        break;
                    }
                }
                Err(message) => self.screen().message(message.trim_end())?,
            }
        }
        Ok(())
    }

    /// Execute one command.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        debug!(?command, "executing command");
        match command {
            Command::Login { name, age } => {
                // Rejections are reported to the screen by the session.
                let _ = self.session.login(&LoginForm::new(name, age));
            }
            Command::Nav { region } => self.screen().navigate(region)?,
            Command::Show => self.screen().render()?,
            Command::Add { number } => self.add(number)?,
            Command::RemoveOne { line } => {
                if let Some(item_id) = self.cart_item(line)? {
                    self.session.remove_one(item_id);
                }
            }
            Command::RemoveAll { line } => {
                if let Some(item_id) = self.cart_item(line)? {
                    self.session.remove_all(item_id);
                }
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    const fn screen(&mut self) -> &mut Screen<W> {
        self.session.observer_mut()
    }

    fn add(&mut self, number: usize) -> Result<()> {
        let Some(catalog) = self.session.catalog_view() else {
            return self.screen().message("Log in to start shopping.");
        };
        match catalog.card(number) {
            Some(card) => {
                self.session.add_to_cart(card.item_id);
                Ok(())
            }
            None => self.screen().message(&format!("No item #{number} in the shop.")),
        }
    }

    fn cart_item(&mut self, line: usize) -> Result<Option<shopfront_core::ItemId>> {
        let Some(cart) = self.session.cart_view() else {
            self.screen().message("Log in to start shopping.")?;
            return Ok(None);
        };
        match cart.line(line) {
            Some(found) => Ok(Some(found.item_id)),
            None => {
                self.screen().message(&format!("No line #{line} in the cart."))?;
                Ok(None)
            }
        }
    }
}
