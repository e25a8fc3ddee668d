//! Terminal rendering of session notifications.
//!
//! The screen has three regions (login, shop and cart) and exactly one of
//! them is visible at a time. Snapshots from the session are kept for every
//! region, but only the visible one is printed when it changes. The cart
//! count label stays visible regardless of region.

use std::io::Write;

use askama::Template;
use serde::Serialize;
use tracing::warn;

use shopfront_core::{CartView, CatalogView, Notification, Price, SessionObserver};

use crate::config::OutputFormat;
use crate::error::{CliError, Result};

/// Placeholder shown in an untouched name input.
pub const NAME_PLACEHOLDER: &str = "Name";
/// Placeholder shown in an untouched age input.
pub const AGE_PLACEHOLDER: &str = "Age";
/// Placeholder shown in the name input after a rejected login.
pub const NAME_ERROR_PLACEHOLDER: &str = "ERROR: Input valid Name";
/// Placeholder shown in the age input after a rejected login.
pub const AGE_ERROR_PLACEHOLDER: &str = "ERROR: Input valid Age";

/// A display region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    #[default]
    Login,
    Shop,
    Cart,
}

/// The two login inputs as the user sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginFields {
    pub name_placeholder: &'static str,
    pub age_placeholder: &'static str,
}

impl LoginFields {
    const BLANK: Self = Self {
        name_placeholder: NAME_PLACEHOLDER,
        age_placeholder: AGE_PLACEHOLDER,
    };

    const REJECTED: Self = Self {
        name_placeholder: NAME_ERROR_PLACEHOLDER,
        age_placeholder: AGE_ERROR_PLACEHOLDER,
    };
}

impl Default for LoginFields {
    fn default() -> Self {
        Self::BLANK
    }
}

// =============================================================================
// Templates
// =============================================================================

struct CatalogCardView {
    number: usize,
    name: String,
    price: String,
    description: String,
}

struct CartLineView {
    number: usize,
    name: String,
    quantity: usize,
    price: String,
}

#[derive(Template)]
#[template(path = "catalog.txt")]
struct CatalogTemplate {
    cards: Vec<CatalogCardView>,
}

#[derive(Template)]
#[template(path = "cart.txt")]
struct CartTemplate {
    lines: Vec<CartLineView>,
    total: String,
}

#[derive(Template)]
#[template(path = "login.txt")]
struct LoginTemplate<'a> {
    user: &'a str,
    name_placeholder: &'a str,
    age_placeholder: &'a str,
}

/// Renders session state to a writer.
pub struct Screen<W> {
    out: W,
    format: OutputFormat,
    currency_symbol: String,
    region: Region,
    user_name: Option<String>,
    login: LoginFields,
    catalog: CatalogView,
    cart: CartView,
    failed: Option<CliError>,
}

impl<W: Write> Screen<W> {
    /// Create a screen showing the login region.
    pub fn new(out: W, format: OutputFormat, currency_symbol: impl Into<String>) -> Self {
        Self {
            out,
            format,
            currency_symbol: currency_symbol.into(),
            region: Region::Login,
            user_name: None,
            login: LoginFields::default(),
            catalog: CatalogView::default(),
            cart: CartView::empty(),
            failed: None,
        }
    }

    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    #[must_use]
    pub const fn login_fields(&self) -> LoginFields {
        self.login
    }

    /// The most recent catalog snapshot.
    #[must_use]
    pub const fn catalog(&self) -> &CatalogView {
        &self.catalog
    }

    /// The most recent cart snapshot.
    #[must_use]
    pub const fn cart(&self) -> &CartView {
        &self.cart
    }

    /// Make `region` the visible one and draw it.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    pub fn navigate(&mut self, region: Region) -> Result<()> {
        self.region = region;
        self.render()
    }

    /// Draw the visible region.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    pub fn render(&mut self) -> Result<()> {
        match self.format {
            OutputFormat::Text => match self.region {
                Region::Login => self.render_login(),
                Region::Shop => self.render_catalog(),
                Region::Cart => self.render_cart(),
            },
            OutputFormat::Json => {
                let view = match self.region {
                    Region::Login => serde_json::json!({ "user": self.user_name }),
                    Region::Shop => serde_json::to_value(&self.catalog)?,
                    Region::Cart => serde_json::to_value(&self.cart)?,
                };
                self.write_json(&serde_json::json!({ "region": self.region, "view": view }))
            }
        }
    }

    /// Print a one-line message outside any region.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn message(&mut self, text: &str) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{text}")?,
            OutputFormat::Json => self.write_json(&serde_json::json!({ "message": text }))?,
        }
        Ok(())
    }

    /// Take the first error hit while drawing a notification, if any.
    ///
    /// # Errors
    ///
    /// Returns that error and clears it.
    pub fn take_error(&mut self) -> Result<()> {
        self.failed.take().map_or(Ok(()), Err)
    }

    /// Consume the screen and return its writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn apply(&mut self, notification: &Notification) -> Result<()> {
        match notification {
            Notification::LoginRejected(_) => {
                self.login = LoginFields::REJECTED;
                self.region = Region::Login;
            }
            Notification::LoggedIn { name, .. } => {
                self.login = LoginFields::BLANK;
                self.user_name = Some(name.clone());
                self.region = Region::Shop;
            }
            Notification::CatalogUpdated(view) => self.catalog = view.clone(),
            Notification::CartUpdated(view) => self.cart = view.clone(),
        }

        if self.format == OutputFormat::Json {
            return self.write_json(notification);
        }

        match notification {
            Notification::LoginRejected(_) => self.render_login(),
            Notification::LoggedIn { name, .. } => {
                writeln!(self.out, "Welcome, {name}!")?;
                Ok(())
            }
            Notification::CatalogUpdated(_) if self.region == Region::Shop => {
                self.render_catalog()
            }
            Notification::CartUpdated(view) => {
                writeln!(self.out, "View Cart: {}", view.item_count)?;
                if self.region == Region::Cart {
                    self.render_cart()?;
                }
                Ok(())
            }
            Notification::CatalogUpdated(_) => Ok(()),
        }
    }

    fn money(&self, price: Price) -> String {
        format!("{}{price}", self.currency_symbol)
    }

    fn render_login(&mut self) -> Result<()> {
        let page = LoginTemplate {
            user: self.user_name.as_deref().unwrap_or(""),
            name_placeholder: self.login.name_placeholder,
            age_placeholder: self.login.age_placeholder,
        }
        .render()?;
        self.write_block(&page)
    }

    fn render_catalog(&mut self) -> Result<()> {
        let cards = self
            .catalog
            .cards
            .iter()
            .enumerate()
            .map(|(i, card)| CatalogCardView {
                number: i + 1,
                name: card.name.clone(),
                price: self.money(card.price),
                description: card.description.clone(),
            })
            .collect();
        let page = CatalogTemplate { cards }.render()?;
        self.write_block(&page)
    }

    fn render_cart(&mut self) -> Result<()> {
        let lines = self
            .cart
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| CartLineView {
                number: i + 1,
                name: line.name.clone(),
                quantity: line.quantity,
                price: self.money(line.extended_price),
            })
            .collect();
        let total = self.money(self.cart.total);
        let page = CartTemplate { lines, total }.render()?;
        self.write_block(&page)
    }

    fn write_block(&mut self, page: &str) -> Result<()> {
        writeln!(self.out, "{}", page.trim_end())?;
        Ok(())
    }

    fn write_json(&mut self, value: &impl Serialize) -> Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> SessionObserver for Screen<W> {
    fn notify(&mut self, notification: &Notification) {
        if let Err(err) = self.apply(notification) {
            warn!(error = %err, "failed to render update");
            if self.failed.is_none() {
                self.failed = Some(err);
            }
        }
    }
}
