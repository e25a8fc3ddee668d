//! Shoppers and their carts.
//!
//! A [`User`] is created by logging in with a name and an age. Its cart is an
//! ordered list of shared catalog references where duplicates stand for
//! multiple units of the same item.
//!
//! # Identity
//!
//! Removal matches entries by [`ItemId`], while [`User::count_item`] matches
//! by reference (`Rc::ptr_eq`). The two only disagree for an id-equal but
//! distinct instance, which cannot come out of a catalog; use
//! [`User::count_by_id`] when only the id is at hand.

use std::rc::Rc;

use serde::Deserialize;
use tracing::debug;

use crate::item::Item;
use crate::types::{ItemId, Price, UserId};
use crate::view::CartView;

/// Why a login attempt was rejected.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginError {
    /// The name input was empty.
    #[error("name cannot be empty")]
    EmptyName,
    /// The age input was empty.
    #[error("age cannot be empty")]
    EmptyAge,
}

/// A source of the two login inputs, read on demand at login time.
pub trait LoginInputs {
    /// Current value of the name input.
    fn name(&self) -> String;
    /// Current value of the age input.
    fn age(&self) -> String;
}

/// Login form data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    pub name: String,
    pub age: String,
}

impl LoginForm {
    #[must_use]
    pub fn new(name: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
        }
    }
}

impl LoginInputs for LoginForm {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn age(&self) -> String {
        self.age.clone()
    }
}

/// A logged-in shopper.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    name: String,
    age: String,
    cart: Vec<Rc<Item>>,
}

impl User {
    /// Create a user with an empty cart and a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            id: UserId::generate(),
            name: name.into(),
            age: age.into(),
            cart: Vec::new(),
        }
    }

    /// Read the login inputs and create a user if both are non-empty.
    ///
    /// The age is kept as typed; it is never parsed or range-checked.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::EmptyName`] or [`LoginError::EmptyAge`] if the
    /// corresponding input is empty. The name is checked first.
    pub fn login(inputs: &impl LoginInputs) -> Result<Self, LoginError> {
        let name = inputs.name();
        let age = inputs.age();

        if name.is_empty() {
            return Err(LoginError::EmptyName);
        }
        if age.is_empty() {
            return Err(LoginError::EmptyAge);
        }

        Ok(Self::new(name, age))
    }

    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn age(&self) -> &str {
        &self.age
    }

    pub fn set_age(&mut self, age: impl Into<String>) {
        self.age = age.into();
    }

    /// The cart in its current order.
    #[must_use]
    pub fn cart(&self) -> &[Rc<Item>] {
        &self.cart
    }

    /// Number of entries in the cart, duplicates included.
    #[must_use]
    pub fn cart_len(&self) -> usize {
        self.cart.len()
    }

    /// Append an item to the end of the cart.
    pub fn add_to_cart(&mut self, item: Rc<Item>) {
        debug!(user_id = %self.id, item_id = %item.id(), "add to cart");
        self.cart.push(item);
    }

    /// Remove the first entry with the same id as `item`.
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove_one(&mut self, item: &Item) -> bool {
        self.remove_one_by_id(item.id())
    }

    /// Remove the first entry with the given id.
    pub fn remove_one_by_id(&mut self, id: ItemId) -> bool {
        let Some(pos) = self.cart.iter().position(|entry| entry.id() == id) else {
            return false;
        };
        self.cart.remove(pos);
        debug!(user_id = %self.id, item_id = %id, "removed one from cart");
        true
    }

    /// Remove every entry with the same id as `item`.
    ///
    /// Returns the number of entries removed.
    pub fn remove_all(&mut self, item: &Item) -> usize {
        self.remove_all_by_id(item.id())
    }

    /// Remove every entry with the given id.
    pub fn remove_all_by_id(&mut self, id: ItemId) -> usize {
        let before = self.cart.len();
        self.cart.retain(|entry| entry.id() != id);
        let removed = before - self.cart.len();
        debug!(user_id = %self.id, item_id = %id, removed, "removed all from cart");
        removed
    }

    /// Count the entries that are this exact instance.
    #[must_use]
    pub fn count_item(&self, item: &Rc<Item>) -> usize {
        self.cart
            .iter()
            .filter(|entry| Rc::ptr_eq(entry, item))
            .count()
    }

    /// Count the entries with the given id.
    #[must_use]
    pub fn count_by_id(&self, id: ItemId) -> usize {
        self.cart.iter().filter(|entry| entry.id() == id).count()
    }

    /// Sum of every entry's price, rounded to cents.
    #[must_use]
    pub fn cart_total(&self) -> Price {
        self.cart
            .iter()
            .map(|entry| entry.price())
            .sum::<Price>()
            .round_to_cents()
    }

    /// Order the cart by description length, shortest first.
    pub fn sort_cart(&mut self) {
        self.cart.sort_by_key(|entry| entry.description_len());
    }

    /// Snapshot of the cart in its current order.
    #[must_use]
    pub fn cart_view(&self) -> CartView {
        CartView::from_user(self)
    }
}
