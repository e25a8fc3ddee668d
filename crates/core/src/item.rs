//! Catalog items.

use serde::{Deserialize, Serialize};

use crate::types::{ItemId, Price};

/// An immutable catalog entry.
///
/// Items are shared as `Rc<Item>` between the catalog and every cart that
/// holds them, so a cart entry is a reference to the catalog entry rather than
/// a copy. Cloning an `Item` produces a distinct instance with the same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    price: Price,
    description: String,
}

impl Item {
    /// Create an item with a freshly generated id.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Price, description: impl Into<String>) -> Self {
        Self {
            id: ItemId::generate(),
            name: name.into(),
            price,
            description: description.into(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Length of the description in characters, used to order carts.
    #[must_use]
    pub fn description_len(&self) -> usize {
        self.description.chars().count()
    }
}
