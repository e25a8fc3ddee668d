//! Presentation-neutral snapshots of shop and cart state.
//!
//! Views are owned copies, so an observer can keep them around after the
//! session has moved on.

use std::rc::Rc;

use serde::Serialize;

use crate::item::Item;
use crate::shop::Shop;
use crate::types::{ItemId, Price};
use crate::user::User;

/// One distinct item in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub item_id: ItemId,
    pub name: String,
    pub unit_price: Price,
    pub quantity: usize,
    /// Unit price times quantity, rounded to cents.
    pub extended_price: Price,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    /// Distinct items in cart order, first occurrence wins.
    pub lines: Vec<CartLine>,
    /// Number of entries, duplicates included.
    pub item_count: usize,
    pub total: Price,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            lines: Vec::new(),
            item_count: 0,
            total: Price::ZERO,
        }
    }

    /// Build a view of the user's cart in its current order.
    ///
    /// Entries are grouped by reference, so each line's quantity is
    /// [`User::count_item`] of its first occurrence.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        let mut seen: Vec<&Rc<Item>> = Vec::new();
        for entry in user.cart() {
            if !seen.iter().any(|s| Rc::ptr_eq(s, entry)) {
                seen.push(entry);
            }
        }

        let lines = seen
            .into_iter()
            .map(|item| {
                let quantity = user.count_item(item);
                CartLine {
                    item_id: item.id(),
                    name: item.name().to_owned(),
                    unit_price: item.price(),
                    quantity,
                    extended_price: item.price().extended(quantity),
                }
            })
            .collect();

        Self {
            lines,
            item_count: user.cart_len(),
            total: user.cart_total(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Look up a line by its 1-based position, as shown to the user.
    #[must_use]
    pub fn line(&self, number: usize) -> Option<&CartLine> {
        number.checked_sub(1).and_then(|i| self.lines.get(i))
    }
}

impl Default for CartView {
    fn default() -> Self {
        Self::empty()
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogCard {
    pub item_id: ItemId,
    pub name: String,
    pub price: Price,
    pub description: String,
}

impl From<&Item> for CatalogCard {
    fn from(item: &Item) -> Self {
        Self {
            item_id: item.id(),
            name: item.name().to_owned(),
            price: item.price(),
            description: item.description().to_owned(),
        }
    }
}

/// Catalog display data, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub cards: Vec<CatalogCard>,
}

impl CatalogView {
    #[must_use]
    pub fn from_shop(shop: &Shop) -> Self {
        Self {
            cards: shop.items().iter().map(|item| CatalogCard::from(&**item)).collect(),
        }
    }

    /// Look up a card by its 1-based position, as shown to the user.
    #[must_use]
    pub fn card(&self, number: usize) -> Option<&CatalogCard> {
        number.checked_sub(1).and_then(|i| self.cards.get(i))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(name: &str, price: &str, description: &str) -> Rc<Item> {
        Rc::new(Item::new(name, Price::parse(price).unwrap(), description))
    }

    #[test]
    fn test_empty_cart_view() {
        let user = User::new("Al", "30");
        let view = user.cart_view();
        assert!(view.is_empty());
        assert_eq!(view, CartView::empty());
    }

    #[test]
    fn test_cart_view_groups_duplicates() {
        let a = item("A", "200.00", "aaaa");
        let b = item("B", "150.00", "bb");
        let mut user = User::new("Al", "30");
        user.add_to_cart(Rc::clone(&a));
        user.add_to_cart(Rc::clone(&b));
        user.add_to_cart(Rc::clone(&a));

        let view = user.cart_view();
        assert_eq!(view.item_count, 3);
        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.lines[0].name, "A");
        assert_eq!(view.lines[0].quantity, 2);
        assert_eq!(view.lines[0].extended_price, Price::parse("400").unwrap());
        assert_eq!(view.lines[1].quantity, 1);
        assert_eq!(view.total, Price::parse("550").unwrap());
    }

    #[test]
    fn test_cart_view_follows_sorted_order() {
        let a = item("A", "1", "a long description");
        let b = item("B", "1", "short");
        let mut user = User::new("Al", "30");
        user.add_to_cart(Rc::clone(&a));
        user.add_to_cart(Rc::clone(&b));
        user.sort_cart();

        let names: Vec<_> = user.cart_view().lines.into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_cart_view_line_lookup() {
        let a = item("A", "1", "a");
        let mut user = User::new("Al", "30");
        user.add_to_cart(Rc::clone(&a));
        let view = user.cart_view();

        assert_eq!(view.line(1).unwrap().item_id, a.id());
        assert!(view.line(0).is_none());
        assert!(view.line(2).is_none());
    }

    #[test]
    fn test_extended_price_rounds() {
        let a = item("A", "0.335", "a");
        let mut user = User::new("Al", "30");
        user.add_to_cart(Rc::clone(&a));

        let view = user.cart_view();
        assert_eq!(view.lines[0].extended_price, Price::parse("0.34").unwrap());
    }
}
