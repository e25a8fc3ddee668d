//! The shop catalog.

use std::rc::Rc;

use crate::item::Item;
use crate::types::ItemId;
use crate::view::CatalogView;

/// A catalog of items, unique by reference and kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Shop {
    items: Vec<Rc<Item>>,
}

impl Shop {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a shop stocked with the given items.
    #[must_use]
    pub fn with_items<'a>(items: impl IntoIterator<Item = &'a Rc<Item>>) -> Self {
        let mut shop = Self::new();
        for item in items {
            shop.add_to_shop(Rc::clone(item));
        }
        shop
    }

    /// Add an item to the catalog.
    ///
    /// Returns `false` if this exact item is already listed.
    pub fn add_to_shop(&mut self, item: Rc<Item>) -> bool {
        if self.items.iter().any(|listed| Rc::ptr_eq(listed, &item)) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Find a listed item by id.
    #[must_use]
    pub fn find(&self, id: ItemId) -> Option<&Rc<Item>> {
        self.items.iter().find(|item| item.id() == id)
    }

    #[must_use]
    pub fn items(&self) -> &[Rc<Item>] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn catalog_view(&self) -> CatalogView {
        CatalogView::from_shop(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::Price;

    fn item(name: &str) -> Rc<Item> {
        Rc::new(Item::new(name, Price::from_cents(100), "desc"))
    }

    #[test]
    fn test_add_to_shop_is_idempotent() {
        let a = item("A");
        let mut shop = Shop::new();
        assert!(shop.add_to_shop(Rc::clone(&a)));
        assert!(!shop.add_to_shop(Rc::clone(&a)));
        assert_eq!(shop.len(), 1);
    }

    #[test]
    fn test_equal_values_are_distinct_entries() {
        let a = item("A");
        let twin = Rc::new((*a).clone());
        let mut shop = Shop::new();
        shop.add_to_shop(a);
        assert!(shop.add_to_shop(twin));
        assert_eq!(shop.len(), 2);
    }

    #[test]
    fn test_catalog_keeps_insertion_order() {
        let items = [item("C"), item("A"), item("B")];
        let shop = Shop::with_items(&items);
        let names: Vec<_> = shop
            .catalog_view()
            .cards
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_find() {
        let a = item("A");
        let shop = Shop::with_items(&[Rc::clone(&a)]);
        assert!(Rc::ptr_eq(shop.find(a.id()).unwrap(), &a));
        assert!(shop.find(ItemId::generate()).is_none());
    }
}
