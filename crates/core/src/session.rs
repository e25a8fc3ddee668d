//! Session state and change notification.
//!
//! A [`Session`] owns the catalog items for the lifetime of the program and
//! at most one logged-in user with that user's [`Shop`]. Every operation that
//! changes state reports the result to a [`SessionObserver`], which is the
//! only thing a presentation layer needs to implement.
//!
//! ```text
//! LoggedOut --login ok--> LoggedIn(user, shop) --login ok--> LoggedIn(new user, new shop)
//! ```
//!
//! There is no logout. A failed login leaves the state as it was.

use std::rc::Rc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::item::Item;
use crate::shop::Shop;
use crate::types::{ItemId, UserId};
use crate::user::{LoginError, LoginInputs, User};
use crate::view::{CartView, CatalogView};

/// A change the presentation layer should render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum Notification {
    /// A login attempt was rejected; the inputs should be cleared and flagged.
    LoginRejected(LoginError),
    /// A new user is logged in.
    LoggedIn { user_id: UserId, name: String },
    /// The catalog to display changed.
    CatalogUpdated(CatalogView),
    /// The cart changed.
    CartUpdated(CartView),
}

/// Receives session notifications.
pub trait SessionObserver {
    fn notify(&mut self, notification: &Notification);
}

impl SessionObserver for () {
    fn notify(&mut self, _notification: &Notification) {}
}

impl SessionObserver for Vec<Notification> {
    fn notify(&mut self, notification: &Notification) {
        self.push(notification.clone());
    }
}

/// Where the session is in its lifecycle.
#[derive(Debug, Default)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn { user: User, shop: Shop },
}

/// One shopper's interaction with the shop.
#[derive(Debug)]
pub struct Session<O> {
    items: Vec<Rc<Item>>,
    state: SessionState,
    observer: O,
}

impl<O: SessionObserver> Session<O> {
    /// Create a logged-out session over the given catalog items.
    pub fn new(items: impl IntoIterator<Item = Item>, observer: O) -> Self {
        Self {
            items: items.into_iter().map(Rc::new).collect(),
            state: SessionState::LoggedOut,
            observer,
        }
    }

    /// Log in with the given inputs.
    ///
    /// On success any previous user and shop are replaced, a new shop is
    /// stocked from the catalog items, and the observer is told about the
    /// user, the catalog and the (empty) cart.
    ///
    /// # Errors
    ///
    /// Returns the [`LoginError`] if an input is empty. The observer receives
    /// [`Notification::LoginRejected`] and the session is unchanged.
    pub fn login(&mut self, inputs: &impl LoginInputs) -> Result<UserId, LoginError> {
        let user = match User::login(inputs) {
            Ok(user) => user,
            Err(err) => {
                warn!(error = %err, "login rejected");
                self.observer.notify(&Notification::LoginRejected(err));
                return Err(err);
            }
        };

        if let SessionState::LoggedIn { user: previous, .. } = &self.state {
            info!(previous_user_id = %previous.id(), "replacing logged-in user");
        }

        let user_id = user.id();
        let name = user.name().to_owned();
        let shop = Shop::with_items(&self.items);
        info!(%user_id, items = shop.len(), "user logged in");

        let catalog = shop.catalog_view();
        let cart = user.cart_view();
        self.state = SessionState::LoggedIn { user, shop };

        self.observer
            .notify(&Notification::LoggedIn { user_id, name });
        self.observer.notify(&Notification::CatalogUpdated(catalog));
        self.observer.notify(&Notification::CartUpdated(cart));
        Ok(user_id)
    }

    /// Add a catalog item to the current user's cart.
    ///
    /// Returns `false` without doing anything if nobody is logged in or the
    /// item is not in the catalog.
    pub fn add_to_cart(&mut self, item_id: ItemId) -> bool {
        let SessionState::LoggedIn { user, shop } = &mut self.state else {
            debug!(%item_id, "add to cart ignored: no user");
            return false;
        };
        let Some(item) = shop.find(item_id) else {
            debug!(%item_id, "add to cart ignored: unknown item");
            return false;
        };
        user.add_to_cart(Rc::clone(item));
        self.cart_changed();
        true
    }

    /// Remove one unit of an item from the current user's cart.
    pub fn remove_one(&mut self, item_id: ItemId) -> bool {
        let Some(user) = self.user_mut() else {
            debug!(%item_id, "remove one ignored: no user");
            return false;
        };
        let removed = user.remove_one_by_id(item_id);
        self.cart_changed();
        removed
    }

    /// Remove every unit of an item from the current user's cart.
    pub fn remove_all(&mut self, item_id: ItemId) -> usize {
        let Some(user) = self.user_mut() else {
            debug!(%item_id, "remove all ignored: no user");
            return 0;
        };
        let removed = user.remove_all_by_id(item_id);
        self.cart_changed();
        removed
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        matches!(self.state, SessionState::LoggedIn { .. })
    }

    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        match &self.state {
            SessionState::LoggedIn { user, .. } => Some(user),
            SessionState::LoggedOut => None,
        }
    }

    #[must_use]
    pub const fn shop(&self) -> Option<&Shop> {
        match &self.state {
            SessionState::LoggedIn { shop, .. } => Some(shop),
            SessionState::LoggedOut => None,
        }
    }

    /// The catalog items every new shop is stocked with.
    #[must_use]
    pub fn items(&self) -> &[Rc<Item>] {
        &self.items
    }

    #[must_use]
    pub fn cart_view(&self) -> Option<CartView> {
        self.current_user().map(User::cart_view)
    }

    #[must_use]
    pub fn catalog_view(&self) -> Option<CatalogView> {
        self.shop().map(Shop::catalog_view)
    }

    #[must_use]
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    pub const fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consume the session and return its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    const fn user_mut(&mut self) -> Option<&mut User> {
        match &mut self.state {
            SessionState::LoggedIn { user, .. } => Some(user),
            SessionState::LoggedOut => None,
        }
    }

    /// Re-order the cart for display and send a fresh snapshot.
    fn cart_changed(&mut self) {
        let Some(user) = self.user_mut() else {
            return;
        };
        user.sort_cart();
        let view = user.cart_view();
        self.observer.notify(&Notification::CartUpdated(view));
    }
}
