//! Shopfront Core - cart, catalog and session types.
//!
//! This crate provides the state behind the Shopfront demo:
//! - a fixed catalog of [`Item`]s offered by a [`Shop`]
//! - a [`User`] created by logging in, who owns a cart
//! - a [`Session`] that routes shop actions to the logged-in user and reports
//!   every change to a [`SessionObserver`]
//!
//! # Architecture
//!
//! The core crate contains no I/O and no rendering. A presentation layer
//! implements [`SessionObserver`] and renders the [`CartView`] and
//! [`CatalogView`] snapshots it is handed. Everything is single-threaded;
//! items are shared between catalog and carts with `Rc`.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices
//! - [`item`] - Catalog items
//! - [`user`] - Users, login and cart operations
//! - [`shop`] - The catalog
//! - [`view`] - Render snapshots
//! - [`session`] - Session state machine and notifications

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod item;
pub mod session;
pub mod shop;
pub mod types;
pub mod user;
pub mod view;

pub use item::Item;
pub use session::{Notification, Session, SessionObserver, SessionState};
pub use shop::Shop;
pub use types::*;
pub use user::{LoginError, LoginForm, LoginInputs, User};
pub use view::{CartLine, CartView, CatalogCard, CatalogView};
