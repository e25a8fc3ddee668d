//! Shopfront terminal storefront.
//!
//! This crate is the presentation layer for `shopfront-core`: it loads the
//! catalog and configuration, renders session notifications to a terminal,
//! and turns typed commands into session operations.
//!
//! # Modules
//!
//! - [`config`] - Environment configuration
//! - [`catalog`] - Built-in and YAML catalogs
//! - [`screen`] - Login / shop / cart regions rendered with askama
//! - [`repl`] - Command parsing and the read-execute loop
//! - [`error`] - Error type shared by the above

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod repl;
pub mod screen;

pub use config::{CliConfig, OutputFormat};
pub use error::{CliError, Result};
pub use repl::{Command, Flow, Repl};
pub use screen::{Region, Screen};
