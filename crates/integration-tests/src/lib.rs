//! Integration tests for Shopfront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopfront-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_session` - Session-level cart behaviour through the core API
//! - `terminal_session` - Scripted command sessions through the terminal storefront

use shopfront_cli::{OutputFormat, Repl, Screen, catalog};

/// Run a command script against the built-in catalog and return what was printed.
///
/// # Panics
///
/// Panics if the script fails to run or the output is not UTF-8.
#[must_use]
#[allow(clippy::expect_used)]
pub fn run_script(script: &str, format: OutputFormat) -> String {
    let screen = Screen::new(Vec::new(), format, "$");
    let mut repl = Repl::new(catalog::builtin(), screen);
    repl.run(script.as_bytes()).expect("script should run");
    String::from_utf8(repl.into_screen().into_inner()).expect("output should be UTF-8")
}
