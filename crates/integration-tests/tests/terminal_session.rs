//! Integration tests for scripted terminal sessions.

use shopfront_cli::OutputFormat;
use shopfront_integration_tests::run_script;

#[test]
fn test_full_text_session() {
    let out = run_script(
        "login Al 30\nadd 1\nadd 1\nadd 2\nnav cart\nquit\n",
        OutputFormat::Text,
    );

    assert!(out.contains("Welcome, Al!"));
    assert!(out.contains("[1] Code Compiler --------- $200.00"));
    assert!(out.contains("View Cart: 3"));
    assert!(out.contains("# in cart: 2 | Price: $400.00"));
    assert!(out.contains("# in cart: 1 | Price: $150.00"));
    assert!(out.contains("Current Total: $550.00"));
}

#[test]
fn test_rejected_login_shows_errors() {
    let out = run_script("login \"\" 30\n", OutputFormat::Text);

    assert!(out.contains("Name: [ERROR: Input valid Name]"));
    assert!(out.contains("Age:  [ERROR: Input valid Age]"));
    assert!(!out.contains("Welcome"));
}

#[test]
fn test_remove_lines_from_cart_view() {
    let out = run_script(
        "login Al 30\nadd 1\nadd 1\nnav cart\nremove-one 1\nremove-all 1\n",
        OutputFormat::Text,
    );

    assert!(out.contains("# in cart: 2 | Price: $400.00"));
    assert!(out.contains("# in cart: 1 | Price: $200.00"));
    assert!(out.contains("The Current Cart is empty :("));
    assert!(out.trim_end().ends_with("Current Total: $0.00"));
}

#[test]
fn test_shopping_before_login_is_refused() {
    let out = run_script("add 1\n", OutputFormat::Text);
    assert!(out.contains("Log in to start shopping."));
}

#[test]
fn test_bad_command_does_not_stop_session() {
    let out = run_script("dance\nlogin Al 30\n", OutputFormat::Text);
    assert!(out.contains("dance"));
    assert!(out.contains("Welcome, Al!"));
}

#[test]
fn test_json_session() {
    let out = run_script("login Al 30\nadd 3\n", OutputFormat::Json);

    let events: Vec<serde_json::Value> = out
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let kinds: Vec<_> = events
        .iter()
        .filter_map(|e| e["event"].as_str())
        .collect();
    assert_eq!(
        kinds,
        vec!["logged_in", "catalog_updated", "cart_updated", "cart_updated"]
    );

    let last = events.last().unwrap();
    assert_eq!(last["data"]["item_count"], 1);
    assert_eq!(last["data"]["lines"][0]["name"], "Idea Generator");
    assert_eq!(last["data"]["total"], "500.00");
}
