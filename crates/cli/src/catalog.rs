//! Catalog sources: the built-in demo items or a YAML file.
//!
//! A catalog file is a list of entries:
//!
//! ```yaml
//! - name: Code Compiler
//!   price: "200.00"
//!   description: A tool that transforms source code into executable code
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use shopfront_core::{Item, Price};

/// Errors loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("catalog has no items")]
    Empty,
    #[error("catalog entry {index} has an empty name")]
    MissingName { index: usize },
}

/// One item as written in a catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub description: String,
}

impl From<CatalogEntry> for Item {
    fn from(entry: CatalogEntry) -> Self {
        Self::new(entry.name, entry.price, entry.description)
    }
}

/// The items sold when no catalog file is configured.
#[must_use]
pub fn builtin() -> Vec<Item> {
    [
        (
            "Code Compiler",
            20_000,
            "A tool that transforms source code into executable code",
        ),
        (
            "Bug Exterminator",
            15_000,
            "A magical tool that automatically fixes all bugs in your code",
        ),
        (
            "Idea Generator",
            50_000,
            "A device that generates innovative programming project ideas",
        ),
        (
            "Syntax Corrector",
            10_000,
            "A tool that automatically corrects syntax errors in your code",
        ),
        (
            "Logic Enhancer",
            30_000,
            "A tool that optimizes the logic of your algorithms",
        ),
        (
            "Efficiency Booster",
            25_000,
            "A tool that improves the efficiency of your code",
        ),
        (
            "Code Formatter",
            5_000,
            "A tool that automatically formats your code according to best practices",
        ),
        (
            "Comment Writer",
            7_500,
            "A tool that automatically writes meaningful comments for your code",
        ),
        (
            "Code Translator",
            35_000,
            "A tool that translates your code into any programming language",
        ),
        (
            "Deadline Extender",
            40_000,
            "A magical tool that extends your project deadlines",
        ),
    ]
    .into_iter()
    .map(|(name, cents, description)| Item::new(name, Price::from_cents(cents), description))
    .collect()
}

/// Parse catalog items from YAML.
///
/// # Errors
///
/// Returns an error if the YAML is malformed, a price is negative, an entry
/// has no name, or the list is empty.
pub fn parse(yaml: &str) -> Result<Vec<Item>, CatalogError> {
    let entries: Vec<CatalogEntry> = serde_yaml::from_str(yaml)?;
    if entries.is_empty() {
        return Err(CatalogError::Empty);
    }
    if let Some(index) = entries.iter().position(|e| e.name.trim().is_empty()) {
        return Err(CatalogError::MissingName { index });
    }
    Ok(entries.into_iter().map(Item::from).collect())
}

/// Load catalog items from a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails [`parse`].
pub fn load(path: &Path) -> Result<Vec<Item>, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let items = parse(&content)?;
    info!(path = %path.display(), items = items.len(), "loaded catalog");
    Ok(items)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let items = builtin();
        assert_eq!(items.len(), 10);
        assert_eq!(items[0].name(), "Code Compiler");
        assert_eq!(items[0].price(), Price::parse("200.00").unwrap());
        assert_eq!(items[7].price(), Price::parse("75.00").unwrap());
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let items = builtin();
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }

    #[test]
    fn test_parse_quoted_and_bare_prices() {
        let items = parse(
            r#"
- name: Widget
  price: "12.50"
  description: A widget
- name: Gadget
  price: 3
"#,
        )
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].price(), Price::parse("12.50").unwrap());
        assert_eq!(items[1].price(), Price::parse("3").unwrap());
        assert_eq!(items[1].description(), "");
    }

    #[test]
    fn test_parse_rejects_negative_price() {
        let result = parse("- name: Widget\n  price: \"-1.00\"\n");
        assert!(matches!(result, Err(CatalogError::Yaml(_))));
    }

    #[test]
    fn test_parse_rejects_empty_list() {
        assert!(matches!(parse("[]"), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_parse_rejects_blank_name() {
        let result = parse("- name: Widget\n  price: \"1\"\n- name: \" \"\n  price: \"1\"\n");
        assert!(matches!(result, Err(CatalogError::MissingName { index: 1 })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "- name: Widget\n  price: \"9.99\"\n  description: Small").unwrap();

        let items = load(file.path()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name(), "Widget");
    }

    #[test]
    fn test_load_missing_file() {
        let result = load(Path::new("/nonexistent/catalog.yaml"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
