//! Rule-set fragment source
//!
//! Loads a category whose rules are authored directly as JSON. Two layouts
//! are accepted: a bare top-level array of rule objects, or the repository
//! form `{"repository": {"<key>": {"patterns": [...]}}}` as produced by the
//! `functions` fragment converter. Rules pass through verbatim.

use crate::category::Category;
use crate::document::Rule;
use crate::error::{GrammarError, GrammarResult};
use crate::source::FragmentSource;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Source for the JSON-authored categories (strings, errors, constants, operators)
pub struct RuleSetSource {
    category: Category,
}

impl RuleSetSource {
    pub fn new(category: Category) -> Self {
        RuleSetSource { category }
    }
}

impl FragmentSource for RuleSetSource {
    fn category(&self) -> Category {
        self.category
    }

    fn load(&self, path: &Path) -> GrammarResult<Vec<Rule>> {
        let text = fs::read_to_string(path).map_err(|e| GrammarError::io(path, e))?;
        let value: Value = serde_json::from_str(&text).map_err(|e| GrammarError::parse(path, e))?;
        extract_rules(value, self.category.key()).map_err(|detail| GrammarError::malformed(path, detail))
    }
}

/// Pull the rule array out of either accepted layout.
///
/// Errors carry a human-readable detail string; the caller attaches the path.
fn extract_rules(value: Value, key: &str) -> Result<Vec<Rule>, String> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(map) => {
            let patterns = map
                .get("repository")
                .and_then(|r| r.get(key))
                .and_then(|c| c.get("patterns"))
                .ok_or_else(|| format!("expected a rule array or repository.{}.patterns", key))?;
            match patterns {
                Value::Array(items) => items.clone(),
                _ => return Err(format!("repository.{}.patterns is not an array", key)),
            }
        }
        _ => return Err("top-level value is neither an array nor an object".to_string()),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value::<Rule>(item).map_err(|e| format!("rule {}: {}", i, e))
        })
        .collect()
}
