//! Name-list fragment source
//!
//! Reads a plain text file with one literal function name per line and
//! generates one rule per name. The generated `match` is the escaped name
//! followed by a positive lookahead for `(`, so `SUM` highlights in `SUM(A1)`
//! but not in `SUMMARY` or a bare `SUM`.

use crate::category::Category;
use crate::document::Rule;
use crate::error::{GrammarError, GrammarResult};
use crate::source::FragmentSource;
use std::fs;
use std::path::Path;

/// Source for the `functions` category
pub struct NameListSource {
    scope: String,
    sort: bool,
}

impl NameListSource {
    /// `scope` is the classification tag every generated rule carries,
    /// e.g. `entity.name.function.gsheets`. Sorting defaults to on.
    pub fn new(scope: impl Into<String>) -> Self {
        NameListSource {
            scope: scope.into(),
            sort: true,
        }
    }

    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }
}

impl FragmentSource for NameListSource {
    fn category(&self) -> Category {
        Category::Functions
    }

    fn load(&self, path: &Path) -> GrammarResult<Vec<Rule>> {
        let text = fs::read_to_string(path).map_err(|e| GrammarError::io(path, e))?;
        let mut names: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if names.is_empty() {
            return Err(GrammarError::EmptyNameList {
                path: path.to_path_buf(),
            });
        }
        if self.sort {
            names.sort_unstable();
        }

        Ok(names
            .iter()
            .map(|name| function_rule(&self.scope, name))
            .collect())
    }
}

/// Build the rule for one literal function name.
///
/// The name is regex-escaped so dotted names like `CEILING.MATH` match the
/// literal dot, and the `(?=\()` lookahead keeps the match zero-width past
/// the name itself.
pub fn function_rule(scope: &str, name: &str) -> Rule {
    Rule::simple(scope, format!("({}(?=\\())", regex::escape(name)))
}
