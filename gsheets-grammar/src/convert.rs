//! Name list to fragment conversion
//!
//! Turns a flat function-name list into a standalone repository-format
//! fragment (`{"repository": {"functions": {"patterns": [...]}}}`), the
//! layout the rule-set loader accepts alongside bare arrays. Useful for
//! keeping the functions fragment in the same JSON shape as the others.

use crate::category::Category;
use crate::document::PatternBlock;
use crate::error::{GrammarError, GrammarResult};
use crate::source::FragmentSource;
use crate::sources::NameListSource;
use indexmap::IndexMap;
use serde::Serialize;
use std::path::Path;

/// A standalone fragment document holding one category's rules
#[derive(Debug, Clone, Serialize)]
pub struct FragmentDocument {
    repository: IndexMap<String, PatternBlock>,
}

impl FragmentDocument {
    pub fn new(category: Category, block: PatternBlock) -> Self {
        let mut repository = IndexMap::new();
        repository.insert(category.key().to_string(), block);
        FragmentDocument { repository }
    }

    /// Rules of the single category this fragment holds
    pub fn rule_count(&self) -> usize {
        self.repository.values().map(|b| b.patterns.len()).sum()
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(String::from_utf8(buf).expect("serde_json emits valid UTF-8"))
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> GrammarResult<()> {
        let path = path.as_ref();
        let rendered = self
            .to_json_string()
            .map_err(|e| GrammarError::parse(path, e))?;
        std::fs::write(path, rendered).map_err(|e| GrammarError::io(path, e))
    }
}

/// Convert a function-name list file into a repository-format fragment.
///
/// With `sort` off the fragment keeps the list's authored order; the
/// assembler still sorts at grammar-build time. An empty list is a hard
/// error, same as in the assembler path.
pub fn names_to_fragment(input: &Path, scope: &str, sort: bool) -> GrammarResult<FragmentDocument> {
    let source = NameListSource::new(scope).with_sort(sort);
    let rules = source.load(input)?;
    Ok(FragmentDocument::new(
        Category::Functions,
        PatternBlock::new(rules),
    ))
}
