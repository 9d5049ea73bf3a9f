//! The grammar document model
//!
//! Mirrors the on-disk shape of a TextMate grammar: fixed metadata, an
//! ordered list of category includes, and a repository mapping each category
//! key to its rules. The repository is an insertion-ordered map so that the
//! regenerated include list reproduces matching precedence.

use crate::error::{GrammarError, GrammarResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// One matching rule.
///
/// `name` is the classification scope tag and `match` the regex source text.
/// Both are optional on input: authored rules may instead use `begin`/`end`
/// pairs or other keys, which are carried verbatim through `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Rule {
    /// A plain name/match rule
    pub fn simple(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Rule {
            name: Some(name.into()),
            pattern: Some(pattern.into()),
            extra: serde_json::Map::new(),
        }
    }
}

/// The `{"patterns": [...]}` envelope every repository entry is wrapped in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternBlock {
    pub patterns: Vec<Rule>,
}

impl PatternBlock {
    pub fn new(patterns: Vec<Rule>) -> Self {
        PatternBlock { patterns }
    }
}

/// One top-level category reference, e.g. `{"include": "#functions"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Include {
    pub include: String,
}

impl Include {
    pub fn for_key(key: &str) -> Self {
        Include {
            include: format!("#{}", key),
        }
    }

    /// The repository key this include points at, without the `#` prefix
    pub fn key(&self) -> &str {
        self.include.strip_prefix('#').unwrap_or(&self.include)
    }
}

/// The composite grammar document written to gsheets.tmLanguage.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarDocument {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub name: String,
    #[serde(rename = "scopeName")]
    pub scope_name: String,
    #[serde(default)]
    pub patterns: Vec<Include>,
    #[serde(default)]
    pub repository: IndexMap<String, PatternBlock>,
}

impl GrammarDocument {
    /// An empty document with the given metadata
    pub fn new(
        schema: impl Into<String>,
        name: impl Into<String>,
        scope_name: impl Into<String>,
    ) -> Self {
        GrammarDocument {
            schema: schema.into(),
            name: name.into(),
            scope_name: scope_name.into(),
            patterns: Vec::new(),
            repository: IndexMap::new(),
        }
    }

    /// Insert (or replace) a category's rules.
    ///
    /// Replacing keeps the key's existing position, so categories carried
    /// over from a base grammar retain their precedence.
    pub fn insert(&mut self, key: impl Into<String>, block: PatternBlock) {
        self.repository.insert(key.into(), block);
    }

    /// Regenerate the top-level include list from the repository keys.
    ///
    /// One include per key, in map iteration order. Calling this after every
    /// mutation pass is what keeps includes and repository in lockstep.
    pub fn refresh_includes(&mut self) {
        self.patterns = self.repository.keys().map(|k| Include::for_key(k)).collect();
    }

    /// Parse a document, e.g. a base grammar to merge into
    pub fn from_json_str(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// Serialize with 4-space indentation, the layout the grammar file ships in
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(String::from_utf8(buf).expect("serde_json emits valid UTF-8"))
    }

    /// Serialize and write to `path`, overwriting any existing file.
    ///
    /// The document is fully assembled in memory before this is called, so a
    /// failed run never leaves a half-written grammar behind.
    pub fn write_to(&self, path: impl AsRef<Path>) -> GrammarResult<()> {
        let path = path.as_ref();
        let rendered = self
            .to_json_string()
            .map_err(|e| GrammarError::parse(path, e))?;
        fs::write(path, rendered).map_err(|e| GrammarError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn simple_rule_serializes_name_then_match() {
        let rule = Rule::simple("entity.name.function.gsheets", "(SUM(?=\\())");
        let json = serde_json::to_string(&rule).unwrap();
        assert_eq!(
            json,
            r#"{"name":"entity.name.function.gsheets","match":"(SUM(?=\\())"}"#
        );
    }

    #[test]
    fn rule_preserves_unknown_keys() {
        let source = r#"{"name": "string.quoted.double.gsheets", "begin": "\"", "end": "\""}"#;
        let rule: Rule = serde_json::from_str(source).unwrap();
        assert_eq!(rule.pattern, None);
        assert_eq!(rule.extra["begin"], "\"");

        let back = serde_json::to_value(&rule).unwrap();
        assert_eq!(back["end"], "\"");
    }

    #[test]
    fn refresh_includes_tracks_repository_keys() {
        let mut doc = GrammarDocument::new("schema", "gsheets", "source.gsheets");
        doc.insert("functions", PatternBlock::new(vec![]));
        doc.insert("operators", PatternBlock::new(vec![]));
        doc.refresh_includes();

        let keys: Vec<_> = doc.patterns.iter().map(|i| i.key()).collect();
        assert_eq!(keys, vec!["functions", "operators"]);

        // replacing an entry keeps its position
        doc.insert("functions", PatternBlock::new(vec![Rule::simple("x", "y")]));
        doc.refresh_includes();
        let keys: Vec<_> = doc.patterns.iter().map(|i| i.key()).collect();
        assert_eq!(keys, vec!["functions", "operators"]);
    }

    #[test]
    fn document_round_trips_metadata() {
        let source = r##"{
            "$schema": "https://example.invalid/schema.json",
            "name": "gsheets",
            "scopeName": "source.gsheets",
            "patterns": [{"include": "#functions"}],
            "repository": {"functions": {"patterns": []}}
        }"##;
        let doc = GrammarDocument::from_json_str(source).unwrap();
        assert_eq!(doc.scope_name, "source.gsheets");
        assert_eq!(doc.patterns[0].key(), "functions");
        assert!(doc.repository.contains_key("functions"));
    }

    #[test]
    fn renders_four_space_indented_json() {
        let mut doc = GrammarDocument::new(
            "https://example.invalid/schema.json",
            "gsheets",
            "source.gsheets",
        );
        doc.insert(
            "functions",
            PatternBlock::new(vec![Rule::simple(
                "entity.name.function.gsheets",
                "(SUM(?=\\())",
            )]),
        );
        doc.refresh_includes();

        assert_snapshot!(doc.to_json_string().unwrap(), @r###"
{
    "$schema": "https://example.invalid/schema.json",
    "name": "gsheets",
    "scopeName": "source.gsheets",
    "patterns": [
        {
            "include": "#functions"
        }
    ],
    "repository": {
        "functions": {
            "patterns": [
                {
                    "name": "entity.name.function.gsheets",
                    "match": "(SUM(?=\\())"
                }
            ]
        }
    }
}
"###);
    }
}
