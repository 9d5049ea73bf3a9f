//! The fixed set of lexical categories the assembler recognizes
//!
//! The category set is hard-coded: it is determined by which fragment files
//! the grammar is authored from, not discovered at runtime. The order of
//! [`Category::RECOGNIZED`] is the matching precedence order of the grammar
//! and therefore the insertion order of the repository map.

use std::fmt;

/// One lexical class of the gsheets formula language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Functions,
    Strings,
    Errors,
    Constants,
    Operators,
}

/// How a category's fragment file is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Plain text, one literal name per line; rules are generated
    NameList,
    /// JSON already containing a list of rules; used verbatim
    RuleSet,
}

impl Category {
    /// All recognized categories, in matching precedence order
    pub const RECOGNIZED: &'static [Category] = &[
        Category::Functions,
        Category::Strings,
        Category::Errors,
        Category::Constants,
        Category::Operators,
    ];

    /// The repository key for this category
    pub fn key(&self) -> &'static str {
        match self {
            Category::Functions => "functions",
            Category::Strings => "strings",
            Category::Errors => "errors",
            Category::Constants => "constants",
            Category::Operators => "operators",
        }
    }

    /// File name of this category's fragment source
    pub fn source_file(&self) -> &'static str {
        match self {
            Category::Functions => "functions.txt",
            Category::Strings => "strings.json",
            Category::Errors => "errors.json",
            Category::Constants => "constants.json",
            Category::Operators => "operators.json",
        }
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            Category::Functions => SourceKind::NameList,
            _ => SourceKind::RuleSet,
        }
    }

    /// The top-level include reference for this category (`#<key>`)
    pub fn include_ref(&self) -> String {
        format!("#{}", self.key())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::NameList => f.write_str("name list"),
            SourceKind::RuleSet => f.write_str("rule set"),
        }
    }
}
