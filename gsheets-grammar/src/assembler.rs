//! Grammar assembly orchestration
//!
//! One linear pass: resolve each recognized category's fragment file, skip
//! the absent ones, load or generate the rules for the rest, then regenerate
//! the include list and hand back the finished document together with a
//! report of what happened per category.

use crate::category::Category;
use crate::document::{GrammarDocument, PatternBlock};
use crate::error::{GrammarError, GrammarResult};
use crate::source::FragmentSource;
use crate::sources::{NameListSource, RuleSetSource};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed metadata of the generated grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarMetadata {
    pub name: String,
    pub scope_name: String,
    pub schema: String,
    /// Scope tag stamped onto every generated function rule
    pub function_scope: String,
}

impl Default for GrammarMetadata {
    fn default() -> Self {
        GrammarMetadata {
            name: "gsheets".to_string(),
            scope_name: "source.gsheets".to_string(),
            schema:
                "https://raw.githubusercontent.com/martinring/tmlanguage/master/tmlanguage.json"
                    .to_string(),
            function_scope: "entity.name.function.gsheets".to_string(),
        }
    }
}

/// What happened to one category during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeAction {
    /// Rules generated from a name list
    Generated { rules: usize },
    /// Rules loaded verbatim from a rule-set file
    Loaded { rules: usize },
    /// Fragment file absent; category left alone
    Skipped,
}

/// One report line: the category, its fragment file, and the outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOutcome {
    pub category: Category,
    pub file: &'static str,
    pub action: OutcomeAction,
}

impl fmt::Display for CategoryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.action {
            OutcomeAction::Generated { rules } => {
                write!(f, "{}: generated {} rules from {}", self.category, rules, self.file)
            }
            OutcomeAction::Loaded { rules } => {
                write!(f, "{}: loaded {} rules from {}", self.category, rules, self.file)
            }
            OutcomeAction::Skipped => {
                write!(f, "{}: {} not found, skipping", self.category, self.file)
            }
        }
    }
}

/// Per-category outcomes of one assembly run, in recognized order
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub entries: Vec<CategoryOutcome>,
}

impl BuildReport {
    /// Total rules placed into the document by this run
    pub fn rule_count(&self) -> usize {
        self.entries
            .iter()
            .map(|e| match e.action {
                OutcomeAction::Generated { rules } | OutcomeAction::Loaded { rules } => rules,
                OutcomeAction::Skipped => 0,
            })
            .sum()
    }
}

/// Builds one [`GrammarDocument`] from a directory of fragment sources.
///
/// The document is built from scratch from [`GrammarMetadata`]; when a base
/// grammar is configured and present on disk, its categories are carried
/// over and only the ones regenerated here are replaced. Either way the
/// include list is recomputed from the final repository keys.
pub struct Assembler {
    fragments_dir: PathBuf,
    metadata: GrammarMetadata,
    base_grammar: Option<PathBuf>,
    sort_functions: bool,
}

impl Assembler {
    pub fn new(fragments_dir: impl Into<PathBuf>, metadata: GrammarMetadata) -> Self {
        Assembler {
            fragments_dir: fragments_dir.into(),
            metadata,
            base_grammar: None,
            sort_functions: true,
        }
    }

    /// Merge into `path` instead of starting from empty metadata.
    ///
    /// A configured-but-missing base is not an error; the run falls back to
    /// building from scratch.
    pub fn with_base_grammar(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_grammar = Some(path.into());
        self
    }

    pub fn with_sort_functions(mut self, sort: bool) -> Self {
        self.sort_functions = sort;
        self
    }

    /// The sources for all recognized categories, in precedence order
    fn sources(&self) -> Vec<Box<dyn FragmentSource>> {
        Category::RECOGNIZED
            .iter()
            .map(|&category| match category {
                Category::Functions => Box::new(
                    NameListSource::new(self.metadata.function_scope.as_str())
                        .with_sort(self.sort_functions),
                ) as Box<dyn FragmentSource>,
                other => Box::new(RuleSetSource::new(other)) as Box<dyn FragmentSource>,
            })
            .collect()
    }

    fn starting_document(&self) -> GrammarResult<GrammarDocument> {
        if let Some(base) = &self.base_grammar {
            if base.exists() {
                let text = fs::read_to_string(base).map_err(|e| GrammarError::io(base, e))?;
                let doc = GrammarDocument::from_json_str(&text)
                    .map_err(|e| GrammarError::parse(base, e))?;
                return Ok(doc);
            }
        }
        Ok(GrammarDocument::new(
            &self.metadata.schema,
            &self.metadata.name,
            &self.metadata.scope_name,
        ))
    }

    /// Run the single assembly pass
    pub fn assemble(&self) -> GrammarResult<(GrammarDocument, BuildReport)> {
        let mut doc = self.starting_document()?;
        let mut report = BuildReport::default();

        for source in self.sources() {
            let category = source.category();
            let path = self.fragments_dir.join(source.file_name());

            if !path.exists() {
                report.entries.push(CategoryOutcome {
                    category,
                    file: source.file_name(),
                    action: OutcomeAction::Skipped,
                });
                continue;
            }

            let rules = source.load(&path)?;
            let action = match category.kind() {
                crate::category::SourceKind::NameList => {
                    OutcomeAction::Generated { rules: rules.len() }
                }
                crate::category::SourceKind::RuleSet => {
                    OutcomeAction::Loaded { rules: rules.len() }
                }
            };
            doc.insert(category.key(), PatternBlock::new(rules));
            report.entries.push(CategoryOutcome {
                category,
                file: source.file_name(),
                action,
            });
        }

        doc.refresh_includes();
        Ok((doc, report))
    }

    /// Assemble and write the document to `output` in one step
    pub fn assemble_to(&self, output: impl AsRef<Path>) -> GrammarResult<BuildReport> {
        let (doc, report) = self.assemble()?;
        doc.write_to(output)?;
        Ok(report)
    }
}
