//! Grammar assembly for the gsheets formula language
//!
//!     This crate builds the composite TextMate grammar document
//!     (gsheets.tmLanguage.json) from per-category fragment sources. Each
//!     lexical category (functions, strings, errors, constants, operators)
//!     is authored as its own fragment file; the assembler merges them into
//!     one document and regenerates the top-level include list from the
//!     repository keys, so the two can never diverge.
//!
//! Architecture
//!
//!     - FragmentSource trait: uniform interface for loading one category's rules
//!     - NameListSource / RuleSetSource: the two source kinds (plain name list
//!       vs. pre-authored rule JSON)
//!     - Assembler: orchestrates the per-category pass and the base-grammar merge
//!
//!     This is a pure lib, that is, it powers gsheets-cli but is shell
//!     agnostic: nothing here prints, reads env vars or exits. Progress is
//!     returned as a BuildReport for the caller to render.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── category.rs         # fixed recognized category list
//!     ├── document.rs         # GrammarDocument model + serialization
//!     ├── source.rs           # FragmentSource trait definition
//!     ├── sources
//!     │   ├── names.rs        # name-list loading + function rule generation
//!     │   └── rules.rs        # rule-set JSON loading
//!     ├── convert.rs          # name list -> repository-format fragment
//!     ├── assembler.rs
//!     └── lib.rs
//!
//! Merge behavior
//!
//!     The document is rebuilt in full on every run. With no base grammar
//!     configured the metadata comes from GrammarMetadata; with a base
//!     grammar, categories not regenerated by the run are carried over
//!     untouched. Missing fragment files are never an error (the category is
//!     skipped); an empty function name list is.

pub mod assembler;
pub mod category;
pub mod convert;
pub mod document;
pub mod error;
pub mod source;
pub mod sources;

pub use assembler::{Assembler, BuildReport, CategoryOutcome, GrammarMetadata, OutcomeAction};
pub use category::{Category, SourceKind};
pub use convert::{names_to_fragment, FragmentDocument};
pub use document::{GrammarDocument, Include, PatternBlock, Rule};
pub use error::{GrammarError, GrammarResult};
pub use source::FragmentSource;
