//! FragmentSource trait definition
//!
//! A fragment source knows how to turn one category's authored file into its
//! rule list. The assembler only ever talks to this interface; whether rules
//! are generated from a name list or loaded verbatim from JSON is a detail
//! of the implementation.

use crate::category::Category;
use crate::document::Rule;
use crate::error::GrammarResult;
use std::path::Path;

/// Loader for one category's fragment file
pub trait FragmentSource: Send + Sync {
    /// The category this source feeds
    fn category(&self) -> Category;

    /// File name of this source under the fragments directory
    fn file_name(&self) -> &'static str {
        self.category().source_file()
    }

    /// Load the rules from an existing fragment file.
    ///
    /// Existence is checked by the caller; a missing file is a skip, not an
    /// error, and this method is never reached for one.
    fn load(&self, path: &Path) -> GrammarResult<Vec<Rule>>;
}
