//! The two fragment source kinds

pub mod names;
pub mod rules;

pub use names::NameListSource;
pub use rules::RuleSetSource;
