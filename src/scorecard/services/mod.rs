mod go_import_parser;
mod import_filter;
mod rule_evaluator;
mod scope_matcher;

pub use go_import_parser::GoImportParser;
pub use import_filter::ImportFilter;
pub use rule_evaluator::RuleEvaluator;
pub use scope_matcher::ScopeMatcher;
