pub mod dependency_identity;
pub mod import_reference;
pub mod policy;
pub mod score;
pub mod violation;

pub use dependency_identity::{DependencyIdentity, IdentityError};
pub use import_reference::ImportReference;
pub use policy::{Policy, Rule, RuleTarget};
pub use score::{Check, Documentation, Score};
pub use violation::{DependencyEvaluation, Violation};
