//! Domain layer: dependency identities, reputation scores, policies and the
//! pure services that match and evaluate them.
pub mod domain;
pub mod services;
