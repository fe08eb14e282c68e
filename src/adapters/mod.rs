/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// the Scorecard API and VCS lookups, the filesystem, report formatters and
/// the console.
pub mod outbound;
