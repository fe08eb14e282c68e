/// Shared kernel: error types, result alias, and the concurrency primitives
/// used by the evaluation caches.
pub mod cancellation;
pub mod error;
pub mod logging;
pub mod result;
pub mod security;
pub mod single_flight;

pub use cancellation::CancellationToken;
pub use result::Result;
pub use single_flight::SingleFlight;
