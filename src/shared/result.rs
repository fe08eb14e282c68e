/// Type alias for Result with anyhow::Error as the default error type.
///
/// Domain code that needs a typed error names it explicitly, e.g.
/// `Result<Score, EvaluationError>`.
pub type Result<T, E = anyhow::Error> = std::result::Result<T, E>;
