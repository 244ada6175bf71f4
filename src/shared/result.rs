/// Type alias for Result with anyhow::Error as the error type.
///
/// Collaborator failures (storage, messaging) travel through this alias
/// unchanged so the caller sees the original cause.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
