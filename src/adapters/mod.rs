/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the in-memory replay backends, subscriber messaging,
/// console progress and report output.
pub mod outbound;
