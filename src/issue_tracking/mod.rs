/// Issue tracking core - domain model, policies and pure services
///
/// Nothing in this module performs I/O; collaborators are reached through
/// the ports layer.
pub mod domain;
pub mod policies;
pub mod services;
