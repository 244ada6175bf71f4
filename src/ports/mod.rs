/// Ports of the notification step.
///
/// `inbound` exposes the step to drivers such as the CLI; `outbound` lists the
/// collaborators it needs: issue cache, user and rule storage, delivery,
/// statistics and progress output.
pub mod inbound;
pub mod outbound;
