/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod issue_notification_port;

pub use issue_notification_port::IssueNotificationPort;
