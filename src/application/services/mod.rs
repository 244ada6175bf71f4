/// Application services wrapping outbound ports for the use cases
mod notification_factory;
mod user_resolver;

pub use notification_factory::NotificationFactory;
pub use user_resolver::UserResolver;
