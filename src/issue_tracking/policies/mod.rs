pub mod leak_period;

pub use leak_period::{truncate_to_seconds, LeakPeriod};
