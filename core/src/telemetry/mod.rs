pub mod log;
pub mod metrics;

pub use self::log::InteractionLog;
pub use metrics::{InteractionMetrics, MetricsSnapshot};
