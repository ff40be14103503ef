//! Business logic for bot uptime monitoring.
//!
//! - `monitor` - Per-guild state machine and notification sending
//! - `registry` - Guild ID to monitor mapping and event routing

pub mod monitor;
pub mod registry;


pub use monitor::GuildMonitor;
pub use registry::MonitorRegistry;
