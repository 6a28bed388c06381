pub mod clock;
pub mod config;
pub mod ledger;
pub mod stats;

pub use clock::{Clock, ManualClock, SystemClock};
pub use ledger::{ClosedEvent, DelayLedger};
pub use stats::{DelayStats, aggregate};
