pub mod delay_event;
pub mod reason;

pub use delay_event::DelayEvent;
pub use reason::DelayReason;
