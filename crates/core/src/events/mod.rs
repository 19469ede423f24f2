//! Domain events module.
//!
//! Provides domain event types and the sink trait for emitting events
//! after changes to herds, prices or preferences. The host application emits
//! events; the portfolio service subscribes to drop its cached summary.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
