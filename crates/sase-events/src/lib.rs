//! Event model for SASE pattern matching
//!
//! This crate provides the data the predicate-evaluation core reads:
//!
//! - [`EventValue`]: the runtime value of an event attribute, a closed
//!   tagged union over booleans, floats, strings, lists and maps
//! - [`Event`]: a single stream event, an event type plus named attributes
//! - [`CapturedEvents`]: the alias-to-event binding a candidate match has
//!   accumulated so far, extended copy-on-write as events are captured
//!
//! Events typically arrive as JSON; [`EventValue`] and [`Event`] convert
//! from `serde_json::Value` losslessly (all JSON numbers become floats).

pub mod captured;
pub mod event;
pub mod value;

pub use captured::CapturedEvents;
pub use event::{Event, EventError};
pub use value::EventValue;
