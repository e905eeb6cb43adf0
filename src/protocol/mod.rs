pub mod messages;

pub use messages::{ClientMessage, EventNotice, SegmentPayload};
