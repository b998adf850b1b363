//! ICS generation.
//!
//! Each record becomes one VEVENT block; the blocks are framed in a
//! VCALENDAR and written as CRLF-terminated UTF-8 text.

mod document;
mod event;

pub use document::{CalendarDocument, PRODUCT_ID};
pub use event::{EventBlock, TIMESTAMP_FORMAT, event_block, format_event};
