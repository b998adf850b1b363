//! Core types for icsgen.
//!
//! Turns tabular event records into an iCalendar document:
//! - `source` resolves the input into `EventRecord`s (CSV rows or one inline record)
//! - `ics` formats each record as a VEVENT block and frames the blocks in a VCALENDAR
//! - `clock` holds the injected time and UID capabilities

pub mod clock;
pub mod error;
pub mod ics;
pub mod record;
pub mod source;

pub use clock::{Clock, RandomUid, SystemClock, UidGenerator};
pub use error::{IcsGenError, IcsGenResult};
pub use ics::{CalendarDocument, EventBlock};
pub use record::{CalendarName, Category, EventRecord, RecordFields};
