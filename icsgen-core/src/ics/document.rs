//! VCALENDAR framing and output.

use std::path::Path;

use crate::clock::{Clock, UidGenerator};
use crate::error::IcsGenResult;
use crate::ics::event::{EventBlock, format_event};
use crate::record::{CalendarName, EventRecord};

/// PRODID of every generated document
pub const PRODUCT_ID: &str = "-//icsgen//Calendar Export 1.0//EN";

const VERSION: &str = "2.0";
const METHOD: &str = "PUBLISH";
const CRLF: &str = "\r\n";

/// A named calendar and its events, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDocument {
    name: CalendarName,
    events: Vec<EventBlock>,
}

impl CalendarDocument {
    pub fn new(name: CalendarName) -> Self {
        CalendarDocument {
            name,
            events: Vec::new(),
        }
    }

    /// Format every record into a new document.
    pub fn from_records<I>(
        name: CalendarName,
        records: I,
        clock: &impl Clock,
        uids: &mut impl UidGenerator,
    ) -> Self
    where
        I: IntoIterator<Item = EventRecord>,
    {
        let events = records
            .into_iter()
            .map(|record| format_event(&record, clock, uids))
            .collect();

        CalendarDocument { name, events }
    }

    pub fn name(&self) -> CalendarName {
        self.name
    }

    pub fn events(&self) -> &[EventBlock] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The full document text with CRLF line endings.
    pub fn render(&self) -> String {
        let header = [
            "BEGIN:VCALENDAR".to_string(),
            format!("PRODID:{}", PRODUCT_ID),
            format!("VERSION:{}", VERSION),
            format!("METHOD:{}", METHOD),
            format!("X-WR-CALNAME:{}", self.name),
        ];
        let body = self.events.iter().flat_map(|e| e.lines().iter().cloned());

        header
            .into_iter()
            .chain(body)
            .chain(std::iter::once("END:VCALENDAR".to_string()))
            .fold(String::new(), |mut out, line| {
                out.push_str(&line);
                out.push_str(CRLF);
                out
            })
    }

    /// Write the document as UTF-8 (no BOM), replacing any existing file.
    pub fn write(&self, path: &Path) -> IcsGenResult<()> {
        let content = self.render();
        std::fs::write(path, content.as_bytes())?;

        tracing::info!(
            path = %path.display(),
            calendar = %self.name,
            events = self.events.len(),
            "wrote calendar"
        );

        Ok(())
    }
}
