//! VEVENT formatting.

use chrono::{DateTime, Utc};

use crate::clock::{Clock, UidGenerator};
use crate::record::EventRecord;

/// UTC timestamp format for CREATED, DTSTAMP and LAST-MODIFIED
pub const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Outlook hints: show as free, low importance, no counter-proposals,
/// no location autofill, no auto-start check, no online meeting.
const MICROSOFT_PROPERTIES: [&str; 6] = [
    "X-MICROSOFT-CDO-BUSYSTATUS:FREE",
    "X-MICROSOFT-CDO-IMPORTANCE:1",
    "X-MICROSOFT-DISALLOW-COUNTER:FALSE",
    "X-MS-OLK-AUTOFILLLOCATION:FALSE",
    "X-MS-OLK-AUTOSTARTCHECK:FALSE",
    "X-MS-OLK-CONFTYPE:0",
];

/// One formatted VEVENT, as content lines without line terminators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBlock {
    lines: Vec<String>,
}

impl EventBlock {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn uid(&self) -> Option<&str> {
        self.lines.iter().find_map(|l| l.strip_prefix("UID:"))
    }
}

/// Format a record, drawing its UID and timestamps from the given sources.
pub fn format_event(
    record: &EventRecord,
    clock: &impl Clock,
    uids: &mut impl UidGenerator,
) -> EventBlock {
    let uid = uids.next_uid();
    event_block(record, &uid, clock.now())
}

/// Build the VEVENT for a record with an already chosen UID and stamp.
pub fn event_block(record: &EventRecord, uid: &str, stamp: DateTime<Utc>) -> EventBlock {
    let stamp = stamp.format(TIMESTAMP_FORMAT).to_string();

    let mut lines = vec![
        "BEGIN:VEVENT".to_string(),
        "CLASS:PUBLIC".to_string(),
        format!("CATEGORIES:{}", text(&record.categories)),
        format!("UID:{}", text(uid)),
        format!("CREATED:{}", stamp),
        format!("DTSTAMP:{}", stamp),
        format!("LAST-MODIFIED:{}", stamp),
        "SEQUENCE:0".to_string(),
        "PRIORITY:5".to_string(),
        format!("DTSTART;VALUE=DATE:{}", text(&record.start_date)),
        format!("DTEND;VALUE=DATE:{}", text(&record.end_date)),
        format!("DESCRIPTION:{}", text(&record.description)),
        format!("SUMMARY;LANGUAGE=en-us:{}", text(&record.subject)),
        format!("LOCATION:{}", text(&record.location)),
        "TRANSP:TRANSPARENT".to_string(),
    ];
    lines.extend(MICROSOFT_PROPERTIES.iter().map(|p| p.to_string()));
    lines.push("END:VEVENT".to_string());

    EventBlock { lines }
}

/// Values go out verbatim; only line breaks are escaped so a value cannot
/// end its content line early.
fn text(value: &str) -> String {
    value.replace("\r\n", "\\n").replace(['\r', '\n'], "\\n")
}
