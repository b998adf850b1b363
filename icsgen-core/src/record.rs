//! Event records and the fixed calendar/category vocabularies.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::IcsGenError;

/// Category applied when neither the row nor the parameters name one
pub const DEFAULT_CATEGORY: Category = Category::Holiday;

/// Location applied when neither the row nor the parameters name one
pub const DEFAULT_LOCATION: &str = "United States";

/// Date format of DTSTART/DTEND values (`yyyyMMdd`)
pub const DATE_FORMAT: &str = "%Y%m%d";

/// The calendar identities a document can be published as.
///
/// The display name ends up in `X-WR-CALNAME`, which is what clients show as
/// the subscribed calendar's label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarName {
    Holidays,
    Paydays,
    Timesheets,
}

impl CalendarName {
    pub const NAMES: [&'static str; 3] = ["Holidays", "Paydays", "Timesheets"];

    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarName::Holidays => "Holidays",
            CalendarName::Paydays => "Paydays",
            CalendarName::Timesheets => "Timesheets",
        }
    }
}

impl fmt::Display for CalendarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarName {
    type Err = IcsGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "holidays" => Ok(CalendarName::Holidays),
            "paydays" => Ok(CalendarName::Paydays),
            "timesheets" => Ok(CalendarName::Timesheets),
            _ => Err(IcsGenError::Config(format!(
                "invalid calName '{}'. Expected one of: {}",
                s,
                Self::NAMES.join(", ")
            ))),
        }
    }
}

/// Event categories accepted on the command line.
///
/// CSV rows are not checked against this set; their categories pass through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Holiday,
    Payday,
    Timesheet,
}

impl Category {
    pub const NAMES: [&'static str; 3] = ["Holiday", "Payday", "Timesheet"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Holiday => "Holiday",
            Category::Payday => "Payday",
            Category::Timesheet => "Timesheet",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = IcsGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "holiday" => Ok(Category::Holiday),
            "payday" => Ok(Category::Payday),
            "timesheet" => Ok(Category::Timesheet),
            _ => Err(IcsGenError::Config(format!(
                "invalid categories '{}'. Expected one of: {}",
                s,
                Self::NAMES.join(", ")
            ))),
        }
    }
}

/// Raw record fields, all optional.
///
/// This is the shape of one CSV row (columns matched by header name) and of
/// the inline command parameters alike. Both become an [`EventRecord`]
/// through the same `From` impl.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RecordFields {
    pub categories: Option<String>,
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
    #[serde(rename = "eventSubject")]
    pub subject: Option<String>,
    #[serde(rename = "eventDesc")]
    pub description: Option<String>,
    #[serde(rename = "eventLocation")]
    pub location: Option<String>,
}

/// One calendar entry, ready to be formatted as a VEVENT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub categories: String,
    /// `yyyyMMdd`
    pub start_date: String,
    /// `yyyyMMdd`, usually the day after `start_date` for all-day events
    pub end_date: String,
    pub subject: String,
    pub description: String,
    pub location: String,
}

impl From<RecordFields> for EventRecord {
    fn from(fields: RecordFields) -> Self {
        let start_date = non_empty(fields.start_date).unwrap_or_default();
        let end_date = non_empty(fields.end_date)
            .or_else(|| next_day(&start_date))
            .unwrap_or_default();

        EventRecord {
            categories: non_empty(fields.categories)
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            start_date,
            end_date,
            subject: fields.subject.unwrap_or_default(),
            description: fields.description.unwrap_or_default(),
            location: non_empty(fields.location).unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// The day after `start`, for records that only carry a start date.
fn next_day(start: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(start, DATE_FORMAT).ok()?;
    let end = date.succ_opt()?.format(DATE_FORMAT).to_string();
    tracing::debug!(start, end = %end, "derived end date from start date");
    Some(end)
}
