//! Input resolution: a delimited file with one event per row, or a single
//! record built from inline parameters.

use std::path::Path;

use crate::error::{IcsGenError, IcsGenResult};
use crate::record::{EventRecord, RecordFields};

/// Where the records of a run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource<'a> {
    Csv { path: &'a Path, delimiter: u8 },
    Inline(RecordFields),
}

impl<'a> InputSource<'a> {
    /// Pick the CSV file when it exists, the inline record otherwise.
    pub fn resolve(csv_path: Option<&'a Path>, delimiter: u8, inline: RecordFields) -> Self {
        match csv_path {
            Some(path) if path.exists() => InputSource::Csv { path, delimiter },
            Some(path) => {
                tracing::info!(
                    path = %path.display(),
                    "input file not found, generating a single event from parameters"
                );
                InputSource::Inline(inline)
            }
            None => InputSource::Inline(inline),
        }
    }

    pub fn records(self) -> IcsGenResult<Vec<EventRecord>> {
        match self {
            InputSource::Csv { path, delimiter } => read_csv(path, delimiter),
            InputSource::Inline(fields) => Ok(vec![EventRecord::from(fields)]),
        }
    }
}

/// Read every row of a delimited file with a header row.
///
/// Columns are matched by header name; missing columns and empty cells
/// become empty values (or the record defaults), never an error.
pub fn read_csv(path: &Path, delimiter: u8) -> IcsGenResult<Vec<EventRecord>> {
    let csv_err = |source| IcsGenError::Csv {
        path: path.display().to_string(),
        source,
    };

    if !path.is_file() {
        return Err(IcsGenError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("input path '{}' is not a file", path.display()),
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(csv_err)?;
    reader.headers().map_err(csv_err)?;

    let records = reader
        .deserialize::<RecordFields>()
        .map(|row| row.map(EventRecord::from).map_err(csv_err))
        .collect::<IcsGenResult<Vec<_>>>()?;

    tracing::debug!(path = %path.display(), rows = records.len(), "read input file");

    Ok(records)
}
