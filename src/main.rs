mod config;
mod logging;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use config::{Output, Settings, SettingsLayer};
use icsgen_core::clock::{Clock, RandomUid, SystemClock, UidGenerator};
use icsgen_core::ics::CalendarDocument;
use icsgen_core::record::{CalendarName, Category};
use icsgen_core::source::InputSource;
use owo_colors::OwoColorize;

#[derive(Parser)]
#[command(name = "icsgen", version)]
#[command(about = "Generate holiday, payday and timesheet reminder calendars (.ics) from a CSV file or a single inline event")]
struct Cli {
    /// Calendar name shown by calendar clients (X-WR-CALNAME)
    #[arg(long = "cal-name", visible_alias = "calName", value_parser = CalendarName::NAMES, ignore_case = true)]
    cal_name: Option<String>,

    /// Category of the inline event [default: Holiday]
    #[arg(long, value_parser = Category::NAMES, ignore_case = true)]
    categories: Option<String>,

    /// Start date of the inline event (yyyyMMdd)
    #[arg(long = "start-date", visible_alias = "startDate")]
    start_date: Option<String>,

    /// End date of the inline event (yyyyMMdd) [default: day after start]
    #[arg(long = "end-date", visible_alias = "endDate")]
    end_date: Option<String>,

    /// Subject of the inline event
    #[arg(long = "event-subject", visible_alias = "eventSubject")]
    event_subject: Option<String>,

    /// Description of the inline event
    #[arg(long = "event-desc", visible_alias = "eventDesc")]
    event_desc: Option<String>,

    /// Location of the inline event [default: United States]
    #[arg(long = "event-location", visible_alias = "eventLocation")]
    event_location: Option<String>,

    /// CSV file with one event per row; when missing, a single event is built from the options above
    #[arg(long = "csv-file-in-path", visible_alias = "csvFileInPath")]
    csv_file_in_path: Option<PathBuf>,

    /// Where to write the .ics file (overwritten if present)
    #[arg(long = "ics-file-out-path", visible_alias = "icsFileOutPath")]
    ics_file_out_path: Option<PathBuf>,

    /// Field delimiter of the CSV file [default: ,]
    #[arg(long)]
    delimiter: Option<char>,

    /// Print the calendar to stdout instead of writing a file
    #[arg(long, conflicts_with = "ics_file_out_path")]
    stdout: bool,

    /// Config file with default option values (defaults to <config dir>/icsgen/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn layer(&self) -> SettingsLayer {
        SettingsLayer {
            cal_name: self.cal_name.clone(),
            categories: self.categories.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            event_subject: self.event_subject.clone(),
            event_desc: self.event_desc.clone(),
            event_location: self.event_location.clone(),
            csv_file_in_path: self.csv_file_in_path.clone(),
            ics_file_out_path: self.ics_file_out_path.clone(),
            delimiter: self.delimiter,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let settings = config::load_file_layer(cli.config.as_deref())
        .and_then(|file| Settings::resolve(cli.layer().or(file), cli.stdout))
        .unwrap_or_else(|e| Cli::command().error(ErrorKind::ValueValidation, e).exit());

    let document = run(&settings, &SystemClock, &mut RandomUid)?;

    if let Output::File(path) = &settings.output {
        println!(
            "{} {} {} to {} ({})",
            "Wrote".green(),
            document.len(),
            if document.len() == 1 { "event" } else { "events" },
            path.display(),
            document.name().dimmed()
        );
    }

    Ok(())
}

/// Resolve the input, format every record and emit the calendar.
fn run(
    settings: &Settings,
    clock: &impl Clock,
    uids: &mut impl UidGenerator,
) -> Result<CalendarDocument> {
    let source = InputSource::resolve(
        settings.csv_file_in_path.as_deref(),
        settings.delimiter,
        settings.inline.clone(),
    );
    let records = source.records().context("Failed to read input records")?;

    let document = CalendarDocument::from_records(settings.cal_name, records, clock, uids);

    match &settings.output {
        Output::File(path) => document
            .write(path)
            .with_context(|| format!("Failed to write calendar to {}", path.display()))?,
        Output::Stdout => std::io::stdout()
            .lock()
            .write_all(document.render().as_bytes())
            .context("Failed to write calendar to stdout")?,
    }

    Ok(document)
}
