//! Settings for a run, layered from an optional TOML file and the command line.

use std::path::{Path, PathBuf};

use icsgen_core::error::{IcsGenError, IcsGenResult};
use icsgen_core::record::{CalendarName, Category, RecordFields};
use serde::Deserialize;

const DEFAULT_DELIMITER: u8 = b',';

/// One layer of optional settings.
///
/// The command line and the config file both produce a layer; keys in the
/// file use the same names as the command options (`calName`, `startDate`, ...).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SettingsLayer {
    pub cal_name: Option<String>,
    pub categories: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub event_subject: Option<String>,
    pub event_desc: Option<String>,
    pub event_location: Option<String>,
    pub csv_file_in_path: Option<PathBuf>,
    pub ics_file_out_path: Option<PathBuf>,
    pub delimiter: Option<char>,
}

impl SettingsLayer {
    /// Fill every unset value of `self` from `lower`.
    pub fn or(self, lower: SettingsLayer) -> SettingsLayer {
        SettingsLayer {
            cal_name: self.cal_name.or(lower.cal_name),
            categories: self.categories.or(lower.categories),
            start_date: self.start_date.or(lower.start_date),
            end_date: self.end_date.or(lower.end_date),
            event_subject: self.event_subject.or(lower.event_subject),
            event_desc: self.event_desc.or(lower.event_desc),
            event_location: self.event_location.or(lower.event_location),
            csv_file_in_path: self.csv_file_in_path.or(lower.csv_file_in_path),
            ics_file_out_path: self.ics_file_out_path.or(lower.ics_file_out_path),
            delimiter: self.delimiter.or(lower.delimiter),
        }
    }
}

/// Where the rendered calendar goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    File(PathBuf),
    Stdout,
}

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub cal_name: CalendarName,
    /// Record used when no input file is read
    pub inline: RecordFields,
    pub csv_file_in_path: Option<PathBuf>,
    pub delimiter: u8,
    pub output: Output,
}

impl Settings {
    /// Validate merged settings. Runs before any input is read or output written.
    pub fn resolve(layer: SettingsLayer, to_stdout: bool) -> IcsGenResult<Settings> {
        let cal_name = layer
            .cal_name
            .as_deref()
            .ok_or_else(|| {
                IcsGenError::Config(format!(
                    "calName is required. Expected one of: {}",
                    CalendarName::NAMES.join(", ")
                ))
            })?
            .parse::<CalendarName>()?;

        let categories = layer
            .categories
            .as_deref()
            .map(|c| c.parse::<Category>().map(|c| c.to_string()))
            .transpose()?;

        let output = match (to_stdout, layer.ics_file_out_path) {
            (true, _) => Output::Stdout,
            (false, Some(path)) => Output::File(path),
            (false, None) => {
                return Err(IcsGenError::Config(
                    "icsFileOutPath is required (or pass --stdout)".into(),
                ));
            }
        };

        let delimiter = match layer.delimiter {
            None => DEFAULT_DELIMITER,
            Some(c) if c.is_ascii() => c as u8,
            Some(c) => {
                return Err(IcsGenError::Config(format!(
                    "delimiter must be a single ASCII character, got '{}'",
                    c
                )));
            }
        };

        Ok(Settings {
            cal_name,
            inline: RecordFields {
                categories,
                start_date: layer.start_date,
                end_date: layer.end_date,
                subject: layer.event_subject,
                description: layer.event_desc,
                location: layer.event_location,
            },
            csv_file_in_path: layer.csv_file_in_path,
            delimiter,
            output,
        })
    }
}

/// Default config location, e.g. ~/.config/icsgen/config.toml
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("icsgen").join("config.toml"))
}

/// Load the config file layer.
///
/// An explicitly named file must exist. Without one, the default location is
/// used if present, and an empty layer otherwise.
pub fn load_file_layer(explicit: Option<&Path>) -> IcsGenResult<SettingsLayer> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(SettingsLayer::default()),
        },
    };

    let content = std::fs::read_to_string(&path).map_err(|e| {
        IcsGenError::Config(format!("could not read config file {}: {}", path.display(), e))
    })?;
    let layer: SettingsLayer = toml::from_str(&content).map_err(|e| {
        IcsGenError::Config(format!("invalid config file {}: {}", path.display(), e))
    })?;

    tracing::debug!(path = %path.display(), "loaded config file");

    Ok(layer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> SettingsLayer {
        SettingsLayer {
            cal_name: Some("Holidays".to_string()),
            ics_file_out_path: Some(PathBuf::from("out.ics")),
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_settings() {
        let settings = Settings::resolve(minimal(), false).unwrap();

        assert_eq!(settings.cal_name, CalendarName::Holidays);
        assert_eq!(settings.output, Output::File(PathBuf::from("out.ics")));
        assert_eq!(settings.delimiter, b',');
        assert_eq!(settings.inline, RecordFields::default());
        assert!(settings.csv_file_in_path.is_none());
    }

    #[test]
    fn test_inline_fields_are_carried_over() {
        let layer = SettingsLayer {
            categories: Some("payday".to_string()),
            start_date: Some("20250131".to_string()),
            event_subject: Some("Payday".to_string()),
            event_location: Some("HQ".to_string()),
            ..minimal()
        };

        let inline = Settings::resolve(layer, false).unwrap().inline;

        assert_eq!(inline.categories.as_deref(), Some("Payday"));
        assert_eq!(inline.start_date.as_deref(), Some("20250131"));
        assert_eq!(inline.subject.as_deref(), Some("Payday"));
        assert_eq!(inline.location.as_deref(), Some("HQ"));
        assert!(inline.description.is_none());
    }

    #[test]
    fn test_missing_cal_name_is_rejected() {
        let layer = SettingsLayer {
            cal_name: None,
            ..minimal()
        };

        let err = Settings::resolve(layer, false).unwrap_err();
        assert!(err.to_string().contains("calName is required"), "got: {}", err);
    }

    #[test]
    fn test_unknown_cal_name_and_category_are_rejected() {
        let bad_name = SettingsLayer {
            cal_name: Some("Birthdays".to_string()),
            ..minimal()
        };
        assert!(matches!(
            Settings::resolve(bad_name, false),
            Err(IcsGenError::Config(_))
        ));

        let bad_category = SettingsLayer {
            categories: Some("Meeting".to_string()),
            ..minimal()
        };
        assert!(matches!(
            Settings::resolve(bad_category, false),
            Err(IcsGenError::Config(_))
        ));
    }

    #[test]
    fn test_output_path_required_unless_stdout() {
        let layer = SettingsLayer {
            ics_file_out_path: None,
            ..minimal()
        };

        assert!(Settings::resolve(layer.clone(), false).is_err());
        assert_eq!(Settings::resolve(layer, true).unwrap().output, Output::Stdout);
    }

    #[test]
    fn test_non_ascii_delimiter_is_rejected() {
        let layer = SettingsLayer {
            delimiter: Some('§'),
            ..minimal()
        };

        assert!(Settings::resolve(layer, false).is_err());
    }

    #[test]
    fn test_command_line_overrides_file() {
        let file: SettingsLayer = toml::from_str(
            r#"
            calName = "Paydays"
            eventLocation = "Head Office"
            icsFileOutPath = "/tmp/paydays.ics"
            delimiter = ";"
            "#,
        )
        .unwrap();
        let cli = SettingsLayer {
            cal_name: Some("Timesheets".to_string()),
            ..Default::default()
        };

        let merged = cli.or(file);

        assert_eq!(merged.cal_name.as_deref(), Some("Timesheets"));
        assert_eq!(merged.event_location.as_deref(), Some("Head Office"));
        assert_eq!(merged.delimiter, Some(';'));
        assert_eq!(merged.ics_file_out_path, Some(PathBuf::from("/tmp/paydays.ics")));
    }

    #[test]
    fn test_explicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icsgen.toml");
        std::fs::write(&path, "calName = \"Holidays\"\ncategories = \"Holiday\"\n").unwrap();

        let layer = load_file_layer(Some(&path)).unwrap();

        assert_eq!(layer.cal_name.as_deref(), Some("Holidays"));
        assert_eq!(layer.categories.as_deref(), Some("Holiday"));
    }

    #[test]
    fn test_explicit_config_file_must_exist_and_parse() {
        let dir = tempfile::tempdir().unwrap();

        let missing = load_file_layer(Some(&dir.path().join("missing.toml")));
        assert!(matches!(missing, Err(IcsGenError::Config(_))));

        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "calendar = \"Holidays\"\n").unwrap();
        let unknown_key = load_file_layer(Some(&path));
        assert!(matches!(unknown_key, Err(IcsGenError::Config(_))));
    }
}
