use crate::core::backup::BackupCompression;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::query::RecordFilter;
use crate::utils::date::parse_dates;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rBirdlog
/// CLI application to record point-count bird surveys in a CSV file
#[derive(Parser)]
#[command(
    name = "rbirdlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Field-survey bird counts: record visits, filter, chart and export them from a CSV store",
    long_about = None
)]
pub struct Cli {
    /// Override data file path (useful for tests or a second project)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Location/date selection shared by the reporting commands.
/// Each list left empty means "no filter".
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    #[arg(
        long = "location",
        value_name = "NAME",
        help = "Only records at this location (repeatable)"
    )]
    pub locations: Vec<String>,

    #[arg(
        long = "date",
        value_name = "YYYY-MM-DD",
        help = "Only records surveyed on this date (repeatable)"
    )]
    pub dates: Vec<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> AppResult<RecordFilter> {
        let dates = parse_dates(&self.dates).map_err(AppError::InvalidDate)?;
        Ok(RecordFilter::new(self.locations.iter().cloned(), dates))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data file and configuration
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "migrate",
            help = "Add missing fields to the configuration file"
        )]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal activity log
    Log {
        #[arg(long = "print", help = "Print the activity log")]
        print: bool,
    },

    /// Save one survey visit with its species counts
    Add {
        /// Survey date (YYYY-MM-DD), default today
        #[arg(long = "date")]
        date: Option<String>,

        /// Location ID: a known site or any new location name
        #[arg(long = "location")]
        location: String,

        #[arg(long = "recorder", default_value = "", help = "Recorder/Censuser")]
        recorder: String,

        #[arg(long = "start", help = "Start time (HH:MM), default now")]
        start: Option<String>,

        #[arg(long = "end", help = "End time (HH:MM), default now")]
        end: Option<String>,

        #[arg(long = "wind", default_value = "", help = "Wind (e.g., 7mph NE)")]
        wind: String,

        #[arg(long = "precip", default_value = "", help = "Precipitation")]
        precip: String,

        #[arg(long = "tide", default_value = "", help = "Tide")]
        tide: String,

        #[arg(long = "temp", default_value = "", help = "Temperature (e.g., 36°F)")]
        temp: String,

        /// Species counts as NAME:LE:GT:FLY[:NOTES]; NAME may be an AOU code
        #[arg(long = "species", value_name = "ENTRY")]
        species: Vec<String>,
    },

    /// Show the records, filtered
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show the locations and dates available as filters
    Filters,

    /// Show known locations present in the selection, with record counts
    Map {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show total birds counted and counts by species
    Stats {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// List the configured species
    Species,

    /// List the known locations and their coordinates
    Locations,

    /// Create a backup copy of the data file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, help = "Compress the copy (zip or targz)")]
        compress: Option<BackupCompression>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the filtered records
    Export {
        #[arg(long, value_enum, help = "Output format, default from file extension")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
