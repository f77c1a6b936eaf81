use airportdb_core::RankBy;
use clap::{Parser, Subcommand};

/// CLI arguments for airportdb-cli
#[derive(Debug, Parser)]
#[command(
    name = "airportdb",
    version,
    about = "CLI for querying the airportdb-core airport database"
)]
pub struct CliArgs {
    /// Path to a dataset file (.json, .json.gz or a .bin snapshot).
    /// Defaults to the embedded dataset
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Keep a binary cache next to the --input JSON file and reuse it while
    /// the source is unchanged
    #[arg(long = "cache", global = true, requires = "input")]
    pub cache: bool,

    /// Optional comma-separated list of ISO2 country codes to load (e.g. GB,FR,DE)
    #[arg(short = 'f', long = "filter", global = true)]
    pub filter: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the database contents
    Stats,

    /// Lookup airports by IATA code (e.g. LHR)
    Iata { code: String },

    /// Lookup airports by ICAO code (e.g. EGLL)
    Icao { code: String },

    /// List airports of a country by ISO2 code (e.g. GB)
    Country { code: String },

    /// List airports of a continent (AF, AN, AS, EU, NA, OC, SA)
    Continent { code: String },

    /// List airports of a facility type; `airport` matches every airport class
    Type { kind: String },

    /// List airports in an IANA timezone (e.g. Europe/London)
    Timezone { timezone: String },

    /// Search airport names (case- and accent-insensitive)
    Search { query: String },

    /// Up to 10 suggestions matching name or IATA code
    Autocomplete { query: String },

    /// Great-circle distance between two airports, in km
    Distance { from: String, to: String },

    /// Airports within a radius of a point
    Nearby {
        #[arg(allow_hyphen_values = true)]
        latitude: f64,
        #[arg(allow_hyphen_values = true)]
        longitude: f64,
        /// Radius in km
        #[arg(short, long, default_value_t = 50.0)]
        radius: f64,
    },

    /// The closest airport to a point, optionally among filtered airports
    Nearest {
        #[arg(allow_hyphen_values = true)]
        latitude: f64,
        #[arg(allow_hyphen_values = true)]
        longitude: f64,
        /// Filter as field=value; repeatable (e.g. --where has_scheduled_service=true)
        #[arg(short = 'w', long = "where")]
        filters: Vec<String>,
    },

    /// Airports matching every field=value filter
    Find {
        /// e.g. country_code=GB type=large_airport min_runway_ft=10000
        #[arg(required = true)]
        filters: Vec<String>,
    },

    /// Aggregate statistics for a country
    CountryStats { code: String },

    /// Aggregate statistics for a continent, with a per-country breakdown
    ContinentStats { code: String },

    /// Largest airports of a continent
    Largest {
        code: String,
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
        /// Ranking key: runway or elevation
        #[arg(short = 'b', long = "by", default_value = "runway")]
        by: RankBy,
    },

    /// Pairwise distance table for two or more airports
    Matrix {
        #[arg(num_args = 2.., required = true)]
        codes: Vec<String>,
    },

    /// External links of an airport
    Links { code: String },

    /// Check whether a code is well-formed and known
    Validate { code: String },
}
