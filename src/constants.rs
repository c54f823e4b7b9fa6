//! Application-wide constants.
//!
//! Centralizes magic numbers and fixed strings so the pipeline stages
//! agree on them.

// ============================================================================
// Ingestion
// ============================================================================

/// Marker that denotes "thousands" in abbreviated cells ("2.9k")
pub const THOUSANDS_SUFFIX: char = 'k';

/// Maximum CSV file size in MB
pub const MAX_CSV_SIZE_MB: usize = 100;

/// Maximum number of data rows in a CSV file
pub const MAX_CSV_ROWS: usize = 100_000;

/// Number of leading lines inspected when guessing the delimiter
pub const DELIMITER_SNIFF_LINES: usize = 5;

// ============================================================================
// Chart
// ============================================================================

/// Fixed chart title
pub const CHART_TITLE: &str = "Year vs GDP per Capita by Country";

/// Field name of the x axis in tidy data
pub const YEAR_FIELD: &str = "year";

/// Field name of the y axis in tidy data
pub const VALUE_FIELD: &str = "gdp_pcap";

/// Field name used to group series
pub const COUNTRY_FIELD: &str = "country";

// ============================================================================
// Page & Controls
// ============================================================================

/// Page heading
pub const PAGE_HEADING: &str = "GDP per Capita of Various Countries by Year";

/// Where the dataset comes from
pub const DATASET_URL: &str = "https://www.gapminder.org/gdp-per-capita/";

/// Number of countries in the random initial selection
pub const DEFAULT_COUNTRY_COUNT: usize = 5;

/// Spacing between labelled marks on the year slider
pub const DEFAULT_YEAR_MARK_STEP: i32 = 25;

/// Directory name under the platform config dir
pub const APP_CONFIG_DIR: &str = "gdpboard";

/// Settings file name
pub const SETTINGS_FILE: &str = "settings.json";
