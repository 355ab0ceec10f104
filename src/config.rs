//! Configuration system for sunalmanac.
//!
//! Settings live in a TOML file at `$XDG_CONFIG_HOME/sunalmanac/sunalmanac.toml`
//! (usually `~/.config/sunalmanac/sunalmanac.toml`). A commented default file is
//! written on first run. Every key is optional:
//!
//! ```toml
//! latitude = 41.0082        # Degrees, positive north
//! longitude = 28.9784       # Degrees, positive east
//! utc_offset = 3.0          # Local clock offset from UTC in hours
//! zenith = "official"       # "official", "civil", "nautical", "astronomical" or degrees
//! output = "sunrise_sunset.csv"
//! ```
//!
//! Command-line flags override file values through [`ConfigOverrides`].
//! Out-of-range values are rejected with a message naming the key.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::geo::{GeoLocation, Zenith};
use crate::logger::Log;

/// Settings loaded from `sunalmanac.toml`.
///
/// Fields stay optional so a partial file parses; missing values are filled
/// with the defaults from [`crate::constants`] during loading.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    pub latitude: Option<f64>,   // degrees, positive north
    pub longitude: Option<f64>,  // degrees, positive east
    pub utc_offset: Option<f64>, // hours
    pub zenith: Option<Zenith>,
    pub output: Option<String>, // CSV path, "-" for stdout
}

/// Values given on the command line, applied on top of the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub utc_offset: Option<f64>,
    pub zenith: Option<Zenith>,
    pub output: Option<String>,
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Write a commented default configuration to `path`.
    pub fn create_default_config(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = ConfigBuilder::new()
            .add_section("Location")
            .add_setting(
                "latitude",
                &format!("{:.6}", DEFAULT_LATITUDE),
                &format!(
                    "Geographic latitude ({} to {}, positive north)",
                    MINIMUM_LATITUDE, MAXIMUM_LATITUDE
                ),
            )
            .add_setting(
                "longitude",
                &format!("{:.6}", DEFAULT_LONGITUDE),
                &format!(
                    "Geographic longitude ({} to {}, positive east)",
                    MINIMUM_LONGITUDE, MAXIMUM_LONGITUDE
                ),
            )
            .add_setting(
                "utc_offset",
                &format!("{:.1}", DEFAULT_UTC_OFFSET),
                &format!(
                    "Local clock offset from UTC in hours ({} to {})",
                    MINIMUM_UTC_OFFSET, MAXIMUM_UTC_OFFSET
                ),
            )
            .add_setting(
                "zenith",
                &format!("\"{}\"", DEFAULT_ZENITH),
                "Select: \"official\", \"civil\", \"nautical\", \"astronomical\" or degrees",
            )
            .add_section("Output")
            .add_setting(
                "output",
                &format!("\"{}\"", DEFAULT_OUTPUT),
                "CSV file written by the month command (\"-\" for stdout)",
            )
            .build();

        fs::write(path, content).context("Failed to write default config file")?;
        Ok(())
    }

    fn apply_defaults(config: &mut Config) {
        config.latitude.get_or_insert(DEFAULT_LATITUDE);
        config.longitude.get_or_insert(DEFAULT_LONGITUDE);
        config.utc_offset.get_or_insert(DEFAULT_UTC_OFFSET);
        config.zenith.get_or_insert(Zenith::default());
        config
            .output
            .get_or_insert_with(|| DEFAULT_OUTPUT.to_string());
    }

    /// Parse configuration text, fill defaults and validate.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content).context("Failed to parse config")?;
        Self::apply_defaults(&mut config);
        validate_config(&config)?;
        Ok(config)
    }

    /// Load from a specific path. Never creates the file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Configuration file not found at specified path: {}",
                path.display()
            );
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Load from the default location, creating a default file first if needed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)
                .context("Failed to create default config during load")?;
            Log::log_decorated(&format!(
                "Created default configuration at {}",
                crate::utils::path_for_display(&config_path)
            ));
        }

        Self::load_from_path(&config_path).with_context(|| {
            format!(
                "Failed to load configuration from {}",
                config_path.display()
            )
        })
    }

    /// Apply command-line values and re-validate.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) -> Result<()> {
        if let Some(lat) = overrides.latitude {
            self.latitude = Some(lat);
        }
        if let Some(lon) = overrides.longitude {
            self.longitude = Some(lon);
        }
        if let Some(offset) = overrides.utc_offset {
            self.utc_offset = Some(offset);
        }
        if let Some(zenith) = overrides.zenith {
            self.zenith = Some(zenith);
        }
        if let Some(ref output) = overrides.output {
            self.output = Some(output.clone());
        }
        validate_config(self).context("Invalid command-line settings")
    }

    /// Build the calculator input from this configuration.
    pub fn geo_location(&self) -> Result<GeoLocation> {
        GeoLocation::new(
            self.latitude.unwrap_or(DEFAULT_LATITUDE),
            self.longitude.unwrap_or(DEFAULT_LONGITUDE),
            self.utc_offset.unwrap_or(DEFAULT_UTC_OFFSET),
            self.zenith.unwrap_or_default(),
        )
        .context("Configured location is outside the valid range")
    }

    pub fn output_path(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_OUTPUT)
    }

    pub fn log_config(&self, source: &Path) {
        Log::log_block_start(&format!(
            "Loaded configuration from {}",
            crate::utils::path_for_display(source)
        ));

        let lat = self.latitude.unwrap_or(DEFAULT_LATITUDE);
        let lon = self.longitude.unwrap_or(DEFAULT_LONGITUDE);
        Log::log_indented(&format!(
            "Location: {:.4}°{}, {:.4}°{}",
            lat.abs(),
            if lat >= 0.0 { "N" } else { "S" },
            lon.abs(),
            if lon >= 0.0 { "E" } else { "W" },
        ));
        Log::log_indented(&format!(
            "UTC offset: {:+} hours",
            self.utc_offset.unwrap_or(DEFAULT_UTC_OFFSET)
        ));
        Log::log_indented(&format!("Zenith: {}", self.zenith.unwrap_or_default()));
        Log::log_indented(&format!("Output: {}", self.output_path()));

        if lat.abs() > POLAR_CIRCLE_LATITUDE {
            Log::log_pipe();
            Log::log_warning(&format!(
                "Latitude {:.4}°{} is beyond the polar circle",
                lat.abs(),
                if lat >= 0.0 { "N" } else { "S" },
            ));
            Log::log_indented("Dates without a sunrise or sunset are reported as N/A.");
        }
    }
}

/// Range checks for every configured value.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(lat) = config.latitude {
        if !(MINIMUM_LATITUDE..=MAXIMUM_LATITUDE).contains(&lat) {
            anyhow::bail!(
                "Latitude must be between {} and {} degrees (got {})",
                MINIMUM_LATITUDE,
                MAXIMUM_LATITUDE,
                lat
            );
        }
    }

    if let Some(lon) = config.longitude {
        if !(MINIMUM_LONGITUDE..=MAXIMUM_LONGITUDE).contains(&lon) {
            anyhow::bail!(
                "Longitude must be between {} and {} degrees (got {})",
                MINIMUM_LONGITUDE,
                MAXIMUM_LONGITUDE,
                lon
            );
        }
    }

    if let Some(offset) = config.utc_offset {
        if !(MINIMUM_UTC_OFFSET..=MAXIMUM_UTC_OFFSET).contains(&offset) {
            anyhow::bail!(
                "UTC offset must be between {} and {} hours (got {})",
                MINIMUM_UTC_OFFSET,
                MAXIMUM_UTC_OFFSET,
                offset
            );
        }
    }

    if let Some(zenith) = config.zenith {
        let degrees = zenith.degrees();
        if !(degrees > MINIMUM_ZENITH && degrees < MAXIMUM_ZENITH) {
            anyhow::bail!(
                "Zenith must be greater than {} and less than {} degrees (got {})",
                MINIMUM_ZENITH,
                MAXIMUM_ZENITH,
                degrees
            );
        }
    }

    if let Some(ref output) = config.output {
        if output.trim().is_empty() {
            anyhow::bail!("Output path cannot be empty. Use \"-\" to write to stdout");
        }
    }

    Ok(())
}

/// Builder for the default configuration file with aligned comments.
struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
}

enum ConfigEntry {
    Section(String),
    Setting { line: String, comment: String },
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add_section(mut self, title: &str) -> Self {
        self.entries.push(ConfigEntry::Section(format!("#[{}]", title)));
        self
    }

    fn add_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        self.entries.push(ConfigEntry::Setting {
            line: format!("{} = {}", key, value),
            comment: format!("# {}", comment),
        });
        self
    }

    fn build(self) -> String {
        // One space between the longest setting and its comment
        let width = self
            .entries
            .iter()
            .filter_map(|entry| match entry {
                ConfigEntry::Setting { line, .. } => Some(line.len()),
                ConfigEntry::Section(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;

        let mut lines = Vec::new();
        for entry in self.entries {
            match entry {
                ConfigEntry::Section(title) => {
                    if !lines.is_empty() {
                        lines.push(String::new());
                    }
                    lines.push(title);
                }
                ConfigEntry::Setting { line, comment } => {
                    lines.push(format!("{:<width$}{}", line, comment, width = width));
                }
            }
        }

        let mut content = lines.join("\n");
        content.push('\n');
        content
    }
}
