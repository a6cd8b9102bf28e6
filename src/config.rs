//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! sky-config.toml file. It provides a centralized way to configure the
//! observer site, output options, and other runtime parameters.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration loaded from sky-config.toml
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Observer site configuration
    pub observer: ObserverConfig,
    /// Console output configuration
    pub output: OutputConfig,
}

/// Observer site configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObserverConfig {
    /// Human-readable site name for the report header
    pub name: String,
    /// Geographic latitude in degrees, north positive, domain [-90, 90]
    pub latitude: f64,
    /// Geographic longitude in degrees, east positive, domain [-180, 180]
    pub longitude: f64,
}

/// Console output configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Draw the 24-hour sun elevation chart under the text panel
    pub elevation_chart: bool,
    /// Chart width in columns (one column per time step)
    pub chart_width: usize,
    /// Chart height in rows
    pub chart_height: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            observer: ObserverConfig {
                name: "New York, NY".to_string(),
                latitude: 40.7128,
                longitude: -74.0060,
            },
            output: OutputConfig {
                elevation_chart: true,
                chart_width: 72,
                chart_height: 12,
            },
        }
    }
}

impl Config {
    /// Load configuration from sky-config.toml file
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path("sky-config.toml")
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    eprintln!("Loaded configuration for site: {}", config.observer.name);
                    config
                }
                Err(e) => {
                    eprintln!("Warning: Invalid config file format: {}", e);
                    eprintln!("Using default configuration (New York, NY)");
                    Self::default()
                }
            },
            Err(_) => {
                eprintln!("Info: No config file found, using default configuration (New York, NY)");
                Self::default()
            }
        }
    }

    /// Save current configuration to sky-config.toml
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let contents = toml::to_string_pretty(self)?;
        fs::write("sky-config.toml", contents)?;
        eprintln!("Configuration saved to sky-config.toml");
        Ok(())
    }
}
