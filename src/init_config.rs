// init_config.rs
// Handles loading and parsing the initial scenario from init_config.toml

use palette::Srgb;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config;

pub const INIT_CONFIG_PATH: &str = "init_config.toml";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InitConfig {
    pub simulation: Option<SimulationConfig>,
    pub particles: Option<ParticlesConfig>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SimulationConfig {
    /// Optional domain width. Falls back to the default when omitted.
    pub domain_width: Option<f32>,
    /// Optional domain height. Falls back to the default when omitted.
    pub domain_height: Option<f32>,
}

impl SimulationConfig {
    /// Return the domain width and height, using the defaults when values
    /// are not provided.
    pub fn domain_size(&self) -> (f32, f32) {
        (
            self.domain_width.unwrap_or(config::DEFAULT_DOMAIN_WIDTH),
            self.domain_height.unwrap_or(config::DEFAULT_DOMAIN_HEIGHT),
        )
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ParticlesConfig {
    pub count: Option<usize>,
    pub radius: Option<f32>,
    /// Palette entries as "#RRGGBB" hex strings
    #[serde(default)]
    pub palette: Vec<String>,
}

impl ParticlesConfig {
    pub fn count(&self) -> usize {
        self.count.unwrap_or(config::DEFAULT_PARTICLE_COUNT)
    }

    pub fn radius(&self) -> f32 {
        self.radius.unwrap_or(config::DEFAULT_PARTICLE_RADIUS)
    }
}

impl InitConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: InitConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_from_file(INIT_CONFIG_PATH)
    }

    /// Resolve the configured palette to RGBA, falling back to the built-in
    /// palette when no entries are given. A malformed hex string is an error.
    pub fn palette_colors(&self) -> Result<Vec<[u8; 4]>, Box<dyn std::error::Error>> {
        let entries = match &self.particles {
            Some(particles) if !particles.palette.is_empty() => &particles.palette,
            _ => return Ok(config::DEFAULT_PALETTE.to_vec()),
        };
        entries
            .iter()
            .map(|entry| {
                let rgb: Srgb<u8> = entry.trim().parse()?;
                Ok([rgb.red, rgb.green, rgb.blue, 0xff])
            })
            .collect()
    }
}
